use bevy_ecs::prelude::Entity;

pub const MAX_POOLED_ENTITIES: usize = 4096;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PoolId(pub u16);

/// Allocates pool slots for networked game objects. Constructed once at
/// startup and injected as a resource; consumers never reach for a global
/// instance.
pub struct EntityPool {
    entity_list_by_id: Vec<Option<Entity>>,
    last_free_index: Option<usize>,
}

impl EntityPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            entity_list_by_id: vec![None; capacity],
            last_free_index: Some(0),
        }
    }

    /// Claims a free slot for `entity`, returning None when the pool is
    /// exhausted.
    pub fn allocate(&mut self, entity: Entity) -> Option<PoolId> {
        let free_index = self.last_free_index?;
        self.entity_list_by_id[free_index] = Some(entity);
        self.last_free_index = self
            .entity_list_by_id
            .iter()
            .skip(free_index + 1)
            .position(|slot| slot.is_none())
            .map(|offset| free_index + 1 + offset)
            .or_else(|| self.entity_list_by_id.iter().position(|slot| slot.is_none()));
        Some(PoolId(free_index as u16))
    }

    /// Returns `id`'s slot to the pool.
    pub fn free(&mut self, id: PoolId) {
        let index = id.0 as usize;
        if let Some(slot) = self.entity_list_by_id.get_mut(index) {
            *slot = None;
            if self.last_free_index.map_or(true, |free| index < free) {
                self.last_free_index = Some(index);
            }
        }
    }

    pub fn get_entity(&self, id: PoolId) -> Option<Entity> {
        self.entity_list_by_id.get(id.0 as usize).copied().flatten()
    }
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new(MAX_POOLED_ENTITIES)
    }
}
