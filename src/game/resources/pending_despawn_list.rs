use bevy_ecs::prelude::Entity;

/// Entities queued for removal. Despawning goes through here so the pool slot
/// and spawn point live count can be released before the entity disappears.
#[derive(Default)]
pub struct PendingDespawnList {
    pub entities: Vec<Entity>,
}
