use bevy_ecs::prelude::{Bundle, Commands, Entity};
use nalgebra::Point3;
use thiserror::Error;

use station_data::{NpcId, Orientation, ZoneId};

use crate::game::{
    components::{
        Directional, HealthPoints, Npc, PooledEntity, Position, RenderPart, SpawnOrigin, Wallmount,
    },
    resources::{EntityPool, GameData},
};

#[derive(Bundle)]
pub struct NpcBundle {
    pub npc: Npc,
    pub position: Position,
    pub directional: Directional,
    pub health_points: HealthPoints,
    pub pooled_entity: PooledEntity,
}

#[derive(Bundle)]
pub struct WallmountBundle {
    pub wallmount: Wallmount,
    pub position: Position,
    pub directional: Directional,
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
    #[error("unknown npc id {0:?}")]
    UnknownNpc(NpcId),
    #[error("entity pool exhausted")]
    PoolExhausted,
}

/// Instantiates an NPC through the entity pool, returning its entity handle.
pub fn spawn_npc(
    commands: &mut Commands,
    entity_pool: &mut EntityPool,
    game_data: &GameData,
    npc_id: NpcId,
    position: Point3<f32>,
    zone_id: ZoneId,
    facing: Orientation,
    spawn_origin: Option<SpawnOrigin>,
) -> Result<Entity, SpawnError> {
    let npc_data = game_data
        .npcs
        .get_npc(npc_id)
        .ok_or(SpawnError::UnknownNpc(npc_id))?;

    let entity = commands.spawn().id();
    let pool_id = match entity_pool.allocate(entity) {
        Some(pool_id) => pool_id,
        None => {
            commands.entity(entity).despawn();
            return Err(SpawnError::PoolExhausted);
        }
    };

    commands.entity(entity).insert_bundle(NpcBundle {
        npc: Npc::new(npc_id),
        position: Position::new(position, zone_id),
        directional: Directional::new(facing),
        health_points: HealthPoints::new(npc_data.health),
        pooled_entity: PooledEntity::new(pool_id),
    });
    if let Some(spawn_origin) = spawn_origin {
        commands.entity(entity).insert(spawn_origin);
    }

    Ok(entity)
}

/// Constructs a wallmount and its render parts. The part list is fixed here;
/// nothing adds or removes parts after construction.
pub fn spawn_wallmount(
    commands: &mut Commands,
    position: Point3<f32>,
    zone_id: ZoneId,
    facing: Orientation,
    render_part_count: usize,
) -> Entity {
    let render_parts = (0..render_part_count)
        .map(|_| commands.spawn().insert(RenderPart::new(1.0)).id())
        .collect();

    commands
        .spawn()
        .insert_bundle(WallmountBundle {
            wallmount: Wallmount::new(render_parts),
            position: Position::new(position, zone_id),
            directional: Directional::new(facing),
        })
        .id()
}
