use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut};
use log::warn;
use nalgebra::Vector3;
use rand::Rng;

use crate::game::{
    bundles::spawn_npc,
    components::{NpcSpawnPoint, Position, SpawnOrigin},
    resources::{EntityPool, GameData, PendingNpcSpawnList, ServerTime},
};

/// Drains externally requested spawns, then advances every spawn point and
/// spawns its NPC when the interval has elapsed and the live limit allows.
/// Failed spawns are logged and dropped, never retried.
pub fn npc_spawn_system(
    mut commands: Commands,
    mut spawn_point_query: Query<(Entity, &mut NpcSpawnPoint, &Position)>,
    mut entity_pool: ResMut<EntityPool>,
    mut pending_npc_spawn_list: ResMut<PendingNpcSpawnList>,
    game_data: Res<GameData>,
    server_time: Res<ServerTime>,
) {
    for request in pending_npc_spawn_list.requests.drain(..) {
        if let Err(error) = spawn_npc(
            &mut commands,
            &mut entity_pool,
            &game_data,
            request.npc_id,
            request.position,
            request.zone_id,
            request.facing,
            None,
        ) {
            warn!("Failed to spawn requested npc {:?}: {}", request.npc_id, error);
        }
    }

    let mut rng = rand::thread_rng();
    for (spawn_point_entity, mut spawn_point, spawn_point_position) in spawn_point_query.iter_mut()
    {
        spawn_point.time_since_last_spawn += server_time.delta;
        if spawn_point.time_since_last_spawn < spawn_point.interval {
            continue;
        }
        let interval = spawn_point.interval;
        spawn_point.time_since_last_spawn -= interval;

        if spawn_point.live_count >= spawn_point.limit_count {
            continue;
        }

        let range = spawn_point.range;
        let spawn_position = spawn_point_position.position
            + Vector3::new(
                rng.gen_range(-range..=range),
                rng.gen_range(-range..=range),
                0.0,
            );

        match spawn_npc(
            &mut commands,
            &mut entity_pool,
            &game_data,
            spawn_point.npc_id,
            spawn_position,
            spawn_point_position.zone_id,
            spawn_point.facing,
            Some(SpawnOrigin {
                spawn_point: spawn_point_entity,
            }),
        ) {
            Ok(_) => spawn_point.live_count += 1,
            Err(error) => warn!("Failed to spawn npc {:?}: {}", spawn_point.npc_id, error),
        }
    }
}
