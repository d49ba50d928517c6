use bevy_ecs::prelude::{Commands, Query, ResMut};
use log::warn;

use crate::game::{
    components::{NpcSpawnPoint, PooledEntity, SpawnOrigin},
    resources::{EntityPool, PendingDespawnList},
};

/// Removes queued entities, returning their pool slots and decrementing the
/// live count of the spawn point which created them.
pub fn npc_despawn_system(
    mut commands: Commands,
    mut entity_pool: ResMut<EntityPool>,
    mut pending_despawn_list: ResMut<PendingDespawnList>,
    npc_query: Query<(&PooledEntity, Option<&SpawnOrigin>)>,
    mut spawn_point_query: Query<&mut NpcSpawnPoint>,
) {
    for entity in pending_despawn_list.entities.drain(..) {
        let (pooled_entity, spawn_origin) = match npc_query.get(entity) {
            Ok(result) => result,
            Err(_) => {
                warn!("Ignoring despawn of unknown entity {:?}", entity);
                continue;
            }
        };

        entity_pool.free(pooled_entity.id);

        if let Some(spawn_origin) = spawn_origin {
            if let Ok(mut spawn_point) = spawn_point_query.get_mut(spawn_origin.spawn_point) {
                spawn_point.live_count = spawn_point.live_count.saturating_sub(1);
            }
        }

        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Stage, SystemStage, World};
    use nalgebra::Point3;
    use std::time::Duration;

    use crate::game::{
        components::{Npc, Position},
        resources::{GameData, PendingNpcSpawnList, ServerTime},
        systems::npc_spawn_system,
    };
    use station_data::{NpcData, NpcDatabase, NpcId, Orientation, ZoneId};

    #[test]
    fn test_despawn_releases_pool_slot_and_live_count() {
        let npc_id = NpcId::new(7).unwrap();
        let zone_id = ZoneId::new(1).unwrap();

        let mut world = World::default();
        world.insert_resource(EntityPool::new(1));
        world.insert_resource(PendingNpcSpawnList::default());
        world.insert_resource(PendingDespawnList::default());
        world.insert_resource(GameData {
            npcs: NpcDatabase::new(vec![NpcData {
                id: npc_id,
                name: "Xenomorph".into(),
                health: 250,
                walk_speed: 180,
            }]),
            zones: Vec::new(),
        });
        world.insert_resource(ServerTime {
            delta: Duration::from_secs(30),
        });

        world
            .spawn()
            .insert(NpcSpawnPoint::new(
                npc_id,
                Orientation::Down,
                Duration::from_secs(30),
                1,
                0.0,
            ))
            .insert(Position::new(Point3::origin(), zone_id));

        let mut spawn_stage = SystemStage::parallel().with_system(npc_spawn_system);
        spawn_stage.run(&mut world);

        let mut npc_query = world.query::<(bevy_ecs::prelude::Entity, &Npc, &PooledEntity)>();
        let (npc_entity, _, pooled_entity) = npc_query.iter(&world).next().unwrap();
        let pool_id = pooled_entity.id;

        world
            .get_resource_mut::<PendingDespawnList>()
            .unwrap()
            .entities
            .push(npc_entity);

        let mut despawn_stage = SystemStage::parallel().with_system(npc_despawn_system);
        despawn_stage.run(&mut world);

        assert!(world.get_entity(npc_entity).is_none());
        assert_eq!(
            world
                .get_resource::<EntityPool>()
                .unwrap()
                .get_entity(pool_id),
            None
        );
        let mut spawn_point_query = world.query::<&NpcSpawnPoint>();
        assert_eq!(
            spawn_point_query.iter(&world).next().unwrap().live_count,
            0
        );
    }
}
