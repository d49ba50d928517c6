use bevy_ecs::prelude::{Schedule, Stage, SystemStage, World};
use log::debug;
use std::time::{Duration, Instant};

use crate::game::{
    resources::{EntityPool, GameData, PendingDespawnList, PendingNpcSpawnList, ServerTime},
    systems::{
        npc_despawn_system, npc_spawn_system, startup_zones_system, wallmount_visibility_system,
    },
};

/// The host loop. Owns the world, the construct-once resources, and the tick
/// schedule which drives every system.
pub struct GameWorld {
    tick_rate_hz: u64,
}

impl GameWorld {
    pub fn new() -> Self {
        Self { tick_rate_hz: 30 }
    }

    pub fn run(&mut self, game_data: GameData) {
        let mut world = World::default();
        world.insert_resource(EntityPool::default());
        world.insert_resource(PendingNpcSpawnList::default());
        world.insert_resource(PendingDespawnList::default());
        world.insert_resource(game_data);

        let started_load = Instant::now();
        let mut startup_schedule = Schedule::default();
        startup_schedule.add_stage(
            "startup",
            SystemStage::parallel().with_system(startup_zones_system),
        );
        world.insert_resource(ServerTime {
            delta: Duration::ZERO,
        });
        startup_schedule.run(&mut world);
        debug!(
            "Time taken to populate game world: {:?}",
            started_load.elapsed()
        );

        let mut schedule = Schedule::default();
        schedule.add_stage(
            "update",
            SystemStage::parallel()
                .with_system(npc_spawn_system)
                .with_system(npc_despawn_system)
                .with_system(wallmount_visibility_system),
        );

        let min_tick_duration = Duration::from_millis(1000 / self.tick_rate_hz);
        let mut last_tick = Instant::now();

        loop {
            let current_tick = Instant::now();
            world.insert_resource(ServerTime {
                delta: current_tick - last_tick,
            });
            schedule.run(&mut world);
            last_tick = current_tick;
            // TODO: This should account for duration of execution
            std::thread::sleep(min_tick_duration);
        }
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
