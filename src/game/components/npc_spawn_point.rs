use bevy_ecs::prelude::Component;
use std::time::Duration;

use station_data::{NpcId, Orientation};

/// Periodically spawns NPCs around its own position, up to a live limit.
#[derive(Component, Clone)]
pub struct NpcSpawnPoint {
    pub npc_id: NpcId,
    pub facing: Orientation,
    pub interval: Duration,
    pub limit_count: u32,
    pub range: f32,
    pub live_count: u32,
    pub time_since_last_spawn: Duration,
}

impl NpcSpawnPoint {
    pub fn new(
        npc_id: NpcId,
        facing: Orientation,
        interval: Duration,
        limit_count: u32,
        range: f32,
    ) -> Self {
        Self {
            npc_id,
            facing,
            interval,
            limit_count,
            range,
            live_count: 0,
            time_since_last_spawn: Duration::ZERO,
        }
    }
}
