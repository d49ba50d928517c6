use nalgebra::Point3;

use station_data::{NpcId, Orientation, ZoneId};

/// An externally requested NPC spawn, queued until the spawn system picks it
/// up on the next tick.
pub struct NpcSpawnRequest {
    pub npc_id: NpcId,
    pub position: Point3<f32>,
    pub zone_id: ZoneId,
    pub facing: Orientation,
}

#[derive(Default)]
pub struct PendingNpcSpawnList {
    pub requests: Vec<NpcSpawnRequest>,
}
