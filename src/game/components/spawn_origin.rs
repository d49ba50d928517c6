use bevy_ecs::prelude::{Component, Entity};

/// Links a spawned NPC back to the spawn point which created it, so the spawn
/// point's live count can be decremented when the NPC despawns.
#[derive(Component, Copy, Clone)]
pub struct SpawnOrigin {
    pub spawn_point: Entity,
}
