mod npc_despawn;
mod npc_spawn;
mod startup_zones;
mod wallmount_visibility;

pub use npc_despawn::npc_despawn_system;
pub use npc_spawn::npc_spawn_system;
pub use startup_zones::startup_zones_system;
pub use wallmount_visibility::wallmount_visibility_system;
