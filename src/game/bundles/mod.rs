mod entity;

pub use entity::{spawn_npc, spawn_wallmount, NpcBundle, SpawnError, WallmountBundle};
