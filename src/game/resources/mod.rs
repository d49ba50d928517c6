mod entity_pool;
mod game_data;
mod pending_despawn_list;
mod pending_npc_spawn_list;
mod server_time;

pub use entity_pool::{EntityPool, PoolId, MAX_POOLED_ENTITIES};
pub use game_data::GameData;
pub use pending_despawn_list::PendingDespawnList;
pub use pending_npc_spawn_list::{NpcSpawnRequest, PendingNpcSpawnList};
pub use server_time::ServerTime;
