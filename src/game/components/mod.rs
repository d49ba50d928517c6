mod directional;
mod health_points;
mod npc;
mod npc_spawn_point;
mod pooled_entity;
mod position;
mod render_part;
mod spawn_origin;
mod viewer;
mod wallmount;

pub use directional::Directional;
pub use health_points::HealthPoints;
pub use npc::Npc;
pub use npc_spawn_point::NpcSpawnPoint;
pub use pooled_entity::PooledEntity;
pub use position::Position;
pub use render_part::RenderPart;
pub use spawn_origin::SpawnOrigin;
pub use viewer::Viewer;
pub use wallmount::Wallmount;
