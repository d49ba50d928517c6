pub mod bundles;
pub mod components;
pub mod facing;
mod game_world;
pub mod resources;
pub mod systems;

pub use game_world::GameWorld;
