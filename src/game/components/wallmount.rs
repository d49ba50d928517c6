use bevy_ecs::prelude::{Component, Entity};

/// A wall-mounted decoration. The render parts are enumerated once when the
/// wallmount is constructed and their identities are fixed for the lifetime of
/// the mount; only their opacities change afterwards.
#[derive(Component, Clone)]
pub struct Wallmount {
    pub render_parts: Vec<Entity>,
}

impl Wallmount {
    pub fn new(render_parts: Vec<Entity>) -> Self {
        Self { render_parts }
    }
}
