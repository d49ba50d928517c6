use bevy_ecs::prelude::Component;

use crate::game::resources::PoolId;

/// The pool slot assigned to a networked entity when it was instantiated.
#[derive(Component, Copy, Clone, Debug)]
pub struct PooledEntity {
    pub id: PoolId,
}

impl PooledEntity {
    pub fn new(id: PoolId) -> Self {
        Self { id }
    }
}
