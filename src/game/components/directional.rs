use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use station_data::Orientation;

/// Tracks the facing of a directional object. The initial direction is
/// assigned at authoring time and never changes; the current direction starts
/// equal to it and may be rotated at runtime.
#[derive(Component, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Directional {
    pub initial_direction: Orientation,
    pub current_direction: Orientation,
}

impl Directional {
    pub fn new(initial_direction: Orientation) -> Self {
        Self {
            initial_direction,
            current_direction: initial_direction,
        }
    }
}
