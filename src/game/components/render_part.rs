use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// A visual sub-element of a wallmount. Opacity is in [0, 1]; a part with
/// opacity of zero or below contributes nothing to the mount's visibility.
#[derive(Component, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct RenderPart {
    pub opacity: f32,
}

impl RenderPart {
    pub fn new(opacity: f32) -> Self {
        Self { opacity }
    }
}
