use bevy_ecs::prelude::Component;

/// Marker for the local viewer entity whose position drives wallmount
/// visibility.
#[derive(Component, Default)]
pub struct Viewer;
