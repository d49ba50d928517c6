use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// The compass direction an object presents to the world. Directional
/// objects store two of these: the initial direction assigned at authoring
/// time and the current direction, which may change if the object is
/// reoriented at runtime.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// The unit vector for this direction. Never zero, so it is always safe
    /// to feed into an angle computation.
    pub fn vector(&self) -> Vector3<f32> {
        match self {
            Orientation::Up => Vector3::new(0.0, 1.0, 0.0),
            Orientation::Down => Vector3::new(0.0, -1.0, 0.0),
            Orientation::Left => Vector3::new(-1.0, 0.0, 0.0),
            Orientation::Right => Vector3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn degrees(&self) -> f32 {
        match self {
            Orientation::Up => 0.0,
            Orientation::Right => 90.0,
            Orientation::Down => 180.0,
            Orientation::Left => 270.0,
        }
    }

    pub fn rotate_clockwise(&self) -> Orientation {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// The nearest compass direction to an arbitrary vector, chosen by
    /// dominant axis. Axis ties resolve to the horizontal direction.
    pub fn from_vector(vector: Vector3<f32>) -> Orientation {
        if vector.x.abs() >= vector.y.abs() {
            if vector.x >= 0.0 {
                Orientation::Right
            } else {
                Orientation::Left
            }
        } else if vector.y >= 0.0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }
}
