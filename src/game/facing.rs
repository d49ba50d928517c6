use nalgebra::{Point3, Vector3};

// 91 rather than 90 helps prevent flickering due to rounding when a viewer
// sits exactly on the perpendicular.
const FACING_ANGLE_THRESHOLD_DEGREES: f32 = 91.0;

/// Checks if a directional object at `object_position` is facing `target_position`.
///
/// The stored direction is the side the object presents to the world, so the
/// object's front is its negation. The object counts as facing the target when
/// the unsigned angle between the front vector and the heading to the target is
/// at least 91 degrees, which leaves a one degree dead zone around the
/// perpendicular biased towards "not facing".
///
/// `current_direction` must be non-zero. Directions built from
/// `Orientation::vector()` always satisfy this. A target exactly at
/// `object_position` has no heading and is never considered faced.
pub fn is_facing_position(
    object_position: Point3<f32>,
    current_direction: Vector3<f32>,
    target_position: Point3<f32>,
) -> bool {
    let heading = target_position - object_position;
    let facing = -current_direction;

    let denominator = facing.norm() * heading.norm();
    if denominator == 0.0 {
        return false;
    }

    let angle_degrees = (facing.dot(&heading) / denominator)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();
    angle_degrees >= FACING_ANGLE_THRESHOLD_DEGREES
}

/// Checks if an object is hidden given the opacities of its render parts.
///
/// True when every part has opacity of zero or below. An object with no render
/// parts is vacuously hidden. This only summarises opacities that some other
/// process has already written, it never computes them.
pub fn is_hidden(opacities: impl IntoIterator<Item = f32>) -> bool {
    opacities.into_iter().all(|opacity| opacity <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Heading at `angle_degrees` from the front vector of an object whose
    // presented direction is +Y (front is therefore -Y).
    fn heading_at_angle(angle_degrees: f32) -> Vector3<f32> {
        let radians = angle_degrees.to_radians();
        Vector3::new(radians.sin(), -radians.cos(), 0.0)
    }

    #[test]
    fn test_target_directly_in_front_is_not_faced() {
        // Worked example: object at origin presenting (0, 1, 0), so its front
        // is (0, -1, 0); a target at (0, -10, 0) sits directly in front, the
        // angle is 0 and the object does not count as facing it.
        assert!(!is_facing_position(
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -10.0, 0.0),
        ));
    }

    #[test]
    fn test_target_directly_behind_is_faced() {
        assert!(is_facing_position(
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ));
    }

    #[test]
    fn test_perpendicular_target_is_inside_dead_zone() {
        assert!(!is_facing_position(
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ));
    }

    #[test]
    fn test_dead_zone_boundary() {
        let direction = Vector3::new(0.0, 1.0, 0.0);

        let just_inside = Point3::origin() + heading_at_angle(90.99);
        assert!(!is_facing_position(Point3::origin(), direction, just_inside));

        let just_outside = Point3::origin() + heading_at_angle(91.01);
        assert!(is_facing_position(Point3::origin(), direction, just_outside));
    }

    #[test]
    fn test_result_invariant_under_scaling() {
        let object_position = Point3::new(3.0, -2.0, 1.0);
        let target_position = Point3::new(3.0, 40.0, 1.0);
        let direction = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(
            is_facing_position(object_position, direction, target_position),
            is_facing_position(object_position, direction * 250.0, target_position),
        );

        let near_target = object_position + (target_position - object_position) * 0.001;
        assert_eq!(
            is_facing_position(object_position, direction, target_position),
            is_facing_position(object_position, direction, near_target),
        );
    }

    #[test]
    fn test_target_at_object_position_is_not_faced() {
        let position = Point3::new(1.0, 2.0, 3.0);
        assert!(!is_facing_position(
            position,
            Vector3::new(0.0, 1.0, 0.0),
            position
        ));
    }

    #[test]
    fn test_is_hidden_empty_is_vacuously_hidden() {
        assert!(is_hidden([]));
    }

    #[test]
    fn test_is_hidden_all_transparent() {
        assert!(is_hidden([0.0, 0.0, 0.0]));
        assert!(is_hidden([0.0, -0.5, 0.0]));
    }

    #[test]
    fn test_is_hidden_any_visible_part() {
        assert!(!is_hidden([0.0, 0.5, 0.0]));
    }

    #[test]
    fn test_is_hidden_ignores_order() {
        assert_eq!(is_hidden([0.5, 0.0, 0.0]), is_hidden([0.0, 0.0, 0.5]));
    }
}
