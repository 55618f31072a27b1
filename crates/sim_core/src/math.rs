//! Facing and steering helpers shared by behavior code.

use glam::{Quat, Vec3};

/// Rotate `from` toward `to` by at most `max_degrees`, along the shortest
/// path, without overshooting. Returns exactly `to` once the remaining
/// angle fits inside the step.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let step = max_degrees.to_radians();
    if step <= 0.0 {
        return from;
    }
    let angle = from.angle_between(to);
    if angle <= step || angle < 1e-6 {
        return to;
    }
    from.slerp(to, step / angle)
}

/// Advance `from` toward `to` by at most `max_delta` units, clamped so the
/// result never passes `to`.
pub fn move_towards(from: Vec3, to: Vec3, max_delta: f32) -> Vec3 {
    let offset = to - from;
    let distance = offset.length();
    if distance <= max_delta || distance < 1e-6 {
        to
    } else {
        from + offset * (max_delta / distance)
    }
}

/// Pure yaw rotation whose forward (-Z) points along `dir` flattened onto
/// the XZ plane. Returns `None` when the flattened direction is degenerate
/// (straight up/down or zero), so callers can keep their previous heading.
pub fn yaw_facing(dir: Vec3) -> Option<Quat> {
    let flat = Vec3::new(dir.x, 0.0, dir.z);
    if flat.length_squared() < 1e-8 {
        return None;
    }
    Some(Quat::from_rotation_y(f32::atan2(-flat.x, -flat.z)))
}

/// Unsigned angle between two vectors in degrees, in [0°, 180°], via the
/// dot-product/arccos convention. Degenerate inputs yield 0°.
pub fn angle_between_degrees(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom < 1e-12 {
        return 0.0;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn rotate_towards_steps_without_overshoot() {
        let start = Quat::IDENTITY;
        let goal = Quat::from_rotation_y(90f32.to_radians());

        let one = rotate_towards(start, goal, 30.0);
        assert!((one.angle_between(goal).to_degrees() - 60.0).abs() < EPS);

        // Each step shrinks the remaining angle, never grows it.
        let two = rotate_towards(one, goal, 30.0);
        assert!(two.angle_between(goal) < one.angle_between(goal));
    }

    #[test]
    fn rotate_towards_reaches_goal_exactly() {
        let start = Quat::from_rotation_y(10f32.to_radians());
        let goal = Quat::from_rotation_y(25f32.to_radians());
        let arrived = rotate_towards(start, goal, 15.0 + 1e-3);
        assert_eq!(arrived, goal);
    }

    #[test]
    fn rotate_towards_takes_shortest_path() {
        // 350° goal is 10° away going the other way around.
        let start = Quat::IDENTITY;
        let goal = Quat::from_rotation_y(350f32.to_radians());
        let stepped = rotate_towards(start, goal, 15.0);
        assert_eq!(stepped, goal);
    }

    #[test]
    fn rotate_towards_zero_step_holds() {
        let start = Quat::from_rotation_y(1.0);
        let goal = Quat::from_rotation_y(2.0);
        assert_eq!(rotate_towards(start, goal, 0.0), start);
    }

    #[test]
    fn move_towards_clamps_at_goal() {
        let from = Vec3::ZERO;
        let to = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(move_towards(from, to, 2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(move_towards(from, to, 20.0), to);
        assert_eq!(move_towards(to, to, 5.0), to);
    }

    #[test]
    fn yaw_facing_ignores_vertical_component() {
        let a = yaw_facing(Vec3::new(3.0, 0.0, -4.0)).unwrap();
        let b = yaw_facing(Vec3::new(3.0, 9.0, -4.0)).unwrap();
        assert!(a.abs_diff_eq(b, EPS));

        // The produced forward really points along the flattened direction.
        let fwd = a * -Vec3::Z;
        assert!((fwd - Vec3::new(0.6, 0.0, -0.8)).length() < EPS);
    }

    #[test]
    fn yaw_facing_rejects_degenerate_directions() {
        assert!(yaw_facing(Vec3::ZERO).is_none());
        assert!(yaw_facing(Vec3::new(0.0, 5.0, 0.0)).is_none());
    }

    #[test]
    fn angle_between_degrees_matches_known_pairs() {
        assert!((angle_between_degrees(Vec3::NEG_Z, Vec3::new(1.0, 0.0, -1.0)) - 45.0).abs() < EPS);
        assert!((angle_between_degrees(Vec3::X, Vec3::X) - 0.0).abs() < EPS);
        assert!((angle_between_degrees(Vec3::X, Vec3::NEG_X) - 180.0).abs() < EPS);
        assert_eq!(angle_between_degrees(Vec3::X, Vec3::ZERO), 0.0);
    }
}
