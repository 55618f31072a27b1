//! The distance / view-cone / line-of-sight gate.

use crate::config::SentryConfig;
use sim_core::{math, Transform, Vec3};

/// Whether the tracked target is currently perceivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perception {
    #[default]
    Lost,
    Acquired,
}

/// Run the perception gate for one tick.
///
/// `sight(origin, dir, max_distance)` answers whether the nearest surface
/// along the ray is the target itself. It is only consulted once the
/// distance and view-cone checks have already passed and `check_occlusion`
/// is on, so hosts can plug in a real raycast without paying for it on
/// every tick.
pub fn assess<F>(agent: &Transform, target_pos: Vec3, config: &SentryConfig, sight: F) -> Perception
where
    F: FnOnce(Vec3, Vec3, f32) -> bool,
{
    let to_target = target_pos - agent.position;
    let distance = to_target.length();

    if distance > config.detection_range {
        return Perception::Lost;
    }

    // Coincident poses leave nothing to aim a cone or ray at; distance
    // zero is trivially in view.
    if distance < 1e-5 {
        return Perception::Acquired;
    }

    if config.use_field_of_view {
        let angle = math::angle_between_degrees(agent.forward(), to_target);
        if angle > config.field_of_view * 0.5 {
            return Perception::Lost;
        }
    }

    if config.check_occlusion
        && !sight(agent.position, to_target / distance, config.detection_range)
    {
        return Perception::Lost;
    }

    Perception::Acquired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watcher() -> Transform {
        // At the origin, facing -Z.
        Transform::default()
    }

    #[test]
    fn out_of_range_is_lost_no_matter_what() {
        let result = assess(
            &watcher(),
            Vec3::new(0.0, 0.0, -9.0),
            &SentryConfig::default(),
            |_, _, _| true,
        );
        assert_eq!(result, Perception::Lost);
    }

    #[test]
    fn in_range_in_cone_and_unobstructed_is_acquired() {
        let result = assess(
            &watcher(),
            Vec3::new(1.0, 0.0, -5.0),
            &SentryConfig::default(),
            |_, _, _| true,
        );
        assert_eq!(result, Perception::Acquired);
    }

    #[test]
    fn occlusion_overrides_the_gate() {
        let result = assess(
            &watcher(),
            Vec3::new(0.0, 0.0, -5.0),
            &SentryConfig::default(),
            |_, _, _| false,
        );
        assert_eq!(result, Perception::Lost);
    }

    #[test]
    fn outside_the_cone_never_consults_the_ray() {
        // Directly behind: 180° off forward.
        let result = assess(
            &watcher(),
            Vec3::new(0.0, 0.0, 5.0),
            &SentryConfig::default(),
            |_, _, _| unreachable!("ray cast despite failed cone check"),
        );
        assert_eq!(result, Perception::Lost);
    }

    #[test]
    fn cone_edge_follows_the_configured_width() {
        // A target 45° off forward sits just inside a 90.1° cone and just
        // outside an 89.8° one.
        let target = Vec3::new(3.0, 0.0, -3.0);
        let mut config = SentryConfig::default();

        config.field_of_view = 90.1;
        assert_eq!(
            assess(&watcher(), target, &config, |_, _, _| true),
            Perception::Acquired
        );

        config.field_of_view = 89.8;
        assert_eq!(
            assess(&watcher(), target, &config, |_, _, _| true),
            Perception::Lost
        );
    }

    #[test]
    fn field_of_view_flag_off_accepts_targets_behind() {
        let config = SentryConfig {
            use_field_of_view: false,
            ..Default::default()
        };
        let result = assess(&watcher(), Vec3::new(0.0, 0.0, 5.0), &config, |_, _, _| true);
        assert_eq!(result, Perception::Acquired);
    }

    #[test]
    fn occlusion_flag_off_skips_the_ray() {
        let config = SentryConfig {
            check_occlusion: false,
            ..Default::default()
        };
        let result = assess(
            &watcher(),
            Vec3::new(0.0, 0.0, -5.0),
            &config,
            |_, _, _| unreachable!("ray cast despite occlusion check disabled"),
        );
        assert_eq!(result, Perception::Acquired);
    }

    #[test]
    fn coincident_target_is_acquired_without_a_ray() {
        let result = assess(&watcher(), Vec3::ZERO, &SentryConfig::default(), |_, _, _| {
            unreachable!("ray cast for a zero-length direction")
        });
        assert_eq!(result, Perception::Acquired);
    }

    #[test]
    fn ray_gets_the_detection_range_as_its_reach() {
        let mut seen = None;
        let _ = assess(
            &watcher(),
            Vec3::new(0.0, 0.0, -5.0),
            &SentryConfig::default(),
            |origin, dir, max| {
                seen = Some((origin, dir, max));
                true
            },
        );
        let (origin, dir, max) = seen.unwrap();
        assert_eq!(origin, Vec3::ZERO);
        assert!((dir - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(max, 8.0);
    }
}
