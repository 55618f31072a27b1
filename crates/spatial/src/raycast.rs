//! Raycasting for sight checks and queries.

use crate::SightWorld;
use rapier3d::prelude::*;
use sim_core::{Entity, Vec3};

/// Result of a sight ray query.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Registry entity tagged on the hit collider, if any. Untagged
    /// occluders report `None`.
    pub entity: Option<Entity>,
    /// Distance along the ray to the hit point.
    pub distance: f32,
    /// World position of the hit.
    pub point: Vec3,
}

impl SightWorld {
    /// Cast a ray and return the nearest hit. `direction` should be unit
    /// length so `distance` comes back in world units. The excluded
    /// entity's own collider is ignored, letting an agent cast from
    /// inside itself.
    pub fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<Entity>,
    ) -> Option<RayHit> {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let mut filter = QueryFilter::default();
        if let Some(handle) = exclude.and_then(|entity| self.handle_of(entity)) {
            filter = filter.exclude_collider(handle);
        }

        self.query_pipeline
            .cast_ray(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                filter,
            )
            .map(|(collider, time_of_impact)| {
                let point = ray.point_at(time_of_impact);
                RayHit {
                    entity: self
                        .collider_set
                        .get(collider)
                        .and_then(|c| entity_from_tag(c.user_data)),
                    distance: time_of_impact,
                    point: Vec3::new(point.x, point.y, point.z),
                }
            })
    }

    /// True when the nearest surface within `max_distance` along the ray is
    /// the target itself, ignoring the observer's own collider. A miss or
    /// an occluder in front both count as no sight.
    pub fn sees(
        &self,
        observer: Entity,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        target: Entity,
    ) -> bool {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return false;
        }
        self.cast(origin, dir, max_distance, Some(observer))
            .is_some_and(|hit| hit.entity == Some(target))
    }
}

/// Collider tags are `Entity::to_bits` values; zero means untagged.
fn entity_from_tag(user_data: u128) -> Option<Entity> {
    if user_data == 0 {
        return None;
    }
    Entity::from_bits(user_data as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::World;

    /// Sentry at the origin looking down +X at a target 6 units away.
    fn sentry_and_target() -> (SightWorld, Entity, Entity) {
        let mut registry = World::new();
        let sentry = registry.spawn(());
        let target = registry.spawn(());

        let mut sight = SightWorld::new();
        sight.add_agent(sentry, Vec3::new(0.0, 1.0, 0.0), 0.9, 0.4);
        sight.add_agent(target, Vec3::new(6.0, 1.0, 0.0), 0.9, 0.4);
        sight.refresh();
        (sight, sentry, target)
    }

    #[test]
    fn clear_ray_reports_the_target() {
        let (sight, sentry, target) = sentry_and_target();
        let origin = Vec3::new(0.0, 1.0, 0.0);

        let hit = sight.cast(origin, Vec3::X, 10.0, Some(sentry)).unwrap();
        assert_eq!(hit.entity, Some(target));
        assert!((hit.distance - 5.6).abs() < 1e-3); // capsule radius 0.4

        assert!(sight.sees(sentry, origin, Vec3::X, 10.0, target));
    }

    #[test]
    fn occluder_blocks_sight() {
        let (mut sight, sentry, target) = sentry_and_target();
        sight.add_obstacle(Vec3::new(3.0, 1.0, 0.0), Vec3::new(0.5, 2.0, 2.0));
        sight.refresh();
        let origin = Vec3::new(0.0, 1.0, 0.0);

        let hit = sight.cast(origin, Vec3::X, 10.0, Some(sentry)).unwrap();
        assert_eq!(hit.entity, None);
        assert!((hit.distance - 2.5).abs() < 1e-3);

        assert!(!sight.sees(sentry, origin, Vec3::X, 10.0, target));
    }

    #[test]
    fn short_ray_misses() {
        let (sight, sentry, target) = sentry_and_target();
        let origin = Vec3::new(0.0, 1.0, 0.0);

        assert!(sight.cast(origin, Vec3::X, 3.0, Some(sentry)).is_none());
        assert!(!sight.sees(sentry, origin, Vec3::X, 3.0, target));
    }

    #[test]
    fn caster_ignores_its_own_collider() {
        let (sight, sentry, target) = sentry_and_target();
        let origin = Vec3::new(0.0, 1.0, 0.0);

        // Unfiltered, the ray starts inside the sentry's own capsule.
        let self_hit = sight.cast(origin, Vec3::X, 10.0, None).unwrap();
        assert_eq!(self_hit.entity, Some(sentry));

        let hit = sight.cast(origin, Vec3::X, 10.0, Some(sentry)).unwrap();
        assert_eq!(hit.entity, Some(target));
    }

    #[test]
    fn reseated_agent_is_hit_at_its_new_position() {
        let (mut sight, sentry, target) = sentry_and_target();
        sight.set_agent_position(target, Vec3::new(0.0, 1.0, -4.0));
        sight.refresh();
        let origin = Vec3::new(0.0, 1.0, 0.0);

        assert!(sight.cast(origin, Vec3::X, 10.0, Some(sentry)).is_none());
        assert!(sight.sees(sentry, origin, Vec3::NEG_Z, 10.0, target));
    }
}
