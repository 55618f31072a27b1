//! Scene assembly: registry entities plus their sight colliders.

use hecs::{Entity, World};
use sentry::Sentry;
use sim_core::components::{Obstacle, Player};
use sim_core::Transform;
use spatial::SightWorld;

use crate::config::SandboxConfig;

/// Capsule dimensions shared by the player and sentries.
const AGENT_HALF_HEIGHT: f32 = 0.9;
const AGENT_RADIUS: f32 = 0.4;

/// Entities the run loop addresses directly.
pub struct Scene {
    pub player: Entity,
    pub sentries: Vec<Entity>,
}

/// Spawn everything the config describes into the registry and the sight
/// world. Every sentry watches the player.
pub fn build(world: &mut World, sight: &mut SightWorld, config: &SandboxConfig) -> Scene {
    let player_pos = config.player.position();
    let player = world.spawn((Transform::from_position(player_pos), Player));
    sight.add_agent(player, player_pos, AGENT_HALF_HEIGHT, AGENT_RADIUS);

    let mut sentries = Vec::new();
    for spawn in &config.sentries {
        let tuning = match spawn.tuning.validate() {
            Ok(()) => spawn.tuning.clone(),
            Err(e) => {
                log::warn!("sentry tuning out of range ({}), clamping", e);
                spawn.tuning.clamped()
            }
        };
        let pose = Transform::from_position_yaw(spawn.position(), spawn.yaw_degrees.to_radians());
        let entity = world.spawn((pose, Sentry::new(player, tuning, pose.rotation)));
        sight.add_agent(entity, pose.position, AGENT_HALF_HEIGHT, AGENT_RADIUS);
        sentries.push(entity);
    }

    for obstacle in &config.obstacles {
        world.spawn((Transform::from_position(obstacle.center()), Obstacle));
        sight.add_obstacle(obstacle.center(), obstacle.half_extents());
    }
    sight.refresh();

    log::info!(
        "scene: 1 player, {} sentries, {} obstacles",
        sentries.len(),
        world.query::<&Obstacle>().iter().count()
    );

    Scene { player, sentries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_a_complete_scene() {
        let config = SandboxConfig::default();
        let mut world = World::new();
        let mut sight = SightWorld::new();

        let scene = build(&mut world, &mut sight, &config);

        assert_eq!(scene.sentries.len(), config.sentries.len());
        assert!(world.contains(scene.player));
        assert!(sight.handle_of(scene.player).is_some());
        for &entity in &scene.sentries {
            assert!(sight.handle_of(entity).is_some());
        }
    }

    #[test]
    fn out_of_range_tuning_is_clamped_at_spawn() {
        let mut config = SandboxConfig::default();
        config.sentries[0].tuning.chase_speed = 99.0;
        let mut world = World::new();
        let mut sight = SightWorld::new();

        let scene = build(&mut world, &mut sight, &config);

        let watcher = world.get::<&Sentry>(scene.sentries[0]).unwrap();
        assert_eq!(watcher.config.chase_speed, 5.0);
    }
}
