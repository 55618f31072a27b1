//! Per-sentry state and the per-tick behavior step.

use rand::Rng;

use crate::config::SentryConfig;
use crate::perception::{self, Perception};
use sim_core::{math, Entity, Quat, Transform, Vec3};

/// One sentry's behavior state. Lives next to the agent's `Transform` in
/// the registry for the agent's whole lifetime.
pub struct Sentry {
    /// The entity this sentry watches for. Explicit so a vanished target
    /// is a handled case, not a crash.
    pub target: Entity,
    pub config: SentryConfig,
    /// Gate result from the last step.
    pub perception: Perception,
    /// Orientation captured at spawn; idle headings are yaw offsets from it.
    pub home_rotation: Quat,
    /// Where the turn interpolator is currently heading.
    pub goal_rotation: Quat,
    /// Seconds since the last idle look-around. Frozen while the target
    /// is acquired.
    pub look_timer: f32,
}

/// What one behavior step produced.
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    pub perception: Perception,
    /// True exactly on the step where the target went from lost to
    /// acquired. Consumed by returning it; nothing is latched.
    pub alerted: bool,
}

impl Sentry {
    /// Create a sentry watching `target`. `spawn_rotation` becomes the
    /// home orientation that idle look-around headings are relative to.
    pub fn new(target: Entity, config: SentryConfig, spawn_rotation: Quat) -> Self {
        Self {
            target,
            config,
            perception: Perception::Lost,
            home_rotation: spawn_rotation,
            goal_rotation: spawn_rotation,
            look_timer: 0.0,
        }
    }

    /// Advance the behavior one tick.
    ///
    /// `target_pos` is this tick's fresh registry lookup; `None` means the
    /// target is gone and reads as lost with no gate evaluated. `sight`
    /// answers whether a ray from an origin along a direction reaches the
    /// target within a maximum distance before hitting anything else.
    pub fn step<F, R>(
        &mut self,
        pose: &mut Transform,
        target_pos: Option<Vec3>,
        sight: F,
        rng: &mut R,
        dt: f32,
    ) -> StepReport
    where
        F: FnOnce(Vec3, Vec3, f32) -> bool,
        R: Rng,
    {
        let was = self.perception;
        self.perception = match target_pos {
            Some(pos) => perception::assess(pose, pos, &self.config, sight),
            None => Perception::Lost,
        };
        let alerted = was == Perception::Lost && self.perception == Perception::Acquired;

        match (self.perception, target_pos) {
            (Perception::Acquired, Some(pos)) => self.pursue(pose, pos, dt),
            _ => self.look_around(rng, dt),
        }

        // The turn itself runs every tick, whichever branch aimed it.
        let step = self.config.turning_speed * dt;
        pose.rotation = math::rotate_towards(pose.rotation, self.goal_rotation, step);

        StepReport {
            perception: self.perception,
            alerted,
        }
    }

    /// Chase: face the target, advance without overshooting, then re-aim
    /// from the post-move position.
    fn pursue(&mut self, pose: &mut Transform, target_pos: Vec3, dt: f32) {
        if let Some(facing) = math::yaw_facing(target_pos - pose.position) {
            self.goal_rotation = facing;
        }
        pose.position =
            math::move_towards(pose.position, target_pos, self.config.chase_speed * dt);
        if let Some(facing) = math::yaw_facing(target_pos - pose.position) {
            self.goal_rotation = facing;
        }
    }

    /// Idle: accumulate time and pick a fresh random heading each interval.
    fn look_around<R: Rng>(&mut self, rng: &mut R, dt: f32) {
        self.look_timer += dt;
        if self.look_timer >= self.config.look_interval {
            let yaw = rng.gen_range(0.0..360.0_f32);
            self.goal_rotation = self.home_rotation * Quat::from_rotation_y(yaw.to_radians());
            self.look_timer = 0.0;
        }
    }
}
