//! Scripted player movement: a waypoint route feeding the axis pair.

use glam::Vec3;
use hecs::World;
use input::AxisPair;
use sim_core::{components::Player, Transform};

/// Distance at which a waypoint counts as reached.
const WAYPOINT_RADIUS: f32 = 0.5;

/// Walks every `Player`-tagged entity along a looping waypoint route by
/// writing the same axis pair a keyboard would.
pub struct PlayerMover {
    speed: f32,
    route: Vec<Vec3>,
    next: usize,
    axes: AxisPair,
}

impl PlayerMover {
    pub fn new(speed: f32, route: Vec<Vec3>) -> Self {
        Self {
            speed,
            route,
            next: 0,
            axes: AxisPair::new(),
        }
    }

    /// Steer toward the current waypoint and advance every player one tick.
    pub fn update(&mut self, world: &mut World, dt: f32) {
        for (_, (transform, _)) in world.query_mut::<(&mut Transform, &Player)>() {
            self.steer(transform.position);
            transform.translate(self.axes.dir() * self.speed * dt);
        }
    }

    /// Point the axes at the current waypoint, hopping to the next one on
    /// arrival. An empty route clears the axes.
    fn steer(&mut self, position: Vec3) {
        let Some(&goal) = self.route.get(self.next) else {
            self.axes.clear();
            return;
        };
        let to_goal = Vec3::new(goal.x - position.x, 0.0, goal.z - position.z);
        if to_goal.length() < WAYPOINT_RADIUS {
            self.next = (self.next + 1) % self.route.len();
            self.axes.clear();
            return;
        }
        let dir = to_goal.normalize_or_zero();
        self.axes.set(dir.x, dir.z);
    }
}
