//! World-level driver stepping every sentry against the sight world.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::Sentry;
use crate::events::Alert;
use crate::perception::Perception;
use sim_core::{Entity, Transform, Vec3, World};
use spatial::SightWorld;

/// Steps every spawned sentry and gathers their alert events.
pub struct SentryAi {
    rng: StdRng,
}

impl Default for SentryAi {
    fn default() -> Self {
        Self::new()
    }
}

impl SentryAi {
    /// Driver with entropy-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Driver with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Step every sentry one tick and return the alerts they raised.
    ///
    /// Target poses are re-read from the registry every call, nothing is
    /// cached across ticks; a sentry whose target entity is gone simply
    /// reads it as lost.
    pub fn update(&mut self, world: &mut World, sight: &SightWorld, dt: f32) -> Vec<Alert> {
        // Snapshot target positions first; a sentry can watch another
        // sentry, so poses are read before any are written.
        let lookups: Vec<(Entity, Entity, Option<Vec3>)> = world
            .query::<&Sentry>()
            .iter()
            .map(|(entity, sentry)| {
                let target = sentry.target;
                let target_pos = world.get::<&Transform>(target).ok().map(|t| t.position);
                (entity, target, target_pos)
            })
            .collect();

        let mut alerts = Vec::new();
        for (entity, target, target_pos) in lookups {
            let Ok(mut sentry) = world.get::<&mut Sentry>(entity) else {
                continue;
            };
            let Ok(mut pose) = world.get::<&mut Transform>(entity) else {
                continue;
            };

            let was = sentry.perception;
            let report = sentry.step(
                &mut pose,
                target_pos,
                |origin, dir, max| sight.sees(entity, origin, dir, max, target),
                &mut self.rng,
                dt,
            );

            if report.alerted {
                log::info!("sentry {:?} acquired {:?}", entity, target);
                alerts.push(Alert {
                    sentry: entity,
                    position: pose.position,
                });
            } else if was == Perception::Acquired && report.perception == Perception::Lost {
                log::debug!("sentry {:?} lost {:?}", entity, target);
            }
        }

        alerts
    }
}
