//! Watchpost - headless sentry patrol sandbox.
//!
//! A scripted player walks a waypoint route past one or more sentries;
//! sentries scan, acquire, alert, and give chase. Everything observable
//! arrives through the log (and, when a cue file is configured, the
//! speakers).

mod config;
mod player;
mod scenario;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use audio::CueDeck;
use glam::Vec3;
use hecs::World;
use sentry::{Sentry, SentryAi};
use sim_core::{Clock, Transform};
use spatial::SightWorld;

use config::SandboxConfig;
use player::PlayerMover;
use scenario::Scene;

/// Name the alert cue file is registered under.
const ALERT_CUE: &str = "alert";

struct Sandbox {
    config: SandboxConfig,
    world: World,
    sight: SightWorld,
    ai: SentryAi,
    mover: PlayerMover,
    deck: Option<CueDeck>,
    scene: Scene,
    ticks: u64,
    alerts: u64,
}

impl Sandbox {
    fn new(config: SandboxConfig) -> Self {
        let mut world = World::new();
        let mut sight = SightWorld::new();
        let scene = scenario::build(&mut world, &mut sight, &config);

        let ai = match config.seed {
            Some(seed) => SentryAi::seeded(seed),
            None => SentryAi::new(),
        };
        let mover = PlayerMover::new(config.player.speed, config.player.route());
        let deck = open_deck(&config);

        Self {
            config,
            world,
            sight,
            ai,
            mover,
            deck,
            scene,
            ticks: 0,
            alerts: 0,
        }
    }

    fn run(&mut self) {
        let mut clock = Clock::with_fixed_hz(self.config.tick_hz);
        log::info!(
            "running {:.0} s at {} Hz",
            self.config.run_seconds,
            self.config.tick_hz
        );

        while clock.elapsed_seconds() < self.config.run_seconds {
            clock.update();
            while clock.should_fixed_step() {
                self.fixed_step(clock.fixed_dt());
            }
            std::thread::sleep(Duration::from_millis(1));
        }

        if let Some(deck) = &mut self.deck {
            deck.stop_all();
        }
        log::info!("run complete: {} ticks, {} alerts", self.ticks, self.alerts);
    }

    fn fixed_step(&mut self, dt: f32) {
        self.mover.update(&mut self.world, dt);

        // Re-seat moving colliders before anyone casts rays.
        let movers = std::iter::once(self.scene.player).chain(self.scene.sentries.iter().copied());
        for entity in movers {
            if let Ok(pose) = self.world.get::<&Transform>(entity) {
                self.sight.set_agent_position(entity, pose.position);
            }
        }
        self.sight.refresh();

        let alerts = self.ai.update(&mut self.world, &self.sight, dt);
        for alert in &alerts {
            log::info!(
                "alert raised at ({:.1}, {:.1}, {:.1})",
                alert.position.x,
                alert.position.y,
                alert.position.z
            );
            if let Some(deck) = &mut self.deck {
                if let Err(e) = deck.play_at(ALERT_CUE, alert.position) {
                    log::warn!("could not play alert cue: {}", e);
                }
            }
        }
        self.alerts += alerts.len() as u64;

        if let Some(deck) = &mut self.deck {
            // The player carries the ears.
            if let Ok(pose) = self.world.get::<&Transform>(self.scene.player) {
                deck.set_listener(pose.position, pose.forward(), Vec3::Y);
            }
            deck.sweep();
        }

        self.ticks += 1;
        if self.ticks % 120 == 0 {
            self.trace();
        }
    }

    /// Periodic pose/state dump at debug level.
    fn trace(&self) {
        if let Ok(pose) = self.world.get::<&Transform>(self.scene.player) {
            log::debug!(
                "player at ({:.1}, {:.1}, {:.1})",
                pose.position.x,
                pose.position.y,
                pose.position.z
            );
        }
        for &entity in &self.scene.sentries {
            let (Ok(pose), Ok(watcher)) = (
                self.world.get::<&Transform>(entity),
                self.world.get::<&Sentry>(entity),
            ) else {
                continue;
            };
            log::debug!(
                "sentry {:?} at ({:.1}, {:.1}, {:.1}) {:?}",
                entity,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                watcher.perception
            );
        }
    }
}

/// Open the audio device and load the alert cue. Any failure here means
/// the run continues silent.
fn open_deck(config: &SandboxConfig) -> Option<CueDeck> {
    let mut deck = match CueDeck::new() {
        Ok(deck) => deck,
        Err(e) => {
            log::warn!("audio unavailable, running silent: {}", e);
            return None;
        }
    };
    deck.set_master_volume(config.master_volume);
    match &config.alert_cue {
        Some(path) => match deck.load(ALERT_CUE, Path::new(path)) {
            Ok(()) => log::info!("loaded alert cue from {}", path),
            Err(e) => log::warn!("could not load alert cue {}: {}", path, e),
        },
        None => log::info!("no alert cue configured; alerts are log-only"),
    }
    Some(deck)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║                    Watchpost                     ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  Headless sentry patrol sandbox                  ║");
    println!("║    - Scripted player walks a waypoint route      ║");
    println!("║    - Sentries scan, alert, and give chase        ║");
    println!("║    - Tuning loads from config.ron                ║");
    println!("║  RUST_LOG=debug prints per-tick traces           ║");
    println!("╚══════════════════════════════════════════════════╝");

    log::info!("Starting Watchpost");

    let config = SandboxConfig::load();
    let mut sandbox = Sandbox::new(config);
    sandbox.run();

    Ok(())
}
