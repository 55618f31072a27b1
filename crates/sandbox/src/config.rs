//! Sandbox configuration (scene, timing, audio). Loaded from config.ron at
//! startup.

use glam::Vec3;
use sentry::SentryConfig;
use serde::{Deserialize, Serialize};

/// Scripted run settings. Loaded from `config.ron` in the current
/// directory; a missing or invalid file falls back to the built-in demo
/// scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Fixed RNG seed for reproducible idle headings. Unset draws from
    /// entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Length of the run in seconds.
    #[serde(default = "default_run_seconds")]
    pub run_seconds: f32,
    /// Fixed simulation rate in Hz.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: f64,
    /// Master volume for alert cues (0.0 to 1.0).
    #[serde(default = "default_master_volume")]
    pub master_volume: f64,
    /// Path to a sound file played on each alert. Unset runs silent.
    #[serde(default)]
    pub alert_cue: Option<String>,
    #[serde(default)]
    pub player: PlayerSpawn,
    #[serde(default = "default_sentries")]
    pub sentries: Vec<SentrySpawn>,
    #[serde(default = "default_obstacles")]
    pub obstacles: Vec<ObstacleBox>,
}

/// Player start, walk speed, and patrol route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpawn {
    #[serde(default = "default_player_position")]
    pub position: [f32; 3],
    /// Walk speed in units per second.
    #[serde(default = "default_player_speed")]
    pub speed: f32,
    /// Waypoints walked in order, looping forever. Empty stands still.
    #[serde(default = "default_route")]
    pub route: Vec<[f32; 3]>,
}

/// One sentry: where it stands, which way it faces, how it is tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentrySpawn {
    pub position: [f32; 3],
    /// Spawn heading in degrees about the world Y axis.
    #[serde(default)]
    pub yaw_degrees: f32,
    #[serde(default)]
    pub tuning: SentryConfig,
}

/// Axis-aligned box that blocks line of sight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleBox {
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

fn default_run_seconds() -> f32 {
    20.0
}
fn default_tick_hz() -> f64 {
    60.0
}
fn default_master_volume() -> f64 {
    0.8
}
fn default_player_position() -> [f32; 3] {
    [6.0, 1.0, -5.0]
}
fn default_player_speed() -> f32 {
    5.0
}
fn default_route() -> Vec<[f32; 3]> {
    vec![[6.0, 1.0, 5.0], [6.0, 1.0, -5.0]]
}
fn default_sentries() -> Vec<SentrySpawn> {
    vec![SentrySpawn {
        position: [0.0, 1.0, 0.0],
        yaw_degrees: -90.0, // facing +X, toward the patrol line
        tuning: SentryConfig::default(),
    }]
}
fn default_obstacles() -> Vec<ObstacleBox> {
    // A pillar between the sentry and the patrol line, so the player
    // slips in and out of sight each pass.
    vec![ObstacleBox {
        center: [3.0, 1.0, 0.0],
        half_extents: [0.5, 2.0, 0.5],
    }]
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: None,
            run_seconds: default_run_seconds(),
            tick_hz: default_tick_hz(),
            master_volume: default_master_volume(),
            alert_cue: None,
            player: PlayerSpawn::default(),
            sentries: default_sentries(),
            obstacles: default_obstacles(),
        }
    }
}

impl Default for PlayerSpawn {
    fn default() -> Self {
        Self {
            position: default_player_position(),
            speed: default_player_speed(),
            route: default_route(),
        }
    }
}

impl SandboxConfig {
    /// Load from `config.ron`. If the file is missing or invalid, returns
    /// the built-in demo scene.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}

impl PlayerSpawn {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn route(&self) -> Vec<Vec3> {
        self.route.iter().copied().map(Vec3::from_array).collect()
    }
}

impl SentrySpawn {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl ObstacleBox {
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::from_array(self.half_extents)
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_fills_the_rest_with_defaults() {
        let config: SandboxConfig = ron::from_str("(run_seconds: 5.0)").unwrap();
        assert_eq!(config.run_seconds, 5.0);
        assert_eq!(config.tick_hz, 60.0);
        assert_eq!(config.sentries.len(), 1);
    }

    #[test]
    fn shipped_sample_config_parses() {
        let sample = include_str!("../../../config.ron");
        let config: SandboxConfig = ron::from_str(sample).unwrap();
        assert!(!config.sentries.is_empty());
        assert!(config.run_seconds > 0.0);
    }
}
