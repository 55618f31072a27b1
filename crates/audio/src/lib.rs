//! Alert cue playback using Kira for spatial sound.
//!
//! Behavior code never talks to this crate directly; it raises events and
//! the host maps them to cues. Construction fails on machines without an
//! audio device, so hosts should treat a failed `CueDeck::new` as "run
//! silent" rather than a fatal error.

use anyhow::Result;
use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    spatial::{
        emitter::EmitterSettings,
        listener::{ListenerHandle, ListenerSettings},
        scene::{SpatialSceneHandle, SpatialSceneSettings},
    },
    tween::Tween,
};
use sim_core::Vec3;
use std::collections::HashMap;
use std::path::Path;

/// Named one-shot cues played flat or at a world position.
pub struct CueDeck {
    manager: AudioManager,
    scene: SpatialSceneHandle,
    listener: ListenerHandle,
    cues: HashMap<String, StaticSoundData>,
    live: Vec<StaticSoundHandle>,
}

impl CueDeck {
    /// Open the default audio device and set up a spatial scene with a
    /// single listener at the origin.
    pub fn new() -> Result<Self> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;

        let mut scene = manager.add_spatial_scene(SpatialSceneSettings::default())?;

        let listener = scene.add_listener(
            mint::Vector3 { x: 0.0, y: 0.0, z: 0.0 },
            mint::Quaternion { v: mint::Vector3 { x: 0.0, y: 0.0, z: 0.0 }, s: 1.0 },
            ListenerSettings::default(),
        )?;

        Ok(Self {
            manager,
            scene,
            listener,
            cues: HashMap::new(),
            live: Vec::new(),
        })
    }

    /// Load a cue from a file and register it under `name`.
    pub fn load(&mut self, name: &str, path: &Path) -> Result<()> {
        let sound_data = StaticSoundData::from_file(path)?;
        self.cues.insert(name.to_string(), sound_data);
        Ok(())
    }

    /// Play a registered cue flat (no spatialization). Unknown names are a
    /// quiet no-op so hosts can wire cue names from config without
    /// pre-checking them.
    pub fn play(&mut self, name: &str) -> Result<()> {
        if let Some(sound_data) = self.cues.get(name) {
            let handle = self.manager.play(sound_data.clone())?;
            self.live.push(handle);
        }
        Ok(())
    }

    /// Play a registered cue from a world position.
    pub fn play_at(&mut self, name: &str, position: Vec3) -> Result<()> {
        // Clone the cue data first to avoid borrow conflict
        let sound_data = self.cues.get(name).cloned();
        if let Some(sound_data) = sound_data {
            let emitter = self.scene.add_emitter(
                mint::Vector3 { x: position.x, y: position.y, z: position.z },
                EmitterSettings::default(),
            )?;
            let settings = StaticSoundSettings::new().output_destination(&emitter);
            let handle = self.manager.play(sound_data.with_settings(settings))?;
            self.live.push(handle);
            // The emitter handle drops here; the sound keeps playing.
        }
        Ok(())
    }

    /// Move the listener (call when the observer's pose changes).
    pub fn set_listener(&mut self, position: Vec3, forward: Vec3, up: Vec3) {
        let right = forward.cross(up).normalize();
        let corrected_up = right.cross(forward).normalize();

        let rotation = glam::Mat3::from_cols(right, corrected_up, -forward);
        let quat = glam::Quat::from_mat3(&rotation);

        self.listener.set_position(
            mint::Vector3 { x: position.x, y: position.y, z: position.z },
            Tween::default(),
        );
        self.listener.set_orientation(
            mint::Quaternion {
                v: mint::Vector3 { x: quat.x, y: quat.y, z: quat.z },
                s: quat.w,
            },
            Tween::default(),
        );
    }

    /// Drop handles for cues that have finished playing.
    pub fn sweep(&mut self) {
        self.live
            .retain(|handle| handle.state() != kira::sound::PlaybackState::Stopped);
    }

    /// Stop everything that is still sounding.
    pub fn stop_all(&mut self) {
        for handle in &mut self.live {
            let _ = handle.stop(Tween::default());
        }
        self.live.clear();
    }

    /// Set master volume (0.0 to 1.0).
    pub fn set_master_volume(&mut self, volume: f64) {
        let _ = self.manager.main_track().set_volume(volume, Tween::default());
    }
}

// Re-export for convenience
pub use kira;
