//! Autopilot toggle notification sound. The sound is an optional asset;
//! when it fails to load the game keeps running silently.

use std::path::Path;

use anyhow::Result;
use kira::{
    manager::{backend::cpal::CpalBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
};

pub struct AudioSystem {
    audio_manager: AudioManager,
    toggle_sound: StaticSoundData,
}

impl AudioSystem {
    pub fn new(sound_path: &Path) -> Result<Self> {
        let audio_manager = AudioManager::<CpalBackend>::new(AudioManagerSettings::default())?;
        let toggle_sound = StaticSoundData::from_file(sound_path, StaticSoundSettings::new())?;

        Ok(Self {
            audio_manager,
            toggle_sound,
        })
    }

    /// Played on every autopilot toggle, on and off alike.
    pub fn play_toggle(&mut self) -> Result<()> {
        self.audio_manager.play(self.toggle_sound.clone())?;
        Ok(())
    }
}
