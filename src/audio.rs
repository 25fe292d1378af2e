//! Sound cues
//!
//! Cues are loaded once at startup. Without an audio device every cue is
//! silent, so playing a cue can never fail.

use crate::assets::AssetError;
use crate::consts::{PUNCH_SOUND, WHIFF_SOUND};
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Fist lands on the chimp
    Punch,
    /// Fist swings at nothing
    Whiff,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Punch, SoundEffect::Whiff];

    /// Asset name of the cue
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Punch => PUNCH_SOUND,
            SoundEffect::Whiff => WHIFF_SOUND,
        }
    }
}

/// A decoded sound, ready to play
pub trait Playback {
    fn play(&self, volume: f32);
}

/// An initialised audio device that can decode cues
pub trait AudioBackend {
    fn load_cue(&mut self, name: &str) -> Result<Box<dyn Playback>, AssetError>;
}

/// A sound cue, or the silent stand-in when there is no device
pub enum Cue {
    Silent,
    Loaded(Box<dyn Playback>),
}

impl Cue {
    pub fn play(&self, volume: f32) {
        match self {
            Cue::Silent => {}
            Cue::Loaded(sound) => sound.play(volume),
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Cue::Silent)
    }
}

impl std::fmt::Debug for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cue::Silent => f.write_str("Cue::Silent"),
            Cue::Loaded(_) => f.write_str("Cue::Loaded"),
        }
    }
}

/// Audio manager for the demo
#[derive(Debug)]
pub struct AudioManager {
    punch: Cue,
    whiff: Cue,
    settings: Settings,
}

impl AudioManager {
    /// Load every cue from `backend`. A missing device (`None`) downgrades
    /// all cues to silent; a device that fails to decode a cue is an error.
    pub fn new(
        backend: Option<&mut dyn AudioBackend>,
        settings: &Settings,
    ) -> Result<Self, AssetError> {
        let (punch, whiff) = match backend {
            Some(backend) => (
                Cue::Loaded(backend.load_cue(SoundEffect::Punch.asset())?),
                Cue::Loaded(backend.load_cue(SoundEffect::Whiff.asset())?),
            ),
            None => {
                log::warn!("No audio device - sound disabled");
                (Cue::Silent, Cue::Silent)
            }
        };
        let mut settings = settings.clone();
        settings.clamp();
        Ok(Self {
            punch,
            whiff,
            settings,
        })
    }

    /// Manager with every cue silent
    pub fn silent() -> Self {
        Self {
            punch: Cue::Silent,
            whiff: Cue::Silent,
            settings: Settings {
                muted: true,
                ..Settings::default()
            },
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    pub fn cue(&self, effect: SoundEffect) -> &Cue {
        match effect {
            SoundEffect::Punch => &self.punch,
            SoundEffect::Whiff => &self.whiff,
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.settings.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.cue(effect).play(vol);
    }
}
