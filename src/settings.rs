//! Game settings and tuning
//!
//! `Settings` holds player preferences; `Tuning` holds the gameplay numbers.
//! Nothing is persisted, so both load as defaults on native builds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate cap of the loop
    pub max_fps: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_fps: TARGET_FPS,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.clamp();
        Ok(settings)
    }

    /// Keep volumes in range and the frame cap at least 1
    pub(crate) fn clamp(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.max_fps = self.max_fps.max(1);
    }

    /// Effective cue volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Native stub: nothing is stored between runs
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }
}

/// Gameplay numbers for the two actors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub fist_offset: IVec2,
    pub punch_nudge: IVec2,
    pub hitbox_shrink: i32,
    pub chimp_start: IVec2,
    pub chimp_speed: i32,
    pub spin_step: u32,
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep the constants
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.hitbox_shrink = tuning.hitbox_shrink.max(0);
        tuning.spin_step = tuning.spin_step.max(1);
        Ok(tuning)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fist_offset: FIST_OFFSET,
            punch_nudge: PUNCH_NUDGE,
            hitbox_shrink: HITBOX_SHRINK,
            chimp_start: CHIMP_START,
            chimp_speed: CHIMP_SPEED,
            spin_step: SPIN_STEP,
        }
    }
}
