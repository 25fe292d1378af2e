//! Chimp Punch - a single-screen arcade demo
//!
//! Core modules:
//! - `sim`: Deterministic entity state machines and the per-tick step
//! - `game`: Fixed-rate frame loop that wires collaborators to the sim
//! - `assets`: Visual asset provider seam
//! - `audio`: Sound cues with a silent fallback
//! - `platform`: Display, input and clock seams plus a headless backend
//! - `settings`: Player-facing preferences and gameplay tuning

pub mod assets;
pub mod audio;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Demo, RunStats, StartupError};
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Display size in pixels
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 480;
    /// Maximum frame rate of the loop
    pub const TARGET_FPS: u32 = 60;

    pub const WINDOW_TITLE: &str = "Punching the Chimpanzee";

    /// Fist sprite is drawn this far from the pointer
    pub const FIST_OFFSET: IVec2 = IVec2::new(-235, -80);
    /// Extra push applied while the fist is punching
    pub const PUNCH_NUDGE: IVec2 = IVec2::new(15, 25);
    /// Hitbox shrink (per axis) when testing a punch
    pub const HITBOX_SHRINK: i32 = 5;

    /// Chimp starts here (top-left)
    pub const CHIMP_START: IVec2 = IVec2::new(10, 90);
    /// Horizontal pixels per tick
    pub const CHIMP_SPEED: i32 = 18;
    /// Degrees of rotation per tick while dizzy
    pub const SPIN_STEP: u32 = 12;
    /// A spin ends once this many degrees have been turned
    pub const SPIN_BUDGET: u32 = 360;
    pub const CHIMP_SCALE: u32 = 4;

    pub const FIST_ASSET: &str = "fist.png";
    pub const CHIMP_ASSET: &str = "chimp.png";
    pub const PUNCH_SOUND: &str = "punch.wav";
    pub const WHIFF_SOUND: &str = "whiff.wav";
    /// Optional gameplay overrides under the data directory
    pub const TUNING_FILE: &str = "tuning.json";

    pub const BACKGROUND_COLOR: [u8; 3] = [170, 238, 187];
    pub const CAPTION: &str = "Pummel the Chimp!";
    pub const CAPTION_COLOR: [u8; 3] = [10, 10, 10];
    pub const CAPTION_SIZE: u32 = 64;
    pub const CAPTION_Y: i32 = 10;
}
