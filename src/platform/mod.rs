//! Platform abstraction layer
//!
//! The frame loop talks to the outside world only through these traits:
//! - Display surface (background, sprite blits, flip)
//! - Input events and pointer position
//! - Frame clock
//!
//! `headless` provides in-memory implementations for scripted runs.

pub mod clock;
pub mod headless;

pub use clock::{FrameClock, SystemClock};
pub use headless::{DrawCall, HeadlessDisplay, ScriptStep, ScriptedInput};

use glam::IVec2;
use thiserror::Error;

use crate::consts::*;
use crate::sim::{InputEvent, Rect, Visual};

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display surface lost")]
    SurfaceLost,
}

/// Text drawn onto the background once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub color: [u8; 3],
    pub size: u32,
    /// Top edge; the text is centered horizontally
    pub y: i32,
}

/// Static backdrop behind the actors
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub fill: [u8; 3],
    pub caption: Option<Caption>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            fill: BACKGROUND_COLOR,
            caption: Some(Caption {
                text: CAPTION.to_string(),
                color: CAPTION_COLOR,
                size: CAPTION_SIZE,
                y: CAPTION_Y,
            }),
        }
    }
}

/// Where frames end up
pub trait DisplaySurface {
    /// Full drawable area
    fn bounds(&self) -> Rect;
    /// Clear to the background
    fn draw_background(&mut self, background: &Background) -> Result<(), DisplayError>;
    /// Draw `visual` with its top-left at `rect`
    fn present(&mut self, visual: &Visual, rect: Rect) -> Result<(), DisplayError>;
    /// Show the finished frame
    fn flip(&mut self) -> Result<(), DisplayError>;
}

/// Source of player input
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll(&mut self) -> Vec<InputEvent>;
    /// Current pointer position
    fn pointer_position(&self) -> IVec2;
}
