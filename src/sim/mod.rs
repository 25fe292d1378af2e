//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no clock reads
//! - Events handled in arrival order
//! - Stable draw order (registry insertion order)
//! - No rendering, audio or platform dependencies

pub mod chimp;
pub mod entity;
pub mod fist;
pub mod rect;
pub mod state;
pub mod tick;
pub mod visual;

pub use chimp::{Chimp, ChimpTransition, SpinState};
pub use entity::{Entity, EntityKind, Registry};
pub use fist::Fist;
pub use rect::Rect;
pub use state::{GameEvent, GameState};
pub use tick::{InputEvent, KeyCode, TickInput, tick};
pub use visual::{AssetId, Visual, rotated_bounds};
