//! The patrolling chimp
//!
//! Walks left and right across its patrol area, turning around (and
//! mirroring its sprite) at the edges. A punch knocks it into a dizzy spin
//! that runs a full turn before it resumes walking.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::visual::Visual;
use crate::consts::SPIN_BUDGET;
use crate::settings::Tuning;

/// Chimp behaviour state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    /// Patrolling horizontally
    Walking,
    /// Dizzy after a punch; stationary while the sprite rotates
    Spinning {
        /// Rotation accumulated so far
        degrees: u32,
        /// Frame captured when the spin began, restored when it ends
        original: Visual,
    },
}

/// Noteworthy state changes from a single advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChimpTransition {
    /// Hit a side of the patrol area and reversed
    Turned,
    /// Finished spinning and went back to walking
    Recovered,
}

/// Target entity that patrols and spins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chimp {
    pub visual: Visual,
    pub rect: Rect,
    /// Horizontal pixels per tick; the sign is the heading
    pub speed: i32,
    /// Bounds of the patrol
    pub area: Rect,
    pub state: SpinState,
    /// Degrees turned per tick while spinning
    pub spin_step: u32,
}

impl Chimp {
    /// Place the chimp at the tuned start position inside `area`
    pub fn new(visual: Visual, mut rect: Rect, area: Rect, tuning: &Tuning) -> Self {
        rect.set_topleft(tuning.chimp_start);
        Self {
            visual,
            rect,
            speed: tuning.chimp_speed,
            area,
            state: SpinState::Walking,
            spin_step: tuning.spin_step,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning { .. })
    }

    /// Walk or spin, depending on state
    pub fn advance(&mut self) -> Option<ChimpTransition> {
        match self.state {
            SpinState::Walking => self.walk(),
            SpinState::Spinning { degrees, original } => self.spin(degrees, original),
        }
    }

    /// Move across the area, and turn at the ends
    fn walk(&mut self) -> Option<ChimpTransition> {
        let mut newpos = self.rect.moved(self.speed, 0);
        let mut transition = None;
        // Turn only once the current position is already past a side, so the
        // chimp overshoots an edge by at most one step.
        if !self.area.contains(&newpos) && self.rect.breaches_horizontally(&self.area) {
            self.speed = -self.speed;
            newpos = self.rect.moved(self.speed, 0);
            self.visual = self.visual.flipped();
            transition = Some(ChimpTransition::Turned);
        }
        self.rect = newpos;
        transition
    }

    /// Rotate the sprite about a fixed center
    fn spin(&mut self, degrees: u32, original: Visual) -> Option<ChimpTransition> {
        let center = self.rect.center();
        let degrees = degrees + self.spin_step;
        let transition = if degrees >= SPIN_BUDGET {
            self.state = SpinState::Walking;
            self.visual = original;
            Some(ChimpTransition::Recovered)
        } else {
            self.state = SpinState::Spinning { degrees, original };
            self.visual = original.rotated(degrees);
            None
        };
        self.rect = Rect::centered_at(center, self.visual.size());
        transition
    }

    /// Knock the chimp dizzy. Returns false if it was already spinning.
    pub fn on_struck(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.state = SpinState::Spinning {
            degrees: 0,
            original: self.visual,
        };
        true
    }
}
