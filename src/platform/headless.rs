//! In-memory display and scripted input
//!
//! Stand-ins for a real window: the display records what would have been
//! drawn, and the input replays a fixed script one step per poll.

use std::collections::VecDeque;

use glam::IVec2;

use super::{Background, DisplayError, DisplaySurface, InputSource};
use crate::sim::{InputEvent, Rect, Visual};

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background,
    Sprite { visual: Visual, rect: Rect },
}

/// Display that records draw calls instead of rasterizing
#[derive(Debug)]
pub struct HeadlessDisplay {
    bounds: Rect,
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    flips: u64,
}

impl HeadlessDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Rect::new(0, 0, width, height),
            pending: Vec::new(),
            last_frame: Vec::new(),
            flips: 0,
        }
    }

    /// Draw calls of the most recently flipped frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn flips(&self) -> u64 {
        self.flips
    }
}

impl DisplaySurface for HeadlessDisplay {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw_background(&mut self, _background: &Background) -> Result<(), DisplayError> {
        self.pending.clear();
        self.pending.push(DrawCall::Background);
        Ok(())
    }

    fn present(&mut self, visual: &Visual, rect: Rect) -> Result<(), DisplayError> {
        self.pending.push(DrawCall::Sprite {
            visual: *visual,
            rect,
        });
        Ok(())
    }

    fn flip(&mut self) -> Result<(), DisplayError> {
        self.last_frame = std::mem::take(&mut self.pending);
        self.flips += 1;
        Ok(())
    }
}

/// Pointer position and events for one poll
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptStep {
    pub pointer: IVec2,
    pub events: Vec<InputEvent>,
}

/// Replays a script; once it runs out, every poll reports `Quit`
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
    pointer: IVec2,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            pointer: IVec2::ZERO,
        }
    }

    /// A short session: the pointer sweeps right along the chimp's row,
    /// clicking every `click_every` ticks and letting go a few ticks later.
    pub fn sweep(ticks: u32, click_every: u32, row: i32) -> Self {
        let click_every = click_every.max(1);
        let release_at = (click_every - 1).min(4);
        let steps = (0..ticks).map(|t| {
            let mut events = Vec::new();
            if t % click_every == 0 {
                events.push(InputEvent::PointerDown);
            } else if t % click_every == release_at {
                events.push(InputEvent::PointerUp);
            }
            ScriptStep {
                pointer: IVec2::new(250 + (t as i32 * 20) % 1000, row),
                events,
            }
        });
        Self::new(steps)
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        match self.steps.pop_front() {
            Some(step) => {
                self.pointer = step.pointer;
                step.events
            }
            None => vec![InputEvent::Quit],
        }
    }

    fn pointer_position(&self) -> IVec2 {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AssetId;

    #[test]
    fn test_flip_publishes_pending_frame() {
        let mut display = HeadlessDisplay::new(1280, 480);
        let visual = Visual::new(AssetId(0), IVec2::new(10, 10));
        display.draw_background(&Background::default()).unwrap();
        display.present(&visual, Rect::new(1, 2, 10, 10)).unwrap();
        assert!(display.last_frame().is_empty());

        display.flip().unwrap();
        assert_eq!(display.flips(), 1);
        assert_eq!(
            display.last_frame(),
            [
                DrawCall::Background,
                DrawCall::Sprite {
                    visual,
                    rect: Rect::new(1, 2, 10, 10)
                }
            ]
        );
    }

    #[test]
    fn test_script_replays_then_quits() {
        let mut input = ScriptedInput::new([ScriptStep {
            pointer: IVec2::new(5, 6),
            events: vec![InputEvent::PointerDown],
        }]);
        assert_eq!(input.poll(), vec![InputEvent::PointerDown]);
        assert_eq!(input.pointer_position(), IVec2::new(5, 6));
        assert_eq!(input.poll(), vec![InputEvent::Quit]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_sweep_presses_then_releases() {
        let mut input = ScriptedInput::sweep(10, 5, 200);
        let polls: Vec<_> = (0..10).map(|_| input.poll()).collect();
        assert_eq!(polls[0], vec![InputEvent::PointerDown]);
        assert_eq!(polls[4], vec![InputEvent::PointerUp]);
        assert_eq!(polls[5], vec![InputEvent::PointerDown]);
        assert!(polls[1].is_empty());
    }
}
