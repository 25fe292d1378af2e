//! Single simulation tick
//!
//! Dispatches the tick's input events to the actors, then advances the whole
//! registry. Pure and deterministic: no clock, no I/O.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::chimp::ChimpTransition;
use super::state::{GameEvent, GameState};

/// Keys the demo distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Escape,
    /// Any other key, by platform scan code
    Other(u32),
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(KeyCode),
    /// Mouse button pressed
    PointerDown,
    /// Mouse button released
    PointerUp,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position sampled for this tick
    pub pointer: IVec2,
    /// Events drained this tick, in arrival order
    pub events: Vec<InputEvent>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for event in &input.events {
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(KeyCode::Escape) => {
                state.running = false;
                events.push(GameEvent::QuitRequested);
            }
            InputEvent::KeyDown(KeyCode::Other(_)) => {}
            InputEvent::PointerDown => {
                let Some((fist, chimp)) = state.registry.actors_mut() else {
                    continue;
                };
                if fist.strike(&chimp.rect) {
                    chimp.on_struck();
                    events.push(GameEvent::Punched);
                } else {
                    events.push(GameEvent::Whiffed);
                }
            }
            InputEvent::PointerUp => {
                if let Some(fist) = state.registry.fist_mut() {
                    fist.release();
                }
            }
        }
    }

    state.time_ticks += 1;
    for transition in state.registry.advance_all(input.pointer) {
        events.push(match transition {
            ChimpTransition::Turned => GameEvent::ChimpTurned,
            ChimpTransition::Recovered => GameEvent::ChimpRecovered,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Tuning;
    use crate::sim::chimp::{Chimp, SpinState};
    use crate::sim::fist::Fist;
    use crate::sim::rect::Rect;
    use crate::sim::visual::{AssetId, Visual};

    fn state() -> GameState {
        let tuning = Tuning::default();
        let chimp_size = IVec2::new(256, 240);
        let fist_size = IVec2::new(88, 96);
        GameState::new(
            Chimp::new(
                Visual::new(AssetId(1), chimp_size),
                Rect::from_topleft(IVec2::ZERO, chimp_size),
                Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
                &tuning,
            ),
            Fist::new(
                Visual::new(AssetId(2), fist_size),
                Rect::from_topleft(IVec2::ZERO, fist_size),
                &tuning,
            ),
        )
    }

    /// Pointer that puts the fist squarely over the chimp's current rect
    fn over_chimp(state: &GameState) -> IVec2 {
        let chimp = state.chimp().map(|c| c.rect).unwrap_or_default();
        chimp.center() - FIST_OFFSET
    }

    fn input(pointer: IVec2, events: &[InputEvent]) -> TickInput {
        TickInput {
            pointer,
            events: events.to_vec(),
        }
    }

    #[test]
    fn test_idle_tick_only_advances() {
        let mut state = state();
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.chimp().map(|c| c.rect.left()), Some(28));
        assert!(state.running);
    }

    #[test]
    fn test_escape_and_quit_stop_running() {
        for event in [InputEvent::Quit, InputEvent::KeyDown(KeyCode::Escape)] {
            let mut state = state();
            let events = tick(&mut state, &input(IVec2::ZERO, &[event]));
            assert_eq!(events, vec![GameEvent::QuitRequested]);
            assert!(!state.running);
            // The tick still completes
            assert_eq!(state.time_ticks, 1);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut state = state();
        let events = tick(
            &mut state,
            &input(IVec2::ZERO, &[InputEvent::KeyDown(KeyCode::Other(32))]),
        );
        assert!(events.is_empty());
        assert!(state.running);
    }

    #[test]
    fn test_punch_uses_last_tick_fist_position() {
        let mut state = state();
        let pointer = over_chimp(&state);
        // Place the fist, then punch on the following tick
        tick(&mut state, &input(pointer, &[]));
        let pointer = over_chimp(&state);
        let events = tick(&mut state, &input(pointer, &[InputEvent::PointerDown]));
        assert_eq!(events, vec![GameEvent::Punched]);
        assert!(state.chimp().is_some_and(Chimp::is_spinning));
    }

    #[test]
    fn test_punch_before_fist_arrives_whiffs() {
        let mut state = state();
        // Fist still sits at its load position, far from the chimp's start
        let far = IVec2::new(1200, 470);
        tick(&mut state, &input(far, &[]));
        let events = tick(&mut state, &input(far, &[InputEvent::PointerDown]));
        assert_eq!(events, vec![GameEvent::Whiffed]);
        assert!(state.chimp().is_some_and(|c| !c.is_spinning()));
    }

    #[test]
    fn test_held_button_whiffs_until_released() {
        let mut state = state();
        let pointer = over_chimp(&state);
        tick(&mut state, &input(pointer, &[]));

        let events = tick(
            &mut state,
            &input(
                pointer,
                &[
                    InputEvent::PointerDown,
                    InputEvent::PointerDown,
                    InputEvent::PointerUp,
                    InputEvent::PointerDown,
                ],
            ),
        );
        assert_eq!(
            events,
            vec![GameEvent::Punched, GameEvent::Whiffed, GameEvent::Punched]
        );
        assert!(state.fist().is_some_and(|f| f.pressed));
    }

    #[test]
    fn test_spin_runs_out_and_reports_recovery() {
        let mut state = state();
        let pointer = over_chimp(&state);
        tick(&mut state, &input(pointer, &[]));
        let pointer = over_chimp(&state);
        tick(
            &mut state,
            &input(pointer, &[InputEvent::PointerDown, InputEvent::PointerUp]),
        );
        // The punch tick already turned the first 12 degrees
        let mut recovered_at = None;
        for n in 2..=40 {
            let events = tick(&mut state, &input(pointer, &[]));
            if events.contains(&GameEvent::ChimpRecovered) {
                recovered_at = Some(n);
                break;
            }
        }
        assert_eq!(recovered_at, Some(30));
        assert_eq!(state.chimp().map(|c| c.state), Some(SpinState::Walking));
    }
}
