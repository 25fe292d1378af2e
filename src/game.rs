//! Frame loop
//!
//! `Demo` owns every collaborator and the simulation state. Each tick it
//! waits on the clock, drains input into `sim::tick`, plays the cues the
//! tick reports, and redraws.

use log::{debug, info};
use thiserror::Error;

use crate::assets::{AssetError, AssetProvider, ColorKey};
use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::platform::{Background, DisplayError, DisplaySurface, FrameClock, InputSource};
use crate::settings::{Settings, Tuning};
use crate::sim::{Chimp, Fist, GameEvent, GameState, TickInput, tick};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load asset")]
    Asset(#[from] AssetError),
}

/// Summary of a finished run; `ticks` mirrors the sim's tick counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub hits: u32,
    pub misses: u32,
}

/// The demo context: built once at startup, driven by `run`
pub struct Demo<D, I, C> {
    state: GameState,
    display: D,
    input: I,
    clock: C,
    audio: AudioManager,
    background: Background,
    settings: Settings,
    hits: u32,
    misses: u32,
}

impl<D, I, C> Demo<D, I, C>
where
    D: DisplaySurface,
    I: InputSource,
    C: FrameClock,
{
    /// Load both actors and wire up the collaborators.
    ///
    /// The chimp patrols the whole display.
    pub fn new(
        assets: &mut dyn AssetProvider,
        audio: AudioManager,
        display: D,
        input: I,
        clock: C,
        settings: Settings,
        tuning: &Tuning,
    ) -> Result<Self, StartupError> {
        let area = display.bounds();
        let (chimp_visual, chimp_rect) =
            assets.load_visual(CHIMP_ASSET, ColorKey::TopLeftPixel, CHIMP_SCALE)?;
        let (fist_visual, fist_rect) = assets.load_visual(FIST_ASSET, ColorKey::TopLeftPixel, 1)?;
        info!(
            "Patrol area {}x{}, chimp {}x{}",
            area.w, area.h, chimp_rect.w, chimp_rect.h
        );

        let chimp = Chimp::new(chimp_visual, chimp_rect, area, tuning);
        let fist = Fist::new(fist_visual, fist_rect, tuning);

        Ok(Self {
            state: GameState::new(chimp, fist),
            display,
            input,
            clock,
            audio,
            background: Background::default(),
            settings,
            hits: 0,
            misses: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn stats(&self) -> RunStats {
        RunStats {
            ticks: self.state.time_ticks,
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Run until a quit request, then hand back the run summary
    pub fn run(&mut self) -> Result<RunStats, DisplayError> {
        self.display.draw_background(&self.background)?;
        self.display.flip()?;
        info!("Frame loop running at up to {} fps", self.settings.max_fps);

        while self.state.running {
            self.step()?;
        }

        let stats = self.stats();
        info!(
            "Stopped after {} ticks ({} hits, {} misses)",
            stats.ticks, stats.hits, stats.misses
        );
        Ok(stats)
    }

    /// One full tick: pace, input, simulate, draw
    pub fn step(&mut self) -> Result<(), DisplayError> {
        self.clock.tick(self.settings.max_fps);

        let events = self.input.poll();
        let input = TickInput {
            pointer: self.input.pointer_position(),
            events,
        };
        for event in tick(&mut self.state, &input) {
            self.react(event);
        }

        self.render()
    }

    fn react(&mut self, event: GameEvent) {
        match event {
            GameEvent::Punched => {
                self.hits += 1;
                self.audio.play(SoundEffect::Punch);
                debug!("Punch landed at tick {}", self.state.time_ticks);
            }
            GameEvent::Whiffed => {
                self.misses += 1;
                self.audio.play(SoundEffect::Whiff);
                debug!("Whiff at tick {}", self.state.time_ticks);
            }
            GameEvent::QuitRequested => info!("Quit requested"),
            GameEvent::ChimpTurned => debug!("Chimp turned around"),
            GameEvent::ChimpRecovered => debug!("Chimp stopped spinning"),
        }
    }

    fn render(&mut self) -> Result<(), DisplayError> {
        self.display.draw_background(&self.background)?;
        for entity in self.state.registry.iter() {
            self.display.present(entity.visual(), entity.bounds())?;
        }
        self.display.flip()
    }
}
