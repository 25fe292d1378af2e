//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives here, owned by one value.

use serde::{Deserialize, Serialize};

use super::chimp::Chimp;
use super::entity::{Entity, Registry};
use super::fist::Fist;

/// Things that happened during a tick, for the frame loop to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fist landed on the chimp
    Punched,
    /// Fist swung and missed (or was already mid-punch)
    Whiffed,
    /// Window close or escape
    QuitRequested,
    /// Chimp reversed at a patrol edge
    ChimpTurned,
    /// Chimp finished spinning
    ChimpRecovered,
}

/// Complete demo state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Chimp first, fist second, so the fist draws on top
    pub registry: Registry,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cleared by a quit request; checked between ticks
    pub running: bool,
}

impl GameState {
    pub fn new(chimp: Chimp, fist: Fist) -> Self {
        let mut registry = Registry::new();
        registry.insert(Entity::Chimp(chimp));
        registry.insert(Entity::Fist(fist));
        Self {
            registry,
            time_ticks: 0,
            running: true,
        }
    }

    pub fn fist(&self) -> Option<&Fist> {
        self.registry.fist()
    }

    pub fn chimp(&self) -> Option<&Chimp> {
        self.registry.chimp()
    }
}
