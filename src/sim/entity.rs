//! Renderable entities and the registry that batches them
//!
//! The cast is closed (a fist and a chimp), so entities are an enum rather
//! than trait objects.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::chimp::{Chimp, ChimpTransition};
use super::fist::Fist;
use super::rect::Rect;
use super::visual::Visual;

/// Which actor an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Fist,
    Chimp,
}

/// Anything that is advanced once per tick and drawn at its bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Fist(Fist),
    Chimp(Chimp),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Fist(_) => EntityKind::Fist,
            Entity::Chimp(_) => EntityKind::Chimp,
        }
    }

    /// Advance one tick. Only the fist reads the pointer sample.
    pub fn advance(&mut self, pointer: IVec2) -> Option<ChimpTransition> {
        match self {
            Entity::Fist(fist) => {
                fist.advance(pointer);
                None
            }
            Entity::Chimp(chimp) => chimp.advance(),
        }
    }

    pub fn visual(&self) -> &Visual {
        match self {
            Entity::Fist(fist) => &fist.visual,
            Entity::Chimp(chimp) => &chimp.visual,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Fist(fist) => fist.rect,
            Entity::Chimp(chimp) => chimp.rect,
        }
    }
}

/// Insertion-ordered set of entities; later entries draw on top
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity. Returns false (and drops it) if one of the same kind
    /// is already registered.
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.contains(entity.kind()) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.entities.iter().any(|e| e.kind() == kind)
    }

    /// Entities in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Advance every entity, collecting chimp transitions
    pub fn advance_all(&mut self, pointer: IVec2) -> Vec<ChimpTransition> {
        self.entities
            .iter_mut()
            .filter_map(|e| e.advance(pointer))
            .collect()
    }

    pub fn fist(&self) -> Option<&Fist> {
        self.entities.iter().find_map(|e| match e {
            Entity::Fist(fist) => Some(fist),
            _ => None,
        })
    }

    pub fn chimp(&self) -> Option<&Chimp> {
        self.entities.iter().find_map(|e| match e {
            Entity::Chimp(chimp) => Some(chimp),
            _ => None,
        })
    }

    pub fn fist_mut(&mut self) -> Option<&mut Fist> {
        self.entities.iter_mut().find_map(|e| match e {
            Entity::Fist(fist) => Some(fist),
            _ => None,
        })
    }

    /// Mutable access to both actors at once
    pub fn actors_mut(&mut self) -> Option<(&mut Fist, &mut Chimp)> {
        let mut fist = None;
        let mut chimp = None;
        for entity in &mut self.entities {
            match entity {
                Entity::Fist(f) => fist = Some(f),
                Entity::Chimp(c) => chimp = Some(c),
            }
        }
        Some((fist?, chimp?))
    }
}
