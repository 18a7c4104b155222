use std::fmt;

use wt_core::EntityId;

use crate::stage::Stage;

/// What a record refers to. Never validated or dereferenced by managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A creature in the entity store.
    Creature(EntityId),
    /// Two civilizations in the entity store.
    Civilizations {
        /// The first party.
        first: EntityId,
        /// The second party.
        second: EntityId,
    },
    /// A tile on the grid.
    Tile {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
    },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creature(id) => write!(f, "creature {id}"),
            Self::Civilizations { first, second } => write!(f, "civilizations {first} and {second}"),
            Self::Tile { x, y } => write!(f, "tile ({x}, {y})"),
        }
    }
}

/// One managed record: an artisan, an arrangement, or a world feature.
///
/// `stats[i]` is the value of the kind's `stats[i]` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique within its manager, strictly increasing in insertion order.
    pub id: u64,
    /// What the record refers to.
    pub anchor: Anchor,
    /// Stat values, in declaration order.
    pub stats: Vec<f64>,
    /// Tick at which the record was created.
    pub tick: u64,
    /// Explicit age counter, for kinds that age per activation.
    pub age: f64,
    /// Current stage, for staged kinds.
    pub stage: Option<Stage>,
}

impl Record {
    /// A record with no age and no stage.
    pub fn new(id: u64, anchor: Anchor, stats: Vec<f64>, tick: u64) -> Self {
        Self {
            id,
            anchor,
            stats,
            tick,
            age: 0.0,
            stage: None,
        }
    }

    /// The creature this record belongs to, if any.
    pub fn entity(&self) -> Option<EntityId> {
        match self.anchor {
            Anchor::Creature(id) => Some(id),
            _ => None,
        }
    }

    /// The civilization pair, if any.
    pub fn civilizations(&self) -> Option<(EntityId, EntityId)> {
        match self.anchor {
            Anchor::Civilizations { first, second } => Some((first, second)),
            _ => None,
        }
    }

    /// The tile position, if any.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self.anchor {
            Anchor::Tile { x, y } => Some((x, y)),
            _ => None,
        }
    }
}
