use std::fmt;

use wt_core::TileType;

use crate::stage::Stage;

/// Why a record left its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionCause {
    /// Its vitality stat fell to the floor.
    Depleted,
    /// It fell behind the manager's trailing time window.
    Expired,
    /// Its age counter passed the ceiling.
    Aged,
    /// Its stage machine reached a terminal stage.
    Concluded,
}

impl fmt::Display for EvictionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depleted => write!(f, "depleted"),
            Self::Expired => write!(f, "expired"),
            Self::Aged => write!(f, "aged out"),
            Self::Concluded => write!(f, "concluded"),
        }
    }
}

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEventKind {
    /// A manager created a record.
    Spawned {
        /// The manager's kind name.
        kind: &'static str,
        /// The new record's id.
        record: u64,
    },
    /// A manager removed a record.
    Evicted {
        /// The manager's kind name.
        kind: &'static str,
        /// The removed record's id.
        record: u64,
        /// The rule that removed it.
        cause: EvictionCause,
    },
    /// A staged record moved to its next stage.
    StageChanged {
        /// The manager's kind name.
        kind: &'static str,
        /// The record's id.
        record: u64,
        /// Stage before the transition.
        from: Stage,
        /// Stage after the transition.
        to: Stage,
    },
    /// A tile effect rewrote a tile.
    TileTransformed {
        /// The manager's kind name.
        kind: &'static str,
        /// Tile column.
        x: u32,
        /// Tile row.
        y: u32,
        /// Previous terrain.
        from: TileType,
        /// New terrain.
        to: TileType,
    },
    /// A user-defined event.
    Custom {
        /// A label identifying the custom event type.
        label: String,
    },
}

impl SimEventKind {
    /// The kind name of the manager that produced this event, if any.
    pub fn kind_name(&self) -> Option<&'static str> {
        match self {
            Self::Spawned { kind, .. }
            | Self::Evicted { kind, .. }
            | Self::StageChanged { kind, .. }
            | Self::TileTransformed { kind, .. } => Some(*kind),
            Self::Custom { .. } => None,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all events produced by the manager of the given kind.
    pub fn events_for_kind(&self, kind: &str) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.kind_name() == Some(kind))
            .collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
