//! Tick-driven population managers for Worldtick.
//!
//! A [`Manager`] runs one [`KindSpec`]: it periodically spawns small records
//! anchored to creatures, civilization pairs, or tiles, drifts their stats,
//! and evicts them again. The [`catalog`] declares every kind as data, and the
//! [`Simulation`] orchestrator ticks one manager per kind over a
//! [`wt_core::World`] and its [`wt_core::EntityManager`].

/// Static kind declarations, grouped by family.
pub mod catalog;
/// Simulation clock for tracking ticks.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Kind specifications: stat layouts, drift, spawn and eviction rules.
pub mod kind;
/// The generic population manager.
pub mod manager;
/// Managed records and their anchors.
pub mod record;
/// Top-level simulation orchestrator.
pub mod simulation;
/// Stage machines for staged diplomatic kinds.
pub mod stage;
/// The trait that all simulation systems implement.
pub mod system;

/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, EvictionCause, SimEvent, SimEventKind};
/// Re-exports of the kind specification types.
pub use kind::{CandidateFilter, Drift, Eviction, Family, KindSpec, StatSpec, TileEffect};
/// Re-export of [`manager::Manager`].
pub use manager::Manager;
/// Re-exports of [`record::Record`] and [`record::Anchor`].
pub use record::{Anchor, Record};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of the stage machine types.
pub use stage::{IntercessionStatus, Progression, RapprochementStage, Stage};
/// Re-export of [`system::System`].
pub use system::System;
