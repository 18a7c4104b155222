use rand::rngs::StdRng;
use wt_core::{EntityManager, World};

use crate::clock::SimClock;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context passed to each system during a tick.
pub struct SimContext<'a> {
    /// The tile grid. Only tile effects write to it.
    pub world: &'a mut World,
    /// The entity store, read-only to systems.
    pub entities: &'a EntityManager,
    /// Current time.
    pub clock: &'a SimClock,
    /// Shared event log.
    pub events: &'a mut EventLog,
    /// Shared seeded RNG.
    pub rng: &'a mut StdRng,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.tick(), kind, description));
    }

    /// The tick being processed.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// The configured time step.
    pub fn dt(&self) -> f64 {
        self.clock.dt()
    }
}
