use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wt_core::{EntityManager, World};

use crate::catalog;
use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::EventLog;
use crate::kind::KindSpec;
use crate::manager::Manager;
use crate::system::System;

/// The top-level simulation orchestrator.
///
/// Owns the world, entity store, clock, RNG, event log, and registered
/// systems, and drives the tick loop.
pub struct Simulation {
    world: World,
    entities: EntityManager,
    clock: SimClock,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("systems", &self.systems.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a new simulation with no systems registered.
    pub fn new(world: World, entities: EntityManager, config: SimConfig) -> Self {
        Self {
            world,
            entities,
            clock: SimClock::new(config.dt),
            rng: StdRng::seed_from_u64(config.seed),
            events: EventLog::new(config.max_events),
            systems: Vec::new(),
        }
    }

    /// Create a simulation running one manager for every catalog kind.
    pub fn with_catalog(
        world: World,
        entities: EntityManager,
        config: SimConfig,
    ) -> SimResult<Self> {
        let mut sim = Self::new(world, entities, config);
        sim.add_kinds(catalog::all().iter().copied())?;
        Ok(sim)
    }

    /// Register a system. Systems are ticked in registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Validate `kind` and register a manager for it.
    pub fn add_kind(&mut self, kind: &KindSpec) -> SimResult<()> {
        kind.validate()?;
        debug!(kind = kind.name, "registering manager");
        self.add_system(Manager::new(*kind));
        Ok(())
    }

    /// Register a manager per kind, stopping at the first invalid one.
    pub fn add_kinds<'k>(&mut self, kinds: impl IntoIterator<Item = &'k KindSpec>) -> SimResult<()> {
        for kind in kinds {
            self.add_kind(kind)?;
        }
        info!(systems = self.systems.len(), "managers registered");
        Ok(())
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> SimResult<()> {
        self.clock.advance();

        for i in 0..self.systems.len() {
            let mut system = std::mem::replace(&mut self.systems[i], Box::new(NoopSystem));
            let mut ctx = SimContext {
                world: &mut self.world,
                entities: &self.entities,
                clock: &self.clock,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            let result = system.tick(&mut ctx);
            self.systems[i] = system;
            result?;
        }
        Ok(())
    }

    /// Advance the simulation by `n` ticks.
    pub fn run(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// The tile world, as rewritten by terrain kinds.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The read-only entity store managers draw candidates from.
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// The bounded event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Names of all registered systems, in tick order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Access a system by downcasting to a concrete type.
    pub fn system<T: System + 'static>(&self) -> Option<&T> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
    }

    /// Access a system mutably by downcasting to a concrete type.
    pub fn system_mut<T: System + 'static>(&mut self) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
    }

    /// All registered managers, in tick order.
    pub fn managers(&self) -> impl Iterator<Item = &Manager> {
        self.systems
            .iter()
            .filter_map(|s| s.as_any().downcast_ref::<Manager>())
    }

    /// The manager running the kind called `name`.
    pub fn manager(&self, name: &str) -> Option<&Manager> {
        self.managers().find(|m| m.spec().name == name)
    }

    /// Mutable access to the manager running the kind called `name`.
    pub fn manager_mut(&mut self, name: &str) -> Option<&mut Manager> {
        self.systems
            .iter_mut()
            .filter_map(|s| s.as_any_mut().downcast_mut::<Manager>())
            .find(|m| m.spec().name == name)
    }

    /// Ticks completed so far.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}

/// Placeholder system used during the swap-and-tick pattern.
#[derive(Debug)]
struct NoopSystem;

impl System for NoopSystem {
    fn name(&self) -> &str {
        "noop"
    }
    fn tick(&mut self, _ctx: &mut SimContext<'_>) -> SimResult<()> {
        Ok(())
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::creature::CREATURE_ANODIZER;
    use crate::catalog::geology::WORLD_EROSION;
    use crate::error::SimError;
    use crate::event::SimEventKind;
    use wt_core::{Scenario, TileType};

    fn default_world() -> (World, EntityManager) {
        Scenario::default().build().unwrap()
    }

    #[test]
    fn catalog_simulation_runs() {
        let (world, entities) = default_world();
        let mut sim = Simulation::with_catalog(world, entities, SimConfig::default()).unwrap();
        assert_eq!(sim.managers().count(), catalog::all().len());

        sim.run(5000).unwrap();
        assert_eq!(sim.current_tick(), 5000);
        for manager in sim.managers() {
            assert!(manager.records().len() <= manager.spec().max_count);
            assert!(manager.last_check() > 0);
        }
    }

    #[test]
    fn manager_lookup_by_name() {
        let (world, entities) = default_world();
        let sim = Simulation::with_catalog(world, entities, SimConfig::default()).unwrap();
        let anodizer = sim.manager("creature_anodizer").unwrap();
        assert_eq!(anodizer.spec(), &CREATURE_ANODIZER);
        assert!(sim.manager("creature_nonexistent").is_none());
    }

    #[test]
    fn same_seed_same_history() {
        let run = |seed| {
            let (world, entities) = default_world();
            let config = SimConfig::default().with_seed(seed);
            let mut sim = Simulation::with_catalog(world, entities, config).unwrap();
            sim.run(20_000).unwrap();
            sim.events()
                .events()
                .iter()
                .map(|e| e.description.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn invalid_kind_is_rejected() {
        let (world, entities) = default_world();
        let mut sim = Simulation::new(world, entities, SimConfig::default());
        let mut broken = CREATURE_ANODIZER;
        broken.max_count = 0;
        let err = sim.add_kind(&broken).unwrap_err();
        assert!(matches!(err, SimError::InvalidKind { .. }));
        assert!(sim.system_names().is_empty());
    }

    #[test]
    fn erosion_wears_down_mountains() {
        let world = World::filled(6, 6, TileType::Mountain);
        let mut sim = Simulation::new(world, EntityManager::new(), SimConfig::default());
        sim.add_kind(&WORLD_EROSION).unwrap();
        // Force a record onto every mountain tile at the first activation.
        for y in 0..6 {
            for x in 0..6 {
                let id = u64::from(y * 6 + x + 1);
                let erosion = sim.manager_mut("world_erosion").unwrap();
                let stats = WORLD_EROSION.stats.iter().map(|s| s.max).collect();
                erosion.records_mut().push(crate::record::Record::new(
                    id,
                    crate::record::Anchor::Tile { x, y },
                    stats,
                    0,
                ));
            }
        }
        sim.run(WORLD_EROSION.check_interval).unwrap();

        let erosion = sim.manager("world_erosion").unwrap();
        assert!(erosion.tiles_transformed() >= 36);
        assert_eq!(sim.world().count(TileType::Mountain), 0);
        let rewrites = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::TileTransformed { .. }))
            .count() as u64;
        assert_eq!(rewrites, erosion.tiles_transformed());
    }

    #[test]
    fn custom_system_registration() {
        #[derive(Debug)]
        struct CustomSystem {
            ticked: u64,
        }
        impl System for CustomSystem {
            fn name(&self) -> &str {
                "custom"
            }
            fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
                self.ticked += 1;
                assert_eq!(ctx.dt(), 1.0);
                if ctx.tick() == 3 {
                    ctx.emit(
                        SimEventKind::Custom {
                            label: "festival".into(),
                        },
                        "a festival is held",
                    );
                }
                Ok(())
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }

        let (world, entities) = default_world();
        let mut sim = Simulation::new(world, entities, SimConfig::default());
        sim.add_system(CustomSystem { ticked: 0 });
        sim.run(5).unwrap();

        assert_eq!(sim.system::<CustomSystem>().unwrap().ticked, 5);
        assert_eq!(sim.events().events_at_tick(3).len(), 1);
        assert!(sim.managers().next().is_none());
        sim.system_mut::<CustomSystem>().unwrap().ticked = 0;
        assert_eq!(sim.system::<CustomSystem>().unwrap().ticked, 0);
    }

    #[test]
    fn failing_system_stops_the_tick() {
        #[derive(Debug)]
        struct Failing;
        impl System for Failing {
            fn name(&self) -> &str {
                "failing"
            }
            fn tick(&mut self, _ctx: &mut SimContext<'_>) -> SimResult<()> {
                Err(SimError::SystemError("boom".into()))
            }
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }

        let (world, entities) = default_world();
        let mut sim = Simulation::new(world, entities, SimConfig::default());
        sim.add_system(Failing);
        assert!(sim.tick().is_err());
        // The system is put back even when it fails.
        assert_eq!(sim.system_names(), vec!["failing"]);
    }
}
