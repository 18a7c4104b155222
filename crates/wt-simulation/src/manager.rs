//! The generic population manager.
//!
//! One [`Manager`] runs one [`KindSpec`]. On every tick it checks its
//! throttle; once `check_interval` ticks have passed since the last
//! activation it spawns, mutates and evicts, in that order, all within the
//! same call.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, trace};
use wt_core::{ComponentKind, EntityId};

use crate::context::SimContext;
use crate::error::SimResult;
use crate::event::{EvictionCause, SimEventKind};
use crate::kind::{CandidateFilter, Eviction, Family, KindSpec};
use crate::record::{Anchor, Record};
use crate::system::System;

/// Owns the records of one kind and evolves them over time.
///
/// [`records`](Self::records) hands out the live list, not a copy; anything
/// pushed through [`records_mut`](Self::records_mut) is managed exactly like
/// a spawned record from the next activation on.
#[derive(Debug, Clone)]
pub struct Manager {
    spec: KindSpec,
    records: Vec<Record>,
    next_id: u64,
    last_check: u64,
    skill_memory: HashMap<EntityId, f64>,
    tiles_transformed: u64,
}

impl Manager {
    /// A manager with no records whose first activation is at `check_interval`.
    pub fn new(spec: KindSpec) -> Self {
        Self {
            spec,
            records: Vec::new(),
            next_id: 1,
            last_check: 0,
            skill_memory: HashMap::new(),
            tiles_transformed: 0,
        }
    }

    /// The kind this manager runs.
    pub fn spec(&self) -> &KindSpec {
        &self.spec
    }

    /// The live record list.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable view of the live record list.
    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// Id the next spawned record will receive, unless a higher id has been
    /// pushed by hand.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Tick of the last activation, 0 before the first.
    pub fn last_check(&self) -> u64 {
        self.last_check
    }

    /// Tiles rewritten by this manager's tile effect so far.
    pub fn tiles_transformed(&self) -> u64 {
        self.tiles_transformed
    }

    /// Last known first-stat value for a creature, for kinds with skill memory.
    pub fn remembered_skill(&self, entity: EntityId) -> Option<f64> {
        self.skill_memory.get(&entity).copied()
    }

    /// Look up a stat of `record` by name.
    pub fn stat(&self, record: &Record, name: &str) -> Option<f64> {
        self.spec
            .stat_index(name)
            .and_then(|i| record.stats.get(i).copied())
    }

    /// Run one tick. Does nothing until the throttle interval has elapsed.
    pub fn update(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let tick = ctx.tick();
        if tick.saturating_sub(self.last_check) < self.spec.check_interval {
            return Ok(());
        }
        self.last_check = tick;
        trace!(kind = self.spec.name, tick, records = self.records.len(), "activation");

        self.spawn(ctx);
        self.mutate(ctx)?;
        self.evict(ctx);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Spawn
    // -----------------------------------------------------------------------

    /// Capacity check followed by the Bernoulli trial.
    fn roll(&self, ctx: &mut SimContext<'_>) -> bool {
        self.records.len() < self.spec.max_count
            && ctx.rng.random::<f64>() < self.spec.spawn_chance
    }

    fn spawn(&mut self, ctx: &mut SimContext<'_>) {
        match self.spec.family {
            Family::Creature {
                filter,
                skill_memory,
            } => {
                if !self.roll(ctx) {
                    return;
                }
                let candidates = ctx.entities.entities_with(&[ComponentKind::Creature]);
                if candidates.is_empty() {
                    return;
                }
                let entity = candidates[ctx.rng.random_range(0..candidates.len())];
                if let CandidateFilter::MinAge(min) = filter {
                    let age = ctx.entities.creature(entity).map_or(0.0, |c| c.age);
                    if age < min {
                        return;
                    }
                }
                let mut stats = self.initial_stats(ctx);
                if skill_memory {
                    if let (Some(skill), Some(first), Some(spec)) = (
                        self.skill_memory.get(&entity),
                        stats.first_mut(),
                        self.spec.stats.first(),
                    ) {
                        *first = spec.clamp(*skill);
                    }
                }
                self.push(ctx, Anchor::Creature(entity), stats);
            }
            Family::Diplomatic => {
                if !self.roll(ctx) {
                    return;
                }
                let civs = ctx.entities.entities_with(&[ComponentKind::Civilization]);
                if civs.is_empty() {
                    return;
                }
                let first = civs[ctx.rng.random_range(0..civs.len())];
                let second = civs[ctx.rng.random_range(0..civs.len())];
                if first == second {
                    trace!(kind = self.spec.name, %first, "same civilization drawn twice");
                    return;
                }
                let stats = self.initial_stats(ctx);
                self.push(ctx, Anchor::Civilizations { first, second }, stats);
            }
            Family::Terrain { attempts, tiles } => {
                let (width, height) = (ctx.world.width(), ctx.world.height());
                if width == 0 || height == 0 {
                    return;
                }
                for _ in 0..attempts {
                    if !self.roll(ctx) {
                        continue;
                    }
                    let x = ctx.rng.random_range(0..width);
                    let y = ctx.rng.random_range(0..height);
                    let allowed = ctx.world.tile(x, y).is_some_and(|t| tiles.contains(&t));
                    if allowed {
                        let stats = self.initial_stats(ctx);
                        self.push(ctx, Anchor::Tile { x, y }, stats);
                    }
                }
            }
        }
    }

    fn initial_stats(&self, ctx: &mut SimContext<'_>) -> Vec<f64> {
        self.spec
            .stats
            .iter()
            .map(|s| s.initial(&mut *ctx.rng))
            .collect()
    }

    fn push(&mut self, ctx: &mut SimContext<'_>, anchor: Anchor, stats: Vec<f64>) {
        // Skip past ids handed in through `records_mut`.
        if let Some(highest) = self.records.iter().map(|r| r.id).max() {
            self.next_id = self.next_id.max(highest + 1);
        }
        let id = self.next_id;
        self.next_id += 1;
        let tick = ctx.tick();
        self.records.push(Record {
            id,
            anchor,
            stats,
            tick,
            age: 0.0,
            stage: self.spec.progression.map(|p| p.initial()),
        });
        debug!(kind = self.spec.name, id, %anchor, "spawned");
        let subject = match anchor {
            Anchor::Creature(entity) => ctx.entities.label(entity),
            Anchor::Civilizations { first, second } => {
                format!("{} and {}", ctx.entities.label(first), ctx.entities.label(second))
            }
            Anchor::Tile { .. } => anchor.to_string(),
        };
        ctx.emit(
            SimEventKind::Spawned {
                kind: self.spec.name,
                record: id,
            },
            format!("{} #{id} appeared ({subject})", self.spec.name),
        );
    }

    // -----------------------------------------------------------------------
    // Mutate
    // -----------------------------------------------------------------------

    fn mutate(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        let spec = self.spec;
        let tick = ctx.tick();
        let age_step = spec.age_step();
        let remember = matches!(
            spec.family,
            Family::Creature {
                skill_memory: true,
                ..
            }
        );

        for record in &mut self.records {
            for (value, stat) in record.stats.iter_mut().zip(spec.stats) {
                *value = stat.step(*value, &mut *ctx.rng, tick);
            }

            if let Some(step) = age_step {
                record.age += step;
            }

            if let (Some(progression), Some(stage)) = (spec.progression, record.stage) {
                let next = progression.advance(stage, &record.stats, tick.saturating_sub(record.tick));
                if next != stage {
                    record.stage = Some(next);
                    debug!(kind = spec.name, id = record.id, %stage, %next, "stage changed");
                    ctx.emit(
                        SimEventKind::StageChanged {
                            kind: spec.name,
                            record: record.id,
                            from: stage,
                            to: next,
                        },
                        format!("{} #{} moved from {stage} to {next}", spec.name, record.id),
                    );
                }
            }

            if remember {
                if let (Anchor::Creature(entity), Some(skill)) = (record.anchor, record.stats.first()) {
                    self.skill_memory.insert(entity, *skill);
                }
            }

            if let (Some(effect), Anchor::Tile { x, y }) = (spec.tile_effect, record.anchor) {
                let built_up = record
                    .stats
                    .get(effect.stat)
                    .is_some_and(|v| *v >= effect.threshold);
                let transition = ctx
                    .world
                    .tile(x, y)
                    .and_then(|from| effect.target(from).map(|into| (from, into)));
                if let (true, Some((from, into))) = (built_up, transition) {
                    ctx.world.set_tile(x, y, into)?;
                    self.tiles_transformed += 1;
                    record.stats[effect.stat] = spec.stats[effect.stat].clamp(effect.reset);
                    debug!(kind = spec.name, x, y, %from, %into, "tile transformed");
                    ctx.emit(
                        SimEventKind::TileTransformed {
                            kind: spec.name,
                            x,
                            y,
                            from,
                            to: into,
                        },
                        format!("{} turned {from} into {into} at ({x}, {y})", spec.name),
                    );
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Evict
    // -----------------------------------------------------------------------

    fn eviction_cause(&self, record: &Record, tick: u64) -> Option<EvictionCause> {
        self.spec.eviction.iter().find_map(|rule| match *rule {
            Eviction::Floor { stat, at } => record
                .stats
                .get(stat)
                .is_some_and(|v| *v <= at)
                .then_some(EvictionCause::Depleted),
            Eviction::Window(window) => {
                (tick.saturating_sub(record.tick) > window).then_some(EvictionCause::Expired)
            }
            Eviction::Age { ceiling, .. } => (record.age > ceiling).then_some(EvictionCause::Aged),
            Eviction::Concluded => record
                .stage
                .is_some_and(|s| s.is_terminal())
                .then_some(EvictionCause::Concluded),
        })
    }

    fn evict(&mut self, ctx: &mut SimContext<'_>) {
        let tick = ctx.tick();
        let mut evicted = Vec::new();
        let records = std::mem::take(&mut self.records);
        for record in records {
            match self.eviction_cause(&record, tick) {
                Some(cause) => evicted.push((record.id, cause)),
                None => self.records.push(record),
            }
        }

        for (id, cause) in evicted {
            debug!(kind = self.spec.name, id, %cause, "evicted");
            ctx.emit(
                SimEventKind::Evicted {
                    kind: self.spec.name,
                    record: id,
                    cause,
                },
                format!("{} #{id} {cause}", self.spec.name),
            );
        }
    }
}

impl System for Manager {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) -> SimResult<()> {
        self.update(ctx)
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
    use crate::catalog::diplomacy::DIPLOMATIC_NON_AGGRESSION;
    use crate::catalog::geology::WORLD_EROSION;
    use crate::clock::SimClock;
    use crate::event::EventLog;
    use crate::kind::{Drift, StatSpec, TileEffect};
    use crate::stage::{Progression, RapprochementStage, Stage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wt_core::entity::{CivilizationComponent, CreatureComponent};
    use wt_core::{ComponentSet, EntityManager, TileType, World};

    struct Harness {
        world: World,
        entities: EntityManager,
        events: EventLog,
        rng: StdRng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                world: World::filled(8, 8, TileType::Grass),
                entities: EntityManager::new(),
                events: EventLog::new(0),
                rng: StdRng::seed_from_u64(42),
            }
        }

        fn with_creatures(mut self, ages: &[f64]) -> Self {
            for age in ages {
                self.entities.spawn(ComponentSet {
                    creature: Some(CreatureComponent {
                        species: "dwarf".into(),
                        age: *age,
                    }),
                    ..Default::default()
                });
            }
            self
        }

        fn with_civilizations(mut self, names: &[&str]) -> Self {
            for name in names {
                self.entities.spawn(ComponentSet {
                    civilization: Some(CivilizationComponent {
                        name: name.to_string(),
                    }),
                    ..Default::default()
                });
            }
            self
        }

        fn update(&mut self, manager: &mut Manager, tick: u64) {
            let clock = SimClock::starting_at(tick, 1.0);
            let mut ctx = SimContext {
                world: &mut self.world,
                entities: &self.entities,
                clock: &clock,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            manager.update(&mut ctx).unwrap();
        }

        /// One activation every 10 ticks, from tick 10 through `10 * n`.
        fn activate(&mut self, manager: &mut Manager, n: u64) {
            for i in 1..=n {
                self.update(manager, i * 10);
            }
        }
    }

    static SKILLED: [StatSpec; 2] = [
        StatSpec::new("skill", 30.0, 10.0).drift(Drift::Walk(2.0)),
        StatSpec::new("focus", 10.0, 5.0),
    ];

    fn eager(family: Family) -> KindSpec {
        KindSpec {
            name: "test_eager",
            label: "eagers",
            family,
            check_interval: 10,
            spawn_chance: 1.0,
            max_count: 3,
            stats: &SKILLED,
            eviction: &[Eviction::Window(1_000_000)],
            progression: None,
            tile_effect: None,
        }
    }

    fn creatures() -> Family {
        Family::Creature {
            filter: CandidateFilter::Any,
            skill_memory: false,
        }
    }

    fn anodizer_record(id: u64, entity: u64) -> Record {
        Record::new(
            id,
            Anchor::Creature(EntityId(entity)),
            vec![30.0, 25.0, 20.0, 35.0],
            0,
        )
    }

    // -----------------------------------------------------------------------
    // Accessor contract
    // -----------------------------------------------------------------------

    #[test]
    fn fresh_manager_is_empty() {
        let manager = Manager::new(CREATURE_ANODIZER);
        assert!(manager.records().is_empty());
    }

    #[test]
    fn pushed_record_is_visible() {
        let mut manager = Manager::new(CREATURE_ANODIZER);
        manager.records_mut().push(anodizer_record(1, 1));
        let records = manager.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entity(), Some(EntityId(1)));
    }

    #[test]
    fn two_pushes_two_records() {
        let mut manager = Manager::new(CREATURE_ANODIZER);
        manager.records_mut().push(anodizer_record(1, 1));
        manager.records_mut().push(anodizer_record(2, 2));
        assert_eq!(manager.records().len(), 2);
    }

    #[test]
    fn seeded_records_read_back_intact() {
        let mut manager = Manager::new(CREATURE_ANODIZER);
        let seeded: Vec<Record> = (1..=5)
            .map(|i| {
                let mut r = anodizer_record(i, i * 10);
                r.stats[2] = 123.5; // outside the clamp range, kept as is on read
                r.tick = i * 1000;
                r
            })
            .collect();
        manager.records_mut().extend(seeded.iter().cloned());
        assert_eq!(manager.records(), seeded.as_slice());

        let r = &manager.records()[0];
        assert_eq!(manager.stat(r, "anodizing_skill"), Some(30.0));
        assert_eq!(manager.stat(r, "voltage_regulation"), Some(123.5));
        assert_eq!(manager.stat(r, "no_such_stat"), None);
    }

    #[test]
    fn accessor_returns_the_same_list() {
        let mut manager = Manager::new(CREATURE_ANODIZER);
        manager.records_mut().push(anodizer_record(1, 1));
        assert!(std::ptr::eq(manager.records(), manager.records()));
        let live = manager.records_mut().as_ptr();
        assert_eq!(manager.records().as_ptr(), live);
    }

    #[test]
    fn erosion_total_tracks_counter() {
        let mut manager = Manager::new(WORLD_EROSION);
        assert_eq!(manager.tiles_transformed(), 0);
        manager.tiles_transformed = 42;
        assert_eq!(manager.tiles_transformed(), 42);
    }

    #[test]
    fn fresh_bookkeeping_defaults() {
        let manager = Manager::new(DIPLOMATIC_NON_AGGRESSION);
        assert_eq!(manager.next_id(), 1);
        assert_eq!(manager.last_check(), 0);
        let pacts: &[Record] = manager.records();
        assert!(pacts.is_empty());
    }

    // -----------------------------------------------------------------------
    // Throttle and spawn
    // -----------------------------------------------------------------------

    #[test]
    fn throttle_gates_activation() {
        let mut h = Harness::new().with_creatures(&[20.0]);
        let mut manager = Manager::new(eager(creatures()));

        h.update(&mut manager, 5);
        assert_eq!(manager.last_check(), 0);
        assert!(manager.records().is_empty());

        h.update(&mut manager, 10);
        assert_eq!(manager.last_check(), 10);
        assert_eq!(manager.records().len(), 1);

        h.update(&mut manager, 19);
        assert_eq!(manager.last_check(), 10);
        assert_eq!(manager.records().len(), 1);

        h.update(&mut manager, 20);
        assert_eq!(manager.last_check(), 20);
        assert_eq!(manager.records().len(), 2);
    }

    #[test]
    fn activation_is_recorded_even_without_spawn() {
        // No creatures at all: nothing to spawn, the throttle still resets.
        let mut h = Harness::new();
        let mut manager = Manager::new(eager(creatures()));
        h.update(&mut manager, 30);
        assert_eq!(manager.last_check(), 30);
        assert!(manager.records().is_empty());
        assert_eq!(manager.next_id(), 1);
    }

    #[test]
    fn creature_spawn_fills_record() {
        let mut h = Harness::new().with_creatures(&[20.0, 30.0]);
        let mut manager = Manager::new(eager(creatures()));
        h.update(&mut manager, 10);

        let record = &manager.records()[0];
        assert_eq!(record.id, 1);
        assert_eq!(record.tick, 10);
        assert!(matches!(record.entity(), Some(EntityId(1 | 2))));
        assert_eq!(record.stats.len(), 2);
        assert!((29.0..=41.0).contains(&record.stats[0]));
        assert!((10.0..15.0).contains(&record.stats[1]));
        assert_eq!(manager.next_id(), 2);
        assert_eq!(h.events.events_for_kind("test_eager").len(), 1);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut h = Harness::new().with_creatures(&[20.0, 30.0, 40.0]);
        let mut manager = Manager::new(eager(creatures()));
        h.activate(&mut manager, 10);
        assert_eq!(manager.records().len(), 3);
        let ids: Vec<u64> = manager.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn hand_pushed_ids_are_not_reused() {
        let mut h = Harness::new().with_creatures(&[20.0]);
        let mut manager = Manager::new(eager(creatures()));
        manager.records_mut().push(anodizer_record(1, 1));
        manager.records_mut().push(anodizer_record(4, 1));
        h.update(&mut manager, 10);

        let ids: Vec<u64> = manager.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4, 5]);
        assert_eq!(manager.next_id(), 6);
    }

    #[test]
    fn skill_memory_without_stats_spawns() {
        let mut h = Harness::new().with_creatures(&[20.0]);
        let mut spec = eager(Family::Creature {
            filter: CandidateFilter::Any,
            skill_memory: true,
        });
        spec.stats = &[];
        let mut manager = Manager::new(spec);
        manager.skill_memory.insert(EntityId(1), 50.0);
        h.update(&mut manager, 10);
        assert_eq!(manager.records().len(), 1);
        assert!(manager.records()[0].stats.is_empty());
    }

    #[test]
    fn young_creatures_are_filtered_out() {
        let mut h = Harness::new().with_creatures(&[5.0, 12.0]);
        let mut manager = Manager::new(eager(Family::Creature {
            filter: CandidateFilter::MinAge(30.0),
            skill_memory: false,
        }));
        h.activate(&mut manager, 20);
        assert!(manager.records().is_empty());
        assert_eq!(manager.last_check(), 200);

        let mut h = Harness::new().with_creatures(&[30.0]);
        let mut manager = Manager::new(*manager.spec());
        h.activate(&mut manager, 1);
        assert_eq!(manager.records().len(), 1);
    }

    #[test]
    fn identical_civilizations_abort_spawn() {
        let mut h = Harness::new().with_civilizations(&["Aldmere"]);
        let mut manager = Manager::new(eager(Family::Diplomatic));
        h.activate(&mut manager, 20);
        assert!(manager.records().is_empty());
        assert_eq!(manager.next_id(), 1);
    }

    #[test]
    fn diplomatic_records_pair_distinct_civilizations() {
        let mut h = Harness::new().with_civilizations(&["Aldmere", "Korrath", "Vey"]);
        let mut manager = Manager::new(eager(Family::Diplomatic));
        h.activate(&mut manager, 30);
        assert!(!manager.records().is_empty());
        for record in manager.records() {
            let (a, b) = record.civilizations().unwrap();
            assert_ne!(a, b);
        }
        let spawned = h.events.events_for_kind("test_eager");
        let first = &spawned[0].description;
        let named = ["Aldmere", "Korrath", "Vey"]
            .iter()
            .filter(|n| first.contains(*n))
            .count();
        assert_eq!(named, 2, "{first}");
    }

    #[test]
    fn terrain_spawns_only_on_allowed_tiles() {
        let family = Family::Terrain {
            attempts: 3,
            tiles: &[TileType::Lava],
        };
        let mut h = Harness::new();
        let mut manager = Manager::new(eager(family));
        h.activate(&mut manager, 20);
        assert!(manager.records().is_empty());

        let mut h = Harness::new();
        h.world = World::filled(4, 4, TileType::Lava);
        let mut spec = eager(family);
        spec.max_count = 10;
        let mut manager = Manager::new(spec);
        h.update(&mut manager, 10);
        // Three attempts, all on lava, all succeed.
        assert_eq!(manager.records().len(), 3);
        for record in manager.records() {
            let (x, y) = record.position().unwrap();
            assert!(x < 4 && y < 4);
        }
    }

    #[test]
    fn empty_world_spawns_nothing() {
        let family = Family::Terrain {
            attempts: 2,
            tiles: &[TileType::Grass],
        };
        let mut h = Harness::new();
        h.world = World::filled(0, 0, TileType::Grass);
        let mut manager = Manager::new(eager(family));
        h.activate(&mut manager, 5);
        assert!(manager.records().is_empty());
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    #[test]
    fn skill_memory_carries_over() {
        let mut h = Harness::new().with_creatures(&[60.0]);
        let mut manager = Manager::new(eager(Family::Creature {
            filter: CandidateFilter::Any,
            skill_memory: true,
        }));
        manager.skill_memory.insert(EntityId(1), 90.0);
        h.update(&mut manager, 10);

        let skill = manager.records()[0].stats[0];
        // Seeded from memory, then one walk step of at most 1.
        assert!((89.0..=91.0).contains(&skill));
        assert_eq!(manager.remembered_skill(EntityId(1)), Some(skill));
        assert_eq!(manager.remembered_skill(EntityId(2)), None);
    }

    #[test]
    fn fixed_stats_do_not_move() {
        let mut h = Harness::new();
        let mut manager = Manager::new(eager(creatures()));
        manager
            .records_mut()
            .push(Record::new(1, Anchor::Creature(EntityId(9)), vec![50.0, 12.0], 0));
        h.activate(&mut manager, 10);
        assert_eq!(manager.records()[0].stats[1], 12.0);
        assert!((40.0..=60.0).contains(&manager.records()[0].stats[0]));
    }

    static DECAYING: [StatSpec; 2] = [
        StatSpec::new("vitality", 10.0, 0.0).drift(Drift::Decay(3.0)),
        StatSpec::new("trust", 90.0, 0.0),
    ];

    fn idle(eviction: &'static [Eviction]) -> KindSpec {
        // Diplomatic with no civilizations in the store: never spawns.
        KindSpec {
            stats: &DECAYING,
            eviction,
            ..eager(Family::Diplomatic)
        }
    }

    fn pact(id: u64, tick: u64) -> Record {
        Record::new(
            id,
            Anchor::Civilizations {
                first: EntityId(1),
                second: EntityId(2),
            },
            vec![10.0, 90.0],
            tick,
        )
    }

    #[test]
    fn mutation_clamps_at_bounds() {
        let mut h = Harness::new();
        let mut manager = Manager::new(idle(&[Eviction::Window(1_000_000)]));
        manager.records_mut().push(pact(1, 0));
        h.activate(&mut manager, 10);
        assert_eq!(manager.records()[0].stats[0], 0.0);
    }

    // -----------------------------------------------------------------------
    // Eviction
    // -----------------------------------------------------------------------

    #[test]
    fn window_eviction_is_strict() {
        let mut h = Harness::new();
        let mut manager = Manager::new(idle(&[Eviction::Window(100)]));
        manager.records_mut().push(pact(1, 0));

        h.update(&mut manager, 100);
        assert_eq!(manager.records().len(), 1);
        h.update(&mut manager, 110);
        assert!(manager.records().is_empty());

        let evicted = h.events.events_for_kind("test_eager");
        assert!(matches!(
            evicted[0].kind,
            SimEventKind::Evicted {
                record: 1,
                cause: EvictionCause::Expired,
                ..
            }
        ));
    }

    #[test]
    fn floor_eviction_at_or_below() {
        let mut h = Harness::new();
        let mut manager = Manager::new(idle(&[Eviction::Floor { stat: 0, at: 4.0 }]));
        manager.records_mut().push(pact(1, 0));
        h.update(&mut manager, 10);
        assert_eq!(manager.records()[0].stats[0], 7.0);
        h.update(&mut manager, 20);
        assert!(manager.records().is_empty());
    }

    #[test]
    fn age_eviction_counts_activations() {
        let mut h = Harness::new();
        let mut manager = Manager::new(idle(&[Eviction::Age {
            step: 30.0,
            ceiling: 80.0,
        }]));
        manager.records_mut().push(pact(1, 0));

        // Ticks between activations do not age the record.
        for tick in 10..30 {
            h.update(&mut manager, tick);
        }
        assert_eq!(manager.records()[0].age, 60.0);
        h.update(&mut manager, 30);
        assert!(manager.records().is_empty());
    }

    #[test]
    fn survivors_keep_their_order() {
        let mut h = Harness::new();
        let mut manager = Manager::new(idle(&[Eviction::Window(100)]));
        for (id, tick) in [(1, 50), (2, 0), (3, 60), (4, 5)] {
            manager.records_mut().push(pact(id, tick));
        }
        h.update(&mut manager, 120);
        let ids: Vec<u64> = manager.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    // -----------------------------------------------------------------------
    // Stages and tile effects
    // -----------------------------------------------------------------------

    #[test]
    fn rapprochement_advances_then_concludes() {
        let mut h = Harness::new().with_civilizations(&["Aldmere"]);
        let mut manager = Manager::new(KindSpec {
            progression: Some(Progression::Rapprochement {
                stat: 1,
                dialogue: 25.0,
                warming: 50.0,
                normalized: 80.0,
            }),
            ..idle(&[Eviction::Concluded, Eviction::Window(1_000_000)])
        });
        let mut record = pact(1, 0);
        record.stage = Some(Stage::Rapprochement(RapprochementStage::Overture));
        manager.records_mut().push(record);

        h.update(&mut manager, 10);
        assert_eq!(
            manager.records()[0].stage,
            Some(Stage::Rapprochement(RapprochementStage::Dialogue))
        );
        h.update(&mut manager, 20);
        assert_eq!(
            manager.records()[0].stage,
            Some(Stage::Rapprochement(RapprochementStage::Warming))
        );
        h.update(&mut manager, 30);
        assert!(manager.records().is_empty());

        let changes = h
            .events
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::StageChanged { .. }))
            .count();
        assert_eq!(changes, 3);
    }

    static EROSION: [StatSpec; 1] =
        [StatSpec::new("wear", 95.0, 0.0).drift(Drift::Grow(50.0))];

    #[test]
    fn tile_effect_rewrites_terrain() {
        let mut h = Harness::new();
        h.world = World::filled(1, 1, TileType::Mountain);
        let mut manager = Manager::new(KindSpec {
            family: Family::Terrain {
                attempts: 1,
                tiles: &[TileType::Mountain, TileType::Hills],
            },
            max_count: 1,
            stats: &EROSION,
            tile_effect: Some(TileEffect {
                stat: 0,
                threshold: 90.0,
                reset: 10.0,
                transitions: &[
                    (TileType::Mountain, TileType::Hills),
                    (TileType::Hills, TileType::Grass),
                ],
            }),
            ..eager(creatures())
        });

        h.update(&mut manager, 10);
        assert_eq!(h.world.tile(0, 0), Some(TileType::Hills));
        assert_eq!(manager.tiles_transformed(), 1);
        assert_eq!(manager.records()[0].stats[0], 10.0);

        h.update(&mut manager, 20);
        assert_eq!(manager.records()[0].stats[0], 60.0);
        h.update(&mut manager, 30);
        assert_eq!(h.world.tile(0, 0), Some(TileType::Grass));
        assert_eq!(manager.tiles_transformed(), 2);

        h.activate(&mut manager, 10);
        assert_eq!(manager.tiles_transformed(), 2);
        let rewrites = h
            .events
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::TileTransformed { .. }))
            .count();
        assert_eq!(rewrites, 2);
    }

    #[test]
    fn system_name_is_kind_name() {
        let manager = Manager::new(CREATURE_ANODIZER);
        assert_eq!(System::name(&manager), "creature_anodizer");
    }
}
