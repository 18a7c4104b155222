//! Properties every manager keeps under `update`, whatever the kind.

use proptest::prelude::*;
use wt_core::Scenario;
use wt_simulation::{KindSpec, Manager, SimConfig, Simulation, catalog};

/// A catalog kind sped up so that a short run spawns, mutates and evicts.
fn hurried(index: usize, interval: u64) -> KindSpec {
    let kinds = catalog::all();
    let mut kind = *kinds[index % kinds.len()];
    kind.check_interval = interval;
    kind.spawn_chance = 1.0;
    kind
}

fn check(manager: &Manager, last_seen: &mut u64) {
    let spec = manager.spec();
    assert!(manager.records().len() <= spec.max_count);

    let mut previous = 0;
    for record in manager.records() {
        assert!(record.id > previous, "ids out of order in {}", spec.name);
        previous = record.id;
        assert!(record.id < manager.next_id());
        assert_eq!(record.stats.len(), spec.stats.len());
        for (value, stat) in record.stats.iter().zip(spec.stats) {
            assert!(
                (stat.min..=stat.max).contains(value),
                "{}.{} = {value}",
                spec.name,
                stat.name
            );
        }
    }
    // Ids are never reused, even after eviction.
    assert!(manager.next_id() > *last_seen);
    *last_seen = manager.next_id() - 1;
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn manager_invariants_hold(
        index in 0usize..200,
        interval in 1u64..6,
        seed in any::<u64>(),
        ticks in 50u64..400,
    ) {
        let kind = hurried(index, interval);
        let (world, entities) = Scenario::default().build().unwrap();
        let mut sim = Simulation::new(world, entities, SimConfig::default().with_seed(seed));
        sim.add_kind(&kind).unwrap();

        let mut last_seen = 0;
        for _ in 0..ticks {
            sim.tick().unwrap();
            check(sim.manager(kind.name).unwrap(), &mut last_seen);
        }
    }

    #[test]
    fn throttle_activates_on_interval(interval in 1u64..50, ticks in 1u64..200) {
        let kind = hurried(0, interval);
        let (world, entities) = Scenario::default().build().unwrap();
        let mut sim = Simulation::new(world, entities, SimConfig::default());
        sim.add_kind(&kind).unwrap();
        sim.run(ticks).unwrap();

        let manager = sim.manager(kind.name).unwrap();
        let expected = (ticks / interval) * interval;
        prop_assert_eq!(manager.last_check(), expected);
    }
}

#[test]
fn full_catalog_long_run_keeps_invariants() {
    let (world, entities) = Scenario::default().build().unwrap();
    let mut sim = Simulation::with_catalog(world, entities, SimConfig::default()).unwrap();
    let mut last_seen = vec![0; catalog::all().len()];
    for _ in 0..20 {
        sim.run(5_000).unwrap();
        for (manager, seen) in sim.managers().zip(last_seen.iter_mut()) {
            check(manager, seen);
        }
    }
    assert_eq!(sim.current_tick(), 100_000);
}
