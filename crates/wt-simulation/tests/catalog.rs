//! Tests for the built-in scenario catalog.

use std::collections::HashSet;

use wt_simulation::catalog;
use wt_simulation::{Drift, Eviction, Family, Progression};

#[test]
fn every_kind_validates() {
    for kind in catalog::all() {
        if let Err(e) = kind.validate() {
            panic!("{e}");
        }
    }
}

#[test]
fn kind_names_are_unique() {
    let mut seen = HashSet::new();
    for kind in catalog::all() {
        assert!(seen.insert(kind.name), "duplicate kind {}", kind.name);
    }
    assert!(catalog::all().len() >= 150);
}

#[test]
fn cadence_stays_in_tuned_ranges() {
    for kind in catalog::all() {
        assert!(
            (1500..=3325).contains(&kind.check_interval),
            "{} interval {}",
            kind.name,
            kind.check_interval
        );
        assert!(
            (0.0007..=0.004).contains(&kind.spawn_chance),
            "{} chance {}",
            kind.name,
            kind.spawn_chance
        );
        let drifting = kind.stats.iter().filter(|s| s.drift != Drift::Fixed).count();
        assert!((2..=4).contains(&drifting), "{} drifts {drifting} stats", kind.name);
        for rule in kind.eviction {
            match *rule {
                Eviction::Window(w) => assert!((50_000..=98_000).contains(&w), "{}", kind.name),
                Eviction::Age { ceiling, .. } => {
                    assert!((80.0..=98.0).contains(&ceiling), "{}", kind.name)
                }
                Eviction::Floor { .. } | Eviction::Concluded => {}
            }
        }
    }
}

#[test]
fn every_kind_has_a_time_window() {
    for kind in catalog::all() {
        assert!(
            kind.eviction.iter().any(|r| matches!(r, Eviction::Window(_))),
            "{} never expires",
            kind.name
        );
    }
}

#[test]
fn anodizer_layout() {
    let kind = catalog::find("creature_anodizer").unwrap();
    let names: Vec<&str> = kind.stats.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "anodizing_skill",
            "electrolyte_control",
            "voltage_regulation",
            "coating_uniformity"
        ]
    );
}

#[test]
fn staged_kinds() {
    let staged: Vec<&str> = catalog::all()
        .iter()
        .filter(|k| k.progression.is_some())
        .map(|k| k.name)
        .collect();
    assert_eq!(
        staged,
        ["diplomatic_rapprochement", "diplomatic_intercession"]
    );
    let rapprochement = catalog::find("diplomatic_rapprochement").unwrap();
    assert!(matches!(
        rapprochement.progression,
        Some(Progression::Rapprochement { .. })
    ));
}

#[test]
fn rune_crafting_remembers_skill() {
    let kind = catalog::find("creature_rune_crafter").unwrap();
    assert!(matches!(
        kind.family,
        Family::Creature {
            skill_memory: true,
            ..
        }
    ));
}

#[test]
fn only_erosion_rewrites_tiles() {
    let rewriting: Vec<&str> = catalog::all()
        .iter()
        .filter(|k| k.tile_effect.is_some())
        .map(|k| k.name)
        .collect();
    assert_eq!(rewriting, ["world_erosion"]);
}
