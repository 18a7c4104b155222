use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use strsim::jaro_winkler;

use wt_simulation::{CandidateFilter, Drift, Eviction, Family, KindSpec, Progression, catalog};

pub fn run(name: Option<&str>, family: Option<&str>) -> Result<(), String> {
    match name {
        Some(name) => show(name),
        None => list(family),
    }
}

fn list(family: Option<&str>) -> Result<(), String> {
    let kinds = super::select_kinds(family)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Family", "Interval", "Chance", "Capacity", "Stats"]);

    for kind in &kinds {
        let stats: Vec<&str> = kind.stats.iter().map(|s| s.name).collect();
        table.add_row(vec![
            kind.name.to_string(),
            kind.family.label().to_string(),
            kind.check_interval.to_string(),
            kind.spawn_chance.to_string(),
            kind.max_count.to_string(),
            stats.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} kinds", kinds.len());
    Ok(())
}

fn show(name: &str) -> Result<(), String> {
    let kind = catalog::get(name).map_err(|e| match suggest(name) {
        Some(close) => format!("{e} (did you mean \"{close}\"?)"),
        None => e.to_string(),
    })?;

    println!("  {} [{}]", kind.name.bold(), kind.label.dimmed());
    println!();
    println!("  family:     {}", describe_family(&kind.family));
    println!("  interval:   every {} ticks", kind.check_interval);
    println!("  chance:     {}", kind.spawn_chance);
    println!("  capacity:   {}", kind.max_count);
    for rule in kind.eviction {
        println!("  evicted:    {}", describe_eviction(kind, rule));
    }
    if let Some(progression) = kind.progression {
        println!("  stages:     {}", describe_progression(kind, &progression));
    }
    if let Some(effect) = kind.tile_effect {
        let transitions: Vec<String> = effect
            .transitions
            .iter()
            .map(|(from, into)| format!("{from} -> {into}"))
            .collect();
        println!(
            "  rewrites:   {} at {} {} (reset to {})",
            transitions.join(", "),
            stat_name(kind, effect.stat),
            effect.threshold,
            effect.reset
        );
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Spawn", "Range", "Drift"]);
    for stat in kind.stats {
        table.add_row(vec![
            stat.name.to_string(),
            format!("{} + {}", stat.base, stat.spread),
            format!("{}..={}", stat.min, stat.max),
            describe_drift(&stat.drift),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// The closest catalog name, if any is reasonably close.
fn suggest(name: &str) -> Option<&'static str> {
    catalog::all()
        .iter()
        .map(|k| (k.name, jaro_winkler(name, k.name)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

fn stat_name(kind: &KindSpec, index: usize) -> &'static str {
    kind.stats.get(index).map_or("?", |s| s.name)
}

fn describe_family(family: &Family) -> String {
    match family {
        Family::Creature {
            filter,
            skill_memory,
        } => {
            let mut text = "creature".to_string();
            if let CandidateFilter::MinAge(age) = filter {
                text.push_str(&format!(", aged {age}+"));
            }
            if *skill_memory {
                text.push_str(", remembers skill");
            }
            text
        }
        Family::Diplomatic => "diplomatic (two distinct civilizations)".to_string(),
        Family::Terrain { attempts, tiles } => {
            let tiles: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
            format!("terrain on {} ({attempts} tries)", tiles.join(", "))
        }
    }
}

fn describe_eviction(kind: &KindSpec, rule: &Eviction) -> String {
    match *rule {
        Eviction::Floor { stat, at } => format!("{} <= {at}", stat_name(kind, stat)),
        Eviction::Window(window) => format!("after {window} ticks"),
        Eviction::Age { step, ceiling } => format!("age over {ceiling} (+{step} per check)"),
        Eviction::Concluded => "when concluded".to_string(),
    }
}

fn describe_progression(kind: &KindSpec, progression: &Progression) -> String {
    match *progression {
        Progression::Rapprochement {
            stat,
            dialogue,
            warming,
            normalized,
        } => format!(
            "overture -> dialogue ({name} {dialogue}) -> warming ({name} {warming}) -> normalized ({name} {normalized})",
            name = stat_name(kind, stat)
        ),
        Progression::Intercession {
            stat,
            success,
            rejection,
            patience,
        } => format!(
            "active -> successful ({name} {success}) | rejected ({name} {rejection}) | withdrawn (after {patience} ticks)",
            name = stat_name(kind, stat)
        ),
    }
}

fn describe_drift(drift: &Drift) -> String {
    match *drift {
        Drift::Fixed => "fixed".to_string(),
        Drift::Walk(step) => format!("walk ±{}", step / 2.0),
        Drift::Biased { step, bias } => format!("walk {step} biased {bias}"),
        Drift::Grow(amount) => format!("+{amount}"),
        Drift::Decay(amount) => format!("-{amount}"),
        Drift::Oscillate { amplitude, period } => format!("swing ±{amplitude} over {period}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_near_misses() {
        assert_eq!(suggest("creature_anodiser"), Some("creature_anodizer"));
        assert_eq!(suggest("world_geysr"), Some("world_geyser"));
        assert_eq!(suggest("zzzz"), None);
    }

    #[test]
    fn drift_descriptions() {
        assert_eq!(describe_drift(&Drift::Walk(3.0)), "walk ±1.5");
        assert_eq!(describe_drift(&Drift::Fixed), "fixed");
    }
}
