use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tracing::info;

use wt_core::Scenario;
use wt_simulation::{Manager, SimConfig, SimEventKind, Simulation};

#[derive(Serialize)]
struct Summary<'a> {
    scenario: &'a str,
    ticks: u64,
    seed: u64,
    events: usize,
    tiles_transformed: u64,
    kinds: Vec<KindSummary>,
}

#[derive(Serialize)]
struct KindSummary {
    name: &'static str,
    family: &'static str,
    records: usize,
    capacity: usize,
    spawned: u64,
    evicted: u64,
    last_check: u64,
}

impl KindSummary {
    fn of(manager: &Manager) -> Self {
        let spec = manager.spec();
        let records = manager.records().len();
        // Ids are handed out once per spawn; everything not still alive was evicted.
        let spawned = manager.next_id() - 1;
        Self {
            name: spec.name,
            family: spec.family.label(),
            records,
            capacity: spec.max_count,
            spawned,
            evicted: spawned.saturating_sub(records as u64),
            last_check: manager.last_check(),
        }
    }
}

pub fn run(
    ticks: u64,
    seed: u64,
    dt: f64,
    scenario: Option<&Path>,
    family: Option<&str>,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    if dt.is_nan() || dt <= 0.0 {
        return Err(format!("time step must be positive, got {dt}"));
    }
    let scenario = match scenario {
        Some(path) => Scenario::load(path).map_err(|e| e.to_string())?,
        None => Scenario::default(),
    };
    let kinds = super::select_kinds(family)?;
    let (world, entities) = scenario.build().map_err(|e| e.to_string())?;

    let config = SimConfig::default()
        .with_seed(seed)
        .with_dt(dt)
        .with_max_events(2000);
    let mut sim = Simulation::new(world, entities, config);
    sim.add_kinds(kinds.iter().copied())
        .map_err(|e| format!("invalid catalog: {e}"))?;

    info!(ticks, seed, kinds = kinds.len(), "running simulation");
    sim.run(ticks)
        .map_err(|e| format!("simulation error: {e}"))?;

    let summaries: Vec<KindSummary> = sim.managers().map(KindSummary::of).collect();
    let tiles_transformed: u64 = sim.managers().map(Manager::tiles_transformed).sum();

    if json {
        let summary = Summary {
            scenario: &scenario.name,
            ticks,
            seed,
            events: sim.events().len(),
            tiles_transformed,
            kinds: summaries,
        };
        let text = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    // Header
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        scenario.name,
        format!("({ticks} ticks, seed={seed}, dt={dt})").dimmed()
    );
    println!(
        "  {} kinds, {} creatures, {} civilizations, {}x{} tiles",
        summaries.len(),
        sim.entities()
            .entities_with(&[wt_core::ComponentKind::Creature])
            .len(),
        sim.entities()
            .entities_with(&[wt_core::ComponentKind::Civilization])
            .len(),
        sim.world().width(),
        sim.world().height()
    );
    println!();

    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let tick_label = format!("[tick {:>6}]", event.tick).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {tick_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    }

    println!("  {}", "Populations".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Kind", "Family", "Records", "Spawned", "Evicted", "Last check",
    ]);

    let mut idle = 0;
    for summary in &summaries {
        if summary.spawned == 0 {
            idle += 1;
            continue;
        }
        table.add_row(vec![
            summary.name.to_string(),
            summary.family.to_string(),
            format_fill(summary.records, summary.capacity),
            summary.spawned.to_string(),
            summary.evicted.to_string(),
            summary.last_check.to_string(),
        ]);
    }

    if idle == summaries.len() {
        println!("  {}", "(nothing spawned yet)".dimmed());
    } else {
        println!("{table}");
    }
    println!();

    let total: usize = summaries.iter().map(|s| s.records).sum();
    println!("  {total} live records, {idle} idle kinds");
    if tiles_transformed > 0 {
        println!("  {tiles_transformed} tiles transformed by erosion");
    }

    Ok(())
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::Spawned { .. } => description.green(),
        SimEventKind::Evicted { .. } => description.red(),
        SimEventKind::StageChanged { .. } => description.cyan(),
        SimEventKind::TileTransformed { .. } => description.yellow(),
        SimEventKind::Custom { .. } => description.normal(),
    }
}

fn format_fill(records: usize, capacity: usize) -> String {
    let text = format!("{records}/{capacity}");
    if records >= capacity {
        text.red().to_string()
    } else {
        text
    }
}
