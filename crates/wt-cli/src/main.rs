//! CLI frontend for Worldtick population simulations.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wt",
    about = "Worldtick: artisans, treaties and terrain features over a tile world",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every catalog kind over a scenario and report the populations
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "100000")]
        ticks: u64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Time step passed to every manager
        #[arg(long, default_value = "1.0")]
        dt: f64,

        /// Scenario file (default: the built-in frontier)
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Only run kinds of this family (creature, diplomatic, terrain)
        #[arg(short, long)]
        family: Option<String>,

        /// Show the event log
        #[arg(short, long)]
        verbose: bool,

        /// Print a JSON summary instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List catalog kinds, or show one kind in detail
    Kinds {
        /// Kind name, e.g. creature_anodizer
        name: Option<String>,

        /// Filter by family (creature, diplomatic, terrain)
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Write the built-in scenario as JSON
    Scenario {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            seed,
            dt,
            scenario,
            family,
            verbose,
            json,
        } => commands::simulate::run(
            ticks,
            seed,
            dt,
            scenario.as_deref(),
            family.as_deref(),
            verbose,
            json,
        ),
        Commands::Kinds { name, family } => {
            commands::kinds::run(name.as_deref(), family.as_deref())
        }
        Commands::Scenario { out } => commands::scenario::run(out.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
