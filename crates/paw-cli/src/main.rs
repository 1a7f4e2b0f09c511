//! CLI frontend for the Pawhouse reality-show simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pawhouse",
    about = "Pawhouse — a deterministic pet reality-show simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full season from a roster file
    Run {
        /// Path to the roster JSON file (an array of pet records)
        roster: PathBuf,

        /// RNG seed, number or text. Omitted: wall-clock time is used and
        /// echoed, so the run can still be replayed
        #[arg(short, long)]
        seed: Option<String>,

        /// Cap the number of retained narration lines
        #[arg(long)]
        max_logs: Option<usize>,

        /// Print the full outcome as JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },

    /// Validate a roster file and show the attribute table
    Roster {
        /// Path to the roster JSON file
        roster: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            roster,
            seed,
            max_logs,
            json,
        } => commands::run::run(&roster, seed.as_deref(), max_logs, json),
        Commands::Roster { roster } => commands::roster::run(&roster),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
