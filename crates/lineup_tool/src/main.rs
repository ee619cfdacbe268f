//! Lineup Tool CLI
//!
//! Loads a roster JSON (and optionally a saved lineup), runs auto-fill or
//! validation, and writes the save payload.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use gb_core::{
    BenchRole, LineupConfig, Player, Roster, SavedLineup, TeamSession, BENCH_SIZE, STARTER_SLOTS,
};

#[derive(Parser)]
#[command(name = "lineup_tool")]
#[command(about = "Inspect, validate and auto-fill gridball lineups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Auto-fill empty starter slots and write the save payload
    Autofill {
        /// Roster JSON file (array of players)
        #[arg(long)]
        roster: PathBuf,

        /// Saved lineup JSON to hydrate from before filling
        #[arg(long)]
        lineup: Option<PathBuf>,

        /// Output path for the save payload
        #[arg(long)]
        out: PathBuf,

        /// Taxi-squad player ids to exclude
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Validate a saved lineup against a roster
    Validate {
        /// Roster JSON file (array of players)
        #[arg(long)]
        roster: PathBuf,

        /// Saved lineup JSON file
        #[arg(long)]
        lineup: PathBuf,
    },

    /// Print the board resulting from hydrating a saved lineup
    Show {
        /// Roster JSON file (array of players)
        #[arg(long)]
        roster: PathBuf,

        /// Saved lineup JSON file
        #[arg(long)]
        lineup: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Autofill { roster, lineup, out, exclude } => {
            let mut session = load_session(&roster, lineup.as_deref(), &exclude)?;
            let filled = session.auto_fill();
            println!("Auto-filled {} starter slot(s)", filled);

            let payload = session
                .save_payload()
                .context("lineup incomplete after auto-fill (not enough eligible players)")?;
            let json = serde_json::to_string_pretty(&payload)?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write {}", out.display()))?;

            println!("Save payload written to {}", out.display());
            print_board(&session);
        }

        Commands::Validate { roster, lineup } => {
            let session = load_session(&roster, Some(&lineup), &[])?;
            let board = session.board();
            println!(
                "Starters: {}/{}",
                board.starters_filled(),
                STARTER_SLOTS.len()
            );
            if board.is_complete() {
                println!("Lineup is complete and ready to save");
            } else {
                println!("Lineup is incomplete; saving would be rejected");
                std::process::exit(1);
            }
        }

        Commands::Show { roster, lineup } => {
            let session = load_session(&roster, Some(&lineup), &[])?;
            print_board(&session);
        }
    }

    Ok(())
}

fn load_session(
    roster_path: &Path,
    lineup_path: Option<&Path>,
    exclude: &[String],
) -> Result<TeamSession> {
    let roster_json = std::fs::read_to_string(roster_path)
        .with_context(|| format!("failed to read {}", roster_path.display()))?;
    let players: Vec<Player> =
        serde_json::from_str(&roster_json).context("invalid roster JSON")?;

    let taxi_squad: HashSet<String> = exclude.iter().cloned().collect();
    let roster = Roster::from_fetch(players, &taxi_squad);
    let mut session = TeamSession::new("local", roster, LineupConfig::default());

    if let Some(path) = lineup_path {
        let lineup_json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let saved: SavedLineup =
            serde_json::from_str(&lineup_json).context("invalid lineup JSON")?;
        session.hydrate(&saved);
    }

    Ok(session)
}

fn print_board(session: &TeamSession) {
    let board = session.board();

    println!("\nStarters:");
    for (idx, spec) in STARTER_SLOTS.iter().enumerate() {
        match board.starter(idx) {
            Some(p) => println!(
                "  {:<10} {} ({}, power {:.1})",
                spec.label,
                p.name,
                p.role.abbreviation(),
                p.power_score()
            ),
            None => println!("  {:<10} -", spec.label),
        }
    }

    println!("Bench:");
    for queue in BenchRole::ALL {
        let entries: Vec<String> = (0..BENCH_SIZE)
            .filter_map(|idx| board.bench_entry(queue, idx))
            .map(|p| p.name.clone())
            .collect();
        println!("  {:<10} {}", queue.label(), entries.join(", "));
    }
}
