use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use pokebot_reward::{AppError, Configuration, CoordinatorBuilder, JsonLinesSnapshotReader};
use tracing::Level;

/// Replay a JSONL stream of game-state snapshots and print one step outcome per line
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Snapshot file, one JSON object per line. Reads stdin when omitted
    snapshots: Option<PathBuf>,

    /// Configuration file layered under POKEBOT__* environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the episode step budget
    #[arg(long)]
    max_steps: Option<u32>,
}

fn init_logging() {
    // stdout carries the step outcomes, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging();

    let configuration = Configuration::load(args.config.as_deref())?;
    let mut builder = CoordinatorBuilder::new(configuration);
    if let Some(max_steps) = args.max_steps {
        builder = builder.max_steps(max_steps);
    }
    let coordinator = builder.build()?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match args.snapshots {
        Some(path) => {
            let mut reader = JsonLinesSnapshotReader::new(BufReader::new(File::open(path)?));
            coordinator.run(&mut reader, &mut writer)?;
        }
        None => {
            let mut reader = JsonLinesSnapshotReader::new(io::stdin().lock());
            coordinator.run(&mut reader, &mut writer)?;
        }
    }
    Ok(())
}
