use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tales_core::journal::SessionJournal;
use tales_core::replay::replay_session;
use tales_core::report::append_report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the session journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Append the session result block to this store after replaying
    #[arg(short, long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: SessionJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let (game, summary) = replay_session(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    println!("Steps: {}", summary.steps);
    println!("Outcome: {:?}", summary.outcome);
    println!("End Reason: {}", summary.end_reason.as_str());
    println!("Snapshot Hash: {}", summary.final_snapshot_hash);

    if let Some(path) = args.report {
        append_report(&path, game.player(), game.world(), summary.end_reason)
            .with_context(|| format!("Failed to append result block to {}", path.display()))?;
        println!("Result block appended to {}", path.display());
    }

    Ok(())
}
