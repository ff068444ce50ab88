//! banpick: ban/pick assistant command line interface
//!
//! Loads a roster matchup table and recommends a ban and a lineup for the
//! selected opponent decks.

use anyhow::{Context, Result};
use banpick::batch::{clean_selection, process_selections, read_selection_file, render_batch};
use banpick::report::{render_roster, Report};
use banpick::session::{RosterStore, Session};
use clap::Parser;
use log::{debug, error, info};
use std::io;
use std::path::{Path, PathBuf};

/// Ban/pick assistant
///
/// Recommends which opponent deck to ban and which four players to field,
/// based on each player's matchup ratings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Roster CSV: name, deck, then one rating column per opponent deck
    #[arg(short, long, value_name = "FILE", default_value = "data.csv")]
    roster: PathBuf,

    /// Opponent deck in play (repeat once per slot; duplicates count twice)
    #[arg(short, long = "opponent", value_name = "DECK")]
    opponents: Vec<String>,

    /// Evaluate every selection in FILE (one comma-separated line each)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["opponents", "interactive"])]
    batch: Option<PathBuf>,

    /// Start an interactive prompt on stdin
    #[arg(long, default_value_t = false, conflicts_with = "opponents")]
    interactive: bool,

    /// List the roster and the opponent decks it rates, then exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Colour rating cells with ANSI escapes
    #[arg(long, default_value_t = false)]
    color: bool,

    /// Number of worker threads for batch evaluation (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 1, value_name = "N")]
    threads: usize,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity level
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    debug!("banpick v{}", env!("CARGO_PKG_VERSION"));
    debug!("Roster: {:?}", args.roster);
    debug!("Opponents: {:?}", args.opponents);
    debug!("Threads: {}", args.threads);

    if !args.roster.exists() {
        error!("Roster file not found: {:?}", args.roster);
        anyhow::bail!("Roster file not found: {:?}", args.roster);
    }

    let store = RosterStore::open(&args.roster).context("Failed to load roster")?;

    if args.list {
        print!("{}", render_roster(&store.snapshot()));
        return Ok(());
    }

    if args.interactive {
        let stdin = io::stdin();
        Session::new(&store, args.json, args.color)
            .run(stdin.lock(), io::stdout().lock())
            .context("Interactive session failed")?;
        return Ok(());
    }

    if let Some(batch_path) = &args.batch {
        if !batch_path.exists() {
            error!("Selection file not found: {:?}", batch_path);
            anyhow::bail!("Selection file not found: {:?}", batch_path);
        }
        return run_batch(&store, batch_path, &args);
    }

    let selection = clean_selection(&args.opponents);
    if selection.is_empty() {
        info!("No opponents selected; pass --opponent DECK once per slot (see --list)");
        return Ok(());
    }

    let roster = store.snapshot();
    let report = Report::build(&roster, &selection).context("Failed to build recommendation")?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render(args.color));
    }

    Ok(())
}

fn run_batch(store: &RosterStore, batch_path: &Path, args: &Args) -> Result<()> {
    let selections = read_selection_file(batch_path).context("Failed to read selection file")?;
    let roster = store.snapshot();

    info!("Evaluating {} selections...", selections.len());
    let (entries, stats) = process_selections(&roster, &selections, args.threads)
        .context("Failed to process selections")?;

    if args.json {
        let output = serde_json::json!({ "entries": entries, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_batch(&entries, args.color));
    }

    info!(
        "Processed {} selections, {} with a lineup",
        stats.selections_processed, stats.recommendations
    );

    if stats.errors > 0 {
        error!("{} selections had errors", stats.errors);
    }

    Ok(())
}
