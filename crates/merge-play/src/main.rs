use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use merge_engine::Direction;
use merge_play::{Config, Session};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play a seeded sliding-tile merge session and print the final board"
)]
struct Cli {
    /// Optional TOML config ([board] rows/cols, [session] seed/max_moves/script)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board height (overrides config)
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Board width (overrides config)
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// RNG seed (overrides config)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Maximum number of requested moves (overrides config)
    #[arg(long, value_name = "N")]
    max_moves: Option<usize>,

    /// Comma-separated directions, e.g. "l,u,right" (overrides config script)
    #[arg(long, value_name = "DIRS", value_delimiter = ',')]
    moves: Vec<Direction>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Using configuration file: {}", path.display());
            Config::from_toml(path)?
        }
        None => Config::default(),
    };
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(seed) = cli.seed {
        config.session.seed = seed;
    }
    if let Some(max_moves) = cli.max_moves {
        config.session.max_moves = max_moves;
    }
    if !cli.moves.is_empty() {
        config.session.script = cli.moves;
    }

    let session = Session::new(&config.board, config.session)?;
    info!("Starting board:\n{}", session.board);
    let summary = session.run()?;

    if summary.game_over {
        warn!("No move changes the board; game over after {} moves", summary.moves);
    }
    println!("{}", summary.final_board);
    info!(
        "Completed session: {} moves, {} effective, {} spawned, highest tile {}",
        summary.moves, summary.effective_moves, summary.spawned, summary.highest_tile
    );
    Ok(())
}
