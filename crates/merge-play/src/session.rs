use anyhow::{Context, Result};
use log::{debug, info};
use merge_engine::{Board, Direction, Tile};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BoardConfig, SessionConfig};

/// Drives a single board by feeding it directions, the way a presentation
/// layer would, until the move budget or the script runs out or no move
/// can change the grid.
pub struct Session {
    pub board: Board,
    pub config: SessionConfig,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    /// Directions requested.
    pub moves: usize,
    /// Requests that changed the board.
    pub effective_moves: usize,
    pub spawned: usize,
    pub highest_tile: Tile,
    pub game_over: bool,
    pub final_board: Board,
}

impl Session {
    pub fn new(board_cfg: &BoardConfig, config: SessionConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let board = Board::new(board_cfg.rows, board_cfg.cols, &mut rng).with_context(|| {
            format!("failed to create {}x{} board", board_cfg.rows, board_cfg.cols)
        })?;
        Ok(Self { board, config, rng })
    }

    /// Start from an existing position instead of a fresh reset.
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { board, config, rng }
    }

    /// Run the session loop to completion and return the result.
    pub fn run(mut self) -> Result<SessionSummary> {
        let mut moves = 0;
        let mut effective_moves = 0;
        let mut spawned = 0;

        let script = std::mem::take(&mut self.config.script);
        let directions: Box<dyn Iterator<Item = Direction>> = if script.is_empty() {
            Box::new(Direction::ALL.into_iter().cycle())
        } else {
            Box::new(script.into_iter())
        };

        for dir in directions.take(self.config.max_moves) {
            if self.board.is_game_over() {
                break;
            }
            let outcome = self
                .board
                .make_move(dir, &mut self.rng)
                .with_context(|| format!("move {dir} failed after {moves} moves"))?;
            moves += 1;
            if outcome.changed {
                effective_moves += 1;
                debug!("move {moves} ({dir}) changed the board:\n{}", self.board);
            }
            if outcome.spawned.is_some() {
                spawned += 1;
            }
        }

        let summary = SessionSummary {
            seed: self.config.seed,
            moves,
            effective_moves,
            spawned,
            highest_tile: self.board.highest_tile(),
            game_over: self.board.is_game_over(),
            final_board: self.board,
        };
        info!(
            "session seed={} finished: {} moves ({} effective), highest tile {}",
            summary.seed, summary.moves, summary.effective_moves, summary.highest_tile
        );
        Ok(summary)
    }
}
