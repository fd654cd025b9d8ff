//! Engine module: the grid, directional traversal tables and the move/merge/spawn
//! operations. Public API stays small and ergonomic.
//!
//! - `Board` is the owned `rows x cols` grid with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - Traversal tables are computed per board size; nothing is global.

mod ops;
pub mod state;
mod tables;

pub use state::{Board, Coord, Direction, MoveOutcome, Spawned, Tile};
pub use tables::{Traversal, traverse};

pub use ops::{
    count_empty, is_game_over, make_move, merge_line, shift, spawn_tile, SPAWN_TWO_PROBABILITY,
};
