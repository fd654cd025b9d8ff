//! Rules engine for a sliding-tile merge puzzle on a rectangular grid.
//!
//! The crate owns the board, the four directional moves, the line merge
//! rule and random tile spawning. Anything that draws the board or reads
//! input sits on top of [`Board`] and only needs `dimensions`, `get`, `set`
//! and `make_move`.
//!
//! ```
//! use merge_engine::{Board, Direction};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut board = Board::new(4, 4, &mut rng).unwrap();
//! assert_eq!(board.count_empty(), 14);
//! let outcome = board.make_move(Direction::Left, &mut rng).unwrap();
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//! ```

#![deny(unsafe_code)]

pub mod engine;
pub mod error;

pub use engine::{
    Board, Coord, Direction, MoveOutcome, Spawned, Tile, Traversal, merge_line, traverse,
};
pub use error::{EngineError, Result};
