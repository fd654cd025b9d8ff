use rand::Rng;
use std::fmt;
use std::str::FromStr;

use super::ops;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Cell value: `0` is empty, anything else is a tile.
///
/// Tiles at or above `2^63` never merge: doubling them does not fit.
pub type Tile = u64;

/// `(row, col)` coordinate on the board.
pub type Coord = (usize, usize);

/// Smallest legal side length for either dimension.
pub(crate) const MIN_SIDE: usize = 2;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "u")]
    Up,
    #[serde(alias = "d")]
    Down,
    #[serde(alias = "l")]
    Left,
    #[serde(alias = "r")]
    Right,
}

impl Direction {
    /// All four directions, in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Numeric code used by presentation layers (1 = up .. 4 = right).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Down),
            3 => Ok(Direction::Left),
            4 => Ok(Direction::Right),
            other => Err(EngineError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a spawned tile landed and what it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// What a call to [`Board::make_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any cell value changed.
    pub changed: bool,
    /// The tile added after a changing move, if any.
    pub spawned: Option<Spawned>,
}

/// A `rows x cols` grid of tiles stored row-major.
///
/// Dimensions are fixed at construction. The board is a plain owned value:
/// callers pass it (and their RNG) into every operation explicitly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Tile>,
}

impl Board {
    /// Construct a board and place its two starting tiles.
    ///
    /// ```
    /// use merge_engine::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::new(4, 4, &mut rng).unwrap();
    /// assert_eq!(b.count_empty(), 14);
    /// assert!(Board::new(1, 4, &mut rng).is_err());
    /// ```
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let mut board = Self::empty(rows, cols)?;
        board.reset(rng)?;
        Ok(board)
    }

    /// Construct a board with every cell empty.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// Construct a board from explicit rows, top to bottom.
    ///
    /// ```
    /// use merge_engine::Board;
    /// let b = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(b.get(1, 1), Ok(4));
    /// assert!(Board::from_rows(vec![vec![2, 0], vec![0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(EngineError::InvalidDimensions {
                rows: height,
                cols: ragged.len(),
            });
        }
        let mut board = Self::empty(height, width)?;
        board.cells = rows.into_iter().flatten().collect();
        Ok(board)
    }

    /// `(rows, cols)`, fixed for the life of the board.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Tile> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at `(row, col)`. The value is not validated.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Clear the grid and place two fresh tiles.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.cells.fill(0);
        let first = ops::spawn_tile(self, rng)?;
        let second = ops::spawn_tile(self, rng)?;
        log::debug!(
            "reset {}x{} board: {:?} {:?}",
            self.rows,
            self.cols,
            first,
            second
        );
        Ok(())
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use merge_engine::{Board, Direction};
    /// let b = Board::from_rows(vec![vec![2, 2], vec![0, 4]]).unwrap();
    /// let left = b.shifted(Direction::Left);
    /// assert_eq!(left, Board::from_rows(vec![vec![4, 0], vec![4, 0]]).unwrap());
    /// ```
    #[inline]
    pub fn shifted(&self, dir: Direction) -> Self {
        ops::shift(self, dir)
    }

    /// Slide and merge every line toward `dir`, then spawn one tile if the
    /// grid changed and still has an empty cell.
    ///
    /// ```
    /// use merge_engine::{Board, Direction};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut b = Board::from_rows(vec![vec![2, 0], vec![0, 0]]).unwrap();
    /// let outcome = b.make_move(Direction::Right, &mut rng).unwrap();
    /// assert!(outcome.changed);
    /// assert_eq!(b.get(0, 1), Ok(2));
    /// assert_eq!(b.count_empty(), 2);
    /// ```
    #[inline]
    pub fn make_move<R: Rng + ?Sized>(
        &mut self,
        dir: Direction,
        rng: &mut R,
    ) -> Result<MoveOutcome> {
        ops::make_move(self, dir, rng)
    }

    /// Insert a random 2 (90%) or 4 (10%) tile into a random empty cell.
    #[inline]
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Spawned> {
        ops::spawn_tile(self, rng)
    }

    /// True if moving in `dir` would change the grid.
    #[inline]
    pub fn can_move(&self, dir: Direction) -> bool {
        self.shifted(dir) != *self
    }

    /// Return true if no legal moves remain.
    ///
    /// ```
    /// use merge_engine::Board;
    /// let full = Board::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
    /// assert!(full.is_game_over());
    /// ```
    #[inline]
    pub fn is_game_over(&self) -> bool {
        ops::is_game_over(self)
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        ops::count_empty(self)
    }

    /// Return the highest tile value present, 0 on an empty board.
    #[inline]
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Cell values in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    #[inline]
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Coordinates of every empty cell, row-major.
    pub(crate) fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{} ", self.rows, self.cols)?;
        f.debug_list().entries(self.rows_iter()).finish()?;
        f.write_str(")")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = ops::cell_width(self.highest_tile());
        for row in self.rows_iter() {
            let line: Vec<String> = row.iter().map(|&v| ops::format_val(v, width)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
