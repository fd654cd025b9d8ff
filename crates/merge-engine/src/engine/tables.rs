use super::state::{Coord, Direction};

/// Per-direction traversal tables for a board of a given size.
///
/// A move reads every row (for `Left`/`Right`) or column (for `Up`/`Down`)
/// as a line, starting on the edge tiles travel toward and stepping away
/// from it. Each line therefore lists its leading cell first, which is what
/// lets a single merge rule serve all four directions.
///
/// Layout:
/// - `offset`: `(drow, dcol)` added once per step.
/// - `starts`: one start cell per line, on the leading edge.
/// - `steps`: cells per line (`rows` for vertical moves, `cols` otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub offset: (isize, isize),
    pub starts: Vec<Coord>,
    pub steps: usize,
}

impl Direction {
    /// Step applied while walking a line away from the leading edge.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }
}

impl Traversal {
    /// Build the table for `direction` on a `rows x cols` grid.
    pub fn new(direction: Direction, rows: usize, cols: usize) -> Self {
        let last_row = rows.saturating_sub(1);
        let last_col = cols.saturating_sub(1);
        let (starts, steps): (Vec<Coord>, usize) = match direction {
            Direction::Up => ((0..cols).map(|col| (0, col)).collect(), rows),
            Direction::Down => ((0..cols).map(|col| (last_row, col)).collect(), rows),
            Direction::Left => ((0..rows).map(|row| (row, 0)).collect(), cols),
            Direction::Right => ((0..rows).map(|row| (row, last_col)).collect(), cols),
        };
        Self {
            offset: direction.offset(),
            starts,
            steps,
        }
    }

    /// Coordinates of every line, each ordered from the leading edge.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Coord>> + '_ {
        self.starts
            .iter()
            .map(move |&start| traverse(start, self.offset, self.steps))
    }
}

/// Walk `steps` cells from `start`, adding `offset` each step.
///
/// The walk stops early if it would step below row or column 0; callers
/// pass starts on an edge so a full in-range line comes back.
///
/// ```
/// use merge_engine::traverse;
/// assert_eq!(traverse((3, 1), (-1, 0), 4), vec![(3, 1), (2, 1), (1, 1), (0, 1)]);
/// ```
pub fn traverse(start: Coord, offset: (isize, isize), steps: usize) -> Vec<Coord> {
    (0..steps)
        .map_while(|step| {
            let step = step as isize;
            let row = start.0.checked_add_signed(step * offset.0)?;
            let col = start.1.checked_add_signed(step * offset.1)?;
            Some((row, col))
        })
        .collect()
}
