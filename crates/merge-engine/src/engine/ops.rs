use rand::Rng;

use super::state::{Board, Coord, Direction, MoveOutcome, Spawned, Tile};
use super::tables::Traversal;
use crate::error::{EngineError, Result};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(board: &Board, direction: Direction) -> Board {
    let mut next = board.clone();
    shift_in_place(&mut next, direction);
    next
}

/// Perform a move then insert a random tile if the move changed the board.
pub fn make_move<R: Rng + ?Sized>(
    board: &mut Board,
    direction: Direction,
    rng: &mut R,
) -> Result<MoveOutcome> {
    let before = board.cells.clone();
    shift_in_place(board, direction);

    let changed = board.cells != before;
    let spawned = if changed && count_empty(board) > 0 {
        Some(spawn_tile(board, rng)?)
    } else {
        None
    };
    log::debug!("move {direction}: changed={changed} spawned={spawned:?}");
    Ok(MoveOutcome { changed, spawned })
}

/// Insert a random 2 (90%) or 4 (10%) tile into a uniformly chosen empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<Spawned> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(EngineError::NoEmptyCell);
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = generate_random_tile(rng);
    board.set(row, col, value)?;
    log::trace!("spawned {value} at ({row}, {col})");
    Ok(Spawned { row, col, value })
}

/// True if no move in any direction changes the board.
pub fn is_game_over(board: &Board) -> bool {
    Direction::ALL.into_iter().all(|dir| !board.can_move(dir))
}

/// Count the number of zero cells.
pub fn count_empty(board: &Board) -> usize {
    board.cells.iter().filter(|&&v| v == 0).count()
}

/// Merge one line toward its first element.
///
/// Zeros are compacted to the end, each adjacent equal pair merges once in a
/// single left-to-right pass, and the gaps are compacted again. A pair whose
/// double would overflow [`Tile`] is left as two tiles.
///
/// ```
/// use merge_engine::merge_line;
/// assert_eq!(merge_line(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
/// assert_eq!(merge_line(&[0, 2, 0, 2]), vec![4, 0, 0, 0]);
/// ```
pub fn merge_line(line: &[Tile]) -> Vec<Tile> {
    let mut result = line.to_vec();
    compact(&mut result);
    for i in 1..result.len() {
        if result[i] == 0 || result[i] != result[i - 1] {
            continue;
        }
        if let Some(doubled) = result[i - 1].checked_mul(2) {
            result[i - 1] = doubled;
            result[i] = 0;
        }
    }
    compact(&mut result);
    result
}

// Stable partition: non-zero values keep their order, zeros trail.
fn compact(line: &mut [Tile]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] != 0 {
            line[write] = line[read];
            write += 1;
        }
    }
    line[write..].fill(0);
}

fn shift_in_place(board: &mut Board, direction: Direction) {
    let (rows, cols) = board.dimensions();
    let table = Traversal::new(direction, rows, cols);

    // Every line is read and merged before any cell is written back.
    let merged: Vec<(Vec<Coord>, Vec<Tile>)> = table
        .lines()
        .map(|coords| {
            let line: Vec<Tile> = coords
                .iter()
                .map(|&(row, col)| board.cells[row * cols + col])
                .collect();
            let merged = merge_line(&line);
            (coords, merged)
        })
        .collect();

    for (coords, values) in merged {
        for ((row, col), value) in coords.into_iter().zip(values) {
            board.cells[row * cols + col] = value;
        }
    }
}

/// Characters needed to print the widest cell (at least one).
pub(crate) fn cell_width(highest: Tile) -> usize {
    highest.to_string().len().max(1)
}

pub(crate) fn format_val(val: Tile, width: usize) -> String {
    match val {
        0 => format!("{:>width$}", "."),
        x => format!("{x:>width$}"),
    }
}

pub(crate) fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen::<f64>() < SPAWN_TWO_PROBABILITY { 2 } else { 4 }
}
