//! Property tests for the move/merge/spawn rules over generated boards.
//!
//! Invariants covered:
//! - A slide never creates value and never adds tiles.
//! - Right/Down are mirror images of Left/Up.
//! - A move that changes nothing spawns nothing; a changing move adds one 2 or 4.
//! - Merged lines keep their length with all zeros trailing.
use merge_engine::{Board, Direction, Tile, merge_line};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn tile() -> impl Strategy<Value = Tile> {
    prop::sample::select(vec![0, 0, 0, 2, 2, 4, 4, 8, 16, 32])
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (2usize..=6, 2usize..=6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(tile(), rows * cols).prop_map(move |cells| {
            let rows: Vec<Vec<Tile>> = cells.chunks(cols).map(<[Tile]>::to_vec).collect();
            Board::from_rows(rows).expect("generated dimensions are valid")
        })
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn non_zero(board: &Board) -> usize {
    board.cells().iter().filter(|&&v| v != 0).count()
}

fn total(board: &Board) -> u64 {
    board.cells().iter().map(|&v| u64::from(v)).sum()
}

fn mirror(board: &Board) -> Board {
    Board::from_rows(
        board
            .rows_iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect(),
    )
    .unwrap()
}

fn transpose(board: &Board) -> Board {
    let (rows, cols) = board.dimensions();
    Board::from_rows(
        (0..cols)
            .map(|c| (0..rows).map(|r| board.get(r, c).unwrap()).collect())
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn shift_preserves_value_and_never_adds_tiles(board in board_strategy(), dir in direction()) {
        let next = board.shifted(dir);
        prop_assert_eq!(next.dimensions(), board.dimensions());
        prop_assert_eq!(total(&next), total(&board));
        prop_assert!(non_zero(&next) <= non_zero(&board));
    }

    #[test]
    fn opposite_directions_are_mirrors(board in board_strategy()) {
        prop_assert_eq!(
            board.shifted(Direction::Right),
            mirror(&mirror(&board).shifted(Direction::Left))
        );
        prop_assert_eq!(
            board.shifted(Direction::Up),
            transpose(&transpose(&board).shifted(Direction::Left))
        );
        prop_assert_eq!(
            board.shifted(Direction::Down),
            transpose(&transpose(&board).shifted(Direction::Right))
        );
    }

    #[test]
    fn move_spawns_only_after_a_change(board in board_strategy(), dir in direction(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let slid = board.shifted(dir);
        let mut game = board.clone();
        let outcome = game.make_move(dir, &mut rng).unwrap();

        if slid == board {
            prop_assert!(!outcome.changed);
            prop_assert_eq!(outcome.spawned, None);
            prop_assert_eq!(game.count_empty(), board.count_empty());
            prop_assert_eq!(&game, &board);
        } else {
            prop_assert!(outcome.changed);
            let spawned = outcome.spawned.expect("changing move leaves an empty cell");
            prop_assert!(spawned.value == 2 || spawned.value == 4);
            prop_assert_eq!(slid.get(spawned.row, spawned.col).unwrap(), 0);
            prop_assert_eq!(non_zero(&game), non_zero(&slid) + 1);

            let mut expected = slid.clone();
            expected.set(spawned.row, spawned.col, spawned.value).unwrap();
            prop_assert_eq!(game, expected);
        }
    }

    #[test]
    fn merged_line_keeps_length_and_trails_zeros(line in prop::collection::vec(tile(), 0..10)) {
        let merged = merge_line(&line);
        prop_assert_eq!(merged.len(), line.len());
        let first_zero = merged.iter().position(|&v| v == 0).unwrap_or(merged.len());
        prop_assert!(merged[first_zero..].iter().all(|&v| v == 0));
        prop_assert_eq!(merged.iter().sum::<Tile>(), line.iter().sum::<Tile>());
    }

    #[test]
    fn merge_without_pairs_only_compacts(line in prop::collection::vec(tile(), 0..6)) {
        let tiles: Vec<Tile> = line.iter().copied().filter(|&v| v != 0).collect();
        prop_assume!(tiles.windows(2).all(|w| w[0] != w[1]));
        let mut expected = tiles.clone();
        expected.resize(line.len(), 0);
        prop_assert_eq!(merge_line(&line), expected);
    }

    #[test]
    fn reset_yields_two_small_tiles(rows in 2usize..=7, cols in 2usize..=7, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::new(rows, cols, &mut rng).unwrap();
        let tiles: Vec<Tile> = board.cells().iter().copied().filter(|&v| v != 0).collect();
        prop_assert_eq!(tiles.len(), 2);
        prop_assert!(tiles.iter().all(|&v| v == 2 || v == 4));
    }
}

#[test]
fn full_board_spawn_fails() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut board = Board::from_rows(vec![vec![2, 4, 8], vec![16, 32, 64]]).unwrap();
    assert_eq!(
        board.spawn_tile(&mut rng),
        Err(merge_engine::EngineError::NoEmptyCell)
    );
}
