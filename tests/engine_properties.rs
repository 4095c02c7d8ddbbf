//! Engine behaviour over whole games: gravity, turn order, terminal phases,
//! and agreement between per-drop win detection and a full-board scan.

use connect_four::error::ContractViolation;
use connect_four::game::{Board, Cell, DropResult, Engine, Phase, Player, COLS, ROWS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Play `moves` and return the result of each drop.
fn play(engine: &mut Engine, moves: &[usize]) -> Vec<DropResult> {
    moves
        .iter()
        .map(|&col| engine.drop(col).expect("legal drop"))
        .collect()
}

fn mirrored(moves: &[usize]) -> Vec<usize> {
    moves.iter().map(|&col| COLS - 1 - col).collect()
}

#[test]
fn vertical_four_wins_on_seventh_drop() {
    let mut engine = Engine::initialize("Thuy", "Friend");
    let results = play(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);

    let (last, earlier) = results.split_last().unwrap();
    assert!(earlier.iter().all(|r| matches!(r, DropResult::Continue(_))));
    assert_eq!(*last, DropResult::Win(Player::One));
    for row in ROWS - 4..ROWS {
        assert_eq!(engine.cell_at(row, 0), Cell::Owned(Player::One));
    }
}

#[test]
fn horizontal_four_detected_on_fourth_placing_drop_not_earlier() {
    let mut engine = Engine::default();
    let moves = [0, 0, 1, 1, 2, 2];
    for result in play(&mut engine, &moves) {
        assert!(matches!(result, DropResult::Continue(_)));
    }
    assert_eq!(engine.phase(), Phase::InProgress);

    assert_eq!(engine.drop(3), Ok(DropResult::Win(Player::One)));
    assert_eq!(
        engine.winning_line(),
        Some([(ROWS - 1, 0), (ROWS - 1, 1), (ROWS - 1, 2), (ROWS - 1, 3)])
    );
}

#[test]
fn win_when_last_token_is_right_end_of_line() {
    let mut engine = Engine::default();
    let results = play(&mut engine, &[3, 3, 2, 2, 1, 1, 0]);
    assert_eq!(results.last(), Some(&DropResult::Win(Player::One)));
}

#[test]
fn win_when_last_token_fills_the_middle() {
    let mut engine = Engine::default();
    let results = play(&mut engine, &[0, 0, 1, 1, 3, 3, 2]);
    assert_eq!(results.last(), Some(&DropResult::Win(Player::One)));
}

#[test]
fn diagonal_wins_are_mirror_symmetric() {
    // Player one completes a / diagonal with its top-right token
    let moves = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];

    let mut up = Engine::default();
    let up_results = play(&mut up, &moves);
    let mut down = Engine::default();
    let down_results = play(&mut down, &mirrored(&moves));

    assert_eq!(up_results.last(), Some(&DropResult::Win(Player::One)));
    assert_eq!(up_results, down_results);
    assert_eq!(up.winning_line(), Some([(5, 0), (4, 1), (3, 2), (2, 3)]));
    assert_eq!(down.winning_line(), Some([(2, 3), (3, 4), (4, 5), (5, 6)]));
}

#[test]
fn full_column_changes_nothing() {
    let mut engine = Engine::default();
    play(&mut engine, &[5; ROWS]);
    let before = engine.state().clone();

    assert_eq!(engine.drop(5), Ok(DropResult::ColumnFull));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.current_player(), before.current_player());
}

#[test]
fn contract_violations_change_nothing() {
    let mut engine = Engine::default();
    play(&mut engine, &[2, 4]);
    let before = engine.state().clone();

    assert_eq!(
        engine.drop(COLS),
        Err(ContractViolation::InvalidColumn { column: COLS })
    );
    assert_eq!(
        engine.drop(usize::MAX),
        Err(ContractViolation::InvalidColumn { column: usize::MAX })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn full_board_without_four_is_a_tie() {
    let tie_board = Board::from_rows([
        "XXOXXOX", "OOXOOXO", "XXOXXOX", "OOXOOXO", "XXOXXOX", "OOXOOXO",
    ])
    .unwrap();
    let moves = [
        2, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 5, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4,
        4, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 5,
    ];

    let mut engine = Engine::default();
    let results = play(&mut engine, &moves);

    assert_eq!(results.last(), Some(&DropResult::Tie));
    assert_eq!(engine.state().board(), &tie_board);
    assert_eq!(engine.phase(), Phase::Tied);
}

/// Random games, including drops into full columns. After every accepted
/// drop the grid keeps gravity, the turn alternates, and the engine's verdict
/// matches a scan of the whole board.
#[test]
fn random_games_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut wins = 0;
    let mut ties = 0;

    for _ in 0..500 {
        let mut engine = Engine::default();
        loop {
            let col = rng.random_range(0..COLS);
            let mover = engine.current_player();
            let before = engine.state().clone();

            match engine.drop(col).expect("in-range column while in progress") {
                DropResult::ColumnFull => {
                    assert!(before.board().is_column_full(col));
                    assert_eq!(engine.state(), &before);
                    continue;
                }
                DropResult::Continue(next) => {
                    assert_eq!(next, mover.other());
                    assert_eq!(engine.current_player(), next);
                    assert_eq!(engine.state().board().winner_anywhere(), None);
                }
                DropResult::Win(winner) => {
                    assert_eq!(winner, mover);
                    assert_eq!(engine.current_player(), mover);
                    assert_eq!(engine.state().board().winner_anywhere(), Some(winner));
                    wins += 1;
                }
                DropResult::Tie => {
                    assert!(engine.state().board().is_full());
                    assert_eq!(engine.state().board().winner_anywhere(), None);
                    ties += 1;
                }
            }

            let board = engine.state().board();
            assert!(board.satisfies_gravity());
            assert_eq!(board.token_count(), before.board().token_count() + 1);
            let placed = engine.last_drop().unwrap();
            assert_eq!(placed.col, col);
            assert_eq!(placed.player, mover);

            if engine.phase().is_terminal() {
                let frozen = engine.state().clone();
                assert!(matches!(
                    engine.drop(col),
                    Err(ContractViolation::GameOver { .. })
                ));
                assert_eq!(engine.state(), &frozen);
                assert!(engine.open_columns().is_empty());
                break;
            }
        }
    }

    assert_eq!(wins + ties, 500);
    assert!(wins > 0);
}
