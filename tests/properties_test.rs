//! Property tests for the line tally and move validation.

use proptest::prelude::*;
use tally_tictactoe::{
    Cell, EngineConfig, EngineInvariants, GameEngine, InvariantSet, Line, LineTally, Marks, Phase,
    Player, Square, Weights,
};

/// Every assignment of {empty, First, Second} to the three cells of a line.
fn line_contents() -> impl Iterator<Item = [Option<Player>; 3]> {
    let options = [None, Some(Player::First), Some(Player::Second)];
    options.into_iter().flat_map(move |a| {
        options
            .into_iter()
            .flat_map(move |b| options.into_iter().map(move |c| [a, b, c]))
    })
}

const LINES: [Line; 8] = [
    Line::TopRow,
    Line::MiddleRow,
    Line::BottomRow,
    Line::LeftColumn,
    Line::MiddleColumn,
    Line::RightColumn,
    Line::MainDiagonal,
    Line::AntiDiagonal,
];

/// Empty cell off `line` whose mark would complete no line on the board.
fn spare_cell(engine: &GameEngine, line: Line) -> Cell {
    Cell::ALL
        .into_iter()
        .filter(|cell| !line.cells().contains(cell) && engine.board().is_empty(*cell))
        .find(|cell| {
            let mut trial = engine.clone();
            trial.apply_move(cell.index()).is_ok()
                && LINES.iter().all(|l| trial.board().line_owner(*l).is_none())
        })
        .expect("a spare cell off the line")
}

/// Marks `content` onto `line` with alternating turns, spending spare
/// moves elsewhere whenever the player to move owns nothing left to place.
fn place_line(engine: &mut GameEngine, line: Line, content: [Option<Player>; 3]) {
    let mut pending: Vec<(Cell, Player)> = line
        .cells()
        .into_iter()
        .zip(content)
        .filter_map(|(cell, owner)| owner.map(|player| (cell, player)))
        .collect();

    while !pending.is_empty() {
        let mover = engine.current_player();
        let cell = match pending.iter().position(|(_, player)| *player == mover) {
            Some(i) => pending.remove(i).0,
            None => spare_cell(engine, line),
        };
        engine.apply_move(cell.index()).expect("empty cell");
        engine.advance_turn();
    }
}

fn assert_check_win_exact(weights: Weights) {
    let config = EngineConfig::new(weights, Marks::default()).expect("validated weights");
    for line in LINES {
        for content in line_contents() {
            let mut engine = GameEngine::with_config(&config).expect("validated config");
            place_line(&mut engine, line, content);
            let before = engine.clone();

            let expected = match content {
                [Some(a), Some(b), Some(c)] if a == b && b == c => Some((a, line)),
                _ => None,
            };
            assert_eq!(
                engine.check_win(),
                expected,
                "{line} with {content:?} under {weights:?}"
            );
            match expected {
                Some((winner, _)) => assert_eq!(engine.phase(), Phase::Won(winner)),
                None => {
                    assert_eq!(engine, before);
                    assert!(!engine.phase().is_over());
                }
            }
        }
    }
}

#[test]
fn test_default_weights_never_report_false_win() {
    assert_check_win_exact(Weights::default());
}

#[test]
fn test_larger_weights_never_report_false_win() {
    assert_check_win_exact(Weights::new(2, 7).unwrap());
}

fn move_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_tally_matches_board_after_every_move(order in move_order()) {
        let mut engine = GameEngine::new();
        for cell in order {
            if engine.phase().is_over() {
                break;
            }
            engine.activate(cell).unwrap();

            let recount = LineTally::from_board(engine.board(), engine.weights());
            prop_assert_eq!(&recount, engine.tally());
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn prop_marks_alternate(order in move_order()) {
        let mut engine = GameEngine::new();
        for cell in order {
            if engine.phase().is_over() {
                break;
            }
            engine.activate(cell).unwrap();
            let firsts = engine.board().count(Player::First);
            let seconds = engine.board().count(Player::Second);
            prop_assert!(firsts == seconds || firsts == seconds + 1);
        }
    }

    #[test]
    fn prop_rejected_moves_change_nothing(
        order in move_order(),
        prefix in 0usize..9,
        bad in 9usize..1000,
    ) {
        let mut engine = GameEngine::new();
        for &cell in order.iter().take(prefix) {
            if engine.phase().is_over() {
                break;
            }
            engine.activate(cell).unwrap();
        }
        engine.take_events();
        let before = engine.clone();

        prop_assert!(engine.activate(bad).is_err());
        prop_assert_eq!(&engine, &before);

        let occupied: Vec<usize> = engine
            .board()
            .squares()
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != Square::Empty)
            .map(|(i, _)| i)
            .collect();
        for cell in occupied {
            prop_assert!(engine.activate(cell).is_err());
            prop_assert_eq!(&engine, &before);
        }
    }

    #[test]
    fn prop_reset_restores_initial_state(order in move_order(), prefix in 0usize..=9) {
        let mut engine = GameEngine::new();
        for &cell in order.iter().take(prefix) {
            if engine.phase().is_over() {
                break;
            }
            engine.activate(cell).unwrap();
        }
        engine.reset();
        engine.take_events();
        prop_assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn prop_validated_weights_never_report_false_win(first in 1u32..64, second in 1u32..64) {
        if let Ok(weights) = Weights::new(first, second) {
            assert_check_win_exact(weights);
        }
    }
}
