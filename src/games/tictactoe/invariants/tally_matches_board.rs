//! Tally invariant: every line sum equals a fresh recount from the board.

use super::super::{GameEngine, LineTally};
use super::Invariant;

/// Invariant: the incremental line tally matches the board.
///
/// Recomputes every line sum from the marked squares and compares.
pub struct TallyMatchesBoard;

impl Invariant<GameEngine> for TallyMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        LineTally::from_board(engine.board(), engine.weights()) == *engine.tally()
    }

    fn description() -> &'static str {
        "Line tally equals the weight sum of each line's marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Line, Player};

    #[test]
    fn test_empty_engine_holds() {
        assert!(TallyMatchesBoard::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2, 6] {
            engine.activate(cell).unwrap();
        }
        assert!(TallyMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::new();
        engine.board.place(Cell::ALL[4], Player::Second);
        assert!(!TallyMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_stray_tally_violates() {
        let mut engine = GameEngine::new();
        engine.tally.add(Cell::ALL[1], 1);
        assert_eq!(engine.tally().get(Line::TopRow), 1);
        assert!(!TallyMatchesBoard::holds(&engine));
    }
}
