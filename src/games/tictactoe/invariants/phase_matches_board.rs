//! Phase invariant: the recorded phase agrees with a direct board scan.

use super::super::{Board, GameEngine, Line, Phase, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: `Won`, `Draw` and `Turn` match what the board shows.
///
/// - `Won(p)`: some line is fully held by `p`.
/// - `Draw`: board full, no line fully held.
/// - `Turn(p)`: board not full, no line fully held, `p` is the current player.
pub struct PhaseMatchesBoard;

fn completed_by(board: &Board) -> Option<Player> {
    Line::iter().find_map(|line| board.line_owner(line))
}

impl Invariant<GameEngine> for PhaseMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match engine.phase() {
            Phase::Won(player) => Line::iter().any(|line| board.line_owner(line) == Some(player)),
            Phase::Draw => board.is_full() && completed_by(board).is_none(),
            Phase::Turn(player) => {
                !board.is_full()
                    && completed_by(board).is_none()
                    && player == engine.current_player()
            }
        }
    }

    fn description() -> &'static str {
        "Phase agrees with completed lines and board fullness"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_game_holds() {
        let mut engine = GameEngine::new();
        engine.activate(4).unwrap();
        assert!(PhaseMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_won_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.activate(cell).unwrap();
        }
        assert!(PhaseMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_missed_win_violates() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4] {
            engine.activate(cell).unwrap();
        }
        // Place and pass the turn without checking for the win.
        engine.apply_move(2).unwrap();
        engine.advance_turn();
        assert_eq!(engine.phase(), Phase::Turn(Player::Second));
        assert!(!PhaseMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_desynced_turn_violates() {
        let mut engine = GameEngine::new();
        engine.phase = Phase::Turn(Player::Second);
        assert!(!PhaseMatchesBoard::holds(&engine));
    }
}
