//! Game phases.

use super::types::Player;
use super::weights::Marks;
use serde::{Deserialize, Serialize};

/// Where the game stands.
///
/// `Won` and `Draw` are terminal until the engine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to move.
    Turn(Player),
    /// A line was completed by this player.
    Won(Player),
    /// Board full, no line completed.
    Draw,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Turn(Player::First)
    }
}

impl Phase {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::Turn(_))
    }

    /// Status line shown to players.
    pub fn status_message(&self, marks: &Marks) -> String {
        match self {
            Phase::Turn(player) => format!("{} turn!", marks.mark(*player)),
            Phase::Won(player) => format!("We have a winner! {} wins!", marks.mark(*player)),
            Phase::Draw => "It's a draw!".to_string(),
        }
    }
}
