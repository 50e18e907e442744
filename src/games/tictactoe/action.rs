//! Move events and move errors.
//!
//! A placement is what the display layer draws. A report bundles it with
//! the state the engine settled into after the move.

use super::cell::Cell;
use super::lines::Line;
use super::phases::Phase;
use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    cell: Cell,
    player: Player,
    mark: char,
}

impl Placement {
    /// The marked cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The player who moved.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Symbol to draw.
    pub fn mark(&self) -> char {
        self.mark
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.mark, self.cell)
    }
}

/// Result of an accepted [`activate`](super::GameEngine::activate) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveReport {
    placement: Placement,
    winning_line: Option<Line>,
    phase: Phase,
    status: String,
}

impl MoveReport {
    /// The mark just placed.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Line completed by this move, if it won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Phase after the move.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status message after the move.
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Why a move was rejected. The engine is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is outside 0-8", _0)]
    InvalidCellIndex(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellAlreadyOccupied(Cell),

    /// A win or draw has already been recorded.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
