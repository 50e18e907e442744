//! Board cell indices.

use super::action::MoveError;
use serde::{Deserialize, Serialize};

/// A validated cell index in `0..9`, laid out row-major.
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}")]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// Every cell in index order.
    pub const ALL: [Cell; Self::COUNT] = [
        Cell(0),
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
    ];

    /// Returns the cell for `index`, or `None` when out of range.
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the cell a player calls `number` (1-9), or `None`.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    /// Player-facing number (1-9).
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<usize> for Cell {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(MoveError::InvalidCellIndex(index))
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}
