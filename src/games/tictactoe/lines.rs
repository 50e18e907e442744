//! Winning lines and the weighted line tally.
//!
//! Every mark adds its player's weight to each line passing through the
//! marked cell. A line is won when its sum equals three times a player's
//! weight, so win detection reads eight integers instead of the board.

use super::cell::Cell;
use super::types::{Board, Square};
use super::weights::Weights;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::{instrument, trace};

/// One of the eight three-cell winning combinations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    strum::Display,
)]
#[strum(serialize_all = "title_case")]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

/// Lines through each cell, indexed by cell.
const CELL_LINES: [&[Line]; Cell::COUNT] = [
    &[Line::TopRow, Line::LeftColumn, Line::MainDiagonal],
    &[Line::TopRow, Line::MiddleColumn],
    &[Line::TopRow, Line::RightColumn, Line::AntiDiagonal],
    &[Line::MiddleRow, Line::LeftColumn],
    &[
        Line::MiddleRow,
        Line::MiddleColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ],
    &[Line::MiddleRow, Line::RightColumn],
    &[Line::BottomRow, Line::LeftColumn, Line::AntiDiagonal],
    &[Line::BottomRow, Line::MiddleColumn],
    &[Line::BottomRow, Line::RightColumn, Line::MainDiagonal],
];

impl Line {
    /// The three cells of this line.
    pub fn cells(self) -> [Cell; 3] {
        let indices = match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::MiddleColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        };
        indices.map(|i| Cell::ALL[i])
    }

    /// Lines passing through `cell` (two to four of them).
    pub fn through(cell: Cell) -> &'static [Line] {
        CELL_LINES[cell.index()]
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Per-line running sum of player weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTally {
    sums: [u32; Line::COUNT],
}

impl LineTally {
    /// All-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a tally from scratch by scanning `board`.
    #[instrument(skip(board))]
    pub fn from_board(board: &Board, weights: &Weights) -> Self {
        let mut tally = Self::new();
        for cell in Cell::ALL {
            if let Square::Occupied(player) = board.get(cell) {
                tally.add(cell, weights.weight(player));
            }
        }
        tally
    }

    /// Current sum for `line`.
    pub fn get(&self, line: Line) -> u32 {
        self.sums[line.slot()]
    }

    /// Adds `weight` to every line through `cell`.
    pub fn add(&mut self, cell: Cell, weight: u32) {
        for line in Line::through(cell) {
            let sum = &mut self.sums[line.slot()];
            *sum = sum.saturating_add(weight);
            trace!(%line, sum = *sum, "Line tally updated");
        }
    }

    /// First line whose sum equals `target`.
    pub fn find(&self, target: u32) -> Option<Line> {
        Line::iter().find(|line| self.get(*line) == target)
    }

    /// Lines paired with their sums, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Line, u32)> + '_ {
        Line::iter().map(|line| (line, self.get(line)))
    }

    /// True when every sum is zero.
    pub fn is_zero(&self) -> bool {
        self.sums.iter().all(|sum| *sum == 0)
    }
}
