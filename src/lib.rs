//! Tally Tic-Tac-Toe - a 3x3 game engine with constant-time win detection
//!
//! Each player carries an integer weight. Every mark adds its weight to the
//! running sum of each line through the marked cell, and a line is won
//! when its sum equals three times one player's weight. Weights are
//! validated so that no mixed line can ever reach a winning sum.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, tally, turn and status
//! - **Display**: [`RenderEvent`]s consumed by any [`DisplayAdapter`]
//! - **Config**: [`EngineConfig`] with weights and marks, loaded from TOML
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{GameEngine, Phase, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.activate(cell)?;
//! }
//! assert_eq!(engine.phase(), Phase::Won(Player::First));
//! # Ok::<(), tally_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, DisplayAdapter, Frontend, GameEngine, GameSnapshot, Line, LineTally, Marks,
    MoveError, MoveReport, Phase, Placement, Player, RenderEvent, Square, TextDisplay,
    Weights,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, PhaseMatchesBoard,
    TallyMatchesBoard,
};
