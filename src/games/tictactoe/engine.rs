//! The tic-tac-toe engine.
//!
//! `GameEngine` owns all game state. Callers drive it one move at a time
//! through [`GameEngine::activate`] or the finer-grained `apply_move`,
//! `check_win` and `advance_turn` steps, and read back render events for
//! whatever display they use.

use super::action::{MoveError, MoveReport, Placement};
use super::cell::Cell;
use super::display::RenderEvent;
use super::invariants::assert_invariants;
use super::lines::{Line, LineTally};
use super::phases::Phase;
use super::types::{Board, Player};
use super::weights::{Marks, Weights};
use crate::config::{ConfigError, EngineConfig};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with weighted line tallies.
///
/// Not internally synchronized. Use one engine per game, or wrap it in a
/// mutex when several callers share a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) tally: LineTally,
    pub(super) current: Player,
    pub(super) phase: Phase,
    pub(super) status: String,
    pub(super) weights: Weights,
    pub(super) marks: Marks,
    pub(super) events: Vec<RenderEvent>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Creates an engine with default weights (1 and 4) and marks (X and O).
    #[instrument]
    pub fn new() -> Self {
        Self::initial(Weights::default(), Marks::default())
    }

    /// Creates an engine from a configuration, validating it first.
    #[track_caller]
    #[instrument]
    pub fn with_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::initial(*config.weights(), *config.marks()))
    }

    fn initial(weights: Weights, marks: Marks) -> Self {
        let phase = Phase::default();
        Self {
            board: Board::new(),
            tally: LineTally::new(),
            current: Player::First,
            status: phase.status_message(&marks),
            phase,
            weights,
            marks,
            events: Vec::new(),
        }
    }

    /// Marks `index` for the current player and updates the line tally.
    ///
    /// Does not check for a win or pass the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a win or draw is recorded.
    /// - [`MoveError::InvalidCellIndex`] for an index outside 0-8.
    /// - [`MoveError::CellAlreadyOccupied`] for a marked cell.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn apply_move(&mut self, index: usize) -> Result<Placement, MoveError> {
        if self.phase.is_over() {
            warn!(phase = ?self.phase, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        let cell = Cell::try_from(index).inspect_err(|e| warn!(error = %e, "Move rejected"))?;
        if !self.board.is_empty(cell) {
            warn!(%cell, "Move rejected: cell occupied");
            return Err(MoveError::CellAlreadyOccupied(cell));
        }

        let player = self.current;
        self.board.place(cell, player);
        self.tally.add(cell, self.weights.weight(player));

        let placement = Placement::new(cell, player, self.marks.mark(player));
        debug!(%placement, "Mark placed");
        self.events.push(RenderEvent::Placed(placement));
        Ok(placement)
    }

    /// Looks for a line whose tally equals some player's winning sum.
    ///
    /// Reads only the tally. On a hit the game moves to [`Phase::Won`] and
    /// the winner and line are returned; otherwise nothing changes.
    #[instrument(skip(self))]
    pub fn check_win(&mut self) -> Option<(Player, Line)> {
        let (winner, line) = Player::iter().find_map(|player| {
            self.tally
                .find(self.weights.winning_sum(player))
                .map(|line| (player, line))
        })?;
        self.phase = Phase::Won(winner);
        self.status = self.phase.status_message(&self.marks);
        info!(?winner, %line, sum = self.tally.get(line), "Winner detected");
        Some((winner, line))
    }

    /// Passes the turn, or settles a finished game.
    ///
    /// A recorded win keeps the current player. A full board with no win
    /// becomes [`Phase::Draw`]. Otherwise the other player is to move.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn advance_turn(&mut self) {
        match self.phase {
            Phase::Won(_) | Phase::Draw => {}
            Phase::Turn(_) if self.board.is_full() => {
                self.phase = Phase::Draw;
                info!("Board full with no winner");
            }
            Phase::Turn(_) => {
                self.current = self.current.opponent();
                self.phase = Phase::Turn(self.current);
                debug!(next = ?self.current, "Turn passed");
            }
        }
        self.status = self.phase.status_message(&self.marks);
        self.events.push(RenderEvent::Status(self.status.clone()));
    }

    /// Returns the engine to its initial state, keeping weights and marks.
    ///
    /// Undrained render events are dropped and replaced by a clear and the
    /// initial status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::initial(self.weights, self.marks);
        self.events.push(RenderEvent::Cleared);
        self.events.push(RenderEvent::Status(self.status.clone()));
        info!("Game reset");
    }

    /// Plays one move: place the mark, check for a win, pass the turn.
    ///
    /// # Errors
    ///
    /// Propagates [`apply_move`](Self::apply_move) rejections. A rejected
    /// move changes nothing and queues no events.
    #[instrument(skip(self))]
    pub fn activate(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let placement = self.apply_move(index)?;
        let winning_line = self.check_win().map(|(_, line)| line);
        self.advance_turn();

        assert_invariants(self);

        Ok(MoveReport::new(
            placement,
            winning_line,
            self.phase,
            self.status.clone(),
        ))
    }

    /// Drains queued render events, oldest first.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serializable copy of the visible state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            tally: self.tally,
            current_player: self.current,
            phase: self.phase,
            status: self.status.clone(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the line tally.
    pub fn tally(&self) -> &LineTally {
        &self.tally
    }

    /// Player whose mark the next accepted move places.
    ///
    /// After a win this stays the winner.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a win is recorded.
    pub fn has_winner(&self) -> bool {
        matches!(self.phase, Phase::Won(_))
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Returns the marks.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }
}

/// Point-in-time view of an engine, for logging or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board squares.
    pub board: Board,
    /// Line sums.
    pub tally: LineTally,
    /// Player to move (or the winner).
    pub current_player: Player,
    /// Phase.
    pub phase: Phase,
    /// Status message.
    pub status: String,
}
