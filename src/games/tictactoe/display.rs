//! Display layer.
//!
//! The engine never draws. It queues [`RenderEvent`]s, and a
//! [`DisplayAdapter`] turns them into whatever surface the host uses.

use super::action::{MoveError, MoveReport, Placement};
use super::cell::Cell;
use super::engine::GameEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Instruction from the engine to a display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// Draw a mark.
    Placed(Placement),
    /// Replace the status line.
    Status(String),
    /// Wipe every cell.
    Cleared,
}

/// Something that can show render events.
pub trait DisplayAdapter {
    /// Applies one event to the display.
    fn render(&mut self, event: &RenderEvent);
}

/// Plain-text grid. Empty cells show their number (1-9).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    cells: [Option<char>; Cell::COUNT],
    status: String,
}

impl TextDisplay {
    /// Creates a blank display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark drawn at `cell`, if any.
    pub fn mark_at(&self, cell: Cell) -> Option<char> {
        self.cells[cell.index()]
    }

    /// Last status line received.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Formats the grid as three rows separated by rules.
    pub fn grid(&self) -> String {
        Cell::ALL
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| match self.mark_at(*cell) {
                        Some(mark) => mark.to_string(),
                        None => cell.number().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl DisplayAdapter for TextDisplay {
    fn render(&mut self, event: &RenderEvent) {
        match event {
            RenderEvent::Placed(placement) => {
                self.cells[placement.cell().index()] = Some(placement.mark());
            }
            RenderEvent::Status(status) => self.status.clone_from(status),
            RenderEvent::Cleared => self.cells = [None; Cell::COUNT],
        }
    }
}

impl std::fmt::Display for TextDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.grid(), self.status)
    }
}

/// Couples an engine to a display and forwards input to it.
///
/// Input sources call [`on_activate`](Self::on_activate) and
/// [`on_reset`](Self::on_reset); every resulting event is pushed to the
/// display before the call returns.
#[derive(Debug)]
pub struct Frontend<D> {
    engine: GameEngine,
    display: D,
}

impl<D: DisplayAdapter> Frontend<D> {
    /// Wraps `engine` and shows its current status on `display`.
    pub fn new(mut engine: GameEngine, mut display: D) -> Self {
        for event in engine.take_events() {
            display.render(&event);
        }
        display.render(&RenderEvent::Status(engine.status().to_string()));
        Self { engine, display }
    }

    /// A cell was activated.
    #[instrument(skip(self))]
    pub fn on_activate(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let result = self.engine.activate(index);
        if let Err(e) = &result {
            warn!(error = %e, "Activation ignored");
        }
        self.flush();
        result
    }

    /// The reset control was used.
    #[instrument(skip(self))]
    pub fn on_reset(&mut self) {
        self.engine.reset();
        self.flush();
    }

    fn flush(&mut self) {
        let events = self.engine.take_events();
        debug!(count = events.len(), "Flushing render events");
        for event in &events {
            self.display.render(event);
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }
}
