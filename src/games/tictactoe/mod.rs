mod action;
mod cell;
mod display;
mod engine;
pub mod invariants;
mod lines;
mod phases;
mod types;
mod weights;

pub use action::{MoveError, MoveReport, Placement};
pub use cell::Cell;
pub use display::{DisplayAdapter, Frontend, RenderEvent, TextDisplay};
pub use engine::{GameEngine, GameSnapshot};
pub use lines::{Line, LineTally};
pub use phases::Phase;
pub use types::{Board, Player, Square};
pub use weights::{Marks, Weights};
