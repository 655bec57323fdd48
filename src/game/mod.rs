//! Drive and game state machine.
//!
//! ## Key Components
//!
//! - `GameState`: Score, clock, down and distance, possession and log
//! - `GameEngine`: Creates games and applies one play at a time
//! - `drive`: Outcome to drive transition (scores, downs, possession)
//! - `clock`: Runoff and quarter transitions
//! - `simulate_game`: Both sides on AI, start to final whistle

pub mod clock;
pub mod drive;
mod engine;
mod autoplay;
mod state;

pub use autoplay::{simulate_game, simulate_game_with, GameResult, GameSummary};
pub use clock::{run_clock, ClockEvent};
pub use drive::{apply_outcome, DriveEvent};
pub use engine::{GameEngine, PlayReport};
pub use state::{GameLog, GameState, InvariantViolation, FIELD_LENGTH, QUARTERS};
