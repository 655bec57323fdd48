//! Game clock: per-play runoff and quarter transitions.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, PlayRng};

use super::state::{GameState, QUARTERS};

/// What the clock did after a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEvent {
    /// Time left in the quarter.
    Running,
    /// Quarter expired; the clock was reset for the next one.
    QuarterEnded {
        /// The quarter now being played.
        next_quarter: u8,
    },
    /// Fourth quarter expired.
    GameOver,
}

/// Draw the seconds a play takes off the clock.
///
/// Draws exactly one roll from `rng`.
pub fn draw_runoff<R: PlayRng + ?Sized>(rng: &mut R, config: &EngineConfig) -> u32 {
    let min = i32::try_from(config.play_clock_min).unwrap_or(i32::MAX);
    let max = i32::try_from(config.play_clock_max).unwrap_or(i32::MAX);
    u32::try_from(rng.roll(min..=max)).unwrap_or(config.play_clock_min)
}

/// Run `elapsed` seconds off the clock.
///
/// Time saturates at zero. An expired quarter before the fourth rolls over
/// to the next with a full clock; an expired fourth ends the game and leaves
/// the quarter at 4 with 0 seconds.
pub fn run_clock(state: &mut GameState, elapsed: u32, config: &EngineConfig) -> ClockEvent {
    state.time_remaining = state.time_remaining.saturating_sub(elapsed);

    if state.time_remaining > 0 {
        return ClockEvent::Running;
    }

    if state.quarter < QUARTERS {
        state.quarter += 1;
        state.time_remaining = config.quarter_length;
        ClockEvent::QuarterEnded {
            next_quarter: state.quarter,
        }
    } else {
        ClockEvent::GameOver
    }
}
