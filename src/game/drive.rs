//! Drive transitions: applying a play outcome to down, distance and score.
//!
//! The first matching rule wins:
//!
//! 1. Turnover: possession flips at the mirrored spot
//! 2. Touchdown: the ball crosses 100, offense scores 7, kickoff
//! 3. Safety: the ball falls to 0 or behind, defense scores 2, kickoff
//! 4. Gain: first down once the line to gain is reached, otherwise the next
//!    down, with a turnover on downs after a failed fourth

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, Side};
use crate::resolver::{PlayOutcome, TurnoverKind};

use super::state::{GameState, FIELD_LENGTH};

/// Points for a touchdown.
pub const TOUCHDOWN_POINTS: u32 = 7;

/// Points for a safety.
pub const SAFETY_POINTS: u32 = 2;

/// What a play did to the drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DriveEvent {
    /// Offense lost the ball.
    Turnover {
        /// Interception or fumble.
        kind: TurnoverKind,
    },
    /// Offense reached the end zone.
    Touchdown {
        /// Side awarded the points.
        scorer: Side,
        /// Yards gained on the scoring play.
        yards: i32,
    },
    /// Offense was tackled in its own end zone.
    Safety {
        /// Side awarded the points (the defense).
        scorer: Side,
    },
    /// Line to gain reached; new set of downs.
    FirstDown {
        /// Yards gained.
        yards: i32,
    },
    /// Short of the line to gain; next down.
    Gain {
        /// Yards gained, possibly negative.
        yards: i32,
    },
    /// Fourth down failed; possession flips at the mirrored spot.
    TurnoverOnDowns {
        /// Yards gained on the failed fourth down.
        yards: i32,
    },
}

impl DriveEvent {
    /// Points scored and by whom.
    #[must_use]
    pub fn points(&self) -> Option<(Side, u32)> {
        match *self {
            DriveEvent::Touchdown { scorer, .. } => Some((scorer, TOUCHDOWN_POINTS)),
            DriveEvent::Safety { scorer } => Some((scorer, SAFETY_POINTS)),
            _ => None,
        }
    }

    /// Whether the ball changed hands.
    #[must_use]
    pub fn changes_possession(&self) -> bool {
        !matches!(self, DriveEvent::FirstDown { .. } | DriveEvent::Gain { .. })
    }

    /// Log line for this event, given the offensive play's display name.
    #[must_use]
    pub fn describe(&self, play_name: &str) -> String {
        match *self {
            DriveEvent::Turnover { kind } => format!("{}! Turnover!", kind.shout()),
            DriveEvent::Touchdown {
                scorer: Side::Player,
                yards,
            } => format!("TOUCHDOWN! {yards} yard {play_name}!"),
            DriveEvent::Touchdown {
                scorer: Side::Cpu,
                yards,
            } => format!("CPU TOUCHDOWN! {yards} yards allowed!"),
            DriveEvent::Safety { scorer: Side::Cpu } => "SAFETY! Loss of yards!".to_string(),
            DriveEvent::Safety {
                scorer: Side::Player,
            } => "SAFETY! Great defensive play!".to_string(),
            DriveEvent::FirstDown { yards } => format!("FIRST DOWN! {yards} yards on {play_name}!"),
            DriveEvent::Gain { yards } => format!("{yards} yards on {play_name}"),
            DriveEvent::TurnoverOnDowns { yards } => {
                format!("{yards} yards on {play_name} - TURNOVER ON DOWNS!")
            }
        }
    }
}

/// Apply a resolved outcome to the drive.
///
/// Touches score, possession, down, distance and field position. The clock
/// and the log are left alone.
pub fn apply_outcome(
    state: &mut GameState,
    outcome: &PlayOutcome,
    config: &EngineConfig,
) -> DriveEvent {
    let offense = state.possession;

    if let Some(kind) = outcome.turnover {
        let spot = FIELD_LENGTH - state.field_position;
        state.change_possession(spot, config);
        return DriveEvent::Turnover { kind };
    }

    let yards = outcome.yards;
    let spot = state.field_position + yards;

    if spot >= FIELD_LENGTH {
        state.scores[offense] += TOUCHDOWN_POINTS;
        state.change_possession(config.kickoff_spot, config);
        return DriveEvent::Touchdown {
            scorer: offense,
            yards,
        };
    }

    if spot <= 0 {
        let scorer = offense.opponent();
        state.scores[scorer] += SAFETY_POINTS;
        state.change_possession(config.kickoff_spot, config);
        return DriveEvent::Safety { scorer };
    }

    state.field_position = spot;
    state.yards_to_go -= yards;

    if state.yards_to_go <= 0 {
        state.down = 1;
        state.yards_to_go = config.first_down_distance;
        return DriveEvent::FirstDown { yards };
    }

    state.down += 1;
    if state.down > 4 {
        state.change_possession(FIELD_LENGTH - spot, config);
        return DriveEvent::TurnoverOnDowns { yards };
    }

    DriveEvent::Gain { yards }
}
