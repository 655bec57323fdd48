//! Game state: score, clock, down and distance, possession, log.
//!
//! ## GameState
//!
//! One instance per active game, owned by whoever is driving it. The engine
//! never mutates a state in place: `GameEngine::apply_play` clones the input
//! and returns the next snapshot. The log is an `im::Vector`, so clones share
//! structure.
//!
//! ## Field Position
//!
//! Measured from the possessing team's own goal line (0) toward the
//! opponent's (100). A change of possession mirrors it as `100 - position`.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::TeamId;
use crate::core::{EngineConfig, Role, Side, SideMap};

/// Number of quarters in a game.
pub const QUARTERS: u8 = 4;

/// Length of the field in yards.
pub const FIELD_LENGTH: i32 = 100;

/// Most-recent-first log of play descriptions with a fixed capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameLog {
    entries: Vector<String>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front, dropping the oldest beyond `capacity`.
    pub fn record(&mut self, entry: impl Into<String>, capacity: usize) {
        self.entries.push_front(entry.into());
        // im's truncate panics when asked to grow the vector.
        if self.entries.len() > capacity {
            self.entries.truncate(capacity);
        }
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Invariant violation found by [`GameState::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Authoritative state of one game.
///
/// Fields are public so the session layer can render and persist them, and
/// so tests can set up situations directly. Only the engine's transitions
/// keep the invariants; [`GameState::check_invariants`] verifies them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Points per side. Only ever increased by 7 or 2.
    pub scores: SideMap<u32>,

    /// Current quarter, 1 through 4.
    pub quarter: u8,

    /// Current down, 1 through 4.
    pub down: u8,

    /// Yards needed for a first down.
    pub yards_to_go: i32,

    /// Ball position from the offense's own goal line, 0 to 100.
    pub field_position: i32,

    /// Side on offense.
    pub possession: Side,

    /// Seconds left in the quarter.
    pub time_remaining: u32,

    /// Team controlled by the human.
    pub player_team: TeamId,

    /// Team controlled by the CPU.
    pub cpu_team: TeamId,

    /// Recent play descriptions, newest first.
    pub game_log: GameLog,
}

impl GameState {
    /// Opening state: player receives at their own 20, first and 10.
    ///
    /// Does not check that the teams differ; `GameEngine` does.
    pub(crate) fn new(player_team: TeamId, cpu_team: TeamId, config: &EngineConfig) -> Self {
        Self {
            scores: SideMap::default(),
            quarter: 1,
            down: 1,
            yards_to_go: config.first_down_distance,
            field_position: config.kickoff_spot,
            possession: Side::Player,
            time_remaining: config.quarter_length,
            player_team,
            cpu_team,
            game_log: GameLog::new(),
        }
    }

    /// Team assigned to a side.
    #[must_use]
    pub fn team(&self, side: Side) -> TeamId {
        match side {
            Side::Player => self.player_team,
            Side::Cpu => self.cpu_team,
        }
    }

    /// Side currently without the ball.
    #[must_use]
    pub fn defense(&self) -> Side {
        self.possession.opponent()
    }

    /// Role a side holds on the next down.
    #[must_use]
    pub fn role_of(&self, side: Side) -> Role {
        Role::for_side(side, self.possession)
    }

    /// Whether the fourth quarter has expired.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.quarter >= QUARTERS && self.time_remaining == 0
    }

    /// Side with more points, or `None` when tied.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.scores.player.cmp(&self.scores.cpu) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Cpu),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Give the ball to the other side, first and 10 at `field_position`.
    pub(crate) fn change_possession(&mut self, field_position: i32, config: &EngineConfig) {
        self.possession = self.possession.opponent();
        self.down = 1;
        self.yards_to_go = config.first_down_distance;
        self.field_position = field_position;
    }

    /// Check every state invariant.
    ///
    /// Returns the violations found, or empty if all invariants hold.
    #[must_use]
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        if !(0..=FIELD_LENGTH).contains(&self.field_position) {
            violations.push(InvariantViolation::new(format!(
                "field position {} outside 0..={FIELD_LENGTH}",
                self.field_position
            )));
        }
        if !(1..=4).contains(&self.down) {
            violations.push(InvariantViolation::new(format!("down {} outside 1..=4", self.down)));
        }
        if !(1..=QUARTERS).contains(&self.quarter) {
            violations.push(InvariantViolation::new(format!(
                "quarter {} outside 1..={QUARTERS}",
                self.quarter
            )));
        }
        if self.yards_to_go < 0 {
            violations.push(InvariantViolation::new(format!(
                "negative yards to go: {}",
                self.yards_to_go
            )));
        }
        if self.player_team == self.cpu_team {
            violations.push(InvariantViolation::new(format!(
                "both sides play as {}",
                self.player_team
            )));
        }

        violations
    }
}
