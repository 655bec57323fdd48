//! Play outcome types.

use serde::{Deserialize, Serialize};

/// How possession was lost on a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverKind {
    /// Pass picked off.
    Interception,
    /// Ball carrier lost the ball.
    Fumble,
}

impl TurnoverKind {
    /// Upper-case label used in play descriptions.
    #[must_use]
    pub const fn shout(self) -> &'static str {
        match self {
            TurnoverKind::Interception => "INTERCEPTION",
            TurnoverKind::Fumble => "FUMBLE",
        }
    }
}

impl std::fmt::Display for TurnoverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnoverKind::Interception => f.write_str("interception"),
            TurnoverKind::Fumble => f.write_str("fumble"),
        }
    }
}

/// Result of one offensive play against one defensive play.
///
/// Field position is not known here, so `touchdown_hint` is advisory only.
/// Scoring is decided by the drive state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Net yards gained (0 on a turnover, never below the yardage floor).
    pub yards: i32,
    /// Turnover kind, if possession was lost.
    pub turnover: Option<TurnoverKind>,
    /// Set when the gain alone would cover the whole field.
    pub touchdown_hint: bool,
}

impl PlayOutcome {
    /// A play without a turnover.
    #[must_use]
    pub const fn gain(yards: i32) -> Self {
        Self {
            yards,
            turnover: None,
            touchdown_hint: yards >= 100,
        }
    }

    /// A turnover with no yardage.
    #[must_use]
    pub const fn turnover(kind: TurnoverKind) -> Self {
        Self {
            yards: 0,
            turnover: Some(kind),
            touchdown_hint: false,
        }
    }

    /// Whether possession was lost.
    #[must_use]
    pub const fn is_turnover(&self) -> bool {
        self.turnover.is_some()
    }
}
