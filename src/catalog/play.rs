//! Play definitions - static offensive and defensive play data.
//!
//! Offensive plays carry a category and an inclusive yardage range. Defensive
//! plays carry the kind of offense they are strongest against.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::registry::Catalog;
use crate::core::{CatalogError, Role};

/// Offensive play category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayKind {
    /// Handoff or pitch.
    Run,
    /// Forward pass.
    Pass,
}

/// What a defensive call is built to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveStrength {
    /// Coverage-heavy: halves pass gains, can intercept.
    Pass,
    /// Stacked box: cuts run gains.
    Run,
    /// No particular emphasis.
    Balanced,
    /// Protects against the long ball only.
    Deep,
}

/// Identifier of a catalog offensive play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OffensivePlayId {
    /// HB Dive.
    #[serde(rename = "hb_dive")]
    HbDive,
    /// HB Toss.
    #[serde(rename = "hb_toss")]
    HbToss,
    /// Play Action Pass.
    #[serde(rename = "pa_pass")]
    PlayActionPass,
    /// Slants.
    #[serde(rename = "slants")]
    Slants,
    /// Deep Post.
    #[serde(rename = "deep_post")]
    DeepPost,
    /// Screen Pass.
    #[serde(rename = "screen")]
    Screen,
}

impl OffensivePlayId {
    /// Every offensive play, in catalog order.
    pub const ALL: [OffensivePlayId; 6] = [
        OffensivePlayId::HbDive,
        OffensivePlayId::HbToss,
        OffensivePlayId::PlayActionPass,
        OffensivePlayId::Slants,
        OffensivePlayId::DeepPost,
        OffensivePlayId::Screen,
    ];

    /// Lookup key used by callers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            OffensivePlayId::HbDive => "hb_dive",
            OffensivePlayId::HbToss => "hb_toss",
            OffensivePlayId::PlayActionPass => "pa_pass",
            OffensivePlayId::Slants => "slants",
            OffensivePlayId::DeepPost => "deep_post",
            OffensivePlayId::Screen => "screen",
        }
    }

    /// Position in [`OffensivePlayId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for OffensivePlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OffensivePlayId {
    type Err = CatalogError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Catalog::global().lookup_offensive_play(key).map(|play| play.id)
    }
}

/// Identifier of a catalog defensive play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DefensivePlayId {
    /// Cover 2.
    #[serde(rename = "cover_2")]
    Cover2,
    /// Blitz.
    #[serde(rename = "blitz")]
    Blitz,
    /// 4-3 Normal, the balanced front.
    #[serde(rename = "4-3_normal")]
    Normal43,
    /// Goal Line.
    #[serde(rename = "goal_line")]
    GoalLine,
    /// Prevent.
    #[serde(rename = "prevent")]
    Prevent,
}

impl DefensivePlayId {
    /// Every defensive play, in catalog order.
    pub const ALL: [DefensivePlayId; 5] = [
        DefensivePlayId::Cover2,
        DefensivePlayId::Blitz,
        DefensivePlayId::Normal43,
        DefensivePlayId::GoalLine,
        DefensivePlayId::Prevent,
    ];

    /// Lookup key used by callers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            DefensivePlayId::Cover2 => "cover_2",
            DefensivePlayId::Blitz => "blitz",
            DefensivePlayId::Normal43 => "4-3_normal",
            DefensivePlayId::GoalLine => "goal_line",
            DefensivePlayId::Prevent => "prevent",
        }
    }

    /// Position in [`DefensivePlayId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DefensivePlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DefensivePlayId {
    type Err = CatalogError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Catalog::global().lookup_defensive_play(key).map(|play| play.id)
    }
}

/// Static offensive play definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OffensivePlay {
    /// Identifier.
    pub id: OffensivePlayId,
    /// Display name.
    pub name: &'static str,
    /// Run or pass.
    pub kind: PlayKind,
    /// Smallest base gain (negative for loss-prone plays).
    pub min_yards: i32,
    /// Largest base gain.
    pub max_yards: i32,
}

impl OffensivePlay {
    /// Inclusive base yardage range.
    #[must_use]
    pub const fn yard_range(&self) -> RangeInclusive<i32> {
        self.min_yards..=self.max_yards
    }
}

/// Static defensive play definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DefensivePlay {
    /// Identifier.
    pub id: DefensivePlayId,
    /// Display name.
    pub name: &'static str,
    /// What the call is built to stop.
    pub strength: DefensiveStrength,
}

/// A play chosen for one role on one down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayCall {
    /// An offensive play.
    Offense(OffensivePlayId),
    /// A defensive play.
    Defense(DefensivePlayId),
}

impl PlayCall {
    /// Parse a caller-supplied key for the given role.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the key is not in the role's table.
    pub fn parse(key: &str, role: Role) -> Result<Self, CatalogError> {
        match role {
            Role::Offense => key.parse().map(PlayCall::Offense),
            Role::Defense => key.parse().map(PlayCall::Defense),
        }
    }

    /// The role this call fills.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            PlayCall::Offense(_) => Role::Offense,
            PlayCall::Defense(_) => Role::Defense,
        }
    }

    /// Lookup key of the underlying play.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            PlayCall::Offense(id) => id.key(),
            PlayCall::Defense(id) => id.key(),
        }
    }

    /// The offensive id, if this is an offensive call.
    #[must_use]
    pub const fn as_offense(self) -> Option<OffensivePlayId> {
        match self {
            PlayCall::Offense(id) => Some(id),
            PlayCall::Defense(_) => None,
        }
    }

    /// The defensive id, if this is a defensive call.
    #[must_use]
    pub const fn as_defense(self) -> Option<DefensivePlayId> {
        match self {
            PlayCall::Defense(id) => Some(id),
            PlayCall::Offense(_) => None,
        }
    }
}

impl From<OffensivePlayId> for PlayCall {
    fn from(id: OffensivePlayId) -> Self {
        PlayCall::Offense(id)
    }
}

impl From<DefensivePlayId> for PlayCall {
    fn from(id: DefensivePlayId) -> Self {
        PlayCall::Defense(id)
    }
}
