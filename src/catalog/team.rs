//! Team definitions - static team data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::registry::Catalog;
use crate::core::CatalogError;

/// Identifier of a catalog team.
///
/// The set is closed: any string key that does not parse into a `TeamId`
/// is rejected at the catalog boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamId {
    /// Philadelphia Eagles.
    Eagles,
    /// New England Patriots.
    Patriots,
    /// Pittsburgh Steelers.
    Steelers,
    /// Indianapolis Colts.
    Colts,
    /// Green Bay Packers.
    Packers,
    /// Dallas Cowboys.
    Cowboys,
    /// Atlanta Falcons.
    Falcons,
    /// Seattle Seahawks.
    Seahawks,
}

impl TeamId {
    /// Every team, in catalog order.
    pub const ALL: [TeamId; 8] = [
        TeamId::Eagles,
        TeamId::Patriots,
        TeamId::Steelers,
        TeamId::Colts,
        TeamId::Packers,
        TeamId::Cowboys,
        TeamId::Falcons,
        TeamId::Seahawks,
    ];

    /// Lookup key used by callers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            TeamId::Eagles => "eagles",
            TeamId::Patriots => "patriots",
            TeamId::Steelers => "steelers",
            TeamId::Colts => "colts",
            TeamId::Packers => "packers",
            TeamId::Cowboys => "cowboys",
            TeamId::Falcons => "falcons",
            TeamId::Seahawks => "seahawks",
        }
    }

    /// Position in [`TeamId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TeamId {
    type Err = CatalogError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Catalog::global().lookup_team(key).map(|team| team.id)
    }
}

/// Static team definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Identifier.
    pub id: TeamId,
    /// Display name.
    pub name: &'static str,
    /// Primary color as a hex string (cosmetic).
    pub color: &'static str,
    /// Overall rating, roughly 80-95.
    pub rating: i32,
}
