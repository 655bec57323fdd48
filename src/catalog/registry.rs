//! Catalog for team and play lookup.
//!
//! The `Catalog` is built once per process and never mutated afterwards.
//! Lookups by typed id are infallible; lookups by string key go through
//! `FxHashMap` indexes and fail with [`CatalogError::NotFound`].

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::play::{
    DefensivePlay, DefensivePlayId, DefensiveStrength, OffensivePlay, OffensivePlayId, PlayKind,
};
use super::team::{Team, TeamId};
use crate::core::{CatalogError, CatalogKind};

static TEAMS: [Team; 8] = [
    Team {
        id: TeamId::Eagles,
        name: "Philadelphia Eagles",
        color: "#004C54",
        rating: 92,
    },
    Team {
        id: TeamId::Patriots,
        name: "New England Patriots",
        color: "#002244",
        rating: 94,
    },
    Team {
        id: TeamId::Steelers,
        name: "Pittsburgh Steelers",
        color: "#FFB612",
        rating: 90,
    },
    Team {
        id: TeamId::Colts,
        name: "Indianapolis Colts",
        color: "#002C5F",
        rating: 93,
    },
    Team {
        id: TeamId::Packers,
        name: "Green Bay Packers",
        color: "#203731",
        rating: 85,
    },
    Team {
        id: TeamId::Cowboys,
        name: "Dallas Cowboys",
        color: "#041E42",
        rating: 87,
    },
    Team {
        id: TeamId::Falcons,
        name: "Atlanta Falcons",
        color: "#A71930",
        rating: 88,
    },
    Team {
        id: TeamId::Seahawks,
        name: "Seattle Seahawks",
        color: "#002244",
        rating: 89,
    },
];

static OFFENSIVE_PLAYS: [OffensivePlay; 6] = [
    OffensivePlay {
        id: OffensivePlayId::HbDive,
        name: "HB Dive",
        kind: PlayKind::Run,
        min_yards: 2,
        max_yards: 8,
    },
    OffensivePlay {
        id: OffensivePlayId::HbToss,
        name: "HB Toss",
        kind: PlayKind::Run,
        min_yards: 0,
        max_yards: 12,
    },
    OffensivePlay {
        id: OffensivePlayId::PlayActionPass,
        name: "Play Action Pass",
        kind: PlayKind::Pass,
        min_yards: 5,
        max_yards: 25,
    },
    OffensivePlay {
        id: OffensivePlayId::Slants,
        name: "Slants",
        kind: PlayKind::Pass,
        min_yards: 3,
        max_yards: 15,
    },
    OffensivePlay {
        id: OffensivePlayId::DeepPost,
        name: "Deep Post",
        kind: PlayKind::Pass,
        min_yards: -5,
        max_yards: 40,
    },
    OffensivePlay {
        id: OffensivePlayId::Screen,
        name: "Screen Pass",
        kind: PlayKind::Pass,
        min_yards: 0,
        max_yards: 20,
    },
];

static DEFENSIVE_PLAYS: [DefensivePlay; 5] = [
    DefensivePlay {
        id: DefensivePlayId::Cover2,
        name: "Cover 2",
        strength: DefensiveStrength::Pass,
    },
    DefensivePlay {
        id: DefensivePlayId::Blitz,
        name: "Blitz",
        strength: DefensiveStrength::Pass,
    },
    DefensivePlay {
        id: DefensivePlayId::Normal43,
        name: "4-3 Normal",
        strength: DefensiveStrength::Balanced,
    },
    DefensivePlay {
        id: DefensivePlayId::GoalLine,
        name: "Goal Line",
        strength: DefensiveStrength::Run,
    },
    DefensivePlay {
        id: DefensivePlayId::Prevent,
        name: "Prevent",
        strength: DefensiveStrength::Deep,
    },
];

/// Read-only catalog of teams and plays.
///
/// ## Example
///
/// ```
/// use rust_gridiron::catalog::{Catalog, TeamId};
///
/// let catalog = Catalog::global();
///
/// let colts = catalog.lookup_team("colts").unwrap();
/// assert_eq!(colts.id, TeamId::Colts);
/// assert_eq!(colts.rating, 93);
///
/// assert!(catalog.lookup_team("oilers").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    team_keys: FxHashMap<&'static str, TeamId>,
    offense_keys: FxHashMap<&'static str, OffensivePlayId>,
    defense_keys: FxHashMap<&'static str, DefensivePlayId>,
}

impl Catalog {
    /// The process-wide catalog, built on first use.
    #[must_use]
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    fn build() -> Self {
        Self {
            team_keys: TeamId::ALL.iter().map(|&id| (id.key(), id)).collect(),
            offense_keys: OffensivePlayId::ALL.iter().map(|&id| (id.key(), id)).collect(),
            defense_keys: DefensivePlayId::ALL.iter().map(|&id| (id.key(), id)).collect(),
        }
    }

    // === Typed lookups ===

    /// Get a team by id.
    #[must_use]
    pub fn team(&self, id: TeamId) -> &'static Team {
        &TEAMS[id.index()]
    }

    /// Get an offensive play by id.
    #[must_use]
    pub fn offensive_play(&self, id: OffensivePlayId) -> &'static OffensivePlay {
        &OFFENSIVE_PLAYS[id.index()]
    }

    /// Get a defensive play by id.
    #[must_use]
    pub fn defensive_play(&self, id: DefensivePlayId) -> &'static DefensivePlay {
        &DEFENSIVE_PLAYS[id.index()]
    }

    // === Key lookups ===

    /// Look up a team by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no team has this key.
    pub fn lookup_team(&self, key: &str) -> Result<&'static Team, CatalogError> {
        self.team_keys
            .get(key)
            .map(|&id| self.team(id))
            .ok_or_else(|| CatalogError::not_found(CatalogKind::Team, key))
    }

    /// Look up an offensive play by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no offensive play has this key.
    pub fn lookup_offensive_play(&self, key: &str) -> Result<&'static OffensivePlay, CatalogError> {
        self.offense_keys
            .get(key)
            .map(|&id| self.offensive_play(id))
            .ok_or_else(|| CatalogError::not_found(CatalogKind::OffensivePlay, key))
    }

    /// Look up a defensive play by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no defensive play has this key.
    pub fn lookup_defensive_play(&self, key: &str) -> Result<&'static DefensivePlay, CatalogError> {
        self.defense_keys
            .get(key)
            .map(|&id| self.defensive_play(id))
            .ok_or_else(|| CatalogError::not_found(CatalogKind::DefensivePlay, key))
    }

    // === Enumeration ===

    /// All teams, in catalog order.
    #[must_use]
    pub fn teams(&self) -> &'static [Team] {
        &TEAMS
    }

    /// All offensive plays, in catalog order.
    #[must_use]
    pub fn offensive_plays(&self) -> &'static [OffensivePlay] {
        &OFFENSIVE_PLAYS
    }

    /// All defensive plays, in catalog order.
    #[must_use]
    pub fn defensive_plays(&self) -> &'static [DefensivePlay] {
        &DEFENSIVE_PLAYS
    }

    /// All team ids.
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        TeamId::ALL.into_iter()
    }

    /// All offensive play ids.
    pub fn offensive_play_ids(&self) -> impl Iterator<Item = OffensivePlayId> {
        OffensivePlayId::ALL.into_iter()
    }

    /// All defensive play ids.
    pub fn defensive_play_ids(&self) -> impl Iterator<Item = DefensivePlayId> {
        DefensivePlayId::ALL.into_iter()
    }
}
