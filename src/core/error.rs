//! Error types for catalog lookups and engine operations.
//!
//! Every error is a local validation failure reported before any state is
//! touched. None of them are retryable.

use thiserror::Error;

use super::side::Role;

/// Which catalog table a lookup went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Teams.
    Team,
    /// Offensive plays.
    OffensivePlay,
    /// Defensive plays.
    DefensivePlay,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Team => f.write_str("team"),
            CatalogKind::OffensivePlay => f.write_str("offensive play"),
            CatalogKind::DefensivePlay => f.write_str("defensive play"),
        }
    }
}

/// Catalog lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entry with this key exists.
    #[error("unknown {kind} `{key}`")]
    NotFound {
        /// Table that was searched.
        kind: CatalogKind,
        /// Key that was not found.
        key: String,
    },
}

impl CatalogError {
    pub(crate) fn not_found(kind: CatalogKind, key: &str) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

/// Engine operation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A catalog lookup failed.
    #[error(transparent)]
    NotFound(#[from] CatalogError),

    /// Game creation named an unknown team, or the same team twice.
    #[error("invalid team `{0}`")]
    InvalidTeam(String),

    /// The chosen play does not exist for the acting side's role.
    #[error("`{key}` is not a valid {role} play")]
    InvalidPlay {
        /// The rejected play key.
        key: String,
        /// Role the acting side holds on this down.
        role: Role,
    },

    /// The fourth quarter has expired.
    #[error("the game is over")]
    GameOver,

    /// An `EngineConfig` parameter is unusable.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}
