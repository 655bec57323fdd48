//! Core engine types: sides, RNG, configuration, errors.
//!
//! These are the building blocks shared by the catalog, the resolver, the
//! play-callers and the game state machine.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::EngineConfig;
pub use error::{CatalogError, CatalogKind, EngineError};
pub use rng::{GameRng, GameRngState, PlayRng, ScriptedRng};
pub use side::{Role, Side, SideMap};
