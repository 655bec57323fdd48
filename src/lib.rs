//! # rust-gridiron
//!
//! A simplified American-football game engine: a human side against a CPU
//! side, one play call per down.
//!
//! ## Design Principles
//!
//! 1. **Closed Catalog**: Teams and plays are closed enums backed by static
//!    tables. String keys are validated once at the boundary.
//!
//! 2. **Pure Transitions**: `GameEngine::apply_play` takes a state snapshot
//!    and returns the next one. Failures never leave partial state.
//!
//! 3. **Injected Randomness**: Every draw goes through a `PlayRng`, so a
//!    seed replays a game exactly and tests can script outcomes.
//!
//! ## Architecture
//!
//! - **Resolver**: play vs play plus team ratings gives yards and turnovers.
//!   Knows nothing about the field.
//!
//! - **Drive Machine**: turns outcomes into downs, scores and possession,
//!   then runs the clock.
//!
//! - **Persistent Log**: the play log is an `im-rs` vector so state
//!   snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `catalog`: Teams and plays
//! - `resolver`: Outcome resolution
//! - `ai`: Play-calling policies
//! - `game`: Game state, drive transitions, clock, engine, autoplay
//!
//! ## Example
//!
//! ```
//! use rust_gridiron::{GameEngine, GameRng};
//!
//! let engine = GameEngine::default();
//! let mut rng = GameRng::new(42);
//!
//! let state = engine.create_game("eagles", &mut rng).unwrap();
//! let report = engine.apply_play(&state, "hb_dive", &mut rng).unwrap();
//!
//! assert_eq!(report.offensive_play, "HB Dive");
//! assert!(report.state.check_invariants().is_empty());
//! ```

pub mod core;
pub mod catalog;
pub mod resolver;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, CatalogKind, EngineConfig, EngineError,
    GameRng, GameRngState, PlayRng, ScriptedRng,
    Role, Side, SideMap,
};

pub use crate::catalog::{
    Catalog, DefensivePlay, DefensivePlayId, DefensiveStrength,
    OffensivePlay, OffensivePlayId, PlayCall, PlayKind, Team, TeamId,
};

pub use crate::resolver::{OutcomeResolver, PlayOutcome, TurnoverKind};

pub use crate::ai::{HeuristicPlayCaller, PlayCaller, UniformPlayCaller};

pub use crate::game::{
    simulate_game, simulate_game_with, ClockEvent, DriveEvent, GameEngine, GameLog,
    GameResult, GameState, GameSummary, InvariantViolation, PlayReport,
};
