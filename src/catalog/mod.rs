//! Catalog: teams, offensive plays, defensive plays.
//!
//! ## Key Types
//!
//! - `TeamId`, `OffensivePlayId`, `DefensivePlayId`: closed identifier sets
//! - `Team`, `OffensivePlay`, `DefensivePlay`: static definitions
//! - `PlayCall`: a play chosen for one role
//! - `Catalog`: process-wide lookup tables

pub mod play;
pub mod registry;
pub mod team;

pub use play::{
    DefensivePlay, DefensivePlayId, DefensiveStrength, OffensivePlay, OffensivePlayId, PlayCall,
    PlayKind,
};
pub use registry::Catalog;
pub use team::{Team, TeamId};
