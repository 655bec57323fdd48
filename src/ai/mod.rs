//! Play-calling AI.
//!
//! ## Key Components
//!
//! - `PlayCaller`: Trait for choosing a play from down and distance
//! - `HeuristicPlayCaller`: The CPU's down-dependent tendencies
//! - `UniformPlayCaller`: Random calls over the whole catalog
//!
//! All callers draw from the injected RNG so replays are exact.

pub mod policy;

pub use policy::{HeuristicPlayCaller, PlayCaller, UniformPlayCaller};
