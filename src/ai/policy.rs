//! Play-calling policies.
//!
//! Policies are trait-based to allow customization:
//! - `HeuristicPlayCaller`: down-and-distance tendencies
//! - `UniformPlayCaller`: any play in the catalog, uniformly

use tracing::warn;

use crate::catalog::{DefensivePlayId, OffensivePlayId, PlayCall};
use crate::core::{PlayRng, Role};

use OffensivePlayId::{DeepPost, HbDive, HbToss, PlayActionPass, Screen, Slants};
use DefensivePlayId::{Blitz, Cover2, GoalLine, Normal43, Prevent};

// =============================================================================
// Play Caller
// =============================================================================

/// Policy for choosing a play given the down and distance.
pub trait PlayCaller: Send + Sync {
    /// Choose an offensive play.
    fn select_offense(&self, down: u8, yards_to_go: i32, rng: &mut dyn PlayRng) -> OffensivePlayId;

    /// Choose a defensive play.
    fn select_defense(&self, down: u8, yards_to_go: i32, rng: &mut dyn PlayRng) -> DefensivePlayId;

    /// Choose a play for whichever role the side holds on this down.
    fn select_play(
        &self,
        role: Role,
        down: u8,
        yards_to_go: i32,
        rng: &mut dyn PlayRng,
    ) -> PlayCall {
        match role {
            Role::Offense => PlayCall::Offense(self.select_offense(down, yards_to_go, rng)),
            Role::Defense => PlayCall::Defense(self.select_defense(down, yards_to_go, rng)),
        }
    }
}

fn pick_from<T: Copy>(rng: &mut dyn PlayRng, options: &[T]) -> T {
    options[rng.pick(options.len())]
}

// =============================================================================
// Heuristic
// =============================================================================

/// Down-and-distance play caller used for the CPU.
///
/// Early downs lean on the run, long yardage brings out the deep passing game
/// on offense and extra coverage on defense.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPlayCaller;

impl HeuristicPlayCaller {
    /// Offensive candidates for a down, or `None` outside downs 1-4.
    #[must_use]
    pub fn offense_candidates(down: u8, yards_to_go: i32) -> Option<&'static [OffensivePlayId]> {
        match down {
            1 => Some(&[HbDive, HbToss, PlayActionPass]),
            2 if yards_to_go > 7 => Some(&[PlayActionPass, Slants, Screen]),
            2 => Some(&[HbDive, Slants]),
            3 | 4 if yards_to_go > 5 => Some(&[PlayActionPass, Slants, DeepPost]),
            3 | 4 => Some(&[Slants, HbDive]),
            _ => None,
        }
    }

    /// Defensive candidates for a down, or `None` outside downs 1-4.
    #[must_use]
    pub fn defense_candidates(down: u8, yards_to_go: i32) -> Option<&'static [DefensivePlayId]> {
        match down {
            1 => Some(&[Normal43, Cover2]),
            2 if yards_to_go > 7 => Some(&[Cover2, Blitz]),
            2 => Some(&[Normal43, GoalLine]),
            3 | 4 if yards_to_go > 8 => Some(&[Cover2, Blitz, Prevent]),
            3 | 4 => Some(&[Blitz, GoalLine]),
            _ => None,
        }
    }
}

impl PlayCaller for HeuristicPlayCaller {
    fn select_offense(&self, down: u8, yards_to_go: i32, rng: &mut dyn PlayRng) -> OffensivePlayId {
        match Self::offense_candidates(down, yards_to_go) {
            Some(candidates) => pick_from(rng, candidates),
            None => {
                warn!(down, yards_to_go, "down out of range, calling any offensive play");
                pick_from(rng, &OffensivePlayId::ALL)
            }
        }
    }

    fn select_defense(&self, down: u8, yards_to_go: i32, rng: &mut dyn PlayRng) -> DefensivePlayId {
        match Self::defense_candidates(down, yards_to_go) {
            Some(candidates) => pick_from(rng, candidates),
            None => {
                warn!(down, yards_to_go, "down out of range, calling any defensive play");
                pick_from(rng, &DefensivePlayId::ALL)
            }
        }
    }
}

// =============================================================================
// Uniform
// =============================================================================

/// Uniform random play caller.
///
/// Ignores the situation and picks any catalog play for the role.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPlayCaller;

impl PlayCaller for UniformPlayCaller {
    fn select_offense(
        &self,
        _down: u8,
        _yards_to_go: i32,
        rng: &mut dyn PlayRng,
    ) -> OffensivePlayId {
        pick_from(rng, &OffensivePlayId::ALL)
    }

    fn select_defense(
        &self,
        _down: u8,
        _yards_to_go: i32,
        rng: &mut dyn PlayRng,
    ) -> DefensivePlayId {
        pick_from(rng, &DefensivePlayId::ALL)
    }
}
