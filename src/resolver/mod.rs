//! Outcome resolution: offensive play vs defensive play.
//!
//! The resolver turns two play calls and the two team ratings into a
//! [`PlayOutcome`]. It knows nothing about field position, downs or score.
//!
//! # Algorithm
//!
//! 1. Draw a base gain uniformly from the offensive play's yardage range
//! 2. Add `floor((offense_rating - defense_rating) / 10)`
//! 3. Run into a run-strength front keeps 60% of the gain; a pass into
//!    pass-strength coverage keeps 50% and may be intercepted
//! 4. Any play that was not intercepted may be fumbled
//! 5. Clamp the gain to the yardage floor
//!
//! All randomness is drawn from the injected [`PlayRng`], in that order.

mod outcome;

pub use outcome::{PlayOutcome, TurnoverKind};

use tracing::trace;

use crate::catalog::{Catalog, DefensivePlayId, DefensiveStrength, OffensivePlayId, PlayKind};
use crate::core::{EngineConfig, PlayRng};

/// Worst loss a single play can produce.
pub const YARDAGE_FLOOR: i32 = -10;

/// Rating edge in whole yards: the floor of a tenth of the rating gap.
///
/// ```
/// use rust_gridiron::resolver::rating_adjustment;
///
/// assert_eq!(rating_adjustment(94, 85), 0);
/// assert_eq!(rating_adjustment(95, 85), 1);
/// assert_eq!(rating_adjustment(85, 88), -1);
/// ```
#[must_use]
pub const fn rating_adjustment(offense_rating: i32, defense_rating: i32) -> i32 {
    (offense_rating - defense_rating).div_euclid(10)
}

/// Resolves plays into outcomes.
#[derive(Clone, Debug)]
pub struct OutcomeResolver {
    interception_chance: f64,
    fumble_chance: f64,
}

impl Default for OutcomeResolver {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl OutcomeResolver {
    /// Create a resolver with the turnover probabilities from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            interception_chance: config.interception_chance,
            fumble_chance: config.fumble_chance,
        }
    }

    /// Resolve one play.
    pub fn resolve<R: PlayRng>(
        &self,
        offense: OffensivePlayId,
        defense: DefensivePlayId,
        offense_rating: i32,
        defense_rating: i32,
        rng: &mut R,
    ) -> PlayOutcome {
        let catalog = Catalog::global();
        let off_play = catalog.offensive_play(offense);
        let def_play = catalog.defensive_play(defense);

        let base = rng.roll(off_play.yard_range());
        let mut yards = base + rating_adjustment(offense_rating, defense_rating);

        match (off_play.kind, def_play.strength) {
            (PlayKind::Run, DefensiveStrength::Run) => {
                yards = yards * 6 / 10;
            }
            (PlayKind::Pass, DefensiveStrength::Pass) => {
                yards /= 2;
                if rng.chance(self.interception_chance) {
                    trace!(%offense, %defense, base, "intercepted");
                    return PlayOutcome::turnover(TurnoverKind::Interception);
                }
            }
            _ => {}
        }

        if rng.chance(self.fumble_chance) {
            trace!(%offense, %defense, base, "fumbled");
            return PlayOutcome::turnover(TurnoverKind::Fumble);
        }

        trace!(%offense, %defense, base, yards, "resolved");
        PlayOutcome::gain(yards.max(YARDAGE_FLOOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    fn resolver() -> OutcomeResolver {
        OutcomeResolver::default()
    }

    #[test]
    fn test_rating_adjustment_floors() {
        assert_eq!(rating_adjustment(90, 90), 0);
        assert_eq!(rating_adjustment(99, 90), 0);
        assert_eq!(rating_adjustment(90, 91), -1);
        assert_eq!(rating_adjustment(80, 95), -2);
        assert_eq!(rating_adjustment(100, 80), 2);
    }

    #[test]
    fn test_plain_gain() {
        // Slants vs balanced front: no multiplier, no interception roll.
        let mut rng = ScriptedRng::new().with_rolls([9]);
        let outcome = resolver().resolve(
            OffensivePlayId::Slants,
            DefensivePlayId::Normal43,
            94,
            85,
            &mut rng,
        );
        assert_eq!(outcome, PlayOutcome::gain(9));
    }

    #[test]
    fn test_rating_edge_applied() {
        let mut rng = ScriptedRng::new().with_rolls([5]);
        let outcome = resolver().resolve(
            OffensivePlayId::HbDive,
            DefensivePlayId::Prevent,
            85,
            95,
            &mut rng,
        );
        assert_eq!(outcome.yards, 4);
    }

    #[test]
    fn test_run_into_run_front() {
        // 8 + 0 = 8, * 0.6 = 4.8 -> 4
        let mut rng = ScriptedRng::new().with_rolls([8]);
        let outcome = resolver().resolve(
            OffensivePlayId::HbDive,
            DefensivePlayId::GoalLine,
            90,
            90,
            &mut rng,
        );
        assert_eq!(outcome.yards, 4);
        assert!(!outcome.is_turnover());
    }

    #[test]
    fn test_pass_into_coverage_halves() {
        // 15 / 2 = 7
        let mut rng = ScriptedRng::new().with_rolls([15]).with_chances([false, false]);
        let outcome = resolver().resolve(
            OffensivePlayId::Slants,
            DefensivePlayId::Cover2,
            90,
            90,
            &mut rng,
        );
        assert_eq!(outcome.yards, 7);
    }

    #[test]
    fn test_multiplier_truncates_toward_zero() {
        // -5 + 0 = -5, / 2 = -2 (not -3)
        let mut rng = ScriptedRng::new().with_rolls([-5]);
        let outcome = resolver().resolve(
            OffensivePlayId::DeepPost,
            DefensivePlayId::Blitz,
            90,
            90,
            &mut rng,
        );
        assert_eq!(outcome.yards, -2);
    }

    #[test]
    fn test_interception_forces_zero_yards() {
        let mut rng = ScriptedRng::new().with_rolls([40]).with_chances([true, true]);
        let outcome = resolver().resolve(
            OffensivePlayId::DeepPost,
            DefensivePlayId::Cover2,
            94,
            85,
            &mut rng,
        );
        assert_eq!(outcome, PlayOutcome::turnover(TurnoverKind::Interception));
        // The fumble roll is skipped after an interception.
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_fumble_on_run() {
        let mut rng = ScriptedRng::new().with_rolls([12]).with_chances([true]);
        let outcome = resolver().resolve(
            OffensivePlayId::HbToss,
            DefensivePlayId::Normal43,
            90,
            90,
            &mut rng,
        );
        assert_eq!(outcome, PlayOutcome::turnover(TurnoverKind::Fumble));
    }

    #[test]
    fn test_fumble_after_survived_coverage() {
        let mut rng = ScriptedRng::new().with_rolls([10]).with_chances([false, true]);
        let outcome = resolver().resolve(
            OffensivePlayId::Screen,
            DefensivePlayId::Blitz,
            90,
            90,
            &mut rng,
        );
        assert_eq!(outcome.turnover, Some(TurnoverKind::Fumble));
        assert_eq!(outcome.yards, 0);
    }

    #[test]
    fn test_yardage_never_below_floor() {
        let resolver = resolver();
        let mut rng = GameRng::new(11);
        for _ in 0..2_000 {
            let outcome = resolver.resolve(
                OffensivePlayId::DeepPost,
                DefensivePlayId::Prevent,
                80,
                95,
                &mut rng,
            );
            assert!(outcome.yards >= YARDAGE_FLOOR);
            assert!(!outcome.touchdown_hint);
        }
    }

    #[test]
    fn test_no_turnovers_when_disabled() {
        let config = EngineConfig::default().with_turnover_chances(0.0, 0.0);
        let resolver = OutcomeResolver::new(&config);
        let mut rng = GameRng::new(5);
        for _ in 0..500 {
            let outcome = resolver.resolve(
                OffensivePlayId::PlayActionPass,
                DefensivePlayId::Cover2,
                90,
                90,
                &mut rng,
            );
            assert!(!outcome.is_turnover());
            assert!((2..=12).contains(&outcome.yards));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let resolver = resolver();
        let run = |seed| {
            let mut rng = GameRng::new(seed);
            (0..50)
                .map(|_| {
                    resolver.resolve(
                        OffensivePlayId::Slants,
                        DefensivePlayId::Blitz,
                        92,
                        88,
                        &mut rng,
                    )
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }
}
