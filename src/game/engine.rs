//! Game engine: creating games and advancing them one play at a time.
//!
//! ## Play Sequence
//!
//! `apply_play` is a pure transformer over [`GameState`]. For one play it:
//!
//! 1. Validates the caller's play for the role they hold on this down
//! 2. Asks the [`PlayCaller`] for the CPU's call
//! 3. Resolves the matchup with both team ratings
//! 4. Applies the drive transition and logs the description
//! 5. Runs the clock
//!
//! Randomness is drawn from the injected RNG in exactly that order, so a
//! seeded RNG replays a game exactly.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::ai::{HeuristicPlayCaller, PlayCaller};
use crate::catalog::{Catalog, DefensivePlayId, OffensivePlayId, PlayCall, TeamId};
use crate::core::{EngineConfig, EngineError, PlayRng, Side};
use crate::resolver::{OutcomeResolver, PlayOutcome};

use super::clock::{self, ClockEvent};
use super::drive::{self, DriveEvent};
use super::state::GameState;

/// Everything one play produced.
#[derive(Clone, Debug, Serialize)]
pub struct PlayReport {
    /// State after the play.
    pub state: GameState,
    /// Log line for the play.
    pub description: String,
    /// Display name of the offensive play run.
    pub offensive_play: &'static str,
    /// Display name of the defensive play called.
    pub defensive_play: &'static str,
    /// Offensive call.
    pub offense_call: OffensivePlayId,
    /// Defensive call.
    pub defense_call: DefensivePlayId,
    /// Raw resolver output.
    pub outcome: PlayOutcome,
    /// Drive transition taken.
    pub event: DriveEvent,
    /// Clock transition taken.
    pub clock: ClockEvent,
    /// Whether a quarter ended on this play.
    pub quarter_ended: bool,
    /// Whether the game ended on this play.
    pub game_over: bool,
}

/// Creates games and applies plays.
///
/// Generic over the CPU's [`PlayCaller`]; the default is the heuristic
/// caller.
#[derive(Clone, Debug)]
pub struct GameEngine<C: PlayCaller = HeuristicPlayCaller> {
    config: EngineConfig,
    resolver: OutcomeResolver,
    caller: C,
}

impl Default for GameEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            resolver: OutcomeResolver::new(&config),
            config,
            caller: HeuristicPlayCaller,
        }
    }
}

impl GameEngine {
    /// Create an engine with the heuristic CPU.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_caller(config, HeuristicPlayCaller)
    }
}

impl<C: PlayCaller> GameEngine<C> {
    /// Create an engine with a custom CPU play caller.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `config` does not validate.
    pub fn with_caller(config: EngineConfig, caller: C) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            resolver: OutcomeResolver::new(&config),
            config,
            caller,
        })
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// CPU play caller.
    #[must_use]
    pub fn caller(&self) -> &C {
        &self.caller
    }

    /// Start a game for the team with key `player_team`.
    ///
    /// The CPU team is drawn uniformly from the remaining teams.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTeam`] if the key is unknown.
    #[instrument(skip(self, rng))]
    pub fn create_game<R: PlayRng>(
        &self,
        player_team: &str,
        rng: &mut R,
    ) -> Result<GameState, EngineError> {
        let player: TeamId = player_team
            .parse()
            .map_err(|_| EngineError::InvalidTeam(player_team.to_string()))?;

        let available: SmallVec<[TeamId; 8]> = Catalog::global()
            .team_ids()
            .filter(|&team| team != player)
            .collect();
        let cpu = available[rng.pick(available.len())];

        self.create_matchup(player, cpu)
    }

    /// Start a game between two given teams.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTeam`] if both sides are the same team.
    pub fn create_matchup(&self, player: TeamId, cpu: TeamId) -> Result<GameState, EngineError> {
        if player == cpu {
            return Err(EngineError::InvalidTeam(cpu.key().to_string()));
        }
        info!(%player, %cpu, "game created");
        Ok(GameState::new(player, cpu, &self.config))
    }

    /// Run one play with the human's call `chosen_play`.
    ///
    /// The key is read as an offensive play when the player has the ball and
    /// as a defensive play otherwise. `state` is not modified; the next state
    /// is in the report.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the fourth quarter has expired
    /// - [`EngineError::InvalidPlay`] if the key is not a play for the
    ///   player's current role
    #[instrument(
        skip(self, state, rng),
        fields(quarter = state.quarter, down = state.down, possession = %state.possession)
    )]
    pub fn apply_play<R: PlayRng>(
        &self,
        state: &GameState,
        chosen_play: &str,
        rng: &mut R,
    ) -> Result<PlayReport, EngineError> {
        if state.is_over() {
            return Err(EngineError::GameOver);
        }

        let role = state.role_of(Side::Player);
        let chosen = PlayCall::parse(chosen_play, role).map_err(|_| EngineError::InvalidPlay {
            key: chosen_play.to_string(),
            role,
        })?;

        let (offense_call, defense_call) = match chosen {
            PlayCall::Offense(offense) => (
                offense,
                self.caller.select_defense(state.down, state.yards_to_go, &mut *rng),
            ),
            PlayCall::Defense(defense) => (
                self.caller.select_offense(state.down, state.yards_to_go, &mut *rng),
                defense,
            ),
        };

        let catalog = Catalog::global();
        let offense_team = catalog.team(state.team(state.possession));
        let defense_team = catalog.team(state.team(state.defense()));
        let offensive_play = catalog.offensive_play(offense_call);
        let defensive_play = catalog.defensive_play(defense_call);

        let outcome = self.resolver.resolve(
            offense_call,
            defense_call,
            offense_team.rating,
            defense_team.rating,
            rng,
        );

        let mut next = state.clone();
        let event = drive::apply_outcome(&mut next, &outcome, &self.config);
        let description = event.describe(offensive_play.name);
        next.game_log.record(description.clone(), self.config.log_capacity);

        debug!(
            offense = %offense_call,
            defense = %defense_call,
            yards = outcome.yards,
            ?event,
            "play resolved"
        );
        if let Some((scorer, points)) = event.points() {
            info!(%scorer, points, player = next.scores.player, cpu = next.scores.cpu, "score");
        }

        let elapsed = clock::draw_runoff(rng, &self.config);
        let clock_event = clock::run_clock(&mut next, elapsed, &self.config);
        match clock_event {
            ClockEvent::QuarterEnded { next_quarter } => info!(next_quarter, "quarter ended"),
            ClockEvent::GameOver => info!(
                player = next.scores.player,
                cpu = next.scores.cpu,
                "game over"
            ),
            ClockEvent::Running => {}
        }

        debug_assert!(
            next.check_invariants().is_empty(),
            "invariants broken: {:?}",
            next.check_invariants()
        );

        Ok(PlayReport {
            state: next,
            description,
            offensive_play: offensive_play.name,
            defensive_play: defensive_play.name,
            offense_call,
            defense_call,
            outcome,
            event,
            clock: clock_event,
            quarter_ended: matches!(clock_event, ClockEvent::QuarterEnded { .. }),
            game_over: clock_event == ClockEvent::GameOver,
        })
    }

    /// Current state of a game, as a fresh snapshot.
    #[must_use]
    pub fn get_state(&self, state: &GameState) -> GameState {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::UniformPlayCaller;
    use crate::core::{GameRng, Role, ScriptedRng};

    #[test]
    fn test_create_game_picks_other_team() {
        let engine = GameEngine::default();
        for seed in 0..40 {
            let mut rng = GameRng::new(seed);
            let state = engine.create_game("patriots", &mut rng).unwrap();
            assert_eq!(state.player_team, TeamId::Patriots);
            assert_ne!(state.cpu_team, TeamId::Patriots);
        }
    }

    #[test]
    fn test_create_game_pick_indexes_remaining_teams() {
        // Eagles removed, so index 0 is the Patriots.
        let mut rng = ScriptedRng::new().with_picks([0]);
        let state = GameEngine::default().create_game("eagles", &mut rng).unwrap();
        assert_eq!(state.cpu_team, TeamId::Patriots);
    }

    #[test]
    fn test_create_game_unknown_team() {
        let mut rng = GameRng::new(1);
        let err = GameEngine::default().create_game("jets", &mut rng).unwrap_err();
        assert_eq!(err, EngineError::InvalidTeam("jets".to_string()));
    }

    #[test]
    fn test_create_matchup_rejects_same_team() {
        let engine = GameEngine::default();
        assert!(matches!(
            engine.create_matchup(TeamId::Colts, TeamId::Colts),
            Err(EngineError::InvalidTeam(_))
        ));
        assert!(engine.create_matchup(TeamId::Colts, TeamId::Eagles).is_ok());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EngineConfig::default().with_log_capacity(0);
        assert!(matches!(
            GameEngine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_apply_play_wrong_role() {
        let engine = GameEngine::default();
        let state = engine.create_matchup(TeamId::Eagles, TeamId::Colts).unwrap();
        let mut rng = GameRng::new(2);

        let err = engine.apply_play(&state, "cover_2", &mut rng).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPlay {
                key: "cover_2".to_string(),
                role: Role::Offense
            }
        );
    }

    #[test]
    fn test_apply_play_leaves_input_untouched() {
        let engine = GameEngine::default();
        let state = engine.create_matchup(TeamId::Eagles, TeamId::Colts).unwrap();
        let before = state.clone();
        let mut rng = GameRng::new(3);

        let report = engine.apply_play(&state, "slants", &mut rng).unwrap();

        assert_eq!(state, before);
        assert_eq!(report.offensive_play, "Slants");
        assert_eq!(report.state.game_log.len(), 1);
        assert_eq!(report.state.game_log.latest(), Some(report.description.as_str()));
        assert!(report.state.time_remaining <= 900 - 25);
    }

    #[test]
    fn test_apply_play_scripted() {
        // CPU picks cover_2 on 1st & 10, slants rolls 9 - 1 (ratings 85 vs 93),
        // halved to 4, no interception, no fumble, 30 seconds off.
        let engine = GameEngine::default();
        let state = engine.create_matchup(TeamId::Packers, TeamId::Colts).unwrap();
        let mut rng = ScriptedRng::new()
            .with_picks([1])
            .with_rolls([9, 30])
            .with_chances([false, false]);

        let report = engine.apply_play(&state, "slants", &mut rng).unwrap();

        assert_eq!(report.defense_call, DefensivePlayId::Cover2);
        assert_eq!(report.defensive_play, "Cover 2");
        assert_eq!(report.description, "4 yards on Slants");
        assert_eq!(report.state.down, 2);
        assert_eq!(report.state.yards_to_go, 6);
        assert_eq!(report.state.field_position, 24);
        assert_eq!(report.state.time_remaining, 870);
        assert!(!report.quarter_ended);
        assert!(!report.game_over);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_player_on_defense() {
        let engine = GameEngine::with_caller(EngineConfig::default(), UniformPlayCaller).unwrap();
        let mut state = engine.create_matchup(TeamId::Steelers, TeamId::Cowboys).unwrap();
        state.possession = Side::Cpu;
        let mut rng = GameRng::new(4);

        assert!(engine.apply_play(&state, "hb_dive", &mut rng).is_err());
        let report = engine.apply_play(&state, "blitz", &mut rng).unwrap();
        assert_eq!(report.defense_call, DefensivePlayId::Blitz);
    }

    #[test]
    fn test_apply_play_after_game_over() {
        let engine = GameEngine::default();
        let mut state = engine.create_matchup(TeamId::Eagles, TeamId::Colts).unwrap();
        state.quarter = 4;
        state.time_remaining = 0;
        let mut rng = GameRng::new(5);

        assert_eq!(
            engine.apply_play(&state, "hb_dive", &mut rng).unwrap_err(),
            EngineError::GameOver
        );
    }

    #[test]
    fn test_get_state_is_snapshot() {
        let engine = GameEngine::default();
        let state = engine.create_matchup(TeamId::Eagles, TeamId::Colts).unwrap();
        assert_eq!(engine.get_state(&state), state);
        assert_eq!(engine.get_state(&engine.get_state(&state)), state);
    }
}
