//! Full-game simulation with both sides called by AI.
//!
//! Used for benchmarks, soak tests and balance checks. The CPU uses the
//! engine's caller and the human side uses a second caller, each on its own
//! forked RNG stream so one side's choices never shift the other's draws.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::ai::{HeuristicPlayCaller, PlayCaller};
use crate::catalog::TeamId;
use crate::core::{EngineError, GameRng, Side};

use super::engine::GameEngine;
use super::state::GameState;

/// How a finished game came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// One side finished ahead.
    Winner(Side),
    /// Scores level at the final whistle.
    Tie,
}

impl GameResult {
    /// Result implied by the current score.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        state.leader().map_or(GameResult::Tie, GameResult::Winner)
    }
}

/// Summary of a simulated game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSummary {
    /// State after the last play.
    pub final_state: GameState,
    /// Plays run.
    pub plays: usize,
    /// Every play description, oldest first.
    pub descriptions: Vec<String>,
    /// Final result.
    pub result: GameResult,
    /// Whether the game reached the end of the fourth quarter.
    pub completed: bool,
}

/// Simulate a whole game with the heuristic caller on the human side.
///
/// # Errors
///
/// Propagates any [`EngineError`] from the engine. With a validated config
/// and catalog keys this does not happen in practice.
pub fn simulate_game<C: PlayCaller>(
    engine: &GameEngine<C>,
    player_team: TeamId,
    seed: u64,
) -> Result<GameSummary, EngineError> {
    simulate_game_with(engine, &HeuristicPlayCaller, player_team, seed)
}

/// Simulate a whole game with a custom caller on the human side.
///
/// Stops at the end of the fourth quarter or after
/// `max_autoplay_plays` plays, whichever comes first.
///
/// # Errors
///
/// Propagates any [`EngineError`] from the engine.
#[instrument(skip(engine, player_caller))]
pub fn simulate_game_with<C: PlayCaller>(
    engine: &GameEngine<C>,
    player_caller: &dyn PlayCaller,
    player_team: TeamId,
    seed: u64,
) -> Result<GameSummary, EngineError> {
    let mut rng = GameRng::new(seed);
    let mut player_rng = rng.fork();

    let mut state = engine.create_game(player_team.key(), &mut rng)?;
    let mut descriptions = Vec::new();
    let mut completed = false;

    while descriptions.len() < engine.config().max_autoplay_plays {
        let call = player_caller.select_play(
            state.role_of(Side::Player),
            state.down,
            state.yards_to_go,
            &mut player_rng,
        );
        let report = engine.apply_play(&state, call.key(), &mut rng)?;

        descriptions.push(report.description);
        state = report.state;
        if report.game_over {
            completed = true;
            break;
        }
    }

    if !completed {
        warn!(plays = descriptions.len(), "play cap reached before the final whistle");
    }

    let result = GameResult::from_state(&state);
    info!(
        player = state.scores.player,
        cpu = state.scores.cpu,
        plays = descriptions.len(),
        ?result,
        "simulation finished"
    );

    Ok(GameSummary {
        plays: descriptions.len(),
        final_state: state,
        descriptions,
        result,
        completed,
    })
}
