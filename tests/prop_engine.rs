//! Property-based tests for the game engine.
//!
//! Every play, from any seed and any sequence of calls, must leave a
//! consistent state.

use proptest::prelude::*;

use rust_gridiron::{
    simulate_game, Catalog, DefensivePlayId, DriveEvent, GameEngine, GameRng, OffensivePlayId,
    Role, Side, TeamId,
};

fn team_strategy() -> impl Strategy<Value = TeamId> {
    (0..TeamId::ALL.len()).prop_map(|i| TeamId::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The CPU never plays as the player's team.
    #[test]
    fn prop_teams_distinct(team in team_strategy(), seed in any::<u64>()) {
        let engine = GameEngine::default();
        let mut rng = GameRng::new(seed);

        let state = engine.create_game(team.key(), &mut rng).unwrap();

        prop_assert_eq!(state.player_team, team);
        prop_assert_ne!(state.cpu_team, state.player_team);
        prop_assert!(Catalog::global().team_ids().any(|t| t == state.cpu_team));
    }

    /// Invariants hold after every play, and scores move by 0, 2 or 7.
    #[test]
    fn prop_play_sequence_consistent(
        seed in any::<u64>(),
        calls in prop::collection::vec((0usize..6, 0usize..5), 1..150),
    ) {
        let engine = GameEngine::default();
        let mut rng = GameRng::new(seed);
        let mut state = engine.create_game("eagles", &mut rng).unwrap();

        for (offense, defense) in calls {
            if state.is_over() {
                break;
            }
            let key = match state.role_of(Side::Player) {
                Role::Offense => OffensivePlayId::ALL[offense].key(),
                Role::Defense => DefensivePlayId::ALL[defense].key(),
            };

            let report = engine.apply_play(&state, key, &mut rng).unwrap();
            let next = &report.state;

            prop_assert!(next.check_invariants().is_empty(), "{:?}", next.check_invariants());
            prop_assert!(next.yards_to_go > 0);
            prop_assert!(next.game_log.len() <= engine.config().log_capacity);
            prop_assert_eq!(next.game_log.latest(), Some(report.description.as_str()));

            let total_before = state.scores.player + state.scores.cpu;
            let total_after = next.scores.player + next.scores.cpu;
            prop_assert!(matches!(total_after - total_before, 0 | 2 | 7));
            prop_assert!(next.scores.player >= state.scores.player);
            prop_assert!(next.scores.cpu >= state.scores.cpu);

            if report.event.changes_possession() {
                prop_assert_ne!(next.possession, state.possession);
                prop_assert_eq!((next.down, next.yards_to_go), (1, 10));
            } else {
                prop_assert_eq!(next.possession, state.possession);
            }

            if let DriveEvent::Turnover { .. } = report.event {
                prop_assert_eq!(report.outcome.yards, 0);
                prop_assert_eq!(next.field_position, 100 - state.field_position);
            }

            prop_assert_eq!(report.game_over, next.is_over());
            state = report.state;
        }
    }

    /// Reading the state never changes it.
    #[test]
    fn prop_get_state_idempotent(seed in any::<u64>(), plays in 0usize..30) {
        let engine = GameEngine::default();
        let mut rng = GameRng::new(seed);
        let mut state = engine.create_game("colts", &mut rng).unwrap();
        for _ in 0..plays {
            let key = match state.role_of(Side::Player) {
                Role::Offense => "hb_toss",
                Role::Defense => "prevent",
            };
            state = engine.apply_play(&state, key, &mut rng).unwrap().state;
        }

        let first = engine.get_state(&state);
        let second = engine.get_state(&first);

        prop_assert_eq!(&first, &state);
        prop_assert_eq!(&second, &state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Simulated games always reach the final whistle.
    #[test]
    fn prop_autoplay_finishes(team in team_strategy(), seed in any::<u64>()) {
        let summary = simulate_game(&GameEngine::default(), team, seed).unwrap();

        prop_assert!(summary.completed);
        prop_assert!(summary.final_state.is_over());
        prop_assert_eq!(summary.plays, summary.descriptions.len());
        prop_assert!(summary.final_state.check_invariants().is_empty());
    }
}
