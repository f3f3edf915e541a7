//! Search properties checked over many random mid-game positions.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use alpha_beta_engine::{alpha_beta_search, AlphaBetaEngine, EngineConfig, SearchStats, Strategy};
use isolation_core::{decide_move, GameState, TimeControl};

fn random_state(width: u8, height: u8, plies: u32, seed: u64) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(width, height).unwrap();
    while state.ply_count() < plies && !state.terminal_test() {
        let action = *state.actions().choose(&mut rng).unwrap();
        state = state.result(action).unwrap();
    }
    state
}

fn root_score(state: &GameState, depth: u8, config: &EngineConfig) -> Option<f64> {
    let mut stats = SearchStats::default();
    let tc = TimeControl::new(None);
    tc.start();
    let outcome = alpha_beta_search(state, depth, config, &mut stats, &tc);
    assert!(!outcome.stopped);
    outcome.best_move.map(|(_, score)| score)
}

#[test]
fn pruning_never_changes_root_score() {
    (0..160u64).into_par_iter().for_each(|seed| {
        let (width, height) = [(4, 4), (5, 4), (5, 5)][(seed % 3) as usize];
        let state = random_state(width, height, 2 + (seed % 7) as u32, seed);
        if state.terminal_test() {
            return;
        }

        let strategy = Strategy::ALL[(seed % 4) as usize];
        let pruned = EngineConfig {
            strategy,
            ..EngineConfig::default()
        };
        let full = EngineConfig {
            prune: false,
            ..pruned.clone()
        };

        for depth in 1..=4 {
            assert_eq!(
                root_score(&state, depth, &pruned),
                root_score(&state, depth, &full),
                "seed {seed} depth {depth} {strategy}"
            );
        }
    });
}

#[test]
fn decide_move_returns_legal_actions() {
    (0..24u64).into_par_iter().for_each(|seed| {
        let state = random_state(7, 7, (seed % 12) as u32, seed);
        if state.terminal_test() {
            return;
        }

        let mut engine = AlphaBetaEngine::with_config(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        });
        let (action, context) =
            decide_move(&mut engine, &state, Duration::from_millis(30), None).unwrap();

        assert!(state.actions().contains(&action), "seed {seed}: {action}");
        assert!(context.is_some());
    });
}

#[test]
fn full_depth_search_solves_small_boards() {
    // With depth covering every open cell the root score is exact, so the
    // chosen move must keep the same result one ply later.
    (0..40u64).into_par_iter().for_each(|seed| {
        let state = random_state(4, 3, 3 + (seed % 3) as u32, seed);
        if state.terminal_test() {
            return;
        }
        let config = EngineConfig::default();
        let depth = state.open_cells() as u8;

        let mut stats = SearchStats::default();
        let tc = TimeControl::new(None);
        let outcome = alpha_beta_search(&state, depth, &config, &mut stats, &tc);
        let (action, score) = outcome.best_move.unwrap();
        assert!(score.is_infinite(), "seed {seed}: {score}");

        let next = state.result(action).unwrap();
        if next.terminal_test() {
            assert_eq!(next.utility(state.player()), score);
        } else {
            let reply = root_score(&next, depth - 1, &config).unwrap();
            assert_eq!(reply, -score, "seed {seed}");
        }
    });
}
