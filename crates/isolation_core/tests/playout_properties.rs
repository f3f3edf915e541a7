//! Invariants checked along many random playouts.
//!
//! Each playout walks from the empty board to a terminal state picking
//! uniformly random legal moves; every intermediate state is checked.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use isolation_core::{GameState, Player};

const BOARDS: [(u8, u8); 5] = [(3, 2), (4, 4), (5, 3), (7, 7), (11, 9)];
const PLAYOUTS_PER_BOARD: u64 = 200;

fn check_state(state: &GameState) {
    let actions = state.actions();

    // One cell blocked per ply plus the pre-blocked corner.
    assert_eq!(
        state.open_cells(),
        state.board_size() - 1 - state.ply_count() as usize
    );

    // Generated actions are distinct open cells.
    for (i, a) in actions.iter().enumerate() {
        assert!(state.is_open(*a), "action {a} is not open");
        assert!(!actions[..i].contains(a), "duplicate action {a}");
    }

    assert_eq!(actions.is_empty(), !state.has_liberties(state.player()));
    if actions.is_empty() {
        assert!(state.terminal_test());
    }

    if state.terminal_test() {
        let u = state.utility(Player::One);
        assert!(u == f64::INFINITY || u == f64::NEG_INFINITY);
        assert_eq!(u, -state.utility(Player::Two));
    } else {
        assert_eq!(state.utility(Player::One), 0.0);
        assert_eq!(state.utility(Player::Two), 0.0);
    }
}

fn playout(width: u8, height: u8, seed: u64) -> u32 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(width, height).unwrap();

    loop {
        check_state(&state);
        if state.terminal_test() {
            return state.ply_count();
        }

        let actions = state.actions();
        let action = *actions.choose(&mut rng).unwrap();
        let before = state.clone();
        let next = state.result(action).unwrap();

        // Applying a move never touches the receiver.
        assert_eq!(state, before);
        assert_eq!(state.actions(), actions);
        assert_eq!(next.location(state.player()), Some(action));
        assert_eq!(next.player(), state.player().other());

        state = next;
    }
}

#[test]
fn random_playouts_hold_invariants() {
    let cases: Vec<(u8, u8, u64)> = BOARDS
        .iter()
        .flat_map(|&(w, h)| (0..PLAYOUTS_PER_BOARD).map(move |seed| (w, h, seed)))
        .collect();

    let total_plies: u64 = cases
        .par_iter()
        .map(|&(w, h, seed)| u64::from(playout(w, h, seed)))
        .sum();

    // Both tokens are always placed before a game can end.
    assert!(total_plies >= 2 * cases.len() as u64);
}

#[test]
fn opening_moves_may_land_anywhere_open() {
    let state = GameState::new(4, 4).unwrap();
    assert_eq!(state.actions().len(), 15);

    let state = state.result((3, 0).into()).unwrap();
    // Player 2 has not placed a token yet, so every open cell is legal.
    assert_eq!(state.actions().len(), 14);
    assert_eq!(state.actions(), state.liberties(None));
}
