use super::*;
use isolation_core::Cell;

#[test]
fn greedy_prefers_the_centre_on_3x2() {
    // From (0,0), (1,1) keeps 2 liberties while (0,1) keeps 1.
    let state = GameState::replay(3, 2, &[Cell::new(0, 0), Cell::new(1, 0)]).unwrap();
    assert_eq!(GreedyEngine::best_action(&state), Some((Cell::new(1, 1), 2)));
}

#[test]
fn greedy_ties_go_to_first_action() {
    // On an empty board every placement is scored by its own rays; the
    // first cell reaching the maximum wins.
    let state = GameState::new(3, 3).unwrap();
    let (action, mobility) = GreedyEngine::best_action(&state).unwrap();
    assert_eq!(action, Cell::new(1, 1));
    assert_eq!(mobility, 7);
}

#[test]
fn greedy_publishes_once_at_depth_one() {
    let state = GameState::replay(5, 5, &[Cell::new(0, 0), Cell::new(4, 0)]).unwrap();
    let slot = ActionSlot::new();
    GreedyEngine::new().get_action(&state, &SearchLimits::depth(1), &slot, &mut None);

    let decision = slot.latest().unwrap();
    assert_eq!(decision.depth, 1);
    assert!(state.actions().contains(&decision.action));
    let (best, mobility) = GreedyEngine::best_action(&state).unwrap();
    assert_eq!(decision.action, best);
    assert_eq!(decision.score, mobility as f64);
}

#[test]
fn greedy_handles_no_moves() {
    let state = GameState::replay(4, 1, &[Cell::new(0, 0), Cell::new(1, 0)]).unwrap();
    let slot = ActionSlot::new();
    GreedyEngine::new().get_action(&state, &SearchLimits::depth(1), &slot, &mut None);
    assert_eq!(slot.latest(), None);
}
