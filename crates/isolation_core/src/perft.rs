use crate::state::GameState;

/// Pure perft node count.
/// Counts all move sequences of exactly `depth` plies from `state`.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return state.actions().len() as u64;
    }
    state
        .successors()
        .map(|(_, next)| perft(&next, depth - 1))
        .sum()
}
