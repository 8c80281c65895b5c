//! Shared helpers for driving scripted matches in integration tests.
// Not every test target uses every helper.
#![allow(dead_code)]

use stackfish_engine::cards::Card;
use stackfish_engine::game::MatchState;
use stackfish_engine::rules::validate_play;

/// First legal same-rank group in the active player's playable source, the
/// way any correct driver would compute one.
pub fn legal_group(state: &MatchState) -> Option<Vec<Card>> {
    let candidates = state.active_player().source_cards();
    let top = state.stack.top();
    let second = state.stack.second_from_top();

    let mut tried = [false; 14];
    for card in &candidates {
        let rank = card.rank();
        if tried[rank as usize] {
            continue;
        }
        tried[rank as usize] = true;
        if validate_play(top, second, rank).is_accept() {
            return Some(
                candidates
                    .iter()
                    .copied()
                    .filter(|c| c.rank() == rank)
                    .collect(),
            );
        }
    }
    None
}

/// A rank group in the active hand the stack rules would currently refuse.
pub fn illegal_group(state: &MatchState) -> Option<Vec<Card>> {
    let hand = state.active_player().hand();
    let top = state.stack.top();
    let second = state.stack.second_from_top();

    for card in hand {
        let rank = card.rank();
        if !validate_play(top, second, rank).is_accept() {
            return Some(hand.iter().copied().filter(|c| c.rank() == rank).collect());
        }
    }
    None
}
