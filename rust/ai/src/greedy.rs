//! Greedy opponent: the original table's scan, consolidated onto the shared
//! legality predicate.

use stackfish_engine::cards::{Card, Rank};
use stackfish_engine::engine::Opponent;
use stackfish_engine::game::MatchState;
use stackfish_engine::rules::validate_play;

/// Proposes the first legal same-rank group found in the playable source.
///
/// Candidates are scanned in stored order; the first card whose rank the
/// stack accepts anchors the group, and every other candidate of that rank
/// joins it. No lookahead, no valuation — the point is a fast legal move,
/// and legality comes from the same predicate the confirm path uses.
#[derive(Debug, Clone, Default)]
pub struct GreedyOpponent;

impl GreedyOpponent {
    pub fn new() -> Self {
        Self
    }
}

/// Group same-rank candidates behind the first legal anchor, if any.
pub(crate) fn first_legal_group(state: &MatchState) -> Option<Vec<Card>> {
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

/// All legal same-rank groups, one per playable rank.
pub(crate) fn legal_groups(state: &MatchState) -> Vec<(Rank, Vec<Card>)> {
    let candidates = state.active_player().source_cards();
    let top = state.stack.top();
    let second = state.stack.second_from_top();

    let mut seen = [false; 14];
    let mut groups = Vec::new();
    for card in &candidates {
        let rank = card.rank();
        if seen[rank as usize] {
            continue;
        }
        seen[rank as usize] = true;
        if validate_play(top, second, rank).is_accept() {
            let group: Vec<Card> = candidates
                .iter()
                .copied()
                .filter(|c| c.rank() == rank)
                .collect();
            groups.push((rank, group));
        }
    }
    groups
}

impl Opponent for GreedyOpponent {
    fn propose_play(&self, state: &MatchState) -> Vec<Card> {
        first_legal_group(state).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfish_engine::cards::Suit;
    use stackfish_engine::deck::Pool;
    use stackfish_engine::game::{MatchState, Phase};
    use stackfish_engine::player::Player;
    use stackfish_engine::rules::Ruling;
    use stackfish_engine::stack::Stack;

    /// A state whose active hand is exactly `hand`, with the remaining deck
    /// parked in the pool so conservation stays intact.
    fn state_with(hand: &[Card], stack_cards: &[Card]) -> MatchState {
        let mut players = [Player::new(0, "ai", true), Player::new(1, "other", false)];
        players[0].add_cards(hand.iter().copied());

        let mut stack = Stack::new();
        for c in stack_cards {
            stack.push_play(&[*c], c.rank());
        }

        let pool: Vec<Card> = stackfish_engine::cards::full_deck()
            .into_iter()
            .filter(|c| !hand.contains(c) && !stack_cards.contains(c))
            .collect();

        MatchState {
            phase: Phase::SelectingCards,
            active: 0,
            last_rank: None,
            pool: Pool::from_cards(pool),
            stack,
            players,
        }
    }

    #[test]
    fn proposes_whole_rank_group() {
        let hand = [
            Card::of(Rank::Nine, Suit::Spades),
            Card::of(Rank::Four, Suit::Hearts),
            Card::of(Rank::Nine, Suit::Clubs),
        ];
        let state = state_with(&hand, &[]);
        let proposal = GreedyOpponent::new().propose_play(&state);
        // Empty stack: the first card's rank anchors, both nines join.
        assert_eq!(proposal.len(), 2);
        assert!(proposal.iter().all(|c| c.rank() == Rank::Nine));
    }

    #[test]
    fn skips_illegal_ranks_for_a_legal_one() {
        let hand = [
            Card::of(Rank::Four, Suit::Spades),
            Card::of(Rank::Queen, Suit::Hearts),
        ];
        let state = state_with(&hand, &[Card::of(Rank::Jack, Suit::Diamonds)]);
        let proposal = GreedyOpponent::new().propose_play(&state);
        assert_eq!(proposal, vec![Card::of(Rank::Queen, Suit::Hearts)]);
    }

    #[test]
    fn empty_proposal_when_nothing_is_legal() {
        // A King on a Seven with no wilds in hand: no legal group.
        let hand = [
            Card::of(Rank::King, Suit::Spades),
            Card::of(Rank::Nine, Suit::Hearts),
            Card::of(Rank::Ace, Suit::Clubs),
        ];
        let state = state_with(&hand, &[Card::of(Rank::Seven, Suit::Spades)]);
        assert!(GreedyOpponent::new().propose_play(&state).is_empty());
    }

    #[test]
    fn proposals_always_pass_the_shared_predicate() {
        // Scan a spread of stack tops; every non-empty proposal must be one
        // the confirm path would also accept.
        let hand = [
            Card::of(Rank::Two, Suit::Spades),
            Card::of(Rank::Six, Suit::Hearts),
            Card::of(Rank::Six, Suit::Clubs),
            Card::of(Rank::King, Suit::Diamonds),
        ];
        for top_rank in stackfish_engine::cards::all_ranks() {
            let top = Card::of(top_rank, Suit::Hearts);
            let state = state_with(&hand, &[top]);
            let proposal = GreedyOpponent::new().propose_play(&state);
            if proposal.is_empty() {
                continue;
            }
            let ruling = validate_play(
                state.stack.top(),
                state.stack.second_from_top(),
                proposal[0].rank(),
            );
            assert!(
                matches!(ruling, Ruling::Accept { .. }),
                "illegal proposal {:?} on top {:?}",
                proposal,
                top_rank
            );
        }
    }
}
