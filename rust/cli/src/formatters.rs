//! Text rendering of cards, hands, and the stack for terminal display.

use stackfish_engine::cards::{Card, Rank, Suit};
use stackfish_engine::player::Player;
use stackfish_engine::stack::Stack;

pub fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
    }
}

pub fn rank_symbol(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        other => other.name(),
    }
}

pub fn format_card(card: Card) -> String {
    format!("{}{}", rank_symbol(card.rank()), suit_symbol(card.suit()))
}

/// Render a hand sorted by rank, e.g. `A♠ 5♥ 5♦ Q♣`.
pub fn format_hand(cards: &[Card]) -> String {
    let mut sorted: Vec<Card> = cards.to_vec();
    sorted.sort_by_key(|c| (c.rank(), c.suit()));
    sorted
        .iter()
        .map(|c| format_card(*c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line describing what a play has to beat right now.
pub fn format_stack(stack: &Stack) -> String {
    match (stack.top(), stack.second_from_top()) {
        (None, _) => "Stack: empty".to_string(),
        (Some(top), None) => format!("Stack: {} ({} cards)", format_card(top), stack.len()),
        (Some(top), Some(under)) => format!(
            "Stack: {} over {} ({} cards)",
            format_card(top),
            format_card(under),
            stack.len()
        ),
    }
}

/// Book summary, e.g. `books: Queen, 7 | hidden: 3`.
pub fn format_books(player: &Player) -> String {
    let visible = player
        .books()
        .iter()
        .map(|b| b.rank().name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "books: {} | hidden: {}",
        if visible.is_empty() { "-" } else { &visible },
        player.hidden_books().len()
    )
}
