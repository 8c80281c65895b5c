use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// A completed four-of-a-kind group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    rank: Rank,
    cards: [Card; 4],
}

impl Book {
    /// Assemble a book from four cards; `None` unless all four share a rank.
    pub fn from_cards(cards: [Card; 4]) -> Option<Book> {
        let rank = cards[0].rank();
        if cards.iter().all(|c| c.rank() == rank) {
            Some(Book { rank, cards })
        } else {
            None
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn cards(&self) -> &[Card; 4] {
        &self.cards
    }
}

/// Extract every completed book from a hand.
///
/// Groups the hand by rank and pulls out each group of exactly four cards;
/// the hand keeps its relative order for everything that stays. Idempotent:
/// a second pass over the same hand finds nothing.
pub fn extract_books(hand: &mut Vec<Card>) -> Vec<Book> {
    let mut counts = [0u8; 14];
    for c in hand.iter() {
        counts[c.rank() as usize] += 1;
    }

    let mut books = Vec::new();
    for rank in crate::cards::all_ranks() {
        if counts[rank as usize] != 4 {
            continue;
        }
        let mut group = Vec::with_capacity(4);
        hand.retain(|c| {
            if c.rank() == rank {
                group.push(*c);
                false
            } else {
                true
            }
        });
        let cards: [Card; 4] = match group.try_into() {
            Ok(cards) => cards,
            Err(_) => continue,
        };
        if let Some(book) = Book::from_cards(cards) {
            books.push(book);
        }
    }
    books
}
