use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, Rank};
use crate::errors::GameError;

/// The ordered pool of undealt cards. Cards only ever leave the pool;
/// nothing is returned to it until a new match shuffles a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    /// Build a full 52-card pool in a uniformly random order.
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the card at the dealing end of the pool.
    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::PoolEmpty)
    }

    /// Remove `n` cards from the dealing end, in draw order.
    /// Partial deals are refused: the pool is untouched on error.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        let mut taken = self.cards.split_off(self.cards.len() - n);
        taken.reverse();
        Ok(taken)
    }

    /// Remove every remaining card of one rank (pre-dealt book construction).
    pub fn extract_rank(&mut self, rank: Rank) -> Vec<Card> {
        let mut taken = Vec::new();
        self.cards.retain(|c| {
            if c.rank() == rank {
                taken.push(*c);
                false
            } else {
                true
            }
        });
        taken
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
