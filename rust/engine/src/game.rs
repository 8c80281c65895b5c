use serde::{Deserialize, Serialize};

use crate::cards::{Rank, DECK_SIZE};
use crate::deck::Pool;
use crate::errors::GameError;
use crate::player::Player;
use crate::stack::Stack;

/// Number of seats at the table.
pub const SEATS: u8 = 2;

/// The turn state machine's phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Match created, nothing dealt yet.
    Started,
    /// Between turns; the next active player is about to be picked.
    TurnStarted,
    /// The active player is choosing same-rank cards (or taking the pile).
    SelectingCards,
    /// A selection is being resolved against the stack rules.
    ConfirmedSelection,
    /// Match over.
    Finished,
}

/// The single authoritative state of one match. Everything the serializer
/// snapshots lives here; the engine's event queue and pending selection are
/// derived views rebuilt after a snapshot replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    /// Seat index of the active player.
    pub active: u8,
    /// Rank of the most recently confirmed play.
    pub last_rank: Option<Rank>,
    pub pool: Pool,
    pub stack: Stack,
    pub players: [Player; 2],
}

impl MatchState {
    pub fn active_player(&self) -> &Player {
        &self.players[self.active as usize]
    }

    pub fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active as usize]
    }

    /// Total books completed so far across both seats.
    pub fn books_claimed(&self) -> usize {
        self.players.iter().map(|p| p.book_count()).sum()
    }

    /// The seat holding the majority of completed books, if the counts differ.
    pub fn winner(&self) -> Option<u8> {
        let a = self.players[0].book_count();
        let b = self.players[1].book_count();
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Check the structural invariants every reachable state must satisfy:
    /// a sane active seat, and each of the 52 card ids in exactly one zone.
    /// This is the gate every deserialized snapshot must pass.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.active >= SEATS {
            return Err(GameError::PlayerNotFound(self.active));
        }
        for (i, p) in self.players.iter().enumerate() {
            if p.id() != i as u8 {
                return Err(GameError::PlayerNotFound(p.id()));
            }
        }

        let mut seen = [false; DECK_SIZE as usize];
        let mut total = 0usize;
        let cards = self
            .pool
            .cards()
            .iter()
            .copied()
            .chain(self.stack.all_cards())
            .chain(self.players.iter().flat_map(|p| p.all_cards()));
        for card in cards {
            let slot = &mut seen[card.id() as usize];
            if *slot {
                return Err(GameError::CorruptState(format!(
                    "card {} appears in more than one zone",
                    card
                )));
            }
            *slot = true;
            total += 1;
        }
        if total != DECK_SIZE as usize {
            return Err(GameError::CorruptState(format!(
                "{} cards accounted for, expected {}",
                total, DECK_SIZE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::full_deck;

    fn fresh_state() -> MatchState {
        MatchState {
            phase: Phase::Started,
            active: 0,
            last_rank: None,
            pool: Pool::from_cards(full_deck()),
            stack: Stack::new(),
            players: [Player::new(0, "a", false), Player::new(1, "b", true)],
        }
    }

    #[test]
    fn full_pool_state_is_valid() {
        assert_eq!(fresh_state().validate(), Ok(()));
    }

    #[test]
    fn duplicated_card_is_corrupt() {
        let mut state = fresh_state();
        let card = state.pool.cards()[0];
        state.players[0].add_card(card);
        assert!(matches!(
            state.validate(),
            Err(GameError::CorruptState(_))
        ));
    }

    #[test]
    fn missing_card_is_corrupt() {
        let mut state = fresh_state();
        state.pool.draw_one().unwrap();
        assert!(matches!(
            state.validate(),
            Err(GameError::CorruptState(_))
        ));
    }

    #[test]
    fn out_of_range_seat_is_player_not_found() {
        let mut state = fresh_state();
        state.active = 7;
        assert_eq!(state.validate(), Err(GameError::PlayerNotFound(7)));
    }
}
