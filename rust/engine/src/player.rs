use serde::{Deserialize, Serialize};

use crate::books::{extract_books, Book};
use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Which zone the active player currently plays from. The hand always comes
/// first; book zones only open up once everything before them is spent.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaySource {
    Hand,
    VisibleBooks,
    HiddenBooks,
    /// Nothing left to play from.
    Exhausted,
}

/// One seat at the table: identity plus every card zone the player owns.
/// Hand order carries no rule meaning; books are indivisible groups of four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: u8,
    name: String,
    is_ai: bool,
    hand: Vec<Card>,
    books: Vec<Book>,
    hidden_books: Vec<Book>,
}

impl Player {
    pub fn new(id: u8, name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_ai,
            hand: Vec::new(),
            books: Vec::new(),
            hidden_books: Vec::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    pub fn set_ai(&mut self, is_ai: bool) {
        self.is_ai = is_ai;
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn hidden_books(&self) -> &[Book] {
        &self.hidden_books
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn add_hidden_book(&mut self, book: Book) {
        self.hidden_books.push(book);
    }

    /// Remove specific cards from the hand. All-or-nothing: a missing card
    /// means a caller bug upstream, so the hand is left untouched.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        let owned = cards.iter().filter(|c| self.hand.contains(c)).count();
        if owned < cards.len() {
            return Err(GameError::InsufficientCards {
                requested: cards.len(),
                available: owned,
            });
        }
        self.hand.retain(|c| !cards.contains(c));
        Ok(())
    }

    /// Pull a whole book group out of a book zone for play.
    pub fn take_book(&mut self, rank: Rank) -> Option<Book> {
        if let Some(pos) = self.books.iter().position(|b| b.rank() == rank) {
            return Some(self.books.remove(pos));
        }
        if let Some(pos) = self.hidden_books.iter().position(|b| b.rank() == rank) {
            return Some(self.hidden_books.remove(pos));
        }
        None
    }

    /// Run book detection over the hand, moving every completed group into
    /// the visible books. Returns the newly completed books.
    pub fn collect_books(&mut self) -> Vec<Book> {
        let made = extract_books(&mut self.hand);
        self.books.extend(made.iter().cloned());
        made
    }

    /// The zone the player must play from right now (hand, then visible
    /// books, then hidden books).
    pub fn play_source(&self) -> PlaySource {
        if !self.hand.is_empty() {
            PlaySource::Hand
        } else if !self.books.is_empty() {
            PlaySource::VisibleBooks
        } else if !self.hidden_books.is_empty() {
            PlaySource::HiddenBooks
        } else {
            PlaySource::Exhausted
        }
    }

    /// Candidate cards in the current play source, in stored order.
    pub fn source_cards(&self) -> Vec<Card> {
        match self.play_source() {
            PlaySource::Hand => self.hand.clone(),
            PlaySource::VisibleBooks => {
                self.books.iter().flat_map(|b| b.cards().iter().copied()).collect()
            }
            PlaySource::HiddenBooks => self
                .hidden_books
                .iter()
                .flat_map(|b| b.cards().iter().copied())
                .collect(),
            PlaySource::Exhausted => Vec::new(),
        }
    }

    /// Completed books, visible and hidden.
    pub fn book_count(&self) -> usize {
        self.books.len() + self.hidden_books.len()
    }

    /// Cards owned across every zone; the player's share of conservation.
    pub fn card_count(&self) -> usize {
        self.hand.len() + 4 * self.book_count()
    }

    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand
            .iter()
            .copied()
            .chain(self.books.iter().flat_map(|b| b.cards().iter().copied()))
            .chain(self.hidden_books.iter().flat_map(|b| b.cards().iter().copied()))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.play_source(), PlaySource::Exhausted)
    }
}
