use std::collections::VecDeque;

use crate::cards::{Card, Rank};
use crate::deck::Pool;
use crate::errors::GameError;
use crate::events::{TableEvent, Zone};
use crate::game::{MatchState, Phase};
use crate::logger::{MatchRecord, TurnAction};
use crate::player::{PlaySource, Player};
use crate::rules::{validate_play, Ruling};
use crate::stack::Stack;
use crate::sync;

/// Hand size the active player is refilled to while the pool lasts.
pub const HAND_TARGET: usize = 6;
/// Face-down pre-dealt books per player.
pub const PRE_DEALT_HIDDEN_BOOKS: usize = 2;
/// Face-up pre-dealt books per player.
pub const PRE_DEALT_VISIBLE_BOOKS: usize = 1;
/// Initial hand dealing: rounds of batches per player.
pub const INITIAL_DEAL_ROUNDS: usize = 3;
/// Cards per initial dealing batch.
pub const INITIAL_DEAL_BATCH: usize = 2;

/// A move proposer for an AI-controlled seat.
///
/// Implementations must only ever return groups the shared legality
/// predicate accepts — the engine treats a rejected AI proposal as a forced
/// take-pile, so an illegal proposal costs the AI its play.
pub trait Opponent: Send + Sync {
    /// Propose a same-rank group from the active player's playable source;
    /// an empty proposal signals take-pile.
    fn propose_play(&self, state: &MatchState) -> Vec<Card>;

    /// Name of this opponent implementation.
    fn name(&self) -> &str;
}

/// What a confirmed action did to the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A group was accepted onto the stack. `chained` means the same player
    /// keeps selecting (Ten, Eight, or a four-match burn).
    Played {
        rank: Rank,
        count: usize,
        burned: bool,
        chained: bool,
    },
    /// The selection was refused; nothing changed. The reason text is what
    /// the UI should surface.
    Rejected { reason: String },
    /// The live stack moved into the active player's hand.
    PileTaken { count: usize },
    /// The match ended during this action.
    Finished { winner: Option<u8> },
}

/// Core match orchestrator: owns the authoritative `MatchState` and drives
/// the turn state machine over it.
///
/// All collaborators are held directly and injected at construction: the
/// pool and stack live inside the state, the opponent is passed in, and the
/// event queue is drained by the UI/rendering side. One engine instance is
/// the single mutating actor for its match; peers receive snapshots instead
/// (see [`crate::sync`]).
///
/// # Examples
///
/// ```
/// use stackfish_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345), None);
/// engine.start().expect("dealing succeeds on a fresh match");
/// // Two hidden books per seat, one-plus visible, six cards dealt.
/// for player in &engine.state().players {
///     assert_eq!(player.hidden_books().len(), 2);
///     assert!(player.books().len() >= 1);
///     assert!(player.hand().len() <= 6);
/// }
/// engine.state().validate().expect("card conservation holds");
/// ```
pub struct Engine {
    state: MatchState,
    selection: Vec<Card>,
    events: VecDeque<TableEvent>,
    opponent: Option<Box<dyn Opponent>>,
    history: MatchRecord,
}

impl Engine {
    pub fn new(seed: Option<u64>, opponent: Option<Box<dyn Opponent>>) -> Self {
        let seed = seed.unwrap_or(0x60F1_54D0);
        let players = [
            Player::new(0, "Player", false),
            Player::new(1, "Bot", opponent.is_some()),
        ];
        let state = MatchState {
            phase: Phase::Started,
            // Starts on the second seat so the opening turn flip hands the
            // first turn to seat 0.
            active: 1,
            last_rank: None,
            pool: Pool::shuffled(seed),
            stack: Stack::new(),
            players,
        };
        Self {
            state,
            selection: Vec::new(),
            events: VecDeque::new(),
            opponent,
            history: MatchRecord::new(Some(seed)),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &MatchRecord {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut MatchRecord {
        &mut self.history
    }

    pub fn set_player(&mut self, seat: u8, name: &str, is_ai: bool) {
        let p = &mut self.state.players[seat as usize];
        p.set_name(name);
        p.set_ai(is_ai);
    }

    /// Drain the queued render/UI commands, in emission order.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    /// Deal the opening layout and hand the first turn to seat 0: hidden
    /// books first, then visible books, then three rounds of two cards into
    /// each hand. Each pre-dealt book draws one card to pick its rank and
    /// then claims all four cards of that rank from the pool, so the 52-card
    /// conservation bound caps how many books can be dealt.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Started)?;

        for _ in 0..PRE_DEALT_HIDDEN_BOOKS {
            for seat in 0..2u8 {
                self.deal_pre_dealt_book(seat, true)?;
            }
        }
        for _ in 0..PRE_DEALT_VISIBLE_BOOKS {
            for seat in 0..2u8 {
                self.deal_pre_dealt_book(seat, false)?;
            }
        }
        for _ in 0..INITIAL_DEAL_ROUNDS {
            for seat in 0..2u8 {
                let cards = self.state.pool.deal_n(INITIAL_DEAL_BATCH)?;
                for card in &cards {
                    self.events.push_back(TableEvent::MoveCard {
                        card: *card,
                        from: Zone::Pool,
                        to: Zone::Hand(seat),
                    });
                }
                self.state.players[seat as usize].add_cards(cards);
            }
        }
        for seat in 0..2u8 {
            self.collect_books_for(seat);
        }

        self.set_phase(Phase::TurnStarted);
        self.begin_turn();
        Ok(())
    }

    /// Stage a same-rank selection for the active player. Cards must come
    /// from the player's current playable source; naming any card of a book
    /// stages the whole four-card group.
    pub fn select_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        self.expect_phase(Phase::SelectingCards)?;
        if cards.is_empty() {
            self.selection.clear();
            return Ok(());
        }

        let rank = cards[0].rank();
        if cards.iter().any(|c| c.rank() != rank) {
            return Err(GameError::MixedSelection);
        }
        let mut unique: Vec<Card> = Vec::with_capacity(cards.len());
        for c in cards {
            if !unique.contains(c) {
                unique.push(*c);
            }
        }

        let player = self.state.active_player();
        match player.play_source() {
            PlaySource::Hand => {
                let owned = unique.iter().filter(|c| player.hand().contains(c)).count();
                if owned < unique.len() {
                    return Err(GameError::InsufficientCards {
                        requested: unique.len(),
                        available: owned,
                    });
                }
                self.selection = unique;
            }
            PlaySource::VisibleBooks | PlaySource::HiddenBooks => {
                // Book groups are indivisible: staging any of a book's cards
                // stages all four.
                let group: Vec<Card> = player
                    .source_cards()
                    .into_iter()
                    .filter(|c| c.rank() == rank)
                    .collect();
                if group.is_empty() {
                    return Err(GameError::InsufficientCards {
                        requested: unique.len(),
                        available: 0,
                    });
                }
                self.selection = group;
            }
            PlaySource::Exhausted => {
                return Err(GameError::InsufficientCards {
                    requested: unique.len(),
                    available: 0,
                })
            }
        }
        Ok(())
    }

    /// Resolve the staged selection against the stack rules. An empty
    /// selection means "no legal play" and becomes a take-pile.
    pub fn confirm(&mut self) -> Result<TurnOutcome, GameError> {
        self.expect_phase(Phase::SelectingCards)?;
        if self.selection.is_empty() {
            return self.do_take_pile();
        }
        self.set_phase(Phase::ConfirmedSelection);

        let rank = self.selection[0].rank();
        let ruling = validate_play(
            self.state.stack.top(),
            self.state.stack.second_from_top(),
            rank,
        );

        match ruling {
            Ruling::Reject(reason) => {
                self.selection.clear();
                if self.state.active_player().is_ai() {
                    // An AI proposal the rules refuse is a forced take-pile.
                    self.do_take_pile()
                } else {
                    self.set_phase(Phase::SelectingCards);
                    self.message(reason.to_string());
                    Ok(TurnOutcome::Rejected {
                        reason: reason.to_string(),
                    })
                }
            }
            Ruling::Accept { .. } => self.apply_accepted_play(rank),
        }
    }

    /// Absorb the live stack into the active player's hand; the same player
    /// keeps the turn in this variant.
    pub fn take_pile(&mut self) -> Result<TurnOutcome, GameError> {
        self.expect_phase(Phase::SelectingCards)?;
        self.do_take_pile()
    }

    /// Rendering collaborator callback: animations are done, so let a
    /// deferred AI move resolve if one is due. Returns what the AI did, or
    /// `None` when it is a human's turn (the match waits for UI calls).
    pub fn animations_finished(&mut self) -> Result<Option<TurnOutcome>, GameError> {
        if self.state.phase == Phase::SelectingCards && self.state.active_player().is_ai() {
            return self.ai_step().map(Some);
        }
        Ok(None)
    }

    /// Snapshot the authoritative state for the networking collaborator.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        sync::encode_state(&self.state)
    }

    /// Replace the whole local state with a received snapshot (follower
    /// side). Derived views — staged selection, queued events — are reset.
    pub fn apply_snapshot(&mut self, blob: &[u8]) -> Result<(), GameError> {
        let state = sync::decode_state(blob)?;
        self.state = state;
        self.selection.clear();
        self.events.clear();
        Ok(())
    }

    fn ai_step(&mut self) -> Result<TurnOutcome, GameError> {
        let proposal = match &self.opponent {
            Some(opponent) => opponent.propose_play(&self.state),
            None => return Err(GameError::NoOpponent(self.state.active)),
        };
        if proposal.is_empty() {
            return self.do_take_pile();
        }
        self.select_cards(&proposal)?;
        self.confirm()
    }

    fn apply_accepted_play(&mut self, rank: Rank) -> Result<TurnOutcome, GameError> {
        let cards = std::mem::take(&mut self.selection);
        let seat = self.state.active;
        let source = self.state.active_player().play_source();

        let from_zone = match source {
            PlaySource::Hand => {
                self.state.active_player_mut().remove_cards(&cards)?;
                Zone::Hand(seat)
            }
            PlaySource::VisibleBooks | PlaySource::HiddenBooks => {
                // The staged selection is a whole book group.
                self.state
                    .active_player_mut()
                    .take_book(rank)
                    .ok_or(GameError::InsufficientCards {
                        requested: cards.len(),
                        available: 0,
                    })?;
                if source == PlaySource::VisibleBooks {
                    Zone::VisibleBooks(seat)
                } else {
                    Zone::HiddenBooks(seat)
                }
            }
            PlaySource::Exhausted => {
                return Err(GameError::InsufficientCards {
                    requested: cards.len(),
                    available: 0,
                })
            }
        };

        for card in &cards {
            self.events.push_back(TableEvent::MoveCard {
                card: *card,
                from: from_zone,
                to: Zone::Stack,
            });
            self.events.push_back(TableEvent::RevealCard { card: *card });
        }

        let at_stake = self.state.stack.len() + cards.len();
        let burned = self.state.stack.push_play(&cards, rank);
        if burned {
            self.events.push_back(TableEvent::StackBurned { count: at_stake });
        }

        self.state.last_rank = Some(rank);
        let count = cards.len();
        self.settle_active_hand();
        self.history.record(
            seat,
            TurnAction::Played {
                rank,
                count,
                burned,
            },
        );
        self.message(format!(
            "{} plays {} {}{}",
            self.state.players[seat as usize].name(),
            count,
            rank,
            if burned { " - the stack burns" } else { "" },
        ));

        if self.check_finished() {
            return Ok(TurnOutcome::Finished {
                winner: self.state.winner(),
            });
        }

        let chained = burned || rank == Rank::Eight || rank == Rank::Ten;
        if chained {
            // Chain-play fast path: same player keeps selecting.
            self.set_phase(Phase::SelectingCards);
        } else {
            self.set_phase(Phase::TurnStarted);
            self.begin_turn();
        }
        Ok(TurnOutcome::Played {
            rank,
            count,
            burned,
            chained,
        })
    }

    fn do_take_pile(&mut self) -> Result<TurnOutcome, GameError> {
        self.selection.clear();
        let seat = self.state.active;
        let cards = self.state.stack.take_all();
        let count = cards.len();
        for card in &cards {
            self.events.push_back(TableEvent::MoveCard {
                card: *card,
                from: Zone::Stack,
                to: Zone::Hand(seat),
            });
        }
        self.state.players[seat as usize].add_cards(cards);
        self.state.last_rank = None;
        self.settle_active_hand();
        self.history.record(seat, TurnAction::TookPile { count });
        self.message(format!(
            "{} takes the pile ({} cards)",
            self.state.players[seat as usize].name(),
            count
        ));

        if self.check_finished() {
            return Ok(TurnOutcome::Finished {
                winner: self.state.winner(),
            });
        }

        // Taking the pile does not forfeit the turn in this variant.
        self.set_phase(Phase::SelectingCards);
        Ok(TurnOutcome::PileTaken { count })
    }

    fn begin_turn(&mut self) {
        self.state.active = 1 - self.state.active;
        self.selection.clear();
        self.set_phase(Phase::SelectingCards);
        self.message(format!("{}'s turn", self.state.active_player().name()));
        // The incoming player may have nothing to play and nothing to take.
        self.check_finished();
    }

    /// Refill the active hand to the target size, then extract any books the
    /// refill completed; extraction shrinks the hand again, so repeat until
    /// nothing changes. Converges because the pool only shrinks.
    fn settle_active_hand(&mut self) {
        let seat = self.state.active;
        loop {
            self.refill_active_hand();
            if self.collect_books_for(seat) == 0 || self.state.pool.is_empty() {
                break;
            }
        }
    }

    fn refill_active_hand(&mut self) {
        let seat = self.state.active;
        while self.state.players[seat as usize].hand().len() < HAND_TARGET
            && !self.state.pool.is_empty()
        {
            match self.state.pool.draw_one() {
                Ok(card) => {
                    self.events.push_back(TableEvent::MoveCard {
                        card,
                        from: Zone::Pool,
                        to: Zone::Hand(seat),
                    });
                    self.state.players[seat as usize].add_card(card);
                }
                Err(_) => break,
            }
        }
    }

    fn collect_books_for(&mut self, seat: u8) -> usize {
        let made = self.state.players[seat as usize].collect_books();
        let count = made.len();
        for book in made {
            self.events.push_back(TableEvent::BookCompleted {
                player: seat,
                rank: book.rank(),
            });
            for card in book.cards() {
                self.events.push_back(TableEvent::MoveCard {
                    card: *card,
                    from: Zone::Hand(seat),
                    to: Zone::VisibleBooks(seat),
                });
            }
        }
        count
    }

    fn deal_pre_dealt_book(&mut self, seat: u8, hidden: bool) -> Result<(), GameError> {
        use crate::books::Book;

        let drawn = self.state.pool.draw_one()?;
        let mut group = vec![drawn];
        group.extend(self.state.pool.extract_rank(drawn.rank()));
        let cards: [Card; 4] = group.try_into().map_err(|_| {
            GameError::CorruptState(format!("rank {} not intact in the pool", drawn.rank()))
        })?;
        let book = Book::from_cards(cards).ok_or_else(|| {
            GameError::CorruptState(format!("mixed ranks extracted for {}", drawn.rank()))
        })?;

        let zone = if hidden {
            Zone::HiddenBooks(seat)
        } else {
            Zone::VisibleBooks(seat)
        };
        for card in book.cards() {
            self.events.push_back(TableEvent::MoveCard {
                card: *card,
                from: Zone::Pool,
                to: zone,
            });
            if hidden {
                self.events.push_back(TableEvent::HideCard { card: *card });
            } else {
                self.events.push_back(TableEvent::RevealCard { card: *card });
            }
        }
        let player = &mut self.state.players[seat as usize];
        if hidden {
            player.add_hidden_book(book);
        } else {
            player.add_book(book);
        }
        Ok(())
    }

    /// The match ends when every book is claimed, or the pool is dry and no
    /// further play is possible.
    fn check_finished(&mut self) -> bool {
        let state = &self.state;
        let everyone_spent = state.players.iter().all(|p| p.is_exhausted());
        let active_stuck =
            state.active_player().is_exhausted() && state.stack.is_empty();
        let finished = state.books_claimed() == 13
            || (state.pool.is_empty() && (everyone_spent || active_stuck));
        if finished {
            self.history.winner = self.state.winner();
            self.set_phase(Phase::Finished);
            self.events.push_back(TableEvent::MatchOver {
                winner: self.state.winner(),
            });
        }
        finished
    }

    fn expect_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                phase: self.state.phase,
            })
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.state.phase != phase {
            self.state.phase = phase;
            self.events.push_back(TableEvent::PhaseChanged { phase });
        }
    }

    fn message(&mut self, text: String) {
        self.events.push_back(TableEvent::Message(text));
    }
}
