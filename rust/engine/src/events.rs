use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::game::Phase;

/// A card-holding zone, from the point of view of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Pool,
    Hand(u8),
    VisibleBooks(u8),
    HiddenBooks(u8),
    Stack,
}

/// Ordered commands for the rendering/UI collaborators.
///
/// The engine queues these as it mutates state and never blocks on them; the
/// front end drains the queue, plays whatever animation each command implies,
/// and calls back into the engine when it wants the next AI step
/// (`Engine::animations_finished`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    MoveCard { card: Card, from: Zone, to: Zone },
    RevealCard { card: Card },
    HideCard { card: Card },
    StackBurned { count: usize },
    BookCompleted { player: u8, rank: Rank },
    PhaseChanged { phase: Phase },
    Message(String),
    MatchOver { winner: Option<u8> },
}
