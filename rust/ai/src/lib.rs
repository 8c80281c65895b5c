//! # stackfish-ai: Opponent Implementations
//!
//! Move proposers for AI-controlled seats. Every opponent implements the
//! engine's [`Opponent`] seam trait and filters its candidates through the
//! engine's own legality predicate, so an opponent can never propose a play
//! the rules would refuse.
//!
//! ## Core Components
//!
//! - [`greedy::GreedyOpponent`] - first legal same-rank group, in hand order
//! - [`random::RandomOpponent`] - a seeded random choice among legal groups
//! - [`create_opponent`] - factory function for building opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use stackfish_ai::create_opponent;
//! use stackfish_engine::engine::Engine;
//!
//! let opponent = create_opponent("greedy");
//! assert_eq!(opponent.name(), "greedy");
//!
//! let mut engine = Engine::new(Some(42), Some(opponent));
//! engine.start().expect("fresh match deals cleanly");
//! ```

pub use stackfish_engine::engine::Opponent;

pub mod greedy;
pub mod random;

/// Build an opponent by type name.
///
/// Supported names: `"greedy"` (default choice) and `"random"`.
///
/// # Panics
///
/// Panics if an unknown opponent name is requested.
pub fn create_opponent(kind: &str) -> Box<dyn Opponent> {
    match kind {
        "greedy" => Box::new(greedy::GreedyOpponent::new()),
        "random" => Box::new(random::RandomOpponent::new(None)),
        _ => panic!("Unknown opponent type: {}", kind),
    }
}
