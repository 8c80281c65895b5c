//! Random opponent: picks uniformly among the legal groups. Useful for
//! widening simulation coverage beyond the greedy line.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stackfish_engine::cards::Card;
use stackfish_engine::engine::Opponent;
use stackfish_engine::game::MatchState;

use crate::greedy::legal_groups;

/// Chooses a random legal same-rank group each turn; still refuses to
/// propose anything the shared predicate rejects.
#[derive(Debug)]
pub struct RandomOpponent {
    rng: Mutex<StdRng>,
}

impl RandomOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Opponent for RandomOpponent {
    fn propose_play(&self, state: &MatchState) -> Vec<Card> {
        let groups = legal_groups(state);
        if groups.is_empty() {
            return Vec::new();
        }
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..groups.len()),
            Err(_) => 0,
        };
        groups.into_iter().nth(index).map(|(_, g)| g).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "random"
    }
}
