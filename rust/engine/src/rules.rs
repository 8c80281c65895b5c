use thiserror::Error;

use crate::cards::{Card, Rank};

/// Why a candidate rank cannot be played on the current stack.
///
/// The `Display` strings are the user-facing rejection reasons; rejection is
/// the normal negative path of play, not a fault, so these are plain values
/// rather than errors that propagate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("an Ace can only be covered by an Ace or a wild card")]
    AceOnTop,
    #[error("needs 7 or lower, or wild (Aces do not count)")]
    SevenOnTop,
    #[error("the card under the 3 is an Ace; needs an Ace or a wild card")]
    AceUnderThree,
    #[error("needs {0} or higher, or a wild card")]
    BelowRequired(Rank),
}

/// Verdict of the shared legality predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    /// The play is legal. `burns` is set when the played rank itself clears
    /// the stack (a Ten); a four-of-a-kind burn is only known after the push.
    Accept { burns: bool },
    Reject(RejectReason),
}

impl Ruling {
    pub fn is_accept(&self) -> bool {
        matches!(self, Ruling::Accept { .. })
    }
}

/// Decide whether a group of `rank` cards may be played on the stack.
///
/// This is the single legality authority: the human confirm path and the AI
/// proposal scan both call it, so the two can never disagree. It is a pure
/// function of the stack's top card, the card under it, and the candidate
/// rank. Rules, in precedence order:
///
/// 1. Empty stack accepts anything.
/// 2. An Ace on top accepts only an Ace or a wild.
/// 3. A Seven on top accepts 7-or-lower (but never an Ace), or a wild.
/// 4. A Two on top, a candidate Ace, or a candidate wild is always accepted.
/// 5. A Three on top defers to the card beneath it (the Three is glass):
///    the candidate must meet that card instead; an Ace beneath behaves as
///    in rule 2. With nothing beneath, the Three itself must be met.
/// 6. Otherwise the candidate must meet or beat the top rank.
pub fn validate_play(top: Option<Card>, second: Option<Card>, rank: Rank) -> Ruling {
    let wild = rank.is_wild();
    let accept = Ruling::Accept {
        burns: rank == Rank::Ten,
    };

    let Some(top) = top else {
        return accept;
    };

    match top.rank() {
        Rank::Ace => {
            if rank == Rank::Ace || wild {
                accept
            } else {
                Ruling::Reject(RejectReason::AceOnTop)
            }
        }
        Rank::Seven => {
            if (rank <= Rank::Seven && rank != Rank::Ace) || wild {
                accept
            } else {
                Ruling::Reject(RejectReason::SevenOnTop)
            }
        }
        _ if top.rank() == Rank::Two || rank == Rank::Ace || wild => accept,
        Rank::Three => match second {
            Some(under) if under.rank() == Rank::Ace => {
                // Candidate Aces and wilds were accepted above.
                Ruling::Reject(RejectReason::AceUnderThree)
            }
            Some(under) => {
                if rank >= under.rank() {
                    accept
                } else {
                    Ruling::Reject(RejectReason::BelowRequired(under.rank()))
                }
            }
            None => {
                if rank >= Rank::Three {
                    accept
                } else {
                    Ruling::Reject(RejectReason::BelowRequired(Rank::Three))
                }
            }
        },
        top_rank => {
            if rank >= top_rank {
                accept
            } else {
                Ruling::Reject(RejectReason::BelowRequired(top_rank))
            }
        }
    }
}
