use stackfish_engine::cards::{Card, Rank, Suit};
use stackfish_engine::rules::{validate_play, RejectReason, Ruling};

fn card(rank: Rank) -> Card {
    Card::of(rank, Suit::Hearts)
}

fn accepts(top: Option<Rank>, second: Option<Rank>, candidate: Rank) -> bool {
    validate_play(top.map(card), second.map(card), candidate).is_accept()
}

#[test]
fn empty_stack_accepts_a_five() {
    assert!(accepts(None, None, Rank::Five));
}

#[test]
fn ace_on_top_wants_ace_or_wild() {
    assert!(accepts(Some(Rank::Ace), None, Rank::Ace));
    assert!(accepts(Some(Rank::Ace), None, Rank::Two));
    assert!(accepts(Some(Rank::Ace), None, Rank::Three));
    assert!(accepts(Some(Rank::Ace), None, Rank::Ten));
    assert!(!accepts(Some(Rank::Ace), None, Rank::King));
    assert!(!accepts(Some(Rank::Ace), None, Rank::Four));
}

#[test]
fn seven_rejects_nine_with_a_telling_reason() {
    let ruling = validate_play(Some(card(Rank::Seven)), None, Rank::Nine);
    let Ruling::Reject(reason) = ruling else {
        panic!("a nine on a seven must be rejected");
    };
    let text = reason.to_string();
    assert!(text.contains("7 or lower"), "reason was: {}", text);
    assert!(text.contains("wild"), "reason was: {}", text);
}

#[test]
fn seven_accepts_low_cards_and_wilds_but_not_aces() {
    for low in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven] {
        assert!(accepts(Some(Rank::Seven), None, low), "{:?} should land on a 7", low);
    }
    assert!(accepts(Some(Rank::Seven), None, Rank::Ten), "ten is wild");
    assert!(!accepts(Some(Rank::Seven), None, Rank::Ace));
    assert!(!accepts(Some(Rank::Seven), None, Rank::Jack));
}

#[test]
fn two_on_top_resets_the_stack() {
    for candidate in stackfish_engine::cards::all_ranks() {
        assert!(accepts(Some(Rank::Two), None, candidate));
    }
}

#[test]
fn aces_and_wilds_land_on_anything_but_sevens_block_aces() {
    for top in stackfish_engine::cards::all_ranks() {
        assert!(accepts(Some(top), None, Rank::Two));
        assert!(accepts(Some(top), None, Rank::Ten));
        if top != Rank::Seven {
            assert!(accepts(Some(top), None, Rank::Ace), "ace on {:?}", top);
        }
    }
}

#[test]
fn three_defers_to_the_card_beneath() {
    // Beneath: a Jack. Candidates must meet the Jack.
    assert!(accepts(Some(Rank::Three), Some(Rank::Jack), Rank::Queen));
    assert!(accepts(Some(Rank::Three), Some(Rank::Jack), Rank::Jack));
    assert!(!accepts(Some(Rank::Three), Some(Rank::Jack), Rank::Nine));

    let ruling = validate_play(Some(card(Rank::Three)), Some(card(Rank::Jack)), Rank::Nine);
    assert_eq!(
        ruling,
        Ruling::Reject(RejectReason::BelowRequired(Rank::Jack))
    );
}

#[test]
fn ace_under_a_three_behaves_like_an_ace_on_top() {
    assert!(accepts(Some(Rank::Three), Some(Rank::Ace), Rank::Two));
    assert!(accepts(Some(Rank::Three), Some(Rank::Ace), Rank::Ace));
    assert!(accepts(Some(Rank::Three), Some(Rank::Ace), Rank::Ten));
    assert!(!accepts(Some(Rank::Three), Some(Rank::Ace), Rank::King));
}

#[test]
fn bare_three_wants_three_or_higher() {
    assert!(accepts(Some(Rank::Three), None, Rank::Three));
    assert!(accepts(Some(Rank::Three), None, Rank::King));
    assert!(accepts(Some(Rank::Three), None, Rank::Ace), "ace resets");
    // No non-wild rank sits below Three except the Ace, which is covered
    // above, so nothing non-wild can actually be rejected here; the rule
    // still guards the shape of the predicate.
}

#[test]
fn default_comparison_is_meet_or_beat() {
    assert!(accepts(Some(Rank::Nine), None, Rank::Nine));
    assert!(accepts(Some(Rank::Nine), None, Rank::King));
    assert!(!accepts(Some(Rank::Nine), None, Rank::Eight));
    assert!(!accepts(Some(Rank::King), None, Rank::Queen));
}

#[test]
fn verdicts_are_stable_across_repeated_calls() {
    for top in stackfish_engine::cards::all_ranks() {
        for candidate in stackfish_engine::cards::all_ranks() {
            let first = validate_play(Some(card(top)), None, candidate);
            for _ in 0..3 {
                assert_eq!(validate_play(Some(card(top)), None, candidate), first);
            }
        }
    }
}
