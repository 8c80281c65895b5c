use std::collections::HashSet;

use stackfish_engine::cards::{Card, Rank};
use stackfish_engine::deck::Pool;
use stackfish_engine::errors::GameError;

#[test]
fn shuffled_pool_is_exactly_the_52_card_multiset() {
    let mut pool = Pool::shuffled(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = pool.draw_one().expect("should have 52 cards");
        assert!(set.insert(c.id()), "card {:?} duplicated at draw {}", c, i);
    }
    assert_eq!(pool.draw_one(), Err(GameError::PoolEmpty));
    assert_eq!(set.len(), 52);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut p1 = Pool::shuffled(12345);
    let mut p2 = Pool::shuffled(12345);
    let a: Vec<Card> = (0..10).map(|_| p1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| p2.draw_one().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut p1 = Pool::shuffled(1);
    let mut p2 = Pool::shuffled(2);
    let a: Vec<Card> = (0..10).map(|_| p1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| p2.draw_one().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_n_matches_draw_one_order() {
    let mut dealt = Pool::shuffled(777);
    let mut drawn = Pool::shuffled(777);

    let batch = dealt.deal_n(6).unwrap();
    let singles: Vec<Card> = (0..6).map(|_| drawn.draw_one().unwrap()).collect();
    assert_eq!(batch, singles);
    assert_eq!(dealt.len(), 46);
}

#[test]
fn partial_deals_are_refused_without_mutation() {
    let mut pool = Pool::shuffled(9);
    let _ = pool.deal_n(50).unwrap();
    assert_eq!(pool.len(), 2);

    let err = pool.deal_n(3).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientCards {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(pool.len(), 2, "refused deal must not shrink the pool");
}

#[test]
fn extract_rank_pulls_all_four_ids() {
    let mut pool = Pool::shuffled(5);
    let queens = pool.extract_rank(Rank::Queen);
    assert_eq!(queens.len(), 4);
    assert!(queens.iter().all(|c| c.rank() == Rank::Queen));
    assert_eq!(pool.len(), 48);
    assert!(pool.extract_rank(Rank::Queen).is_empty());
}
