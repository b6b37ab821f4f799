//! Property tests for the bid order, the wild tally, and whole games.

mod common;

use proptest::prelude::*;

use common::{Chaos, Raiser};
use liars_poker::core::{Bid, GameConfig, Hand, InvalidActionPolicy, InvalidBid, PlayerId};
use liars_poker::engine::{run_game, GameResult};
use liars_poker::rules::{check_raise, tally};

fn bid() -> impl Strategy<Value = Bid> {
    (1u32..50, 0u8..=9).prop_map(|(q, d)| Bid::new(q, d))
}

fn hand(width: usize) -> impl Strategy<Value = Hand> {
    proptest::collection::vec(0u8..=9, width).prop_map(|digits| Hand::from_digits(&digits))
}

/// Invariants every finished game must satisfy.
fn check_game(result: &GameResult, players: usize, hand_size: usize) -> Result<(), TestCaseError> {
    let winner = result.winner();
    prop_assert!(winner.is_some(), "no winner: {:?}", result.outcome);
    prop_assert_eq!(result.round_count(), players - 1);
    prop_assert_eq!(result.eliminated.len(), players - 1);

    let mut seen = std::collections::HashSet::new();
    for eliminated in &result.eliminated {
        prop_assert!(seen.insert(*eliminated), "{} eliminated twice", eliminated);
    }
    prop_assert!(!seen.contains(&winner.unwrap_or(PlayerId::new(u8::MAX))));

    for (i, round) in result.rounds.iter().enumerate() {
        prop_assert_eq!(round.eliminated(), result.eliminated[i]);
        prop_assert!(round.seats.iter().all(|s| !result.eliminated[..i].contains(s)));
        prop_assert_eq!(round.hands.len(), round.seats.len());

        let max = (round.seats.len() * hand_size) as u32;
        for record in &round.bids {
            prop_assert!(record.bid.quantity >= 1 && record.bid.quantity <= max);
        }
        let bids: Vec<_> = round.bids.iter().map(|r| r.bid).collect();
        for pair in bids.windows(2) {
            prop_assert!(pair[1] > pair[0], "{} does not exceed {}", pair[1], pair[0]);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_order_is_quantity_then_digit(a in bid(), b in bid()) {
        let expected = (a.quantity, a.digit).cmp(&(b.quantity, b.digit));
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(a == b, expected == std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_next_is_the_minimal_raise(a in bid(), c in bid()) {
        let next = a.next().unwrap();
        prop_assert!(next > a);
        if c > a {
            prop_assert!(next <= c);
        }
    }

    #[test]
    fn prop_accepted_raise_strictly_exceeds(candidate in bid(), standing in bid()) {
        let accepted = check_raise(candidate, Some(standing), u32::MAX).is_ok();
        prop_assert_eq!(accepted, candidate > standing);
    }

    #[test]
    fn prop_quantity_above_digits_in_play_rejected(
        players in 1usize..8,
        hand_size in 1usize..10,
        excess in 1u32..20,
        digit in 0u8..=9,
    ) {
        let max = (players * hand_size) as u32;
        let candidate = Bid::new(max + excess, digit);
        let is_ceiling_error = matches!(
            check_raise(candidate, None, max),
            Err(InvalidBid::ExceedsDigitsInPlay { .. })
        );
        prop_assert!(is_ceiling_error);
    }

    #[test]
    fn prop_tally_counts_wilds_once(
        hands in proptest::collection::vec(hand(6), 1..6),
        digit in 0u8..=9,
        wild in 0u8..=9,
    ) {
        let count = |d: u8| hands.iter().map(|h| h.count(d)).sum::<u32>();
        let expected = if digit == wild { count(wild) } else { count(digit) + count(wild) };

        prop_assert_eq!(tally(&hands, digit, Some(wild)), expected);
        prop_assert_eq!(tally(&hands, digit, None), count(digit));
    }

    #[test]
    fn prop_legal_players_finish_in_n_minus_one_rounds(
        players in 2usize..7,
        hand_size in 1usize..6,
        seed in any::<u64>(),
        challenge_rate in 0.0f64..1.0,
    ) {
        let mut table: Vec<_> = (0..players)
            .map(|i| Raiser::new(seed ^ i as u64, challenge_rate))
            .collect();
        let config = GameConfig::new(hand_size, Some(0), seed);
        let result = run_game(&mut table, &config).unwrap();

        check_game(&result, players, hand_size)?;
        prop_assert!(result.rounds.iter().all(|r| r.ending.resolution().is_some()));
    }

    #[test]
    fn prop_rule_breakers_still_finish(
        players in 2usize..7,
        hand_size in 1usize..4,
        seed in any::<u64>(),
        attempts in 0u32..3,
    ) {
        let mut table: Vec<_> = (0..players).map(|i| Chaos::new(seed ^ i as u64)).collect();
        let config = GameConfig::new(hand_size, Some(0), seed)
            .with_invalid_action(InvalidActionPolicy::Retry { attempts });
        let result = run_game(&mut table, &config).unwrap();

        check_game(&result, players, hand_size)?;
    }
}
