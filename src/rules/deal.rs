//! Hand generator.

use im::OrdMap;
use rand::Rng;

use crate::core::{DealError, Hand, PlayerId, MAX_DIGIT};

/// Hands for one round, keyed by seat.
///
/// Persistent map: cloning for reveals and history is O(1).
pub type Hands = OrdMap<PlayerId, Hand>;

/// Deal `hand_size` digits to every seat in `seats`.
///
/// Each digit is drawn independently and uniformly from 0-9. Seats are dealt
/// in the order given, so equally seeded sources produce identical hands.
pub fn deal<R: Rng>(seats: &[PlayerId], hand_size: usize, rng: &mut R) -> Result<Hands, DealError> {
    if seats.is_empty() {
        return Err(DealError::NoPlayers);
    }
    if hand_size == 0 {
        return Err(DealError::ZeroHandSize);
    }

    Ok(seats
        .iter()
        .map(|&seat| {
            let hand: Hand = (0..hand_size).map(|_| rng.gen_range(0..=MAX_DIGIT)).collect();
            (seat, hand)
        })
        .collect())
}
