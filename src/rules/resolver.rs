//! Round resolver: reveal hands and settle a challenge.

use serde::{Deserialize, Serialize};

use super::deal::Hands;
use super::ledger::Round;
use crate::core::{Bid, Digit, Hand, InvalidChallenge, PlayerId};

/// Whether the challenged bid held up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least `quantity` matching digits exist; the challenger was wrong.
    Stood,
    /// Fewer than `quantity` exist; the bid was a lie.
    Lie,
}

impl Outcome {
    /// True when the bid stood.
    #[must_use]
    pub fn is_true(self) -> bool {
        matches!(self, Outcome::Stood)
    }

    /// The party this outcome eliminates: the bidder of a lie, or the
    /// challenger of a bid that stood.
    #[must_use]
    pub fn loser(self, challenger: PlayerId, bidder: PlayerId) -> PlayerId {
        match self {
            Outcome::Stood => challenger,
            Outcome::Lie => bidder,
        }
    }

    /// The party this outcome spares.
    #[must_use]
    pub fn survivor(self, challenger: PlayerId, bidder: PlayerId) -> PlayerId {
        match self {
            Outcome::Stood => bidder,
            Outcome::Lie => challenger,
        }
    }
}

/// Count digits matching `digit` across `hands`.
///
/// Wilds count toward every other digit. When `digit` is itself the wild rank
/// each wild is counted once.
///
/// ```
/// use liars_poker::core::Hand;
/// use liars_poker::rules::tally;
///
/// let hands = [Hand::from_digits(&[7, 0, 3]), Hand::from_digits(&[0, 7, 7])];
/// assert_eq!(tally(&hands, 7, Some(0)), 5);
/// assert_eq!(tally(&hands, 0, Some(0)), 2);
/// assert_eq!(tally(&hands, 7, None), 3);
/// ```
pub fn tally<'a, I>(hands: I, digit: Digit, wild_rank: Option<Digit>) -> u32
where
    I: IntoIterator<Item = &'a Hand>,
{
    hands
        .into_iter()
        .map(|hand| match wild_rank {
            Some(wild) if wild != digit => hand.count(digit) + hand.count(wild),
            _ => hand.count(digit),
        })
        .sum()
}

/// Result of a challenge, with the revealed hands for audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The bid under challenge.
    pub bid: Bid,
    /// Who made it.
    pub bidder: PlayerId,
    /// Who disputed it.
    pub challenger: PlayerId,
    /// Matching digits actually present, wilds included.
    pub actual_count: u32,
    pub outcome: Outcome,
    /// Every active hand at the time of the challenge.
    pub hands: Hands,
}

impl Resolution {
    /// The party the outcome eliminates.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.outcome.loser(self.challenger, self.bidder)
    }

    /// The party the outcome spares.
    #[must_use]
    pub fn survivor(&self) -> PlayerId {
        self.outcome.survivor(self.challenger, self.bidder)
    }
}

/// Settle `challenger`'s dispute of the round's standing bid.
///
/// Only hands belonging to the round's seats are counted.
pub fn resolve(
    round: &Round,
    challenger: PlayerId,
    hands: &Hands,
    wild_rank: Option<Digit>,
) -> Result<Resolution, InvalidChallenge> {
    let standing = round.standing().ok_or(InvalidChallenge::NoStandingBid)?;

    let in_play: Hands = round
        .seats()
        .iter()
        .filter_map(|seat| hands.get(seat).map(|hand| (*seat, hand.clone())))
        .collect();
    let actual_count = tally(in_play.values(), standing.bid.digit, wild_rank);
    let outcome = if actual_count >= standing.bid.quantity {
        Outcome::Stood
    } else {
        Outcome::Lie
    };

    Ok(Resolution {
        bid: standing.bid,
        bidder: standing.bidder,
        challenger,
        actual_count,
        outcome,
        hands: in_play,
    })
}
