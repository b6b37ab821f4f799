//! Bids and player decisions.
//!
//! A bid claims "at least `quantity` of `digit` across every active hand".
//! Bids are totally ordered by quantity, then digit: `3 × 2s < 3 × 7s < 4 × 0s`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::error::InvalidBid;

/// A single digit, 0-9.
pub type Digit = u8;

/// Largest digit value.
pub const MAX_DIGIT: Digit = 9;

/// Number of distinct digit values.
pub const DIGIT_COUNT: usize = 10;

/// A claim about the combined hands.
///
/// Fields are public so strategies can build bids freely; the engine checks
/// well-formedness (`validate`) before a bid reaches the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// Minimum number of matching digits claimed.
    pub quantity: u32,
    /// Claimed digit value.
    pub digit: Digit,
}

impl Bid {
    /// Create a bid.
    #[must_use]
    pub const fn new(quantity: u32, digit: Digit) -> Self {
        Self { quantity, digit }
    }

    /// Lowest possible bid: one zero.
    #[must_use]
    pub const fn lowest() -> Self {
        Self::new(1, 0)
    }

    /// Check that the quantity is positive and the digit is in 0-9.
    pub fn validate(&self) -> Result<(), InvalidBid> {
        if self.quantity == 0 {
            return Err(InvalidBid::ZeroQuantity);
        }
        if self.digit > MAX_DIGIT {
            return Err(InvalidBid::DigitOutOfRange(self.digit));
        }
        Ok(())
    }

    /// The smallest bid strictly greater than this one.
    ///
    /// ```
    /// use liars_poker::core::Bid;
    ///
    /// assert_eq!(Bid::new(2, 4).next(), Some(Bid::new(2, 5)));
    /// assert_eq!(Bid::new(2, 9).next(), Some(Bid::new(3, 0)));
    /// ```
    #[must_use]
    pub fn next(&self) -> Option<Bid> {
        if self.digit < MAX_DIGIT {
            Some(Bid::new(self.quantity, self.digit + 1))
        } else {
            self.quantity.checked_add(1).map(|q| Bid::new(q, 0))
        }
    }
}

impl Ord for Bid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quantity
            .cmp(&other.quantity)
            .then(self.digit.cmp(&other.digit))
    }
}

impl PartialOrd for Bid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}s", self.quantity, self.digit)
    }
}

/// What a player does when asked to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Raise with a new bid.
    Bid(Bid),
    /// Dispute the standing bid.
    Challenge,
}

impl From<Bid> for Decision {
    fn from(bid: Bid) -> Self {
        Decision::Bid(bid)
    }
}
