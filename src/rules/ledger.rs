//! Bid ledger: the append-only bid history of one round.
//!
//! The ledger validates raises and rotates the turn. It never sees hands.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Bid, InvalidBid, InvalidChallenge, PlayerId};

/// An accepted bid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    /// Who made the bid.
    pub bidder: PlayerId,
    /// The bid itself.
    pub bid: Bid,
    /// Wall time the bidder took to decide.
    pub elapsed: Duration,
}

/// Check `candidate` against the standing bid and the digits in play.
///
/// A legal bid is well-formed, claims no more than `max_quantity` digits,
/// and strictly exceeds the standing bid.
pub fn check_raise(candidate: Bid, standing: Option<Bid>, max_quantity: u32) -> Result<(), InvalidBid> {
    candidate.validate()?;
    if candidate.quantity > max_quantity {
        return Err(InvalidBid::ExceedsDigitsInPlay {
            candidate,
            max: max_quantity,
        });
    }
    match standing {
        Some(standing) if candidate <= standing => Err(InvalidBid::NotARaise { candidate, standing }),
        _ => Ok(()),
    }
}

/// One bidding contest over a fixed set of active seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    number: u32,
    seats: Vec<PlayerId>,
    opener: PlayerId,
    to_act: usize,
    max_quantity: u32,
    history: Vector<BidRecord>,
}

impl Round {
    /// Start a round. `seats` is the active seating order.
    ///
    /// An `opener` not in `seats` falls back to the first seat.
    pub fn new(number: u32, seats: Vec<PlayerId>, opener: PlayerId, max_quantity: u32) -> Self {
        let to_act = seats.iter().position(|s| *s == opener).unwrap_or(0);
        let opener = seats.get(to_act).copied().unwrap_or(opener);
        Self {
            number,
            seats,
            opener,
            to_act,
            max_quantity,
            history: Vector::new(),
        }
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Active seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }

    /// Seat that acted first.
    #[must_use]
    pub fn opener(&self) -> PlayerId {
        self.opener
    }

    /// Seat whose decision is pending.
    #[must_use]
    pub fn to_act(&self) -> PlayerId {
        self.seats.get(self.to_act).copied().unwrap_or(self.opener)
    }

    /// Largest quantity any bid may claim this round.
    #[must_use]
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Accepted bids, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<BidRecord> {
        &self.history
    }

    /// The outstanding bid, if any.
    #[must_use]
    pub fn standing(&self) -> Option<&BidRecord> {
        self.history.last()
    }

    /// Record `bid` from `bidder` and pass the turn to the next seat.
    pub fn propose(&mut self, bidder: PlayerId, bid: Bid, elapsed: Duration) -> Result<&BidRecord, InvalidBid> {
        let expected = self.to_act();
        if bidder != expected {
            return Err(InvalidBid::OutOfTurn { bidder, expected });
        }
        check_raise(bid, self.standing().map(|r| r.bid), self.max_quantity)?;

        self.history.push_back(BidRecord { bidder, bid, elapsed });
        self.to_act = (self.to_act + 1) % self.seats.len().max(1);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Check that `challenger` may dispute the standing bid, returning it.
    pub fn challenge(&self, challenger: PlayerId) -> Result<&BidRecord, InvalidChallenge> {
        let expected = self.to_act();
        if challenger != expected {
            return Err(InvalidChallenge::OutOfTurn { challenger, expected });
        }
        self.standing().ok_or(InvalidChallenge::NoStandingBid)
    }
}
