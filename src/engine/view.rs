//! What a player is allowed to see.
//!
//! A fresh `GameView` is built for every call into a player. It holds the
//! observer's own hand and the public bid history, never another hand.
//! After a challenge every seat in the round receives the same `Reveal`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Bid, Digit, GameConfig, Hand, PlayerId};
use crate::rules::{BidRecord, Hands, Outcome, Resolution, Round};

/// Observer-specific snapshot of the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Seat this view was built for.
    pub observer: PlayerId,
    /// The observer's own hand.
    pub hand: Hand,
    /// Round number, starting at 1.
    pub round: u32,
    /// Active seats in turn order.
    pub seats: Vec<PlayerId>,
    /// Accepted bids this round, oldest first.
    pub bids: Vector<BidRecord>,
    /// Seat whose decision is pending.
    pub to_act: PlayerId,
    pub active_players: usize,
    /// Digits in play: active players × hand size.
    pub total_digits: u32,
    pub hand_size: usize,
    pub wild_rank: Option<Digit>,
}

impl GameView {
    pub(crate) fn new(observer: PlayerId, round: &Round, hands: &Hands, config: &GameConfig) -> Self {
        Self {
            observer,
            hand: hands.get(&observer).cloned().unwrap_or_default(),
            round: round.number(),
            seats: round.seats().to_vec(),
            bids: round.history().clone(),
            to_act: round.to_act(),
            active_players: round.seats().len(),
            total_digits: round.max_quantity(),
            hand_size: config.hand_size,
            wild_rank: config.wild_rank,
        }
    }

    /// The bid a challenge would dispute.
    #[must_use]
    pub fn standing_bid(&self) -> Option<&BidRecord> {
        self.bids.last()
    }

    /// Largest legal quantity.
    #[must_use]
    pub fn max_quantity(&self) -> u32 {
        self.total_digits
    }

    /// Smallest bid that would be accepted, or `None` once the ceiling is reached.
    #[must_use]
    pub fn min_raise(&self) -> Option<Bid> {
        let floor = match self.standing_bid() {
            Some(record) => record.bid.next()?,
            None => Bid::lowest(),
        };
        (floor.quantity <= self.total_digits).then_some(floor)
    }

    /// Is the pending decision this observer's?
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.to_act == self.observer
    }
}

/// End-of-round disclosure, identical for every recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub round: u32,
    /// Every hand dealt this round.
    pub hands: Hands,
    /// `None` when the round ended in a forfeit.
    pub resolution: Option<Resolution>,
    pub eliminated: PlayerId,
}

impl Reveal {
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.resolution.as_ref().map(|r| r.outcome)
    }

    #[must_use]
    pub fn actual_count(&self) -> Option<u32> {
        self.resolution.as_ref().map(|r| r.actual_count)
    }
}
