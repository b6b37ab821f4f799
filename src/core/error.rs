//! Error taxonomy.
//!
//! - `InvalidBid` / `InvalidChallenge`: illegal actions, recovered by the
//!   engine's invalid-action policy (retry or forfeit)
//! - `MalformedPlayerResponse`: the strategy failed to produce a usable
//!   decision; always an immediate forfeit
//! - `FatalState`: elimination would leave the table empty; terminal
//! - `ConfigError` / `DealError`: rejected setup

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bid::{Bid, Digit};
use super::player::PlayerId;

/// A bid the ledger refuses to record.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidBid {
    #[error("bid quantity must be at least 1")]
    ZeroQuantity,

    #[error("digit {0} is outside 0-9")]
    DigitOutOfRange(Digit),

    #[error("{candidate} does not raise the standing bid of {standing}")]
    NotARaise { candidate: Bid, standing: Bid },

    #[error("{candidate} claims more than the {max} digits in play")]
    ExceedsDigitsInPlay { candidate: Bid, max: u32 },

    #[error("{bidder} bid out of turn; {expected} is to act")]
    OutOfTurn { bidder: PlayerId, expected: PlayerId },
}

/// A challenge the ledger refuses.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidChallenge {
    #[error("there is no standing bid to challenge")]
    NoStandingBid,

    #[error("{challenger} challenged out of turn; {expected} is to act")]
    OutOfTurn {
        challenger: PlayerId,
        expected: PlayerId,
    },
}

/// Failure reported by a strategy from `decide`.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlayerError {
    #[error("strategy has no decision to offer")]
    NoDecision,

    #[error("strategy failure: {0}")]
    Internal(String),
}

/// A response the engine cannot interpret as a bid or a challenge.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MalformedPlayerResponse {
    #[error("player returned an error: {0}")]
    Failed(PlayerError),

    #[error("ill-formed bid: {0}")]
    IllFormedBid(InvalidBid),
}

/// Why a player was removed without a challenge being resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ForfeitReason {
    #[error(transparent)]
    InvalidBid(InvalidBid),

    #[error(transparent)]
    InvalidChallenge(InvalidChallenge),

    #[error(transparent)]
    Malformed(MalformedPlayerResponse),
}

/// Unrecoverable engine state. Ends the game with no winner.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FatalState {
    #[error("elimination would leave no active players")]
    NoActivePlayers,

    #[error("{0} is not an active player")]
    NotActive(PlayerId),

    #[error("dealing failed: {0}")]
    Deal(#[from] DealError),
}

/// Hand generator input errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DealError {
    #[error("no players to deal to")]
    NoPlayers,

    #[error("hand size must be at least 1")]
    ZeroHandSize,
}

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("wild rank {0} is outside 0-9")]
    WildRankOutOfRange(Digit),

    #[error("starting seat {seat} is not at a table of {player_count}")]
    StartingSeatOutOfRange { seat: PlayerId, player_count: usize },
}
