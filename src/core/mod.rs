//! Core types: seats, RNG, bids, hands, configuration, errors.
//!
//! Everything here is plain data. Rules live in `rules`, orchestration in
//! `engine`.

pub mod player;
pub mod rng;
pub mod bid;
pub mod hand;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use bid::{Bid, Decision, Digit, DIGIT_COUNT, MAX_DIGIT};
pub use hand::Hand;
pub use config::{GameConfig, InvalidActionPolicy, RotationPolicy, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{
    ConfigError, DealError, FatalState, ForfeitReason, InvalidBid, InvalidChallenge,
    MalformedPlayerResponse, PlayerError,
};
