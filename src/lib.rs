//! # liars-poker
//!
//! A deterministic Liar's Poker engine for pitting pluggable strategies
//! against each other.
//!
//! ## Rules
//!
//! Every active player is dealt a private hand of digits. Players take turns
//! either raising the bid ("at least N of digit D across all hands") or
//! challenging the standing bid. A challenge reveals every hand: if the bid
//! holds (wilds count toward every digit) the challenger is eliminated,
//! otherwise the bidder is. Rounds repeat until one player remains.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fixes every deal. Player decisions are the
//!    only other input.
//!
//! 2. **Hidden information**: Players only ever receive a freshly built
//!    `GameView` holding their own hand and the public bid history.
//!
//! 3. **Pure rules**: The bid order, the wild tally and the elimination rule
//!    are standalone functions in `rules`, tested on their own.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, bids, hands, configuration, errors
//! - `rules`: Hand generator, bid ledger, round resolver, elimination tracker
//! - `engine`: State machine, player contract, history, series

pub mod core;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Bid, Decision, Digit, Hand, PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, InvalidActionPolicy, RotationPolicy,
    ConfigError, FatalState, ForfeitReason, InvalidBid, InvalidChallenge,
    MalformedPlayerResponse, PlayerError,
};

pub use crate::rules::{
    BidRecord, EliminationTracker, Hands, Outcome, Resolution, Round, Standing,
};

pub use crate::engine::{
    run_game, run_series, Engine, GameOutcome, GameResult, GameView, Phase, Player,
    Reveal, RoundEnding, RoundRecord, SeriesResult,
};
