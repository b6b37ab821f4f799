//! Round-by-round record of a finished game.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{FatalState, ForfeitReason, GameRngState, PlayerId};
use crate::rules::{BidRecord, Hands, Resolution};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnding {
    /// A challenge was resolved.
    Challenge {
        resolution: Resolution,
        /// Wall time the challenger took to decide.
        elapsed: Duration,
    },
    /// A player was removed for an illegal or malformed action.
    Forfeit {
        player: PlayerId,
        reason: ForfeitReason,
    },
}

impl RoundEnding {
    /// Seat eliminated by this ending.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        match self {
            RoundEnding::Challenge { resolution, .. } => resolution.loser(),
            RoundEnding::Forfeit { player, .. } => *player,
        }
    }

    /// The other party of a resolved challenge. Forfeits have none.
    #[must_use]
    pub fn survivor(&self) -> Option<PlayerId> {
        match self {
            RoundEnding::Challenge { resolution, .. } => Some(resolution.survivor()),
            RoundEnding::Forfeit { .. } => None,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            RoundEnding::Challenge { resolution, .. } => Some(resolution),
            RoundEnding::Forfeit { .. } => None,
        }
    }
}

/// One archived round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    /// Seat that acted first.
    pub opener: PlayerId,
    /// Active seats in turn order.
    pub seats: Vec<PlayerId>,
    pub hands: Hands,
    pub bids: Vector<BidRecord>,
    pub ending: RoundEnding,
}

impl RoundRecord {
    #[must_use]
    pub fn eliminated(&self) -> PlayerId {
        self.ending.loser()
    }
}

/// Terminal state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(PlayerId),
    Fatal(FatalState),
}

/// Everything `run_game` hands back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub rounds: Vec<RoundRecord>,
    /// Elimination order, earliest first.
    pub eliminated: Vec<PlayerId>,
    /// RNG position when the game ended.
    pub rng: GameRngState,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            GameOutcome::Winner(winner) => Some(winner),
            GameOutcome::Fatal(_) => None,
        }
    }

    #[must_use]
    pub fn fatal(&self) -> Option<&FatalState> {
        match &self.outcome {
            GameOutcome::Winner(_) => None,
            GameOutcome::Fatal(fatal) => Some(fatal),
        }
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}
