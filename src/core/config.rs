//! Game configuration.
//!
//! `GameConfig` carries everything `run_game` needs besides the players:
//! hand width, wild rank, seed, and the engine's table policies.
//!
//! ```
//! use liars_poker::core::{GameConfig, InvalidActionPolicy, RotationPolicy};
//!
//! let config = GameConfig::new(6, Some(0), 42)
//!     .with_rotation(RotationPolicy::ChallengeSurvivor)
//!     .with_invalid_action(InvalidActionPolicy::Retry { attempts: 2 });
//! assert!(config.validate(3).is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::bid::{Digit, MAX_DIGIT};
use super::error::ConfigError;
use super::player::PlayerId;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a table can seat.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Who opens the round after an elimination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPolicy {
    /// The next active seat after the eliminated player's seat.
    #[default]
    AfterEliminated,
    /// Whoever survived the challenge (or the next seat after a forfeit).
    ChallengeSurvivor,
}

/// What happens when a player submits an illegal bid or challenge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidActionPolicy {
    /// The offender is eliminated immediately.
    #[default]
    Forfeit,
    /// The offender is asked again up to `attempts` more times, then eliminated.
    Retry { attempts: u32 },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Digits dealt to each active player every round.
    pub hand_size: usize,

    /// Digit that also counts toward every other claimed digit. `None` disables wilds.
    pub wild_rank: Option<Digit>,

    /// Seed for the game RNG.
    pub seed: u64,

    /// Seat that opens round 1. `None` draws one from the game RNG.
    pub starting_seat: Option<PlayerId>,

    /// Opening seat for every later round.
    pub rotation: RotationPolicy,

    /// Handling of illegal bids and challenges.
    pub invalid_action: InvalidActionPolicy,

    /// Decisions slower than this are replaced by an automatic challenge.
    ///
    /// Measured after `decide` returns; the engine never pre-empts a player.
    pub decision_timeout: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            wild_rank: Some(0),
            seed: 0,
            starting_seat: None,
            rotation: RotationPolicy::default(),
            invalid_action: InvalidActionPolicy::default(),
            decision_timeout: None,
        }
    }
}

impl GameConfig {
    /// Create a config with the classic policies.
    pub fn new(hand_size: usize, wild_rank: Option<Digit>, seed: u64) -> Self {
        Self {
            hand_size,
            wild_rank,
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_seat(mut self, seat: Option<PlayerId>) -> Self {
        self.starting_seat = seat;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_invalid_action(mut self, policy: InvalidActionPolicy) -> Self {
        self.invalid_action = policy;
        self
    }

    #[must_use]
    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = Some(timeout);
        self
    }

    /// Highest legal bid quantity with `active_players` at the table.
    #[must_use]
    pub fn max_quantity(&self, active_players: usize) -> u32 {
        u32::try_from(active_players.saturating_mul(self.hand_size)).unwrap_or(u32::MAX)
    }

    /// Check the config against a table of `player_count` players.
    pub fn validate(&self, player_count: usize) -> Result<(), ConfigError> {
        if player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(player_count));
        }
        if player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(player_count));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if let Some(wild) = self.wild_rank.filter(|w| *w > MAX_DIGIT) {
            return Err(ConfigError::WildRankOutOfRange(wild));
        }
        if let Some(seat) = self.starting_seat.filter(|s| s.index() >= player_count) {
            return Err(ConfigError::StartingSeatOutOfRange { seat, player_count });
        }
        Ok(())
    }
}
