//! Elimination tracker: player lifecycle across rounds.
//!
//! Seats only ever move from active to eliminated. The game is over when a
//! single active seat remains.

use serde::{Deserialize, Serialize};

use super::resolver::Outcome;
use crate::core::{FatalState, PlayerId, PlayerMap};

/// Table status after an elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    /// More than one player remains.
    Continue { active: usize },
    /// Exactly one player remains.
    Winner(PlayerId),
}

/// Active/eliminated status per seat, plus elimination order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationTracker {
    active: PlayerMap<bool>,
    eliminated: Vec<PlayerId>,
}

impl EliminationTracker {
    /// Start with every seat active.
    pub fn new(player_count: usize) -> Self {
        Self {
            active: PlayerMap::with_value(player_count, true),
            eliminated: Vec::new(),
        }
    }

    /// Is `player` still in the game?
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.get(player).copied().unwrap_or(false)
    }

    /// Active seats in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.active
            .iter()
            .filter(|(_, active)| **active)
            .map(|(p, _)| p)
            .collect()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|(_, active)| **active).count()
    }

    /// Eliminated seats, earliest first.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    /// First active seat after `seat`, wrapping around the table.
    ///
    /// `seat` itself is considered last, so a lone survivor finds itself.
    #[must_use]
    pub fn next_active_after(&self, seat: PlayerId) -> Option<PlayerId> {
        let n = self.active.player_count();
        (1..=n)
            .map(|offset| PlayerId::new(((seat.index() + offset) % n) as u8))
            .find(|p| self.is_active(*p))
    }

    /// Apply a challenge outcome: a lie eliminates the bidder, a standing
    /// bid eliminates the challenger.
    pub fn apply(&mut self, outcome: Outcome, challenger: PlayerId, bidder: PlayerId) -> Result<Standing, FatalState> {
        self.eliminate(outcome.loser(challenger, bidder))
    }

    /// Remove `player` from play.
    ///
    /// Eliminating an inactive seat, or the last active one, is a `FatalState`
    /// and leaves the tracker unchanged.
    pub fn eliminate(&mut self, player: PlayerId) -> Result<Standing, FatalState> {
        if !self.is_active(player) {
            return Err(FatalState::NotActive(player));
        }
        if self.active_count() <= 1 {
            return Err(FatalState::NoActivePlayers);
        }

        self.active[player] = false;
        self.eliminated.push(player);

        match self.active_players().as_slice() {
            [winner] => Ok(Standing::Winner(*winner)),
            active => Ok(Standing::Continue {
                active: active.len(),
            }),
        }
    }
}
