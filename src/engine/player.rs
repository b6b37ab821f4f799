//! The capability every strategy implements.

use super::view::{GameView, Reveal};
use crate::core::{Decision, PlayerError};

/// A Liar's Poker strategy.
///
/// The engine calls in; a player never calls the engine. Calls are strictly
/// sequential, one outstanding at a time.
///
/// ## Implementation Notes
///
/// - `observe`: optional, called right before `decide`
/// - `decide`: a bid or a challenge; an `Err` forfeits the game for this player
/// - `on_reveal`: optional, sent to every seat of the round once it ends
pub trait Player {
    /// Notification of the state about to be decided on.
    fn observe(&mut self, _view: &GameView) {}

    /// Choose the next action.
    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError>;

    /// Round-end disclosure of all hands and the result.
    fn on_reveal(&mut self, _reveal: &Reveal) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn observe(&mut self, view: &GameView) {
        (**self).observe(view);
    }

    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
        (**self).decide(view)
    }

    fn on_reveal(&mut self, reveal: &Reveal) {
        (**self).on_reveal(reveal);
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn observe(&mut self, view: &GameView) {
        (**self).observe(view);
    }

    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
        (**self).decide(view)
    }

    fn on_reveal(&mut self, reveal: &Reveal) {
        (**self).on_reveal(reveal);
    }
}
