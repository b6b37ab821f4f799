//! Test strategies shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use liars_poker::core::{Bid, Decision, GameRng, PlayerError};
use liars_poker::engine::{GameView, Player, Reveal};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type DecideFn = Box<dyn FnMut(&GameView) -> Result<Decision, PlayerError>>;

/// Delegates to a closure and records everything it is shown.
pub struct Recorder {
    decide: DecideFn,
    pub observed: Vec<GameView>,
    pub asked: Vec<GameView>,
    pub reveals: Vec<Reveal>,
}

impl Recorder {
    pub fn new(decide: impl FnMut(&GameView) -> Result<Decision, PlayerError> + 'static) -> Self {
        Self {
            decide: Box::new(decide),
            observed: Vec::new(),
            asked: Vec::new(),
            reveals: Vec::new(),
        }
    }

    /// Plays `moves` in order, then challenges.
    pub fn script(moves: Vec<Decision>) -> Self {
        let mut moves: VecDeque<_> = moves.into();
        Self::new(move |_| Ok(moves.pop_front().unwrap_or(Decision::Challenge)))
    }

    /// Opens with the lowest bid, challenges anything standing.
    pub fn doubter() -> Self {
        Self::new(|view| match view.standing_bid() {
            Some(_) => Ok(Decision::Challenge),
            None => Ok(Decision::Bid(Bid::lowest())),
        })
    }

    /// Bids `quantity` of the first digit in its own hand, then challenges.
    pub fn own_digit(quantity: u32) -> Self {
        Self::new(move |view| match view.standing_bid() {
            Some(_) => Ok(Decision::Challenge),
            None => Ok(Decision::Bid(Bid::new(quantity, view.hand.digits()[0]))),
        })
    }

    /// Sleeps for `delay`, then plays `decision`.
    pub fn slow(delay: Duration, decision: Decision) -> Self {
        Self::new(move |_| {
            std::thread::sleep(delay);
            Ok(decision)
        })
    }
}

impl Player for Recorder {
    fn observe(&mut self, view: &GameView) {
        self.observed.push(view.clone());
    }

    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
        self.asked.push(view.clone());
        (self.decide)(view)
    }

    fn on_reveal(&mut self, reveal: &Reveal) {
        self.reveals.push(reveal.clone());
    }
}

/// Always-legal random strategy: raises on a digit from its own hand,
/// challenging with probability `challenge_rate` once a bid stands.
pub struct Raiser {
    rng: GameRng,
    challenge_rate: f64,
}

impl Raiser {
    pub fn new(seed: u64, challenge_rate: f64) -> Self {
        Self {
            rng: GameRng::new(seed),
            challenge_rate,
        }
    }
}

impl Player for Raiser {
    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
        let Some(floor) = view.min_raise() else {
            return Ok(Decision::Challenge);
        };
        if view.standing_bid().is_some() && self.rng.gen_bool(self.challenge_rate) {
            return Ok(Decision::Challenge);
        }

        let digit = self.rng.choose(view.hand.digits()).copied().unwrap_or(floor.digit);
        let bid = if digit >= floor.digit {
            Bid::new(floor.quantity, digit)
        } else if floor.quantity < view.max_quantity() {
            Bid::new(floor.quantity + 1, digit)
        } else {
            floor
        };
        Ok(Decision::Bid(bid))
    }
}

/// Random strategy that ignores the rules: out-of-range digits, zero or
/// oversized quantities, non-raises, opening challenges, and errors.
pub struct Chaos {
    rng: GameRng,
}

impl Chaos {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Player for Chaos {
    fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
        match self.rng.gen_seat(10) {
            0 => Err(PlayerError::Internal("chaos".to_string())),
            1 | 2 => Ok(Decision::Challenge),
            _ => {
                let quantity = self.rng.gen_seat(view.max_quantity() as usize + 3) as u32;
                let digit = self.rng.gen_seat(12) as u8;
                Ok(Decision::Bid(Bid::new(quantity, digit)))
            }
        }
    }
}
