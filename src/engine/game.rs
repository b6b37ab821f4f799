//! The game engine state machine.
//!
//! ```text
//! Dealing → Bidding ⟲ → Resolving → Eliminating → Dealing | Terminated
//!                 └──── (forfeit) ────┘
//! ```
//!
//! Each `step` advances exactly one transition; `Bidding` consumes one
//! player decision per step. `run` steps until `Terminated`.
//!
//! ## Opening seat
//!
//! Round 1 opens at `GameConfig::starting_seat`, or at a seat drawn from the
//! game RNG. Later rounds follow `GameConfig::rotation`.

use log::{debug, error, info, warn};
use std::time::Instant;
use thiserror::Error;

use super::history::{GameOutcome, GameResult, RoundEnding, RoundRecord};
use super::player::Player;
use super::view::{GameView, Reveal};
use crate::core::{
    ConfigError, Decision, FatalState, ForfeitReason, GameConfig, GameRng, InvalidActionPolicy,
    MalformedPlayerResponse, PlayerId, RotationPolicy,
};
use crate::rules::{deal, resolve, EliminationTracker, Hands, Round, Standing};

/// Engine phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// About to deal a new round.
    Dealing,
    /// Waiting on the player to act.
    Bidding,
    /// A challenge was accepted and awaits resolution.
    Resolving {
        challenger: PlayerId,
        elapsed: std::time::Duration,
    },
    /// The round is over; someone is about to be eliminated.
    Eliminating { ending: RoundEnding },
    /// The game is over.
    Terminated(GameOutcome),
}

/// Returned by `Engine::step` once the game has terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the game is over")]
pub struct GameOver;

/// Authoritative game state for one game.
pub struct Engine<'a, P: Player> {
    players: &'a mut [P],
    config: GameConfig,
    rng: GameRng,
    tracker: EliminationTracker,
    phase: Phase,
    round: Option<Round>,
    hands: Hands,
    opener: PlayerId,
    strikes: u32,
    rounds: Vec<RoundRecord>,
}

impl<'a, P: Player> Engine<'a, P> {
    /// Seat `players` in the given order and prepare round 1.
    pub fn new(players: &'a mut [P], config: GameConfig) -> Result<Self, ConfigError> {
        config.validate(players.len())?;

        let mut rng = GameRng::new(config.seed);
        let opener = config
            .starting_seat
            .unwrap_or_else(|| PlayerId::new(rng.gen_seat(players.len()) as u8));
        let tracker = EliminationTracker::new(players.len());

        info!(
            "new game: {} players, hand size {}, wild {:?}, {} opens",
            players.len(),
            config.hand_size,
            config.wild_rank,
            opener
        );

        Ok(Self {
            players,
            config,
            rng,
            tracker,
            phase: Phase::Dealing,
            round: None,
            hands: Hands::new(),
            opener,
            strikes: 0,
            rounds: Vec::new(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The round in progress, if one has been dealt.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Rounds archived so far.
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    #[must_use]
    pub fn tracker(&self) -> &EliminationTracker {
        &self.tracker
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    /// Advance one transition. Fails once the game has terminated.
    pub fn step(&mut self) -> Result<&Phase, GameOver> {
        if self.is_terminated() {
            return Err(GameOver);
        }
        self.advance();
        Ok(&self.phase)
    }

    /// Play to the end.
    pub fn run(mut self) -> GameResult {
        loop {
            if let Phase::Terminated(outcome) = &self.phase {
                let outcome = outcome.clone();
                return self.finish(outcome);
            }
            self.advance();
        }
    }

    fn advance(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Dealing);
        self.phase = match phase {
            Phase::Dealing => self.deal_round(),
            Phase::Bidding => self.take_turn(),
            Phase::Resolving { challenger, elapsed } => self.resolve_challenge(challenger, elapsed),
            Phase::Eliminating { ending } => self.eliminate(ending),
            terminated @ Phase::Terminated(_) => terminated,
        };
    }

    fn deal_round(&mut self) -> Phase {
        let seats = self.tracker.active_players();
        self.hands = match deal(&seats, self.config.hand_size, &mut self.rng) {
            Ok(hands) => hands,
            Err(err) => return self.fatal(FatalState::from(err)),
        };

        let number = self.rounds.len() as u32 + 1;
        let max_quantity = self.config.max_quantity(seats.len());
        let round = Round::new(number, seats, self.opener, max_quantity);
        info!(
            "round {}: {} players, {} digits in play, {} opens",
            number,
            round.seats().len(),
            max_quantity,
            round.to_act()
        );

        self.round = Some(round);
        self.strikes = 0;
        Phase::Bidding
    }

    fn take_turn(&mut self) -> Phase {
        let Some(round) = self.round.as_ref() else {
            return Phase::Dealing;
        };
        let actor = round.to_act();
        let view = GameView::new(actor, round, &self.hands, &self.config);

        let player = &mut self.players[actor.index()];
        player.observe(&view);
        let started = Instant::now();
        let response = player.decide(&view);
        let elapsed = started.elapsed();
        debug!("{} answered {:?} in {:?}", actor, response, elapsed);

        let response = match self.config.decision_timeout {
            Some(limit) if elapsed > limit => {
                warn!("{} took {:?} (limit {:?}); treating as a challenge", actor, elapsed, limit);
                Ok(Decision::Challenge)
            }
            _ => response,
        };

        let decision = match response {
            Ok(decision) => decision,
            Err(err) => {
                return self.forfeit(actor, ForfeitReason::Malformed(MalformedPlayerResponse::Failed(err)));
            }
        };

        match decision {
            Decision::Bid(bid) => {
                if let Err(err) = bid.validate() {
                    return self.forfeit(
                        actor,
                        ForfeitReason::Malformed(MalformedPlayerResponse::IllFormedBid(err)),
                    );
                }
                let Some(round) = self.round.as_mut() else {
                    return Phase::Dealing;
                };
                match round.propose(actor, bid, elapsed) {
                    Ok(_) => {
                        debug!("{} bids {}", actor, bid);
                        self.strikes = 0;
                        Phase::Bidding
                    }
                    Err(err) => self.reject(actor, ForfeitReason::InvalidBid(err)),
                }
            }
            Decision::Challenge => match round_challenge(self.round.as_ref(), actor) {
                Ok(()) => {
                    self.strikes = 0;
                    Phase::Resolving {
                        challenger: actor,
                        elapsed,
                    }
                }
                Err(reason) => self.reject(actor, reason),
            },
        }
    }

    fn resolve_challenge(&mut self, challenger: PlayerId, elapsed: std::time::Duration) -> Phase {
        let Some(round) = self.round.as_ref() else {
            return Phase::Dealing;
        };
        match resolve(round, challenger, &self.hands, self.config.wild_rank) {
            Ok(resolution) => {
                info!(
                    "round {}: {} challenges {}'s {}; {} found, {:?}",
                    round.number(),
                    challenger,
                    resolution.bidder,
                    resolution.bid,
                    resolution.actual_count,
                    resolution.outcome
                );
                Phase::Eliminating {
                    ending: RoundEnding::Challenge { resolution, elapsed },
                }
            }
            Err(err) => self.reject(challenger, ForfeitReason::InvalidChallenge(err)),
        }
    }

    fn eliminate(&mut self, ending: RoundEnding) -> Phase {
        let Some(round) = self.round.take() else {
            return Phase::Dealing;
        };
        let standing = match &ending {
            RoundEnding::Challenge { resolution, .. } => {
                self.tracker
                    .apply(resolution.outcome, resolution.challenger, resolution.bidder)
            }
            RoundEnding::Forfeit { player, .. } => self.tracker.eliminate(*player),
        };
        // Nobody was removed, so there is nothing to reveal or archive.
        let standing = match standing {
            Ok(standing) => standing,
            Err(fatal) => return self.fatal(fatal),
        };
        let loser = ending.loser();

        let reveal = Reveal {
            round: round.number(),
            hands: self.hands.clone(),
            resolution: ending.resolution().cloned(),
            eliminated: loser,
        };
        for seat in round.seats() {
            self.players[seat.index()].on_reveal(&reveal);
        }

        let survivor = ending.survivor();
        self.rounds.push(RoundRecord {
            number: round.number(),
            opener: round.opener(),
            seats: round.seats().to_vec(),
            hands: self.hands.clone(),
            bids: round.history().clone(),
            ending,
        });

        match standing {
            Standing::Winner(winner) => {
                info!("{} wins after {} rounds", winner, self.rounds.len());
                Phase::Terminated(GameOutcome::Winner(winner))
            }
            Standing::Continue { active } => {
                self.opener = self.next_opener(loser, survivor);
                info!("{} eliminated, {} players remain", loser, active);
                Phase::Dealing
            }
        }
    }

    /// Apply the invalid-action policy to an illegal bid or challenge.
    fn reject(&mut self, actor: PlayerId, reason: ForfeitReason) -> Phase {
        self.strikes += 1;
        match self.config.invalid_action {
            InvalidActionPolicy::Retry { attempts } if self.strikes <= attempts => {
                warn!("{} rejected ({}), retry {}/{}", actor, reason, self.strikes, attempts);
                Phase::Bidding
            }
            _ => self.forfeit(actor, reason),
        }
    }

    fn forfeit(&mut self, player: PlayerId, reason: ForfeitReason) -> Phase {
        warn!("{} forfeits: {}", player, reason);
        Phase::Eliminating {
            ending: RoundEnding::Forfeit { player, reason },
        }
    }

    fn fatal(&mut self, fatal: FatalState) -> Phase {
        error!("game cannot continue: {}", fatal);
        Phase::Terminated(GameOutcome::Fatal(fatal))
    }

    fn next_opener(&self, loser: PlayerId, survivor: Option<PlayerId>) -> PlayerId {
        let preferred = match self.config.rotation {
            RotationPolicy::ChallengeSurvivor => survivor.filter(|p| self.tracker.is_active(*p)),
            RotationPolicy::AfterEliminated => None,
        };
        preferred
            .or_else(|| self.tracker.next_active_after(loser))
            .unwrap_or(self.opener)
    }

    fn finish(self, outcome: GameOutcome) -> GameResult {
        GameResult {
            outcome,
            rounds: self.rounds,
            eliminated: self.tracker.eliminated().to_vec(),
            rng: self.rng.state(),
        }
    }
}

fn round_challenge(round: Option<&Round>, challenger: PlayerId) -> Result<(), ForfeitReason> {
    match round {
        Some(round) => round
            .challenge(challenger)
            .map(|_| ())
            .map_err(ForfeitReason::InvalidChallenge),
        None => Err(ForfeitReason::InvalidChallenge(
            crate::core::InvalidChallenge::NoStandingBid,
        )),
    }
}

/// Play one game to completion.
///
/// `players[i]` sits at `PlayerId(i)`. Configuration problems are reported
/// before any card is dealt; everything after that, including a
/// `FatalState`, is part of the returned `GameResult`.
pub fn run_game<P: Player>(players: &mut [P], config: &GameConfig) -> Result<GameResult, ConfigError> {
    Ok(Engine::new(players, config.clone())?.run())
}
