//! Game orchestration.
//!
//! - `Engine`: the Dealing → Bidding → Resolving → Eliminating state machine
//! - `Player`: the contract strategies implement
//! - `GameView` / `Reveal`: what players are shown
//! - `GameResult`: round-by-round history
//! - `run_series`: many games with the same players
//!
//! ## Usage
//!
//! ```
//! use liars_poker::core::{Decision, GameConfig, PlayerError};
//! use liars_poker::engine::{run_game, GameView, Player};
//!
//! /// Opens low, challenges everything else.
//! struct Doubter;
//!
//! impl Player for Doubter {
//!     fn decide(&mut self, view: &GameView) -> Result<Decision, PlayerError> {
//!         match view.standing_bid() {
//!             Some(_) => Ok(Decision::Challenge),
//!             None => view.min_raise().map(Decision::Bid).ok_or(PlayerError::NoDecision),
//!         }
//!     }
//! }
//!
//! let mut players = vec![Doubter, Doubter, Doubter];
//! let result = run_game(&mut players, &GameConfig::default().with_seed(3)).unwrap();
//! assert_eq!(result.round_count(), 2);
//! assert!(result.winner().is_some());
//! ```

pub mod view;
pub mod player;
pub mod history;
pub mod game;
pub mod series;

pub use view::{GameView, Reveal};
pub use player::Player;
pub use history::{GameOutcome, GameResult, RoundEnding, RoundRecord};
pub use game::{run_game, Engine, GameOver, Phase};
pub use series::{run_series, SeriesResult};
