//! Back-to-back games with the same players.
//!
//! Game `i` is seeded with `config.seed + i`. The winner of each game opens
//! the next one; after a game without a winner the opener is drawn at random.

use log::info;
use serde::{Deserialize, Serialize};

use super::game::run_game;
use super::history::GameResult;
use super::player::Player;
use crate::core::{ConfigError, GameConfig, PlayerMap};

/// Results of a series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Per-game results, in play order.
    pub games: Vec<GameResult>,
    /// Games won, per seat.
    pub wins: PlayerMap<u32>,
    /// Games that ended in a `FatalState`.
    pub unresolved: u32,
}

/// Play `games` games in a row.
pub fn run_series<P: Player>(
    players: &mut [P],
    config: &GameConfig,
    games: usize,
) -> Result<SeriesResult, ConfigError> {
    config.validate(players.len())?;

    let mut result = SeriesResult {
        games: Vec::with_capacity(games),
        wins: PlayerMap::with_value(players.len(), 0),
        unresolved: 0,
    };
    let mut opener = config.starting_seat;

    for index in 0..games {
        let game_config = config
            .clone()
            .with_seed(config.seed.wrapping_add(index as u64))
            .with_starting_seat(opener);
        let game = run_game(players, &game_config)?;

        opener = game.winner();
        match opener {
            Some(winner) => result.wins[winner] += 1,
            None => result.unresolved += 1,
        }
        result.games.push(game);
    }

    info!(
        "series of {} games finished: {:?} wins, {} unresolved",
        games,
        result.wins.iter().map(|(_, w)| *w).collect::<Vec<_>>(),
        result.unresolved
    );
    Ok(result)
}
