//! Multi-game series tests.

mod common;

use common::{Raiser, Recorder};
use liars_poker::core::{ConfigError, GameConfig, PlayerId};
use liars_poker::engine::run_series;

#[test]
fn test_series_counts_every_game() {
    let mut players: Vec<_> = (0..3).map(|seed| Raiser::new(seed, 0.4)).collect();
    let series = run_series(&mut players, &GameConfig::default().with_seed(10), 6).unwrap();

    assert_eq!(series.games.len(), 6);
    assert_eq!(series.unresolved, 0);
    let total: u32 = series.wins.iter().map(|(_, w)| *w).sum();
    assert_eq!(total, 6);

    for (seat, wins) in series.wins.iter() {
        let expected = series.games.iter().filter(|g| g.winner() == Some(seat)).count() as u32;
        assert_eq!(*wins, expected);
    }
}

#[test]
fn test_previous_winner_opens_next_game() {
    let mut players: Vec<_> = (0..4).map(|seed| Raiser::new(seed, 0.3)).collect();
    let config = GameConfig::default().with_starting_seat(Some(PlayerId::new(2)));
    let series = run_series(&mut players, &config, 5).unwrap();

    assert_eq!(series.games[0].rounds[0].opener, PlayerId::new(2));
    for pair in series.games.windows(2) {
        assert_eq!(Some(pair[1].rounds[0].opener), pair[0].winner());
    }
}

#[test]
fn test_each_game_gets_its_own_seed() {
    let mut players: Vec<_> = (0..3).map(|_| Recorder::doubter()).collect();
    let series = run_series(&mut players, &GameConfig::default().with_seed(50), 3).unwrap();

    let seeds: Vec<_> = series.games.iter().map(|g| g.rng.seed).collect();
    assert_eq!(seeds, vec![50, 51, 52]);
    assert_ne!(series.games[0].rounds[0].hands, series.games[1].rounds[0].hands);
}

#[test]
fn test_players_are_reused_across_games() {
    let mut players: Vec<_> = (0..2).map(|_| Recorder::doubter()).collect();
    run_series(&mut players, &GameConfig::default(), 4).unwrap();

    // Two seats, one round per game: both see every reveal.
    for player in &players {
        assert_eq!(player.reveals.len(), 4);
    }
}

#[test]
fn test_series_rejects_bad_config() {
    let mut players = vec![Recorder::doubter()];
    assert_eq!(
        run_series(&mut players, &GameConfig::default(), 3).unwrap_err(),
        ConfigError::TooFewPlayers(1)
    );
}
