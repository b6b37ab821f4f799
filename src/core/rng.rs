//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deals, round after round
//! - **Checkpointable**: O(1) state capture and restore
//!
//! `GameRng` implements `RngCore`, so it can be handed to anything that takes
//! a `rand::Rng`, including the hand generator.
//!
//! ```
//! use liars_poker::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_digit(), b.gen_digit());
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::bid::{Digit, MAX_DIGIT};

/// Seeded ChaCha8 generator owned by a single game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw one digit uniformly from 0-9.
    pub fn gen_digit(&mut self) -> Digit {
        self.inner.gen_range(0..=MAX_DIGIT)
    }

    /// Draw a seat index uniformly from `0..player_count`.
    ///
    /// Returns 0 for an empty table.
    pub fn gen_seat(&mut self, player_count: usize) -> usize {
        if player_count == 0 {
            return 0;
        }
        self.inner.gen_range(0..player_count)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how many
/// digits have been dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_digit(), rng2.gen_digit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_digit()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_digit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_digits_stay_in_range() {
        let mut rng = GameRng::new(9);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            let d = rng.gen_digit();
            assert!(d <= MAX_DIGIT);
            seen[d as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every digit should appear in 1000 draws");
    }

    #[test]
    fn test_gen_seat() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            assert!(rng.gen_seat(4) < 4);
        }
        assert_eq!(rng.gen_seat(0), 0);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [4u8, 5, 6];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..37 {
            rng.gen_digit();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_digit()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_digit()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
