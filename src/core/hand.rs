//! A player's private digit sequence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::bid::{Digit, DIGIT_COUNT};

/// An ordered, fixed-width run of digits dealt to one player for one round.
///
/// Classic serial numbers are 8 digits, so `SmallVec` keeps those inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    digits: SmallVec<[Digit; 8]>,
}

impl Hand {
    /// Create a hand from explicit digits.
    #[must_use]
    pub fn from_digits(digits: &[Digit]) -> Self {
        Self {
            digits: SmallVec::from_slice(digits),
        }
    }

    /// The digits in dealt order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for a hand with no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Occurrences of `digit`, wilds not included.
    #[must_use]
    pub fn count(&self, digit: Digit) -> u32 {
        self.digits.iter().filter(|d| **d == digit).count() as u32
    }

    /// Occurrences of every digit value, indexed by digit.
    #[must_use]
    pub fn counts(&self) -> [u32; DIGIT_COUNT] {
        let mut counts = [0; DIGIT_COUNT];
        for &d in &self.digits {
            if let Some(slot) = counts.get_mut(d as usize) {
                *slot += 1;
            }
        }
        counts
    }
}

impl FromIterator<Digit> for Hand {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
