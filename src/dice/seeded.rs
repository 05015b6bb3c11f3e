//! Seedable randomness source backed by `rand`

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use super::{Dice, DiceError};

/// Dice driven by a seeded [`StdRng`]
#[derive(Debug)]
pub struct SeededDice {
    seed: u64,
    rng: StdRng,
}

impl SeededDice {
    /// Create dice that replay the same draws for the same seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create dice from a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::rng().random_range(0..=u64::MAX);
        Self::new(seed)
    }

    /// Seed these dice were created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for SeededDice {
    fn uniform_index(&mut self, len: usize) -> Result<usize, DiceError> {
        if len == 0 {
            return Err(DiceError::EmptySelection);
        }
        Ok(self.rng.random_range(0..len))
    }

    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = SeededDice::new(12345);
        let mut b = SeededDice::new(12345);

        for _ in 0..100 {
            assert_eq!(a.uniform_int(2, 5), b.uniform_int(2, 5));
            assert_eq!(a.uniform_index(8), b.uniform_index(8));
        }
    }

    #[test]
    fn test_draws_in_range() {
        let mut dice = SeededDice::new(42);

        for _ in 0..1000 {
            let value = dice.uniform_int(2, 5);
            assert!((2..=5).contains(&value));

            let idx = dice.uniform_index(3).unwrap();
            assert!(idx < 3);
        }
    }

    #[test]
    fn test_inclusive_bounds_are_reached() {
        let mut dice = SeededDice::new(7);
        let mut seen = [false; 4];

        for _ in 0..1000 {
            seen[(dice.uniform_int(2, 5) - 2) as usize] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_index() {
        let mut dice = SeededDice::new(1);
        assert_eq!(dice.uniform_index(0), Err(DiceError::EmptySelection));
    }

    #[test]
    fn test_degenerate_range() {
        let mut dice = SeededDice::new(1);
        assert_eq!(dice.uniform_int(3, 3), 3);
    }
}
