//! Randomness sources
//!
//! The round engine never touches a global RNG. Every draw goes through a
//! [`Dice`] handed to it by the caller:
//! - [`SeededDice`] wraps a seedable RNG so a fixed seed replays a fixed match
//! - [`ScriptedDice`] replays hand-picked draws for tests

pub mod scripted;
pub mod seeded;

pub use scripted::ScriptedDice;
pub use seeded::SeededDice;

/// Errors raised by a randomness source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("cannot choose from an empty selection")]
    EmptySelection,
}

/// Uniform sampling operations used by the battle logic
pub trait Dice {
    /// Uniformly pick an index in `0..len`
    fn uniform_index(&mut self, len: usize) -> Result<usize, DiceError>;

    /// Uniformly pick an integer in `low..=high`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// Uniformly pick one element of `items`
    fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, DiceError> {
        let idx = self.uniform_index(items.len())?;
        items.get(idx).ok_or(DiceError::EmptySelection)
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn uniform_index(&mut self, len: usize) -> Result<usize, DiceError> {
        (**self).uniform_index(len)
    }

    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).uniform_int(low, high)
    }
}
