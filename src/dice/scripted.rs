//! Scripted randomness source
//!
//! Replays queued draws in order. Once a queue runs dry, index draws fall
//! back to the first element and integer draws to the low bound.

use std::collections::VecDeque;

use super::{Dice, DiceError};

/// Dice that return pre-recorded draws
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    indices: VecDeque<usize>,
    ints: VecDeque<i32>,
    draws: usize,
}

impl ScriptedDice {
    /// Create dice with empty queues
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index draws (wrapped into range on use)
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue integer draws (clamped into range on use)
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Dice for ScriptedDice {
    fn uniform_index(&mut self, len: usize) -> Result<usize, DiceError> {
        if len == 0 {
            return Err(DiceError::EmptySelection);
        }
        self.draws += 1;
        Ok(self.indices.pop_front().unwrap_or(0) % len)
    }

    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.draws += 1;
        match self.ints.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low,
        }
    }
}
