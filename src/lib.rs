//! Boss Raid - turn-based boss fight simulator
//!
//! A single boss faces an ordered roster of heroes, each with one special
//! power. Rounds resolve in a fixed order with injected randomness, so a
//! seeded match always plays out the same way.
//!
//! ## Layout
//!
//! - `game`: the boss, the heroes and their shared entity state
//! - `engine`: round resolution, hero powers, events and snapshots
//! - `dice`: seeded and scripted randomness sources
//! - `presentation`: sinks that consume snapshots (console, log, memory)
//! - `config`: JSON settings and the roster factory

pub mod config;
pub mod dice;
pub mod engine;
pub mod game;
pub mod presentation;

use crate::config::{ConfigError, Settings};
use crate::dice::{Dice, SeededDice};
use crate::engine::{check_outcome, MatchReport, Outcome, RoundEngine, Snapshot};
use crate::game::{Boss, Hero};
use crate::presentation::SnapshotSink;

/// A match in progress
pub struct Raid<D: Dice> {
    boss: Boss,
    heroes: Vec<Hero>,
    engine: RoundEngine<D>,
}

impl Raid<SeededDice> {
    /// Build a match from settings. Without a seed the dice are seeded randomly.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let (boss, heroes) = settings.roster.build()?;
        let dice = match settings.seed {
            Some(seed) => SeededDice::new(seed),
            None => SeededDice::from_entropy(),
        };
        log::info!(
            "{} vs {} heroes (seed {})",
            boss.name(),
            heroes.len(),
            dice.seed()
        );
        Ok(Self::new(boss, heroes, dice))
    }
}

impl<D: Dice> Raid<D> {
    /// Create a match from an already built roster
    pub fn new(boss: Boss, heroes: Vec<Hero>, dice: D) -> Self {
        Self {
            boss,
            heroes,
            engine: RoundEngine::new(dice),
        }
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Rounds played so far
    pub fn round(&self) -> u32 {
        self.engine.round()
    }

    /// The randomness source
    pub fn dice(&self) -> &D {
        self.engine.dice()
    }

    /// Current state, without events
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.round(), &self.boss, &self.heroes, Vec::new())
    }

    /// The outcome if the match is over
    pub fn outcome(&self) -> Option<Outcome> {
        check_outcome(&self.boss, &self.heroes)
    }

    /// Play one round and hand its snapshot to `sink`
    pub fn play_round<S: SnapshotSink>(&mut self, sink: &mut S) -> Snapshot {
        let snapshot = self.engine.play_round(&mut self.boss, &mut self.heroes);
        sink.on_snapshot(&snapshot);
        snapshot
    }

    /// Play until one side falls.
    ///
    /// The initial state is emitted before the first round, unless rounds
    /// were already played. Rosters where no side can ever fall never return.
    pub fn run<S: SnapshotSink>(&mut self, sink: &mut S) -> MatchReport {
        if self.round() == 0 {
            sink.on_snapshot(&self.snapshot());
        }

        loop {
            if let Some(outcome) = self.outcome() {
                log::info!("match over after {} rounds: {:?}", self.round(), outcome);
                sink.on_finish(outcome);
                return MatchReport {
                    outcome,
                    rounds: self.round(),
                };
            }
            self.play_round(sink);
        }
    }
}
