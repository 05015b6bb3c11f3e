//! Presentation layer
//!
//! The engine hands out [`Snapshot`]s; sinks decide what to do with them.
//! - [`ConsoleSink`] renders the classic text statistics
//! - [`LogSink`] forwards a one-line summary to the `log` facade
//! - `Vec<Snapshot>` records everything, which is what tests use

pub mod console;
pub mod text;

pub use console::ConsoleSink;
pub use text::{render_event, render_outcome, render_snapshot};

use crate::engine::{Outcome, Snapshot};

/// Receiver of per-round battle snapshots
pub trait SnapshotSink {
    /// Called with the initial state and after every round
    fn on_snapshot(&mut self, snapshot: &Snapshot);

    /// Called once when the match is decided
    fn on_finish(&mut self, _outcome: Outcome) {}
}

impl SnapshotSink for Vec<Snapshot> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        (**self).on_snapshot(snapshot);
    }

    fn on_finish(&mut self, outcome: Outcome) {
        (**self).on_finish(outcome);
    }
}

/// Sink that only logs a short summary per round
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// One-line summary of a snapshot
    pub fn summary(snapshot: &Snapshot) -> String {
        format!(
            "round {}: {} at {} hp, {} heroes standing",
            snapshot.round,
            snapshot.boss.name,
            snapshot.boss.health,
            snapshot.alive_hero_count()
        )
    }
}

impl SnapshotSink for LogSink {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        log::info!("{}", Self::summary(snapshot));
    }

    fn on_finish(&mut self, outcome: Outcome) {
        log::info!("{}", render_outcome(outcome));
    }
}
