//! Text sink writing to any `io::Write`

use std::io::Write;

use super::text::{render_event, render_outcome, render_snapshot};
use super::SnapshotSink;
use crate::config::RenderSettings;
use crate::engine::{Outcome, Snapshot};

/// Writes rendered snapshots to a writer (stdout in the CLI)
pub struct ConsoleSink<W: Write> {
    out: W,
    settings: RenderSettings,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, settings: RenderSettings) -> Self {
        Self { out, settings }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::error!("Failed to write battle output: {}", e);
        }
    }
}

impl<W: Write> SnapshotSink for ConsoleSink<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if self.settings.quiet {
            return;
        }

        if self.settings.show_events {
            let lines: Vec<String> = snapshot
                .events
                .iter()
                .filter_map(|event| render_event(event, snapshot))
                .collect();
            if !lines.is_empty() {
                self.write_block(&lines.join("\n"));
            }
        }

        self.write_block(&render_snapshot(snapshot));
    }

    fn on_finish(&mut self, outcome: Outcome) {
        self.write_block(render_outcome(outcome));
        if let Err(e) = self.out.flush() {
            log::error!("Failed to flush battle output: {}", e);
        }
    }
}
