//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use epi_core::Tick;
use epi_sim::SimObserver;
use epi_stats::Statistics;

use crate::writer::OutputWriter;
use crate::{EconomyRow, EpidemicRow, OutputError, OutputResult};

/// A [`SimObserver`] that writes every statistics snapshot to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of snapshots written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, stats: &Statistics) {
        let result = self.writer.write_epidemic(&EpidemicRow::new(tick, stats));
        self.store_err(result);
        let result = self.writer.write_economy(&EconomyRow::new(tick, stats));
        self.store_err(result);
        self.rows += 1;
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
