//! The `OutputWriter` trait implemented by backend writers.

use crate::{EconomyRow, EpidemicRow, OutputResult};

/// Sink for per-snapshot statistics rows.
///
/// Errors are returned here but swallowed by the observer, which stores
/// them for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_epidemic(&mut self, row: &EpidemicRow) -> OutputResult<()>;

    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
