//! Simulation observer trait for progress reporting and data collection.

use epi_core::Tick;
use epi_stats::Statistics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust
/// use epi_core::{Status, Tick};
/// use epi_sim::SimObserver;
/// use epi_stats::Statistics;
///
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, tick: Tick, stats: &Statistics) {
///         println!("{tick}: {:.1}% infected", 100.0 * stats.status(Status::Infected));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `contacts` is the number of agent pairs found within contagion
    /// distance this tick.
    fn on_tick_end(&mut self, _tick: Tick, _contacts: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the statistics of the population as the tick left it.
    fn on_snapshot(&mut self, _tick: Tick, _stats: &Statistics) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
