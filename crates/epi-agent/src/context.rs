//! Read-only parameters handed to every agent method during a tick.

use epi_core::{AgeTables, Amplitudes, WealthCurve};

/// Engine parameters an agent needs to move, progress, and interact.
///
/// Built by the engine once per tick from its (possibly trigger-modified)
/// configuration.  Borrows only; nothing here is mutated by agents.
#[derive(Clone, Copy)]
pub struct AgentContext<'a> {
    pub length:          f64,
    pub height:          f64,
    pub amplitudes:      &'a Amplitudes,
    pub minimum_expense: f64,
    pub tables:          &'a AgeTables,
    pub wealth:          &'a WealthCurve,
}
