//! Plain data row types written by output backends.

use epi_core::{InfectionSeverity, Quintile, Status, Tick};
use epi_stats::Statistics;

/// Population health at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpidemicRow {
    pub tick:     u64,
    /// Fraction of the whole population per status, in [`Status::ALL`] order.
    pub status:   [f64; Status::COUNT],
    /// Fraction of the whole population per severity, counting the living.
    pub severity: [f64; InfectionSeverity::COUNT],
}

impl EpidemicRow {
    pub fn new(tick: Tick, stats: &Statistics) -> Self {
        Self {
            tick:     tick.0,
            status:   Status::ALL.map(|s| stats.status(s)),
            severity: InfectionSeverity::ALL.map(|s| stats.severity(s)),
        }
    }

    pub fn header() -> Vec<&'static str> {
        std::iter::once("tick")
            .chain(Status::ALL.iter().map(|s| s.name()))
            .chain(InfectionSeverity::ALL.iter().map(|s| s.name()))
            .collect()
    }
}

/// Wealth held by living adults in each quintile at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomyRow {
    pub tick:   u64,
    pub wealth: [f64; Quintile::COUNT],
}

impl EconomyRow {
    pub fn new(tick: Tick, stats: &Statistics) -> Self {
        let mut wealth = [0.0; Quintile::COUNT];
        for q in Quintile::all() {
            wealth[q.index()] = stats.quintile_wealth(q);
        }
        Self { tick: tick.0, wealth }
    }

    pub fn header() -> Vec<String> {
        std::iter::once("tick".to_owned())
            .chain(Quintile::all().map(|q| q.to_string()))
            .collect()
    }
}
