//! Simulation configuration: the construction contract for the engine.
//!
//! Typically built in code by a scenario, or loaded from JSON with the
//! `serde` feature, and handed to `epi_sim::SimBuilder`.

use std::collections::BTreeMap;

use crate::{EpiError, EpiResult, Status};

// ── Amplitudes ────────────────────────────────────────────────────────────────

/// Per-status movement amplitude (standard deviation of a one-axis step).
///
/// A status with no entry does not move.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Amplitudes(BTreeMap<Status, f64>);

impl Amplitudes {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, status: Status, amplitude: f64) -> Self {
        self.0.insert(status, amplitude);
        self
    }

    pub fn set(&mut self, status: Status, amplitude: f64) {
        self.0.insert(status, amplitude);
    }

    /// Amplitude for `status`, `0.0` if unset.
    #[inline]
    pub fn get(&self, status: Status) -> f64 {
        self.0.get(&status).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Status, f64)> + '_ {
        self.0.iter().map(|(s, a)| (*s, *a))
    }
}

// ── InitialComposition ────────────────────────────────────────────────────────

/// How the initial population is split across statuses.
///
/// Fractions are in `[0, 1]`.  Counts are `floor(population × fraction)`;
/// whatever is left over becomes `Susceptible`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialComposition {
    /// Infected and immune (`Recovered`) fractions.
    Percentages { infected: f64, immune: f64 },
    /// Explicit status → fraction list, created in the given order.
    Mapping(Vec<(Status, f64)>),
}

impl Default for InitialComposition {
    fn default() -> Self {
        InitialComposition::Percentages { infected: 0.05, immune: 0.05 }
    }
}

impl InitialComposition {
    /// Status counts in creation order, followed by the `Susceptible`
    /// remainder (omitted when zero).
    pub fn counts(&self, population: usize) -> EpiResult<Vec<(Status, usize)>> {
        let fractions: Vec<(Status, f64)> = match self {
            InitialComposition::Percentages { infected, immune } => {
                vec![(Status::Infected, *infected), (Status::Recovered, *immune)]
            }
            InitialComposition::Mapping(m) => m.clone(),
        };

        if let Some((s, f)) = fractions.iter().find(|(_, f)| !(0.0..=1.0).contains(f)) {
            return Err(EpiError::Config(format!("fraction {f} for {s} outside [0, 1]")));
        }
        let total: f64 = fractions.iter().map(|(_, f)| f).sum();
        if total > 1.0 + 1e-9 {
            return Err(EpiError::Config(format!(
                "initial composition sums to {:.4} (> 100 %)",
                total
            )));
        }

        let mut counts = Vec::with_capacity(fractions.len() + 1);
        let mut assigned = 0usize;
        for (status, fraction) in fractions {
            // The epsilon keeps e.g. 200 × 0.02 from truncating to 3.
            let n = ((population as f64 * fraction) + 1e-9).floor() as usize;
            let n = n.min(population - assigned);
            assigned += n;
            counts.push((status, n));
        }
        if assigned < population {
            counts.push((Status::Susceptible, population - assigned));
        }
        Ok(counts)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// With the `serde` feature, missing fields take their `Default` values, so
/// a JSON scenario only lists what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SimConfig {
    /// Number of agents.  Must be positive.
    pub population_size: usize,

    /// Width of the simulation rectangle.
    pub length: f64,

    /// Height of the simulation rectangle.
    pub height: f64,

    pub composition: InitialComposition,

    /// Maximum Euclidean distance at which two agents are in contact.
    pub contagion_distance: f64,

    /// Probability that a contact between a susceptible and an infected
    /// agent transmits the disease.
    pub contagion_rate: f64,

    /// Fraction of the population that hospitals can hold at once
    /// (Hospitalized + Severe).  Above it, agents reaching Severe die.
    pub critical_limit: f64,

    pub amplitudes: Amplitudes,

    /// Carried for scenarios and simulation triggers; the default economic
    /// model only consumes `minimum_expense`.
    pub minimum_income: f64,

    /// Per-tick cost of living for the poorest quintile; scaled by each
    /// quintile's income multiplier.  Also scales mobility income.
    pub minimum_expense: f64,

    /// Wealth shared among adults at initialization.
    pub total_wealth: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Report statistics every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_size:       20,
            length:                10.0,
            height:                10.0,
            composition:           InitialComposition::default(),
            contagion_distance:    1.0,
            contagion_rate:        0.9,
            critical_limit:        0.6,
            amplitudes:            Amplitudes::new()
                .with(Status::Susceptible, 5.0)
                .with(Status::Recovered, 5.0)
                .with(Status::Infected, 5.0),
            minimum_income:        1.0,
            minimum_expense:       1.0,
            total_wealth:          1e4,
            seed:                  0,
            total_ticks:           100,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Fail fast on parameters the engine cannot run with.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population_size == 0 {
            return Err(EpiError::Config("population_size must be positive".into()));
        }
        if !(self.length > 0.0 && self.height > 0.0) {
            return Err(EpiError::Config(format!(
                "bounds must be positive, got {} × {}",
                self.length, self.height
            )));
        }
        if self.contagion_distance < 0.0 {
            return Err(EpiError::Config("contagion_distance must be non-negative".into()));
        }
        if !(0.0..=1.0).contains(&self.contagion_rate) {
            return Err(EpiError::Config(format!(
                "contagion_rate {} outside [0, 1]",
                self.contagion_rate
            )));
        }
        if let Some((s, a)) = self.amplitudes.iter().find(|(_, a)| *a < 0.0) {
            return Err(EpiError::Config(format!("negative amplitude {a} for {s}")));
        }
        self.composition.counts(self.population_size)?;
        Ok(())
    }
}
