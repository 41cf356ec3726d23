//! Static reference data consumed by the engine.
//!
//! # Age tables
//!
//! Three per-decade probability tables, indexed by an agent's age bucket
//! (`age / 10 - 1`, `0` for ages up to 10).  Buckets past the end of a table
//! are clamped to its last entry.
//!
//! | Table            | Meaning (per tick)                           |
//! |------------------|----------------------------------------------|
//! | `hospitalization`| Asymptomatic → Hospitalized                  |
//! | `severe`         | Hospitalized → Severe (ICU)                  |
//! | `death`          | death of any infected agent                  |
//!
//! Default values: Imperial College COVID-19 response team estimates.
//!
//! # Wealth curve
//!
//! Share of total wealth held by each quintile (Lorenz-curve derived,
//! monotonically increasing).  The per-quintile income multiplier is the
//! share divided by the smallest share, so the poorest band has multiplier 1.

use crate::{EpiError, EpiResult, Quintile};

const HOSPITALIZATION: [f64; 9] = [0.001, 0.003, 0.012, 0.032, 0.049, 0.102, 0.166, 0.243, 0.273];
const SEVERE:          [f64; 9] = [0.05, 0.05, 0.05, 0.05, 0.063, 0.122, 0.274, 0.432, 0.709];
const DEATH:           [f64; 9] = [
    0.0000161, 0.0000695, 0.000309, 0.000844, 0.00161, 0.00595, 0.0193, 0.0428, 0.078,
];

/// Ticks after infection at which a surviving agent recovers.
pub const RECOVERY_HORIZON: u32 = 21;

/// Share curve used when none is supplied.
pub const LORENZ_CURVE: [f64; Quintile::COUNT] = [0.04, 0.08, 0.13, 0.20, 0.56];

// ── AgeTables ─────────────────────────────────────────────────────────────────

/// Age-bucketed transition probabilities plus the recovery horizon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeTables {
    pub hospitalization:  Vec<f64>,
    pub severe:           Vec<f64>,
    pub death:            Vec<f64>,
    pub recovery_horizon: u32,
}

impl Default for AgeTables {
    fn default() -> Self {
        Self {
            hospitalization:  HOSPITALIZATION.to_vec(),
            severe:           SEVERE.to_vec(),
            death:            DEATH.to_vec(),
            recovery_horizon: RECOVERY_HORIZON,
        }
    }
}

impl AgeTables {
    /// Tables with the same probability in every bucket.  Handy for tests
    /// that need a transition to be certain (`1.0`) or impossible (`0.0`).
    pub fn uniform(hospitalization: f64, severe: f64, death: f64) -> Self {
        Self {
            hospitalization:  vec![hospitalization],
            severe:           vec![severe],
            death:            vec![death],
            recovery_horizon: RECOVERY_HORIZON,
        }
    }

    /// Reject empty tables and probabilities outside `[0, 1]`.
    pub fn validate(&self) -> EpiResult<()> {
        for (name, table) in [
            ("hospitalization", &self.hospitalization),
            ("severe", &self.severe),
            ("death", &self.death),
        ] {
            if table.is_empty() {
                return Err(EpiError::Table(format!("{name} table is empty")));
            }
            if let Some(p) = table.iter().find(|p| !(0.0..=1.0).contains(*p)) {
                return Err(EpiError::Table(format!("{name} probability {p} outside [0, 1]")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn hospitalization(&self, bucket: usize) -> f64 {
        lookup(&self.hospitalization, bucket)
    }

    #[inline]
    pub fn severe(&self, bucket: usize) -> f64 {
        lookup(&self.severe, bucket)
    }

    #[inline]
    pub fn death(&self, bucket: usize) -> f64 {
        lookup(&self.death, bucket)
    }
}

/// Clamped read; an empty table reads as probability 0.
#[inline]
fn lookup(table: &[f64], bucket: usize) -> f64 {
    match table.len() {
        0 => 0.0,
        n => table[bucket.min(n - 1)],
    }
}

// ── WealthCurve ───────────────────────────────────────────────────────────────

/// Per-quintile share of total wealth.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WealthCurve {
    shares: [f64; Quintile::COUNT],
}

impl Default for WealthCurve {
    fn default() -> Self {
        Self { shares: LORENZ_CURVE }
    }
}

impl WealthCurve {
    /// Shares must be positive and non-decreasing.
    pub fn new(shares: [f64; Quintile::COUNT]) -> EpiResult<Self> {
        if shares.iter().any(|s| *s <= 0.0) {
            return Err(EpiError::Table("wealth shares must be positive".into()));
        }
        if shares.windows(2).any(|w| w[1] < w[0]) {
            return Err(EpiError::Table("wealth shares must be non-decreasing".into()));
        }
        Ok(Self { shares })
    }

    #[inline]
    pub fn share(&self, q: Quintile) -> f64 {
        self.shares[q.index()]
    }

    /// `share(q) / min(share)`.
    #[inline]
    pub fn income_multiplier(&self, q: Quintile) -> f64 {
        // Shares are validated non-decreasing, so the first one is the minimum.
        self.shares[q.index()] / self.shares[0]
    }

    pub fn shares(&self) -> &[f64; Quintile::COUNT] {
        &self.shares
    }
}
