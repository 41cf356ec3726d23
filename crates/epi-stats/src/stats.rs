//! The `Statistics` snapshot.

use epi_agent::Agent;
use epi_core::{InfectionSeverity, Quintile, Status};

use crate::{StatKey, StatsKind, StatsView};

/// Population-level ratios and wealth sums at one point in a tick.
///
/// | Quantity            | Numerator                               | Denominator      |
/// |---------------------|-----------------------------------------|------------------|
/// | status fraction     | agents with that status (Dead included) | population size  |
/// | severity fraction   | living agents with that severity        | population size  |
/// | quintile wealth     | Σ wealth of living adults in the band   | -                |
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    population_size: usize,
    status:          [f64; Status::COUNT],
    severity:        [f64; InfectionSeverity::COUNT],
    quintile_wealth: [f64; Quintile::COUNT],
}

impl Statistics {
    /// One pass over `agents`.  The denominator is `agents.len()`, which is
    /// the fixed population size once the engine is initialized.
    pub fn compute(agents: &[Agent]) -> Self {
        let mut status_counts   = [0usize; Status::COUNT];
        let mut severity_counts = [0usize; InfectionSeverity::COUNT];
        let mut quintile_wealth = [0.0f64; Quintile::COUNT];

        for agent in agents {
            status_counts[agent.status.index()] += 1;
            if agent.is_dead() {
                continue;
            }
            severity_counts[agent.severity.index()] += 1;
            if agent.is_adult() {
                quintile_wealth[agent.social_stratum.index()] += agent.wealth;
            }
        }

        let n = agents.len().max(1) as f64;
        Self {
            population_size: agents.len(),
            status:          status_counts.map(|c| c as f64 / n),
            severity:        severity_counts.map(|c| c as f64 / n),
            quintile_wealth,
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    #[inline]
    pub fn status(&self, status: Status) -> f64 {
        self.status[status.index()]
    }

    #[inline]
    pub fn severity(&self, severity: InfectionSeverity) -> f64 {
        self.severity[severity.index()]
    }

    #[inline]
    pub fn quintile_wealth(&self, q: Quintile) -> f64 {
        self.quintile_wealth[q.index()]
    }

    /// Fraction of the population occupying a hospital bed
    /// (Hospitalized + Severe).
    #[inline]
    pub fn hospitalized(&self) -> f64 {
        self.severity(InfectionSeverity::Hospitalized) + self.severity(InfectionSeverity::Severe)
    }

    /// Total wealth held by living adults.
    pub fn total_wealth(&self) -> f64 {
        self.quintile_wealth.iter().sum()
    }

    /// Keyed slice of the snapshot.
    pub fn view(&self, kind: StatsKind) -> StatsView {
        let health = Status::ALL
            .iter()
            .map(|s| (StatKey::Status(*s), self.status(*s)))
            .chain(
                InfectionSeverity::ALL
                    .iter()
                    .map(|s| (StatKey::Severity(*s), self.severity(*s))),
            );
        let economy = Quintile::all().map(|q| (StatKey::Quintile(q), self.quintile_wealth(q)));

        match kind {
            StatsKind::Epidemiological => health.collect(),
            StatsKind::Economic        => economy.collect(),
            StatsKind::Raw             => health.chain(economy).collect(),
        }
    }
}
