//! Keyed report views over a [`Statistics`][crate::Statistics] snapshot.

use std::fmt;

use epi_core::{InfectionSeverity, Quintile, Status};

/// Name of one reported quantity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StatKey {
    Status(Status),
    Severity(InfectionSeverity),
    Quintile(Quintile),
}

impl StatKey {
    /// `true` for the wealth keys that make up the economic view.
    #[inline]
    pub fn is_economic(self) -> bool {
        matches!(self, StatKey::Quintile(_))
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKey::Status(s)   => fmt::Display::fmt(s, f),
            StatKey::Severity(s) => fmt::Display::fmt(s, f),
            StatKey::Quintile(q) => fmt::Display::fmt(q, f),
        }
    }
}

/// Which slice of the statistics to return.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum StatsKind {
    /// Status and severity fractions.
    #[default]
    Epidemiological,
    /// Per-quintile wealth sums.
    Economic,
    /// Both.
    Raw,
}

/// Ordered `(key, value)` pairs.
///
/// Order is stable: statuses in [`Status::ALL`] order, then severities,
/// then quintiles Q1–Q5.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StatsView(Vec<(StatKey, f64)>);

impl StatsView {
    pub fn get(&self, key: StatKey) -> Option<f64> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = StatKey> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    /// Column labels, e.g. for a CSV header.
    pub fn labels(&self) -> Vec<String> {
        self.keys().map(|k| k.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatKey, f64)> for StatsView {
    fn from_iter<I: IntoIterator<Item = (StatKey, f64)>>(iter: I) -> Self {
        StatsView(iter.into_iter().collect())
    }
}
