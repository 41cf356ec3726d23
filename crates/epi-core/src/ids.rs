//! Strongly typed identifiers.
//!
//! `AgentId` is the index of an agent in the population `Vec`.  Agents are
//! only ever created at initialization, so an id stays valid for the whole
//! run.

use std::fmt;

/// Index of an agent in the population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}

/// A wealth band (social stratum), `0` = poorest fifth.
///
/// Values are always `< Quintile::COUNT`; construct through
/// [`Quintile::new`] to keep that true.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quintile(u8);

impl Quintile {
    /// Number of wealth bands.
    pub const COUNT: usize = 5;

    /// `None` if `band >= COUNT`.
    pub fn new(band: u8) -> Option<Self> {
        ((band as usize) < Self::COUNT).then_some(Quintile(band))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All bands in ascending order.
    pub fn all() -> impl Iterator<Item = Quintile> {
        (0..Self::COUNT as u8).map(Quintile)
    }
}

impl fmt::Display for Quintile {
    /// One-based label: `Q1` … `Q5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0 + 1)
    }
}
