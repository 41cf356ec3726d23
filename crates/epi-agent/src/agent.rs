//! The `Agent` record.

use epi_core::{AgentId, InfectionSeverity, Position, Quintile, SimRng, Status};

/// Age at which an agent counts as an adult for wealth purposes.
pub const ADULT_AGE: u32 = 18;

/// One individual.
///
/// `severity` and `infected_time` only carry meaning while
/// `status == Infected`; [`Agent::set_status`] resets both when the agent
/// leaves that status.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:             AgentId,
    pub position:       Position,
    pub status:         Status,
    pub severity:       InfectionSeverity,
    /// Ticks spent `Infected` so far.
    pub infected_time:  u32,
    pub age:            u32,
    pub social_stratum: Quintile,
    /// May go negative.
    pub wealth:         f64,
}

impl Agent {
    pub fn new(
        id:             AgentId,
        position:       Position,
        status:         Status,
        age:            u32,
        social_stratum: Quintile,
    ) -> Self {
        Self {
            id,
            position,
            status,
            severity: InfectionSeverity::Asymptomatic,
            infected_time: 0,
            age,
            social_stratum,
            wealth: 0.0,
        }
    }

    /// Random age (`Beta(2, 5) × 100`) and a uniformly drawn stratum.
    pub fn random(id: AgentId, position: Position, status: Status, rng: &mut SimRng) -> Self {
        let age = rng.age();
        let band = rng.gen_range(0..Quintile::COUNT as u8);
        let stratum = Quintile::new(band).unwrap_or_default();
        Self::new(id, position, status, age, stratum)
    }

    /// Index into the per-decade probability tables: `age / 10 - 1`, or `0`
    /// up to age 10.  Tables clamp indices past their end.
    #[inline]
    pub fn age_bucket(&self) -> usize {
        if self.age > 10 { (self.age / 10 - 1) as usize } else { 0 }
    }

    #[inline]
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.status.is_dead()
    }

    /// Infected and occupying a hospital bed.
    #[inline]
    pub fn is_bedridden(&self) -> bool {
        self.status == Status::Infected && self.severity.needs_bed()
    }

    #[inline]
    pub fn distance(&self, other: &Agent) -> f64 {
        self.position.distance(other.position)
    }

    /// Change status, clearing the infection sub-state when leaving or
    /// (re-)entering `Infected`.
    pub fn set_status(&mut self, status: Status) {
        if status != self.status {
            self.severity = InfectionSeverity::Asymptomatic;
            self.infected_time = 0;
        }
        self.status = status;
    }

    /// `"Infected(Severe)"` while infected, otherwise the bare status name.
    pub fn describe(&self) -> String {
        match self.status {
            Status::Infected => format!("{}({})", self.status, self.severity),
            s => s.to_string(),
        }
    }

    /// `"34 yo, Q2, 112.50 $: Infected"`.
    pub fn summary(&self) -> String {
        format!(
            "{} yo, {}, {:.2} $: {}",
            self.age, self.social_stratum, self.wealth, self.status
        )
    }
}
