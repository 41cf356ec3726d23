//! Per-tick disease progression and cost of living.

use log::trace;

use epi_core::{InfectionSeverity, SimRng, Status};

use crate::{Agent, AgentContext};

/// Why an agent died.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Reached `Severe` while hospitals were full.
    NoHospitalBed,
    /// Age-bucketed mortality draw.
    Disease,
}

/// How an infection ended this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Died(DeathCause),
    Recovered,
}

/// What [`Agent::update`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HealthUpdate {
    /// Severity reached this tick, if the infection escalated.
    pub escalated_to: Option<InfectionSeverity>,
    pub outcome:      Option<Outcome>,
}

impl HealthUpdate {
    #[inline]
    pub fn died(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Died(_)))
    }
}

impl Agent {
    /// Advance health and pay the cost of living for one tick.
    ///
    /// For an infected agent, in order:
    ///
    /// 1. one uniform draw escalates Asymptomatic → Hospitalized or
    ///    Hospitalized → Severe (at most one step per tick);
    /// 2. reaching Severe with `hospital_available == false` kills the agent;
    /// 3. a second draw against the death table kills the agent;
    /// 4. past the recovery horizon the agent recovers.
    ///
    /// A death ends the tick for that agent: later checks are skipped and no
    /// expense is charged.  Every living agent then pays
    /// `minimum_expense × income multiplier`.
    pub fn update(
        &mut self,
        hospital_available: bool,
        ctx:                &AgentContext<'_>,
        rng:                &mut SimRng,
    ) -> HealthUpdate {
        let mut report = HealthUpdate::default();
        if self.is_dead() {
            return report;
        }

        if self.status == Status::Infected {
            self.infected_time += 1;
            let bucket = self.age_bucket();

            let draw = rng.uniform();
            match self.severity {
                InfectionSeverity::Asymptomatic if ctx.tables.hospitalization(bucket) > draw => {
                    self.severity = InfectionSeverity::Hospitalized;
                    report.escalated_to = Some(InfectionSeverity::Hospitalized);
                }
                InfectionSeverity::Hospitalized if ctx.tables.severe(bucket) > draw => {
                    self.severity = InfectionSeverity::Severe;
                    report.escalated_to = Some(InfectionSeverity::Severe);
                    if !hospital_available {
                        trace!("{} died: severe with no hospital bed", self.id);
                        self.set_status(Status::Dead);
                        report.outcome = Some(Outcome::Died(DeathCause::NoHospitalBed));
                        return report;
                    }
                }
                _ => {}
            }

            if ctx.tables.death(bucket) > rng.uniform() {
                trace!("{} died at age {}", self.id, self.age);
                self.set_status(Status::Dead);
                report.outcome = Some(Outcome::Died(DeathCause::Disease));
                return report;
            }

            if self.infected_time > ctx.tables.recovery_horizon {
                self.set_status(Status::Recovered);
                report.outcome = Some(Outcome::Recovered);
            }
        }

        self.wealth -= ctx.minimum_expense * ctx.wealth.income_multiplier(self.social_stratum);
        report
    }
}
