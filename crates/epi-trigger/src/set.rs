//! Registration-ordered trigger storage and dispatch.

use log::trace;

use epi_agent::{Agent, ContactOverride, MoveOverride};
use epi_core::{Position, SimConfig, Status};
use epi_stats::Statistics;

use crate::{AgentField, SimTrigger, Trigger};

/// All rules registered with an engine.
///
/// Rules are stored in registration order and never reordered, so "first
/// match wins" is well defined.  Rules can be added between ticks.
#[derive(Default, Debug)]
pub struct TriggerSet {
    population: Vec<Trigger>,
    simulation: Vec<SimTrigger>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a population-level rule.
    pub fn push(&mut self, trigger: Trigger) {
        trace!("registering {:?} trigger", trigger.target());
        self.population.push(trigger);
    }

    /// Register a simulation-level rule.
    pub fn push_simulation(&mut self, trigger: SimTrigger) {
        trace!("registering simulation trigger on {:?}", trigger.field);
        self.simulation.push(trigger);
    }

    /// Total number of rules of both kinds.
    pub fn len(&self) -> usize {
        self.population.len() + self.simulation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty() && self.simulation.is_empty()
    }

    /// `true` if any field rule is registered; lets the engine skip the
    /// per-agent field pass entirely.
    pub fn has_field_rules(&self) -> bool {
        self.population.iter().any(|t| matches!(t, Trigger::Field { .. }))
    }

    pub fn has_simulation_rules(&self) -> bool {
        !self.simulation.is_empty()
    }

    /// Apply field rules to one living agent.  Dead agents are skipped.
    ///
    /// For each field, only the first rule whose condition holds is applied.
    /// Positions are clamped to `[0, length] × [0, height]`.  Returns the
    /// number of fields rewritten.
    pub fn apply_fields(&self, agent: &mut Agent, length: f64, height: f64) -> usize {
        if agent.is_dead() {
            return 0;
        }
        let mut written = [false; AgentField::COUNT];
        let mut count = 0;
        for trigger in &self.population {
            let Trigger::Field { condition, action } = trigger else {
                continue;
            };
            let slot = action.field().index();
            if written[slot] || !condition(&*agent) {
                continue;
            }
            action.apply(agent, length, height);
            written[slot] = true;
            count += 1;
        }
        count
    }

    /// Apply simulation rules against `stats`, rewriting `config` in place.
    ///
    /// For each parameter, only the first rule whose condition holds is
    /// applied; out-of-range values are clamped by [`SimField::write`].
    /// Returns the number of parameters rewritten.
    ///
    /// [`SimField::write`]: crate::SimField::write
    pub fn apply_simulation(&self, stats: &Statistics, config: &mut SimConfig) -> usize {
        let mut written = Vec::new();
        for trigger in &self.simulation {
            if written.contains(&trigger.field) || !(trigger.condition)(stats) {
                continue;
            }
            let value = (trigger.action)(trigger.field.read(config));
            let stored = trigger.field.write(config, value);
            trace!("simulation trigger set {:?} = {stored}", trigger.field);
            written.push(trigger.field);
        }
        written.len()
    }
}

impl MoveOverride for TriggerSet {
    fn override_position(&self, agent: &Agent) -> Option<Position> {
        self.population.iter().find_map(|t| match t {
            Trigger::Move { condition, action } if condition(agent) => Some(action(agent)),
            _ => None,
        })
    }
}

impl ContactOverride for TriggerSet {
    fn override_status(&self, agent: &Agent, other: &Agent) -> Option<Status> {
        self.population.iter().find_map(|t| match t {
            Trigger::Contact { condition, action } if condition(agent, other) => Some(action(agent)),
            _ => None,
        })
    }
}
