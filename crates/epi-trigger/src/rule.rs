//! Rule types.

use epi_agent::Agent;
use epi_core::{Position, Status};
use epi_stats::Statistics;

use crate::{AgentField, FieldAction, SimField};

type AgentPredicate = Box<dyn Fn(&Agent) -> bool + Send + Sync>;
type PairPredicate  = Box<dyn Fn(&Agent, &Agent) -> bool + Send + Sync>;

/// The attribute a [`Trigger`] overrides.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TriggerTarget {
    Move,
    Contact,
    Field(AgentField),
}

/// A population-level rule over one agent, or over a contact pair.
///
/// Construct with [`Trigger::on_move`], [`Trigger::on_contact`], or
/// [`Trigger::on_field`].
pub enum Trigger {
    Move {
        condition: AgentPredicate,
        action:    Box<dyn Fn(&Agent) -> Position + Send + Sync>,
    },
    Contact {
        condition: PairPredicate,
        action:    Box<dyn Fn(&Agent) -> Status + Send + Sync>,
    },
    Field {
        condition: AgentPredicate,
        action:    FieldAction,
    },
}

impl Trigger {
    /// When `condition(agent)` holds, `action(agent)` is the agent's new
    /// position and no random walk happens.
    pub fn on_move<C, A>(condition: C, action: A) -> Self
    where
        C: Fn(&Agent) -> bool + Send + Sync + 'static,
        A: Fn(&Agent) -> Position + Send + Sync + 'static,
    {
        Trigger::Move { condition: Box::new(condition), action: Box::new(action) }
    }

    /// When `condition(agent, other)` holds, `action(agent)` is the
    /// initiating agent's new status and contagion is skipped.
    pub fn on_contact<C, A>(condition: C, action: A) -> Self
    where
        C: Fn(&Agent, &Agent) -> bool + Send + Sync + 'static,
        A: Fn(&Agent) -> Status + Send + Sync + 'static,
    {
        Trigger::Contact { condition: Box::new(condition), action: Box::new(action) }
    }

    /// When `condition(agent)` holds, the field named by `action` is
    /// rewritten from its current value.
    pub fn on_field<C>(condition: C, action: FieldAction) -> Self
    where
        C: Fn(&Agent) -> bool + Send + Sync + 'static,
    {
        Trigger::Field { condition: Box::new(condition), action }
    }

    pub fn target(&self) -> TriggerTarget {
        match self {
            Trigger::Move { .. }          => TriggerTarget::Move,
            Trigger::Contact { .. }       => TriggerTarget::Contact,
            Trigger::Field { action, .. } => TriggerTarget::Field(action.field()),
        }
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger").field("target", &self.target()).finish_non_exhaustive()
    }
}

/// A simulation-level rule: rewrite one engine parameter when a condition
/// over the current statistics holds.
///
/// ```rust
/// use epi_trigger::{SimField, SimTrigger};
///
/// // Lockdown: halve the contagion rate while more than 5 % are hospitalized.
/// let lockdown = SimTrigger::new(
///     |stats| stats.hospitalized() > 0.05,
///     SimField::ContagionRate,
///     |rate| rate * 0.5,
/// );
/// assert_eq!(lockdown.field, SimField::ContagionRate);
/// ```
pub struct SimTrigger {
    pub condition: Box<dyn Fn(&Statistics) -> bool + Send + Sync>,
    pub field:     SimField,
    pub action:    Box<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl SimTrigger {
    pub fn new<C, A>(condition: C, field: SimField, action: A) -> Self
    where
        C: Fn(&Statistics) -> bool + Send + Sync + 'static,
        A: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self { condition: Box::new(condition), field, action: Box::new(action) }
    }
}

impl std::fmt::Debug for SimTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimTrigger").field("field", &self.field).finish_non_exhaustive()
    }
}
