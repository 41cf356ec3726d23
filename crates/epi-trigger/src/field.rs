//! Closed sets of fields a trigger may rewrite.

use std::fmt;

use epi_agent::Agent;
use epi_core::{InfectionSeverity, Position, Quintile, SimConfig, Status};

type Map<T> = Box<dyn Fn(T) -> T + Send + Sync>;

// ── Agent fields ──────────────────────────────────────────────────────────────

/// Agent field selector; names the field a [`FieldAction`] rewrites.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AgentField {
    Position,
    Status,
    Severity,
    InfectedTime,
    Age,
    SocialStratum,
    Wealth,
}

impl AgentField {
    pub const COUNT: usize = 7;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A typed rewrite of one agent field: `current value → new value`.
///
/// Each variant carries a function over its own field type, so an action
/// cannot produce a value of the wrong kind.
///
/// ```rust
/// use epi_trigger::{AgentField, FieldAction};
///
/// let stimulus = FieldAction::wealth(|w| w + 50.0);
/// assert_eq!(stimulus.field(), AgentField::Wealth);
/// ```
pub enum FieldAction {
    Position(Map<Position>),
    Status(Map<Status>),
    Severity(Map<InfectionSeverity>),
    InfectedTime(Map<u32>),
    Age(Map<u32>),
    SocialStratum(Map<Quintile>),
    Wealth(Map<f64>),
}

impl FieldAction {
    pub fn position(f: impl Fn(Position) -> Position + Send + Sync + 'static) -> Self {
        FieldAction::Position(Box::new(f))
    }

    pub fn status(f: impl Fn(Status) -> Status + Send + Sync + 'static) -> Self {
        FieldAction::Status(Box::new(f))
    }

    pub fn severity(f: impl Fn(InfectionSeverity) -> InfectionSeverity + Send + Sync + 'static) -> Self {
        FieldAction::Severity(Box::new(f))
    }

    pub fn infected_time(f: impl Fn(u32) -> u32 + Send + Sync + 'static) -> Self {
        FieldAction::InfectedTime(Box::new(f))
    }

    pub fn age(f: impl Fn(u32) -> u32 + Send + Sync + 'static) -> Self {
        FieldAction::Age(Box::new(f))
    }

    pub fn social_stratum(f: impl Fn(Quintile) -> Quintile + Send + Sync + 'static) -> Self {
        FieldAction::SocialStratum(Box::new(f))
    }

    pub fn wealth(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        FieldAction::Wealth(Box::new(f))
    }

    pub fn field(&self) -> AgentField {
        match self {
            FieldAction::Position(_)      => AgentField::Position,
            FieldAction::Status(_)        => AgentField::Status,
            FieldAction::Severity(_)      => AgentField::Severity,
            FieldAction::InfectedTime(_)  => AgentField::InfectedTime,
            FieldAction::Age(_)           => AgentField::Age,
            FieldAction::SocialStratum(_) => AgentField::SocialStratum,
            FieldAction::Wealth(_)        => AgentField::Wealth,
        }
    }

    /// Rewrite the field on `agent`.
    ///
    /// Positions are clamped to `[0, length] × [0, height]`.  Status changes
    /// go through [`Agent::set_status`] so the infection sub-state stays
    /// consistent; severity and infected time are only written while the
    /// agent is `Infected`.
    pub fn apply(&self, agent: &mut Agent, length: f64, height: f64) {
        match self {
            FieldAction::Position(f) => agent.position = f(agent.position).clamped(length, height),
            FieldAction::Status(f) => {
                let status = f(agent.status);
                agent.set_status(status);
            }
            FieldAction::Severity(f) => {
                if agent.status == Status::Infected {
                    agent.severity = f(agent.severity);
                }
            }
            FieldAction::InfectedTime(f) => {
                if agent.status == Status::Infected {
                    agent.infected_time = f(agent.infected_time);
                }
            }
            FieldAction::Age(f)           => agent.age = f(agent.age),
            FieldAction::SocialStratum(f) => agent.social_stratum = f(agent.social_stratum),
            FieldAction::Wealth(f)        => agent.wealth = f(agent.wealth),
        }
    }
}

impl fmt::Debug for FieldAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldAction").field(&self.field()).finish()
    }
}

// ── Simulation fields ─────────────────────────────────────────────────────────

/// Engine parameter selector for [`SimTrigger`][crate::SimTrigger].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SimField {
    ContagionDistance,
    ContagionRate,
    CriticalLimit,
    MinimumIncome,
    MinimumExpense,
    Amplitude(Status),
}

impl SimField {
    pub fn read(self, config: &SimConfig) -> f64 {
        match self {
            SimField::ContagionDistance => config.contagion_distance,
            SimField::ContagionRate     => config.contagion_rate,
            SimField::CriticalLimit     => config.critical_limit,
            SimField::MinimumIncome     => config.minimum_income,
            SimField::MinimumExpense    => config.minimum_expense,
            SimField::Amplitude(s)      => config.amplitudes.get(s),
        }
    }

    /// Store `value` and return what was stored.
    ///
    /// Rates are clamped to `[0, 1]`, distances and amplitudes to `>= 0`.
    /// NaN leaves the parameter unchanged.
    pub fn write(self, config: &mut SimConfig, value: f64) -> f64 {
        if value.is_nan() {
            return self.read(config);
        }
        let value = match self {
            SimField::ContagionRate => value.clamp(0.0, 1.0),
            SimField::ContagionDistance | SimField::Amplitude(_) => value.max(0.0),
            _ => value,
        };
        match self {
            SimField::ContagionDistance => config.contagion_distance = value,
            SimField::ContagionRate     => config.contagion_rate = value,
            SimField::CriticalLimit     => config.critical_limit = value,
            SimField::MinimumIncome     => config.minimum_income = value,
            SimField::MinimumExpense    => config.minimum_expense = value,
            SimField::Amplitude(s)      => config.amplitudes.set(s, value),
        }
        value
    }
}
