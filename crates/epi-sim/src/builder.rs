//! Fluent builder for constructing a [`Sim`].

use epi_agent::Population;
use epi_core::{AgeTables, SimConfig, SimRng, Tick, WealthCurve};
use epi_trigger::{SimTrigger, Trigger, TriggerSet};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: population size, bounds, composition, contagion and
///   economic parameters, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                                   |
/// |-----------------------------|-------------------------------------------|
/// | `.tables(t)`                | `AgeTables::default()` (reference data)   |
/// | `.wealth_curve(c)`          | `WealthCurve::default()` (Lorenz shares)  |
/// | `.population(p)`            | Random agents from `config.composition`   |
/// | `.trigger(t)`               | No population rules                       |
/// | `.simulation_trigger(t)`    | No simulation rules                       |
///
/// # Example
///
/// ```rust
/// use epi_core::{SimConfig, Status};
/// use epi_sim::SimBuilder;
/// use epi_trigger::Trigger;
///
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .trigger(Trigger::on_move(|a| a.age >= 60, |a| a.position))
///     .build()
///     .unwrap();
/// sim.initialize().unwrap();
/// assert_eq!(sim.population().len(), 20);
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    tables:       AgeTables,
    wealth_curve: WealthCurve,
    population:   Option<Population>,
    triggers:     TriggerSet,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            tables:       AgeTables::default(),
            wealth_curve: WealthCurve::default(),
            population:   None,
            triggers:     TriggerSet::new(),
        }
    }

    /// Replace the per-decade probability tables.
    pub fn tables(mut self, tables: AgeTables) -> Self {
        self.tables = tables;
        self
    }

    /// Replace the per-quintile wealth share curve.
    pub fn wealth_curve(mut self, curve: WealthCurve) -> Self {
        self.wealth_curve = curve;
        self
    }

    /// Start from a prepared population instead of random agents.
    ///
    /// Its length must equal `config.population_size`.  `initialize` still
    /// distributes wealth over it.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Register a population-level rule.
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Register a simulation-level rule.
    pub fn simulation_trigger(mut self, trigger: SimTrigger) -> Self {
        self.triggers.push_simulation(trigger);
        self
    }

    /// Validate inputs and return an uninitialized [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.population_size == 0 {
            return Err(SimError::EmptyPopulation);
        }
        self.config.validate()?;
        self.tables.validate()?;

        if let Some(p) = &self.population {
            if p.len() != self.config.population_size {
                return Err(SimError::Config(format!(
                    "prepared population has {} agents, population_size is {}",
                    p.len(),
                    self.config.population_size
                )));
            }
        }

        Ok(Sim {
            rng:                SimRng::new(self.config.seed),
            config:             self.config,
            tables:             self.tables,
            wealth_curve:       self.wealth_curve,
            population:         Population::default(),
            prepared:           self.population,
            triggers:           self.triggers,
            stats:              None,
            tick:               Tick::ZERO,
            hospital_available: true,
            initialized:        false,
        })
    }
}
