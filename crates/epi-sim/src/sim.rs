//! The `Sim` struct and its tick loop.

use log::{debug, info, trace};

use epi_agent::{AgentContext, Population, PopulationBuilder};
use epi_core::{AgeTables, Position, SimConfig, SimRng, Tick, WealthCurve};
use epi_stats::{Statistics, StatsKind, StatsView};
use epi_trigger::{SimTrigger, Trigger, TriggerSet};

use crate::{SimError, SimObserver, SimResult, distribute_wealth, find_contacts};

/// The simulation engine.
///
/// `Sim` is the sole owner of the population, the trigger lists, the random
/// source, and the statistics cache.  Agents are created once, by
/// [`Sim::initialize`], and never added or removed afterwards.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Engine parameters.  Simulation triggers may rewrite the contagion,
    /// capacity, economic, and amplitude fields between ticks.
    pub(crate) config: SimConfig,

    pub(crate) tables: AgeTables,

    pub(crate) wealth_curve: WealthCurve,

    /// The single random source threaded through every stochastic call.
    pub(crate) rng: SimRng,

    pub(crate) population: Population,

    /// A caller-prepared population waiting for `initialize`.
    pub(crate) prepared: Option<Population>,

    pub(crate) triggers: TriggerSet,

    /// Lazily computed; dropped whenever the population changes.
    pub(crate) stats: Option<Statistics>,

    /// The next tick to execute.
    pub(crate) tick: Tick,

    /// `true` while Hospitalized + Severe is below `critical_limit`.
    pub(crate) hospital_available: bool,

    pub(crate) initialized: bool,
}

impl Sim {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Populate the simulation and hand out initial wealth.
    ///
    /// Agents are spawned per `config.composition` in the order the
    /// composition lists them, with the Susceptible remainder last, unless a
    /// population was supplied to the builder.  Must be called exactly once,
    /// before the first [`execute`][Self::execute].
    pub fn initialize(&mut self) -> SimResult<()> {
        if self.initialized {
            return Err(SimError::AlreadyInitialized);
        }

        self.population = match self.prepared.take() {
            Some(population) => population,
            None => {
                let counts = self.config.composition.counts(self.config.population_size)?;
                let mut builder = PopulationBuilder::new(self.config.length, self.config.height)
                    .with_capacity(self.config.population_size);
                for (status, count) in counts {
                    debug!("spawning {count} {status} agents");
                    builder = builder.spawn(status, count, &mut self.rng);
                }
                builder.build()
            }
        };

        distribute_wealth(&mut self.population, &self.wealth_curve, self.config.total_wealth);

        self.stats = None;
        self.initialized = true;
        self.refresh_capacity();
        debug!("initialized {} agents", self.population.len());
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the number of agent pairs found in contact.
    pub fn execute(&mut self) -> SimResult<usize> {
        if !self.initialized {
            return Err(SimError::NotInitialized);
        }
        let contacts = self.process_tick();
        self.tick = self.tick.next();
        Ok(contacts)
    }

    /// Run from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.total_ticks.saturating_sub(self.tick.0);
        self.run_ticks(remaining, observer)?;
        observer.on_sim_end(self.tick);
        info!(
            "finished at {}: {} of {} agents alive",
            self.tick,
            self.population.iter().filter(|a| !a.is_dead()).count(),
            self.population.len()
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let contacts = self.execute()?;
            observer.on_tick_end(now, contacts);
            if now.is_every(self.config.output_interval_ticks) {
                let stats = self.statistics()?;
                observer.on_snapshot(now, stats);
            }
        }
        Ok(())
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// The statistics snapshot for the current population, computed on
    /// first access after any change.
    pub fn statistics(&mut self) -> SimResult<&Statistics> {
        if !self.initialized {
            return Err(SimError::NotInitialized);
        }
        Ok(snapshot(&mut self.stats, &self.population))
    }

    /// One view of the current statistics.
    pub fn get_statistics(&mut self, kind: StatsKind) -> SimResult<StatsView> {
        Ok(self.statistics()?.view(kind))
    }

    // ── Triggers ──────────────────────────────────────────────────────────

    /// Register a population-level rule.  Takes effect from the next tick.
    pub fn append_trigger(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// Register a simulation-level rule.  Takes effect from the next tick.
    pub fn append_simulation_trigger(&mut self, trigger: SimTrigger) {
        self.triggers.push_simulation(trigger);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Current position of every agent, in id order.
    pub fn positions(&self) -> Vec<Position> {
        self.population.positions()
    }

    pub fn hospital_available(&self) -> bool {
        self.hospital_available
    }

    /// The next tick [`execute`][Self::execute] will run.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Once started, a tick runs to completion; nothing in it can fail.
    fn process_tick(&mut self) -> usize {
        trace!("{} start", self.tick);

        // ── Phase 1: simulation triggers ──────────────────────────────────
        if self.triggers.has_simulation_rules() {
            let stats = snapshot(&mut self.stats, &self.population);
            self.triggers.apply_simulation(stats, &mut self.config);
        }

        // ── Phase 2: movement ─────────────────────────────────────────────
        {
            let ctx = context(&self.config, &self.tables, &self.wealth_curve);
            for agent in self.population.iter_mut() {
                agent.step(&ctx, &self.triggers, &mut self.rng);
            }
        }
        self.stats = None;

        // ── Phase 3: capacity before the health update ────────────────────
        self.refresh_capacity();

        // ── Phase 4: health update + field triggers ───────────────────────
        {
            let ctx = context(&self.config, &self.tables, &self.wealth_curve);
            let field_rules = self.triggers.has_field_rules();
            let (length, height) = (self.config.length, self.config.height);
            let mut deaths = 0usize;
            for agent in self.population.iter_mut() {
                if agent.update(self.hospital_available, &ctx, &mut self.rng).died() {
                    deaths += 1;
                }
                if field_rules {
                    self.triggers.apply_fields(agent, length, height);
                }
            }
            if deaths > 0 {
                trace!("{}: {deaths} deaths", self.tick);
            }
        }
        self.stats = None;

        // ── Phase 5: capacity after the health update ─────────────────────
        self.refresh_capacity();

        // ── Phase 6: contact detection ────────────────────────────────────
        let contacts = find_contacts(self.population.as_slice(), self.config.contagion_distance);

        // ── Phase 7: interaction, both directions per pair ────────────────
        let rate = self.config.contagion_rate;
        for &(a, b) in &contacts {
            if let Some((first, second)) = self.population.pair_mut(a, b) {
                first.interact(second, &self.triggers, rate, &mut self.rng);
            }
            if let Some((first, second)) = self.population.pair_mut(b, a) {
                first.interact(second, &self.triggers, rate, &mut self.rng);
            }
        }

        // ── Phase 8: invalidate ───────────────────────────────────────────
        self.stats = None;
        trace!("{} end: {} contacts", self.tick, contacts.len());
        contacts.len()
    }

    /// Recompute `hospital_available` from fresh statistics.
    fn refresh_capacity(&mut self) {
        let hospitalized = snapshot(&mut self.stats, &self.population).hospitalized();
        let available = hospitalized < self.config.critical_limit;
        if available != self.hospital_available {
            debug!(
                "{}: hospital capacity {} ({:.3} hospitalized, limit {:.3})",
                self.tick,
                if available { "restored" } else { "exhausted" },
                hospitalized,
                self.config.critical_limit
            );
        }
        self.hospital_available = available;
    }
}

/// Return the cached statistics, computing them first if the cache is empty.
fn snapshot<'a>(cache: &'a mut Option<Statistics>, population: &Population) -> &'a Statistics {
    cache.get_or_insert_with(|| Statistics::compute(population.as_slice()))
}

fn context<'a>(
    config: &'a SimConfig,
    tables: &'a AgeTables,
    wealth: &'a WealthCurve,
) -> AgentContext<'a> {
    AgentContext {
        length:          config.length,
        height:          config.height,
        amplitudes:      &config.amplitudes,
        minimum_expense: config.minimum_expense,
        tables,
        wealth,
    }
}
