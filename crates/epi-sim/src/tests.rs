//! Integration tests for epi-sim.

use std::sync::{Arc, Mutex};

use epi_agent::{Agent, Population, PopulationBuilder};
use epi_core::{
    AgeTables, AgentId, Amplitudes, InfectionSeverity, InitialComposition, Position, Quintile,
    SimConfig, Status, Tick, WealthCurve,
};
use epi_stats::{Statistics, StatsKind};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Config for hand-built populations: nobody walks, everyone in range.
fn still_config(n: usize) -> SimConfig {
    SimConfig {
        population_size:    n,
        length:             10.0,
        height:             10.0,
        contagion_distance: 1.0,
        contagion_rate:     1.0,
        critical_limit:     1.0,
        amplitudes:         Amplitudes::new(),
        seed:               42,
        ..SimConfig::default()
    }
}

fn person(status: Status, age: u32, x: f64, y: f64) -> Agent {
    Agent::new(AgentId(0), Position::new(x, y), status, age, Quintile::new(0).unwrap())
}

fn population(agents: Vec<Agent>) -> Population {
    agents
        .into_iter()
        .fold(PopulationBuilder::new(10.0, 10.0), |b, a| b.push(a))
        .build()
}

/// Tables under which nobody progresses, dies, or recovers early.
fn inert_tables() -> AgeTables {
    AgeTables::uniform(0.0, 0.0, 0.0)
}

fn ready(config: SimConfig, agents: Vec<Agent>) -> Sim {
    let mut sim = SimBuilder::new(config)
        .tables(inert_tables())
        .population(population(agents))
        .build()
        .unwrap();
    sim.initialize().unwrap();
    sim
}

/// The reference 200-agent scenario: 2 % infected, distance 5, limit 5 %.
fn scenario_config(seed: u64) -> SimConfig {
    SimConfig {
        population_size:    200,
        length:             100.0,
        height:             100.0,
        composition:        InitialComposition::Mapping(vec![(Status::Infected, 0.02)]),
        contagion_distance: 5.0,
        contagion_rate:     0.9,
        critical_limit:     0.05,
        seed,
        ..SimConfig::default()
    }
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<(Tick, usize)>,
    snapshots: Vec<(Tick, Statistics)>,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, contacts: usize) {
        self.ends.push((tick, contacts));
    }
    fn on_snapshot(&mut self, tick: Tick, stats: &Statistics) {
        self.snapshots.push((tick, stats.clone()));
    }
    fn on_sim_end(&mut self, tick: Tick) {
        self.ended = Some(tick);
    }
}

// ── Builder and lifecycle ─────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn empty_population_rejected() {
        let config = SimConfig { population_size: 0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::EmptyPopulation)));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimConfig { contagion_rate: 1.5, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Core(_))));
    }

    #[test]
    fn prepared_population_size_must_match() {
        let result = SimBuilder::new(still_config(3))
            .population(population(vec![person(Status::Susceptible, 30, 1.0, 1.0)]))
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn statistics_before_initialize_fail() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert!(matches!(sim.statistics(), Err(SimError::NotInitialized)));
        assert!(matches!(sim.get_statistics(StatsKind::Raw), Err(SimError::NotInitialized)));
    }

    #[test]
    fn execute_before_initialize_fails() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let config = sim.config().clone();
        assert!(matches!(sim.execute(), Err(SimError::NotInitialized)));
        assert!(matches!(sim.execute(), Err(SimError::NotInitialized)));
        assert_eq!(sim.tick(), Tick::ZERO);
        assert_eq!(sim.config(), &config);
        assert!(sim.population().is_empty());
    }

    #[test]
    fn initialize_twice_fails() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        sim.initialize().unwrap();
        assert!(matches!(sim.initialize(), Err(SimError::AlreadyInitialized)));
        assert_eq!(sim.population().len(), 20);
    }

    #[test]
    fn default_composition_counts() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        sim.initialize().unwrap();
        let pop = sim.population();
        assert_eq!(pop.count(Status::Infected), 1);
        assert_eq!(pop.count(Status::Recovered), 1);
        assert_eq!(pop.count(Status::Susceptible), 18);
        assert!(sim.positions().iter().all(|p| p.within(10.0, 10.0)));
    }

    #[test]
    fn run_stops_at_total_ticks() {
        let config = SimConfig { total_ticks: 7, output_interval_ticks: 3, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.initialize().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(sim.tick(), Tick(7));
        assert_eq!(rec.starts.len(), 7);
        assert_eq!(rec.ends.len(), 7);
        let snapped: Vec<u64> = rec.snapshots.iter().map(|(t, _)| t.0).collect();
        assert_eq!(snapped, vec![0, 3, 6]);
        assert_eq!(rec.ended, Some(Tick(7)));

        // A second run has nothing left to do.
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.tick(), Tick(7));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod statistics_tests {
    use super::*;

    #[test]
    fn status_fractions_sum_to_one_every_tick() {
        let config = SimConfig { total_ticks: 30, ..scenario_config(3) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.initialize().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.snapshots.len(), 30);
        for (tick, stats) in &rec.snapshots {
            let total: f64 = Status::ALL.iter().map(|&s| stats.status(s)).sum();
            assert!((total - 1.0).abs() < 1e-9, "{tick}: fractions sum to {total}");
        }
    }

    #[test]
    fn views_partition_keys() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        sim.initialize().unwrap();
        let epi = sim.get_statistics(StatsKind::Epidemiological).unwrap();
        let eco = sim.get_statistics(StatsKind::Economic).unwrap();
        let raw = sim.get_statistics(StatsKind::Raw).unwrap();
        assert_eq!(epi.len() + eco.len(), raw.len());
        assert_eq!(eco.len(), Quintile::COUNT);
    }

    #[test]
    fn cache_refreshed_after_execute() {
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Infected, 30, 5.0, 5.0),
                person(Status::Susceptible, 30, 5.0, 5.0),
            ],
        );
        assert_eq!(sim.statistics().unwrap().status(Status::Infected), 0.5);
        sim.execute().unwrap();
        assert_eq!(sim.statistics().unwrap().status(Status::Infected), 1.0);
    }
}

// ── Contacts ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact_tests {
    use super::*;
    use crate::find_contacts;
    use epi_trigger::Trigger;

    #[test]
    fn all_pairs_within_distance() {
        let pop = population(vec![
            person(Status::Susceptible, 30, 1.0, 1.0),
            person(Status::Susceptible, 30, 2.0, 1.0),
            person(Status::Susceptible, 30, 9.0, 9.0),
            person(Status::Susceptible, 30, 1.0, 2.0),
        ]);
        let pairs = find_contacts(pop.as_slice(), 1.0);
        assert_eq!(
            pairs,
            vec![(AgentId(0), AgentId(1)), (AgentId(0), AgentId(3))]
        );
    }

    #[test]
    fn distance_is_inclusive() {
        let pop = population(vec![
            person(Status::Susceptible, 30, 0.0, 0.0),
            person(Status::Susceptible, 30, 3.0, 4.0),
        ]);
        assert_eq!(find_contacts(pop.as_slice(), 5.0).len(), 1);
        assert!(find_contacts(pop.as_slice(), 4.99).is_empty());
    }

    #[test]
    fn both_directions_are_attempted() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Susceptible, 30, 5.0, 5.0),
                person(Status::Susceptible, 30, 5.5, 5.0),
            ],
        );
        sim.append_trigger(Trigger::on_contact(
            move |a, b| {
                log.lock().unwrap().push((a.id, b.id));
                false
            },
            |a| a.status,
        ));
        assert_eq!(sim.execute().unwrap(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![(AgentId(0), AgentId(1)), (AgentId(1), AgentId(0))]);
    }

    #[test]
    fn infection_flows_either_way() {
        for (first, second) in [(Status::Infected, Status::Susceptible), (Status::Susceptible, Status::Infected)] {
            let mut sim = ready(
                still_config(2),
                vec![person(first, 30, 5.0, 5.0), person(second, 30, 5.0, 5.5)],
            );
            sim.execute().unwrap();
            assert_eq!(sim.population().count(Status::Infected), 2);
        }
    }

    #[test]
    fn out_of_range_pairs_do_not_interact() {
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Infected, 30, 1.0, 1.0),
                person(Status::Susceptible, 30, 8.0, 8.0),
            ],
        );
        assert_eq!(sim.execute().unwrap(), 0);
        assert_eq!(sim.population().count(Status::Susceptible), 1);
    }
}

// ── Health and capacity ───────────────────────────────────────────────────────

#[cfg(test)]
mod health_tests {
    use super::*;

    #[test]
    fn no_capacity_kills_on_reaching_severe() {
        let config = SimConfig { critical_limit: 0.0, ..still_config(1) };
        let mut sim = SimBuilder::new(config)
            .tables(AgeTables::uniform(1.0, 1.0, 0.0))
            .population(population(vec![person(Status::Infected, 30, 5.0, 5.0)]))
            .build()
            .unwrap();
        sim.initialize().unwrap();
        assert!(!sim.hospital_available());

        sim.execute().unwrap();
        let agent = &sim.population().as_slice()[0];
        assert_eq!(agent.status, Status::Infected);
        assert_eq!(agent.severity, InfectionSeverity::Hospitalized);

        // Reaches Severe and dies in the same tick.
        sim.execute().unwrap();
        assert_eq!(sim.population().as_slice()[0].status, Status::Dead);
    }

    #[test]
    fn capacity_tracks_hospitalized_fraction() {
        let config = SimConfig { critical_limit: 0.5, ..still_config(2) };
        let mut sim = SimBuilder::new(config)
            .tables(AgeTables::uniform(1.0, 0.0, 0.0))
            .population(population(vec![
                person(Status::Infected, 30, 1.0, 1.0),
                person(Status::Recovered, 30, 8.0, 8.0),
            ]))
            .build()
            .unwrap();
        sim.initialize().unwrap();
        assert!(sim.hospital_available());
        sim.execute().unwrap();
        assert!(!sim.hospital_available());
    }

    #[test]
    fn dead_agents_never_change() {
        let mut corpse = person(Status::Dead, 80, 5.0, 5.0);
        corpse.wealth = 3.0;
        let config = SimConfig {
            amplitudes: Amplitudes::new().with(Status::Dead, 5.0).with(Status::Susceptible, 1.0),
            ..still_config(3)
        };
        let mut sim = SimBuilder::new(config)
            .tables(AgeTables::uniform(1.0, 1.0, 1.0))
            .population(population(vec![
                corpse,
                person(Status::Infected, 30, 5.0, 5.0),
                person(Status::Susceptible, 70, 5.0, 5.0),
            ]))
            .trigger(epi_trigger::Trigger::on_contact(|_, _| true, |_| Status::Recovered))
            .trigger(epi_trigger::Trigger::on_field(
                |_| true,
                epi_trigger::FieldAction::wealth(|_| 100.0),
            ))
            .build()
            .unwrap();
        sim.initialize().unwrap();
        let before = sim.population().as_slice()[0].clone();

        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(sim.population().as_slice()[0], before);
    }

    #[test]
    fn living_agents_pay_expense() {
        let mut sim = ready(
            still_config(1),
            vec![person(Status::Susceptible, 10, 5.0, 5.0)],
        );
        sim.execute().unwrap();
        // Minor, so no initial wealth; Q1 multiplier is 1.
        assert_eq!(sim.population().as_slice()[0].wealth, -1.0);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    fn trajectory(seed: u64) -> Vec<Statistics> {
        let config = SimConfig { total_ticks: 25, ..scenario_config(seed) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.initialize().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        rec.snapshots.into_iter().map(|(_, s)| s).collect()
    }

    #[test]
    fn same_seed_same_trajectory() {
        assert_eq!(trajectory(11), trajectory(11));
    }

    #[test]
    fn same_seed_same_positions() {
        let build = || {
            let mut sim = SimBuilder::new(scenario_config(5)).build().unwrap();
            sim.initialize().unwrap();
            sim.run_ticks(3, &mut NoopObserver).unwrap();
            sim.positions()
        };
        assert_eq!(build(), build());
    }
}

// ── Wealth ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wealth_tests {
    use super::*;
    use crate::distribute_wealth;

    #[test]
    fn lorenz_shares_split_per_adult() {
        let agents: Vec<Agent> = (0..100)
            .map(|i| {
                let q = Quintile::new((i % 5) as u8).unwrap();
                Agent::new(AgentId(0), Position::new(1.0, 1.0), Status::Susceptible, 40, q)
            })
            .collect();
        let mut pop = population(agents);
        let per_agent = distribute_wealth(&mut pop, &WealthCurve::default(), 10_000.0);

        assert!((per_agent[0] - 20.0).abs() < 1e-9);
        assert!((per_agent[4] - 280.0).abs() < 1e-9);
        for a in pop.iter() {
            assert!((a.wealth - per_agent[a.social_stratum.index()]).abs() < 1e-9);
        }
    }

    #[test]
    fn minors_dead_and_empty_quintiles() {
        let mut child = person(Status::Susceptible, 12, 1.0, 1.0);
        child.social_stratum = Quintile::new(1).unwrap();
        let mut dead = person(Status::Dead, 50, 1.0, 1.0);
        dead.social_stratum = Quintile::new(1).unwrap();
        let adult = person(Status::Susceptible, 50, 1.0, 1.0);
        let mut pop = population(vec![child, dead, adult]);

        let per_agent = distribute_wealth(&mut pop, &WealthCurve::default(), 10_000.0);
        // Q2 has no living adult: its share divides by 1 and goes to nobody.
        assert!((per_agent[1] - 800.0).abs() < 1e-9);
        assert_eq!(pop.as_slice()[0].wealth, 0.0);
        assert_eq!(pop.as_slice()[1].wealth, 0.0);
        assert!((pop.as_slice()[2].wealth - 400.0).abs() < 1e-9);
    }
}

// ── Scenario and triggers ─────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use epi_trigger::{FieldAction, SimField, SimTrigger, Trigger};

    #[test]
    fn reference_scenario_counts() {
        let mut sim = SimBuilder::new(scenario_config(1)).build().unwrap();
        sim.initialize().unwrap();
        assert_eq!(sim.population().count(Status::Infected), 4);
        assert_eq!(sim.population().count(Status::Susceptible), 196);

        sim.execute().unwrap();
        let pop = sim.population();
        let total = [Status::Dead, Status::Recovered, Status::Infected, Status::Susceptible]
            .iter()
            .map(|&s| pop.count(s))
            .sum::<usize>();
        assert_eq!(total, 200);
    }

    #[test]
    fn elderly_stay_home() {
        let config = SimConfig {
            amplitudes: Amplitudes::new().with(Status::Susceptible, 2.0),
            ..still_config(4)
        };
        let mut sim = SimBuilder::new(config)
            .tables(inert_tables())
            .population(population(vec![
                person(Status::Susceptible, 65, 5.0, 5.0),
                person(Status::Susceptible, 20, 5.0, 5.0),
                person(Status::Susceptible, 90, 2.0, 7.0),
                person(Status::Susceptible, 30, 2.0, 7.0),
            ]))
            .trigger(Trigger::on_move(|a| a.age >= 60, |a| a.position))
            .build()
            .unwrap();
        sim.initialize().unwrap();
        let before = sim.positions();

        sim.execute().unwrap();
        let after = sim.positions();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_ne!(after[1], before[1]);
        assert_ne!(after[3], before[3]);
    }

    #[test]
    fn shielded_elderly_never_infected() {
        let mut sim = ready(
            still_config(3),
            vec![
                person(Status::Susceptible, 72, 5.0, 5.0),
                person(Status::Infected, 30, 5.0, 5.0),
                person(Status::Susceptible, 64, 5.0, 5.0),
            ],
        );
        sim.append_trigger(Trigger::on_contact(
            |a, b| a.age >= 60 || b.age >= 60,
            |_| Status::Recovered,
        ));
        for _ in 0..5 {
            sim.execute().unwrap();
            for a in sim.population().iter().filter(|a| a.age >= 60) {
                assert_ne!(a.status, Status::Infected);
            }
        }
        assert_eq!(sim.population().count(Status::Recovered), 3);
    }

    #[test]
    fn lockdown_trigger_rewrites_rate() {
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Infected, 30, 5.0, 5.0),
                person(Status::Susceptible, 30, 5.0, 5.0),
            ],
        );
        sim.append_simulation_trigger(SimTrigger::new(
            |s| s.status(Status::Infected) > 0.0,
            SimField::ContagionRate,
            |_| 0.0,
        ));
        sim.execute().unwrap();
        assert_eq!(sim.config().contagion_rate, 0.0);
        assert_eq!(sim.population().count(Status::Susceptible), 1);
    }

    #[test]
    fn field_trigger_runs_after_update() {
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Susceptible, 30, 1.0, 1.0),
                person(Status::Susceptible, 30, 8.0, 8.0),
            ],
        );
        sim.append_trigger(Trigger::on_field(
            |a| a.id == AgentId(1),
            FieldAction::wealth(|_| 100.0),
        ));
        sim.execute().unwrap();
        let pop = sim.population().as_slice();
        assert_eq!(pop[1].wealth, 100.0);
        assert!(pop[0].wealth < 400.0);
    }

    #[test]
    fn out_of_range_trigger_values_still_complete_the_tick() {
        let mut sim = ready(
            still_config(2),
            vec![
                person(Status::Susceptible, 10, 1.0, 1.0),
                person(Status::Susceptible, 10, 8.0, 8.0),
            ],
        );
        sim.append_simulation_trigger(SimTrigger::new(|_| true, SimField::ContagionRate, |_| 2.0));
        sim.append_simulation_trigger(SimTrigger::new(|_| true, SimField::ContagionDistance, |_| f64::NAN));
        sim.append_trigger(Trigger::on_field(
            |a| a.id == AgentId(0),
            FieldAction::position(|p| Position::new(p.x - 100.0, p.y + 100.0)),
        ));

        sim.execute().unwrap();
        assert_eq!(sim.tick(), Tick::ZERO.next());
        assert_eq!(sim.config().contagion_rate, 1.0);
        assert_eq!(sim.config().contagion_distance, 1.0);

        let pop = sim.population().as_slice();
        assert_eq!(pop[0].position, Position::new(0.0, 10.0));
        // One tick, one expense each.
        assert_eq!(pop[0].wealth, -1.0);
        assert_eq!(pop[1].wealth, -1.0);

        sim.execute().unwrap();
        assert_eq!(sim.tick(), Tick::ZERO.next().next());
        assert_eq!(sim.population().as_slice()[1].wealth, -2.0);
    }
}
