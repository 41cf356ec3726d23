//! shielding: age-based shielding scenario for the epi_econ simulator.
//!
//! 200 agents on a 100 × 100 field, 2 % initially infected.  Everyone aged
//! 60 or more stays at home and is kept out of contagion: any contact that
//! involves them leaves the older party Recovered instead.
//!
//! ```text
//! cargo run -p shielding                  # built-in scenario
//! cargo run -p shielding -- scenario.json # SimConfig loaded from JSON
//! RUST_LOG=debug cargo run -p shielding   # capacity flips, wealth shares
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use epi_core::{Amplitudes, InitialComposition, SimConfig, Status, Tick};
use epi_output::{CsvWriter, OutputWriter, SimOutputObserver};
use epi_sim::{SimBuilder, SimObserver};
use epi_stats::{Statistics, StatsKind};
use epi_trigger::Trigger;

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:   usize = 200;
const SEED:         u64   = 42;
const DAYS:         u64   = 100;
const SHIELD_AGE:   u32   = 60;
const OUTPUT_DIR:   &str  = "output/shielding";

fn scenario() -> SimConfig {
    SimConfig {
        population_size:       POPULATION,
        length:                100.0,
        height:                100.0,
        composition:           InitialComposition::Mapping(vec![(Status::Infected, 0.02)]),
        contagion_distance:    5.0,
        contagion_rate:        0.9,
        critical_limit:        0.05,
        amplitudes:            Amplitudes::new()
            .with(Status::Susceptible, 5.0)
            .with(Status::Recovered, 5.0)
            .with(Status::Infected, 5.0),
        seed:                  SEED,
        total_ticks:           DAYS,
        output_interval_ticks: 1,
        ..SimConfig::default()
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

// ── Observer wrapper to track the epidemic peak ──────────────────────────────

struct PeakObserver<W: OutputWriter> {
    inner:     SimOutputObserver<W>,
    contacts:  usize,
    peak:      (Tick, f64),
}

impl<W: OutputWriter> PeakObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, contacts: 0, peak: (Tick::ZERO, 0.0) }
    }
}

impl<W: OutputWriter> SimObserver for PeakObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, contacts: usize) {
        self.contacts += contacts;
    }

    fn on_snapshot(&mut self, tick: Tick, stats: &Statistics) {
        let infected = stats.status(Status::Infected);
        if infected > self.peak.1 {
            self.peak = (tick, infected);
        }
        if tick.is_every(10) {
            info!("{tick}: {:.1}% infected, {:.1}% dead", 100.0 * infected, 100.0 * stats.status(Status::Dead));
        }
        self.inner.on_snapshot(tick, stats);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => scenario(),
    };

    println!("=== shielding :: epi_econ ===");
    println!(
        "Agents: {}  |  Field: {} × {}  |  Days: {}  |  Seed: {}",
        config.population_size, config.length, config.height, config.total_ticks, config.seed
    );
    println!("Agents aged {SHIELD_AGE}+ stay home and are shielded from contagion");
    println!();

    // 1. Build the engine with the shielding rules.
    let mut sim = SimBuilder::new(config)
        .trigger(Trigger::on_move(|a| a.age >= SHIELD_AGE, |a| a.position))
        .trigger(Trigger::on_contact(|a, _| a.age >= SHIELD_AGE, |_| Status::Recovered))
        .build()?;
    sim.initialize()?;

    let shielded = sim.population().iter().filter(|a| a.age >= SHIELD_AGE).count();
    println!(
        "Initialized: {} infected, {} susceptible, {} shielded",
        sim.population().count(Status::Infected),
        sim.population().count(Status::Susceptible),
        shielded
    );

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = PeakObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {OUTPUT_DIR}/epidemic.csv : {} rows", obs.inner.rows());
    println!("  {OUTPUT_DIR}/economy.csv  : {} rows", obs.inner.rows());
    println!("  contacts                   : {}", obs.contacts);
    println!("  infection peak             : {:.1}% at {}", 100.0 * obs.peak.1, obs.peak.0);
    println!();

    println!("{:<14} {:>10}", "Quantity", "Final");
    println!("{}", "-".repeat(25));
    for (key, value) in sim.get_statistics(StatsKind::Raw)?.iter() {
        if key.is_economic() {
            println!("{:<14} {:>10.2}", key.to_string(), value);
        } else {
            println!("{:<14} {:>9.1}%", key.to_string(), 100.0 * value);
        }
    }
    println!();

    println!("Oldest agents:");
    let mut agents: Vec<_> = sim.population().iter().collect();
    agents.sort_by(|a, b| b.age.cmp(&a.age));
    for agent in agents.iter().take(5) {
        println!("  {}: {}", agent.id, agent.summary());
    }

    Ok(())
}
