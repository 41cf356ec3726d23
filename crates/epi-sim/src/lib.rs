//! `epi-sim` — tick loop orchestrator for the epi_econ simulator.
//!
//! # Tick loop
//!
//! ```text
//! initialize():
//!   spawn agents per InitialComposition (remainder Susceptible)
//!   share total_wealth among living adults per quintile
//!
//! execute():
//!   ① Simulation triggers  : rewrite engine parameters from current stats.
//!   ② Movement             : every agent steps (move triggers first).
//!   ③ Capacity             : hospital_available = hospitalized < limit.
//!   ④ Update               : disease progression + cost of living, then
//!                            field triggers, for each agent in id order.
//!   ⑤ Capacity             : recomputed from the post-update population.
//!   ⑥ Contacts             : all pairs i < j within contagion_distance.
//!   ⑦ Interaction          : each pair interacts in both directions
//!                            (contact triggers first).
//!   ⑧ Invalidate           : drop the cached statistics.
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use epi_core::SimConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { total_ticks: 5, seed: 7, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! sim.initialize().unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(sim.tick().0, 5);
//! ```

pub mod builder;
pub mod contact;
pub mod error;
pub mod observer;
pub mod sim;
pub mod wealth;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use contact::find_contacts;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use wealth::distribute_wealth;
