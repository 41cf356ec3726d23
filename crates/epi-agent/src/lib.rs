//! `epi-agent` — one individual's state and local behavior.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`agent`]       | `Agent` record and derived helpers (age bucket, adulthood, …) |
//! | [`context`]     | `AgentContext<'a>`: read-only parameters for one tick         |
//! | [`hooks`]       | `MoveOverride` / `ContactOverride` traits, `NoOverrides`      |
//! | [`movement`]    | `Agent::step`: random walk with boundary reflection           |
//! | [`health`]      | `Agent::update`: disease progression and cost of living       |
//! | [`contact`]     | `Agent::interact`: one direction of a pairwise contact        |
//! | [`population`]  | `Population` storage and `PopulationBuilder`                  |
//!
//! # Randomness
//!
//! Every stochastic method takes `&mut SimRng`.  The engine owns the only
//! instance; agents never hold random state of their own.
//!
//! # Dead agents
//!
//! Once `status == Dead`, `step`, `update`, and `interact` return without
//! touching the agent.  Dead agents stay in the population for reporting.

pub mod agent;
pub mod contact;
pub mod context;
pub mod health;
pub mod hooks;
pub mod movement;
pub mod population;


pub use agent::Agent;
pub use contact::Contact;
pub use context::AgentContext;
pub use health::{DeathCause, HealthUpdate, Outcome};
pub use hooks::{ContactOverride, MoveOverride, NoOverrides};
pub use movement::Movement;
pub use population::{Population, PopulationBuilder};
