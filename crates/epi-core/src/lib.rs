//! `epi-core` — foundational types for the `epi_econ` simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `Quintile`                                     |
//! | [`geo`]      | `Position`, planar Euclidean distance                     |
//! | [`status`]   | `Status`, `InfectionSeverity`                             |
//! | [`tables`]   | `AgeTables` (per-decade probabilities), `WealthCurve`     |
//! | [`time`]     | `Tick`                                                    |
//! | [`config`]   | `SimConfig`, `InitialComposition`, `Amplitudes`           |
//! | [`rng`]      | `SimRng` (the single engine-owned random source)          |
//! | [`error`]    | `EpiError`, `EpiResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod tables;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Amplitudes, InitialComposition, SimConfig};
pub use error::{EpiError, EpiResult};
pub use geo::Position;
pub use ids::{AgentId, Quintile};
pub use rng::SimRng;
pub use status::{InfectionSeverity, Status};
pub use tables::{AgeTables, WealthCurve};
pub use time::Tick;
