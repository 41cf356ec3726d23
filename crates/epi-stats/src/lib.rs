//! `epi-stats` — statistics aggregation over the agent population.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`stats`]  | `Statistics`: one snapshot computed from the population   |
//! | [`view`]   | `StatKey`, `StatsKind`, `StatsView`: keyed report views   |
//!
//! The engine caches one `Statistics` per tick and drops it at the end of
//! the tick; this crate only knows how to compute and slice a snapshot.

pub mod stats;
pub mod view;


pub use stats::Statistics;
pub use view::{StatKey, StatsKind, StatsView};
