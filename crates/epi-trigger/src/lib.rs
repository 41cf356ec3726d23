//! `epi-trigger` — caller-supplied rules that preempt default behavior.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`field`]  | `AgentField`, `FieldAction`, `SimField`: closed field selectors   |
//! | [`rule`]   | `Trigger` (move / contact / agent field), `SimTrigger`            |
//! | [`set`]    | `TriggerSet`: registration-ordered storage and dispatch           |
//!
//! # Semantics
//!
//! A rule is a condition, the attribute it overrides, and an action that
//! produces the replacement value.  Rules are consulted in registration
//! order and the first one whose condition holds wins:
//!
//! - **move** rules replace the random walk with the action's position;
//! - **contact** rules replace contagion with the action's status for the
//!   initiating agent;
//! - **field** rules rewrite one agent field after the status update
//!   (first match per field);
//! - **simulation** rules rewrite one engine parameter at the start of a
//!   tick (first match per parameter).
//!
//! Field selectors are closed enums, so a rule can only reach the fields
//! listed in [`AgentField`] and [`SimField`].  Field actions are typed per
//! field and parameter writes are clamped to their valid range, so applying
//! rules cannot fail part-way through a tick.
//!
//! # Example
//!
//! ```rust
//! use epi_core::Status;
//! use epi_trigger::{Trigger, TriggerSet};
//!
//! let mut triggers = TriggerSet::new();
//! // 60+ stay at home.
//! triggers.push(Trigger::on_move(|a| a.age >= 60, |a| a.position));
//! // No contact between 60+ people and others.
//! triggers.push(Trigger::on_contact(
//!     |a, b| a.age >= 60 || b.age >= 60,
//!     |_| Status::Recovered,
//! ));
//! assert_eq!(triggers.len(), 2);
//! ```

pub mod field;
pub mod rule;
pub mod set;


pub use field::{AgentField, FieldAction, SimField};
pub use rule::{SimTrigger, Trigger, TriggerTarget};
pub use set::TriggerSet;
