//! Extension points that let callers preempt default agent behavior.
//!
//! The engine passes its trigger set through these traits so this crate does
//! not depend on how rules are stored.  Both traits return `None` to fall
//! through to the default behavior.

use epi_core::{Position, Status};

use crate::Agent;

/// Replaces the random walk for matching agents.
pub trait MoveOverride {
    /// New position for `agent`, or `None` to walk randomly.
    fn override_position(&self, agent: &Agent) -> Option<Position>;
}

/// Replaces contagion for matching contacts.
pub trait ContactOverride {
    /// Status to assign to `agent` after meeting `other`, or `None` to apply
    /// ordinary contagion.
    fn override_status(&self, agent: &Agent, other: &Agent) -> Option<Status>;
}

/// Hooks that never match.
pub struct NoOverrides;

impl MoveOverride for NoOverrides {
    fn override_position(&self, _agent: &Agent) -> Option<Position> {
        None
    }
}

impl ContactOverride for NoOverrides {
    fn override_status(&self, _agent: &Agent, _other: &Agent) -> Option<Status> {
        None
    }
}
