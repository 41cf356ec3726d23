//! One direction of a pairwise contact.

use epi_core::{SimRng, Status};

use crate::{Agent, ContactOverride};

/// What [`Agent::interact`] did to `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// `self` is dead; nothing happens.
    Inert,
    /// A contact override assigned this status.
    Overridden(Status),
    /// Susceptible `self` caught the disease from infected `other`.
    Infected,
    /// Susceptible `self` met infected `other` and the draw failed.
    Resisted,
    /// Neither side could transmit.
    NoEffect,
}

impl Agent {
    /// Let `other` act on `self`.
    ///
    /// The engine calls this twice per qualifying pair, once in each
    /// direction.  The first matching contact override assigns the status it
    /// returns.  Otherwise, if `self` is Susceptible and `other` Infected, one
    /// uniform draw `<= contagion_rate` infects `self`.
    pub fn interact<C: ContactOverride + ?Sized>(
        &mut self,
        other:          &Agent,
        overrides:      &C,
        contagion_rate: f64,
        rng:            &mut SimRng,
    ) -> Contact {
        if self.is_dead() {
            return Contact::Inert;
        }

        if let Some(status) = overrides.override_status(self, other) {
            self.set_status(status);
            return Contact::Overridden(status);
        }

        if self.status == Status::Susceptible && other.status == Status::Infected {
            if rng.uniform() <= contagion_rate {
                self.set_status(Status::Infected);
                return Contact::Infected;
            }
            return Contact::Resisted;
        }

        Contact::NoEffect
    }
}
