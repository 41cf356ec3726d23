//! Random-walk movement and mobility income.

use epi_core::{Position, SimRng};

use crate::{Agent, AgentContext, MoveOverride};

/// What [`Agent::step`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Dead or hospitalized; position and wealth untouched.
    Stationary,
    /// A move override supplied the new position.
    Overridden,
    /// Random displacement of the given Euclidean magnitude.
    Walked { distance: f64 },
}

impl Agent {
    /// Move once.
    ///
    /// Dead agents and infected agents in a hospital bed stay put.  Otherwise
    /// the first matching override places the agent, clamped to the field.
    /// Otherwise each axis takes an independent `N(0, amplitude)` step; a
    /// step that would leave the open interval `(0, bound)` is subtracted
    /// instead of added.  The
    /// walk earns `distance × U(0,1) × minimum_expense × income multiplier`.
    ///
    /// Draw order: `dx`, `dy`, economic activity.
    pub fn step<M: MoveOverride + ?Sized>(
        &mut self,
        ctx:       &AgentContext<'_>,
        overrides: &M,
        rng:       &mut SimRng,
    ) -> Movement {
        if self.is_dead() || self.is_bedridden() {
            return Movement::Stationary;
        }

        if let Some(position) = overrides.override_position(self) {
            self.position = position.clamped(ctx.length, ctx.height);
            return Movement::Overridden;
        }

        let amplitude = ctx.amplitudes.get(self.status);
        let dx = rng.normal(amplitude);
        let dy = rng.normal(amplitude);

        self.position = Position::new(
            reflect(self.position.x, dx, ctx.length),
            reflect(self.position.y, dy, ctx.height),
        );

        let distance = dx.hypot(dy);
        let activity = rng.uniform();
        self.wealth += distance
            * activity
            * ctx.minimum_expense
            * ctx.wealth.income_multiplier(self.social_stratum);

        Movement::Walked { distance }
    }
}

/// One axis of the walk.  The reflected coordinate is clamped so a step
/// larger than the bound cannot leave the rectangle.
#[inline]
pub(crate) fn reflect(coord: f64, delta: f64, bound: f64) -> f64 {
    let moved = coord + delta;
    if moved <= 0.0 || moved >= bound {
        (coord - delta).clamp(0.0, bound)
    } else {
        moved
    }
}
