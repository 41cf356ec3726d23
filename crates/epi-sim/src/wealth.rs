//! Initial wealth distribution.

use log::debug;

use epi_agent::Population;
use epi_core::{Quintile, WealthCurve};

/// Share `total` among living adults according to `curve`.
///
/// Quintile `q` receives `curve.share(q) × total`, split equally among its
/// living adults (divisor floored at 1, so an empty quintile's share is
/// simply not handed out).  The per-agent share replaces the agent's wealth;
/// minors and the dead are left untouched.
///
/// Returns the per-agent amount for each quintile.
pub fn distribute_wealth(
    population: &mut Population,
    curve:      &WealthCurve,
    total:      f64,
) -> [f64; Quintile::COUNT] {
    let mut members = [0usize; Quintile::COUNT];
    for agent in population.iter().filter(|a| a.is_adult() && !a.is_dead()) {
        members[agent.social_stratum.index()] += 1;
    }

    let mut per_agent = [0.0; Quintile::COUNT];
    for q in Quintile::all() {
        per_agent[q.index()] = curve.share(q) * total / members[q.index()].max(1) as f64;
        debug!("{q}: {} adults receive {:.2} each", members[q.index()], per_agent[q.index()]);
    }

    for agent in population.iter_mut().filter(|a| a.is_adult() && !a.is_dead()) {
        agent.wealth = per_agent[agent.social_stratum.index()];
    }
    per_agent
}
