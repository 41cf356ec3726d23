//! Agent storage: `Population` and its builder.
//!
//! Agents are created once, at initialization, and never removed.  The
//! `AgentId` of an agent is its index in the backing `Vec`, so lookups are
//! O(1) indexing and iteration order is ascending id.

use epi_core::{AgentId, Position, SimRng, Status};

use crate::Agent;

/// Every agent in the simulation, indexed by `AgentId`.
#[derive(Clone, Debug, Default)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Current position of every agent, in id order.
    pub fn positions(&self) -> Vec<Position> {
        self.agents.iter().map(|a| a.position).collect()
    }

    /// Number of agents with `status`.
    pub fn count(&self, status: Status) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }

    /// Mutable access to `a` alongside shared access to `b`.
    ///
    /// Returns `None` if `a == b` or either id is out of range.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &Agent)> {
        let (i, j) = (a.index(), b.index());
        if i == j || i >= self.agents.len() || j >= self.agents.len() {
            return None;
        }
        if i < j {
            let (left, right) = self.agents.split_at_mut(j);
            Some((&mut left[i], &right[0]))
        } else {
            let (left, right) = self.agents.split_at_mut(i);
            Some((&mut right[0], &left[j]))
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

/// Fluent builder that assigns sequential `AgentId`s.
///
/// ```rust
/// use epi_agent::PopulationBuilder;
/// use epi_core::{SimRng, Status};
///
/// let mut rng = SimRng::new(42);
/// let population = PopulationBuilder::new(100.0, 100.0)
///     .spawn(Status::Infected, 4, &mut rng)
///     .spawn(Status::Susceptible, 196, &mut rng)
///     .build();
///
/// assert_eq!(population.len(), 200);
/// assert_eq!(population.count(Status::Infected), 4);
/// ```
pub struct PopulationBuilder {
    length: f64,
    height: f64,
    agents: Vec<Agent>,
}

impl PopulationBuilder {
    /// Random positions are drawn from `[0, length) × [0, height)`.
    pub fn new(length: f64, height: f64) -> Self {
        Self { length, height, agents: Vec::new() }
    }

    pub fn with_capacity(mut self, n: usize) -> Self {
        self.agents.reserve(n);
        self
    }

    fn next_id(&self) -> AgentId {
        AgentId(self.agents.len() as u32)
    }

    /// Append `count` random agents with `status` at random positions.
    ///
    /// Draw order per agent: x, y, age, stratum.
    pub fn spawn(mut self, status: Status, count: usize, rng: &mut SimRng) -> Self {
        for _ in 0..count {
            let position = Position::new(
                rng.gen_range(0.0..self.length),
                rng.gen_range(0.0..self.height),
            );
            let agent = Agent::random(self.next_id(), position, status, rng);
            self.agents.push(agent);
        }
        self
    }

    /// Append a fully specified agent.  Its `id` is overwritten with the next
    /// sequential id.
    pub fn push(mut self, mut agent: Agent) -> Self {
        agent.id = self.next_id();
        self.agents.push(agent);
        self
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn build(self) -> Population {
        Population { agents: self.agents }
    }
}
