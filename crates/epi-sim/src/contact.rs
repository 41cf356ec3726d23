//! Exhaustive contact detection.

use epi_agent::Agent;
use epi_core::AgentId;

/// Every unordered pair `(a, b)`, `a < b`, whose Euclidean distance is at
/// most `distance`.
///
/// O(N²): each pair is tested exactly once, in ascending id order, with no
/// spatial index.  Dead agents are included; they are inert when they
/// interact, and an infected-only transmission rule never fires from them.
pub fn find_contacts(agents: &[Agent], distance: f64) -> Vec<(AgentId, AgentId)> {
    let mut pairs = Vec::new();
    for (i, a) in agents.iter().enumerate() {
        for b in &agents[i + 1..] {
            if a.distance(b) <= distance {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}
