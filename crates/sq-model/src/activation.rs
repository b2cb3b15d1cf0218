//! `RandomActivation` — shuffled-order agent scheduler.
//!
//! # Why this exists
//!
//! Stepping agents in a fixed order would bias the simulation: with ten
//! agents sharing a cell, whoever steps first reaches the next column first,
//! every tick.  Random activation re-shuffles the order each tick so no agent
//! systematically wins ties — the standard fix in turn-based agent models.
//!
//! The shuffle draws from the model's `SimRng`, so activation order is part
//! of the deterministic replay for a fixed seed.

use sq_core::{AgentId, SimRng};

use crate::AgentStore;

/// Roster of agents stepped once per tick, in a per-tick random order.
#[derive(Default)]
pub struct RandomActivation {
    roster: Vec<AgentId>,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster covering every agent currently in `store`.
    pub fn from_store(store: &AgentStore) -> Self {
        Self {
            roster: store.agent_ids().collect(),
        }
    }

    /// Register a newly spawned agent.  Dequeued agents are *not* removed —
    /// their step is a cheap no-op and keeping the roster append-only keeps
    /// IDs and indices aligned.
    pub fn add(&mut self, agent: AgentId) {
        self.roster.push(agent);
    }

    /// A freshly shuffled copy of the roster for this tick's activation pass.
    pub fn activation_order(&self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order = self.roster.clone();
        rng.shuffle(&mut order);
        order
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
