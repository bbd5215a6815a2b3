//! Agent storage: `AgentStore` (exploration state) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel decision phase needs `&mut AgentRng` for each agent while
//! also reading every agent's state and the shared registry.  Keeping RNGs in
//! a separate `AgentRngs` struct lets the two be borrowed independently:
//!
//! ```ignore
//! // mz-sim decision phase (simplified):
//! let decisions: Vec<_> = sim.agents.states
//!     .par_iter()
//!     .zip(sim.rngs.inner.par_iter_mut())
//!     .map(|(agent, rng)| decide(&grid, agent, &dead_ends, rng))
//!     .collect();
//! ```

use mz_core::{AgentId, AgentRng, Position};

use crate::AgentState;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to allow
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agent states, indexed by `AgentId`.
///
/// Index order is processing order within a tick.
pub struct AgentStore {
    pub states: Vec<AgentState>,
}

impl AgentStore {
    pub(crate) fn new(count: usize, start: Position) -> Self {
        let states = (0..count as u32)
            .map(|i| AgentState::new(AgentId(i), start))
            .collect();
        Self { states }
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.states.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&AgentState> {
        self.states.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentState> {
        self.states.get_mut(agent.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentState> + '_ {
        self.states.iter()
    }

    /// Number of agents that have reached the end cell.
    pub fn done_count(&self) -> usize {
        self.states.iter().filter(|a| a.done).count()
    }

    /// `true` once every agent has reached the end cell.
    pub fn all_done(&self) -> bool {
        self.states.iter().all(|a| a.done)
    }
}
