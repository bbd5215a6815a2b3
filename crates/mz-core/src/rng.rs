//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! The maze is carved from a single [`SimRng`] seeded with the run's seed.
//! Each agent then gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so the parallel decision phase draws the
//!   same numbers as the sequential one.
//! - Adding agents at the end of the list does not disturb the draws of
//!   existing agents.
//! - Same seed + same config ⇒ same maze and same move sequence.
//!
//! Generation and navigation are generic over [`RandomSource`], so tests can
//! substitute a scripted source and derive expected mazes by hand.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The two random decisions the framework makes: permuting carving
/// directions and choosing among valid moves.
pub trait RandomSource {
    /// Permute `slice` uniformly in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// A uniform index in `0..len`.  `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Choose a uniformly random element.  `None` if `slice` is empty.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let i = self.pick_index(slice.len());
        slice.get(i)
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at simulation init; stored in `mz_agent::AgentRngs`
/// alongside the agent states.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (maze carving).
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, so independent
    /// streams (maze carving, agent seeding) never share state.
    pub fn child(&mut self, offset: u64) -> SimRng {
        SimRng(SmallRng::seed_from_u64(self.next_seed(offset)))
    }

    /// Draw a fresh seed mixed with `offset`.
    pub fn next_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
