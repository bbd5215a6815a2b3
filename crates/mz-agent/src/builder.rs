//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use mz_agent::AgentStoreBuilder;
//! use mz_core::Position;
//!
//! let (store, rngs) = AgentStoreBuilder::new(3, /*seed=*/ 42)
//!     .start(Position::new(0, 0))
//!     .build();
//!
//! assert_eq!(store.count(), 3);
//! assert_eq!(rngs.len(),    3);
//! assert!(store.iter().all(|a| a.position == Position::new(0, 0)));
//! ```

use mz_core::Position;

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
    start: Position,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    ///
    /// Agents spawn at (0, 0) unless [`start`](Self::start) is called.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            start: Position::default(),
        }
    }

    /// Spawn every agent at `start`.
    pub fn start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.count, self.start);
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
