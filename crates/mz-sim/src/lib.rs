//! `mz-sim` — tick loop orchestrator for the maze_swarm framework.
//!
//! # Tick loop
//!
//! ```text
//! build:  validate config → carve maze (or accept a supplied grid)
//!         → spawn agent_count agents at start
//!
//! tick:   Sequential: for agent in 0..agent_count (fixed order):
//!             if !done: NavigationEngine::step(grid, agent, dead_ends, rng)
//!         TwoPhase:   decide every agent against the tick-start registry,
//!                     then apply in 0..agent_count order
//!         → TickSummary
//!
//! run:    until stop requested, max_ticks reached, or (opt-in) all done:
//!           on_tick_start → tick → on_tick_end → on_snapshot (every N ticks)
//! ```
//!
//! The host pulls read-only views between ticks with
//! [`Simulation::grid_snapshot`] and [`Simulation::agent_snapshots`]; the
//! core has no rendering or timing dependencies.  Stopping takes effect at
//! tick boundaries only.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the `TickMode::TwoPhase` decide phase on Rayon's  |
//! |            | thread pool.  `TickMode::Sequential` is unaffected.    |
//! | `fx-hash`  | FxHash for visited sets and the dead-end registry.     |
//! | `serde`    | Serde derives on snapshots and summaries.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_core::SimConfig;
//! use mz_sim::{NoopObserver, SimulationBuilder};
//!
//! let config = SimConfig { max_ticks: Some(10_000), ..SimConfig::reference() };
//! let mut sim = SimulationBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod stop;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
pub use snapshot::{AgentSnapshot, GridSnapshot, TickSummary};
pub use stop::StopHandle;
