//! `mz-core` — foundational types for the `maze_swarm` framework.
//!
//! This crate is a dependency of every other `mz-*` crate.  It intentionally
//! has no `mz-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`position`]    | `Position`, `Direction`                               |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`, `TickMode` and validation              |
//! | [`rng`]         | `RandomSource`, `AgentRng` (per-agent), `SimRng`      |
//! | [`error`]       | `MzError`, `MzResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on value types and `SimConfig`.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod position;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, TickMode};
pub use error::{MzError, MzResult};
pub use ids::AgentId;
pub use position::{Direction, Position};
pub use rng::{AgentRng, RandomSource, SimRng};
pub use time::Tick;
