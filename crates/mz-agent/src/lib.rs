//! `mz-agent` — agent memory and the memory all agents share.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`set`]      | `PositionSet` (std or Fx hash set, by feature)             |
//! | [`state`]    | `AgentState`, `AgentPhase`                                 |
//! | [`registry`] | `DeadEndRegistry`: append-only, shared by every agent      |
//! | [`store`]    | `AgentStore` (all states), `AgentRngs` (per-agent RNG)     |
//! | [`builder`]  | `AgentStoreBuilder` (fluent construction)                  |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | `PositionSet` becomes `rustc_hash::FxHashSet`.             |
//! | `serde`   | Enables serde derives on `mz-core` value types.            |

pub mod builder;
pub mod registry;
pub mod set;
pub mod state;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use registry::DeadEndRegistry;
pub use set::PositionSet;
pub use state::{AgentPhase, AgentState};
pub use store::{AgentRngs, AgentStore};
