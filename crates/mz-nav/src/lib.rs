//! `mz-nav` — how one agent takes one step.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`decision`] | `Decision`, `valid_moves`, `decide` (read-only)             |
//! | [`outcome`]  | `StepOutcome`: what a step did                              |
//! | [`engine`]   | `NavigationEngine`: `apply` a decision, or `step` = both    |
//!
//! # Step semantics
//!
//! ```text
//! done            → no-op
//! valid moves     = 4-neighbors that are in bounds, passage, not visited,
//!                   and not in the shared dead-end registry
//! non-empty       → pick one uniformly, remember the cell left, move;
//!                   reaching the end cell freezes the agent
//! empty           → report the last history entry (if any) as a dead end,
//!                   then restart at the start cell with empty memory
//! ```
//!
//! Deciding and applying are separate so the simulation can compute every
//! agent's decision in parallel against a read-only registry and then apply
//! them sequentially.

pub mod decision;
pub mod engine;
pub mod outcome;


pub use decision::{Decision, decide, valid_moves};
pub use engine::NavigationEngine;
pub use outcome::StepOutcome;
