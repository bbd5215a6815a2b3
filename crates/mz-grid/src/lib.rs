//! `mz-grid` — the grid a maze lives on, and how it gets carved.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`grid`]      | `Cell`, `Grid` (bounds-checked, row-major)                |
//! | [`generator`] | `carve_maze`: randomized depth-first carving              |
//! | [`analysis`]  | `reachable_from`, `is_connected`, `is_perfect`, edge count |
//! | [`error`]     | `GridError`, `GridResult<T>` (text parsing only)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Cell` and `Grid`.      |

pub mod analysis;
pub mod error;
pub mod generator;
pub mod grid;

#[cfg(test)]
mod tests;

pub use analysis::{Reachability, is_connected, is_perfect, passage_edge_count, reachable_from};
pub use error::{GridError, GridResult};
pub use generator::carve_maze;
pub use grid::{Cell, Grid};
