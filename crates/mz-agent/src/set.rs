//! Hash set of positions used for visited memory and dead ends.
//!
//! Positions are small integer pairs, so FxHash is markedly faster than the
//! default SipHash.  The default stays on std to keep the dependency optional.

use mz_core::Position;

#[cfg(feature = "fx-hash")]
pub type PositionSet = rustc_hash::FxHashSet<Position>;

#[cfg(not(feature = "fx-hash"))]
pub type PositionSet = std::collections::HashSet<Position>;
