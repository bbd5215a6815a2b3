//! Top-level simulation configuration.

use crate::{MzError, MzResult, Position};

/// How a tick orders decisions against the shared dead-end registry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickMode {
    /// Each agent decides and applies in ascending `AgentId` order, so a dead
    /// end reported by agent `i` is visible to agent `i + 1` in the same tick.
    #[default]
    Sequential,
    /// Every agent decides against the registry as it stood at tick start;
    /// decisions are then applied in ascending `AgentId` order.  The decide
    /// phase runs on Rayon when `mz-sim` is built with `parallel`.
    TwoPhase,
}

/// Everything a simulation needs to be constructed.
///
/// Typically built in code via [`SimConfig::reference`] and struct update
/// syntax, or loaded from JSON by the application crate (`serde` feature).
/// Fields missing from the JSON take their [`reference`](Self::reference)
/// value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,

    /// Grid width in cells.
    pub cols: usize,

    /// Distance between carved cells during generation.  Normally 2, which
    /// leaves a one-cell wall between parallel corridors.
    pub carving_stride: usize,

    /// Number of exploring agents.
    pub agent_count: usize,

    /// Carving origin and every agent's spawn / restart cell.
    pub start: Position,

    /// Goal cell.  Reaching it freezes an agent permanently.
    pub end: Position,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Stop `Simulation::run` after this many ticks.  `None` runs until the
    /// host stops it.
    pub max_ticks: Option<u64>,

    /// Stop `Simulation::run` once every agent is done.  Off by default: the
    /// host decides whether completion ends the run.
    pub stop_when_all_done: bool,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Decision ordering within a tick.  Independent of Cargo features.
    pub tick_mode: TickMode,
}

impl SimConfig {
    /// The reference configuration: 30×30 grid, 3 agents, start (0, 0).
    ///
    /// Stride-2 carving from (0, 0) only lands on even-even cells, so the far
    /// corner (29, 29) is always wall on a 30×30 grid.  The end is therefore
    /// (28, 28), the farthest cell carving can reach.
    pub fn reference() -> Self {
        Self {
            rows:                  30,
            cols:                  30,
            carving_stride:        2,
            agent_count:           3,
            start:                 Position::new(0, 0),
            end:                   Position::new(28, 28),
            seed:                  42,
            max_ticks:             None,
            stop_when_all_done:    false,
            output_interval_ticks: 1,
            tick_mode:             TickMode::Sequential,
        }
    }

    /// Check the construction-time invariants.
    ///
    /// Rejects empty grids, a zero stride, zero agents, start/end outside the
    /// grid, and start == end.
    pub fn validate(&self) -> MzResult<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(invalid(format!(
                "grid must be at least 1×1, got {}×{}",
                self.rows, self.cols
            )));
        }
        if self.carving_stride < 1 {
            return Err(invalid("carving stride must be at least 1".to_owned()));
        }
        if self.agent_count < 1 {
            return Err(invalid("at least one agent is required".to_owned()));
        }
        if !self.start.within(self.rows, self.cols) {
            return Err(invalid(format!(
                "start {} is outside the {}×{} grid",
                self.start, self.rows, self.cols
            )));
        }
        if !self.end.within(self.rows, self.cols) {
            return Err(invalid(format!(
                "end {} is outside the {}×{} grid",
                self.end, self.rows, self.cols
            )));
        }
        if self.start == self.end {
            return Err(invalid(format!("start and end are both {}", self.start)));
        }
        Ok(())
    }

    /// `true` once `ticks_run` reaches `max_ticks` (never if unset).
    #[inline]
    pub fn tick_limit_reached(&self, ticks_run: u64) -> bool {
        self.max_ticks.is_some_and(|max| ticks_run >= max)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::reference()
    }
}

fn invalid(msg: String) -> MzError {
    MzError::InvalidConfiguration(msg)
}
