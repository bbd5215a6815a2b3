//! Read-only views handed to hosts and observers.

use mz_agent::AgentState;
use mz_core::{AgentId, Position, Tick};
use mz_grid::Grid;
use mz_nav::StepOutcome;

/// The maze and its designated cells.  Borrowed; valid between ticks.
#[derive(Copy, Clone, Debug)]
pub struct GridSnapshot<'a> {
    pub grid:  &'a Grid,
    pub start: Position,
    pub end:   Position,
}

/// Where one agent is and whether it has finished.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Position,
    pub done:     bool,
}

impl From<&AgentState> for AgentSnapshot {
    fn from(state: &AgentState) -> Self {
        Self {
            id:       state.id,
            position: state.position,
            done:     state.done,
        }
    }
}

/// Aggregate outcome counts for one tick.
///
/// `moved + arrived + restarted + idle` equals the agent count.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:        Tick,
    /// Agents that moved without reaching the end.
    pub moved:       usize,
    /// Agents that reached the end this tick.
    pub arrived:     usize,
    /// Agents that were cornered and restarted.
    pub restarted:   usize,
    /// Agents that were already done.
    pub idle:        usize,
    /// Registry size after the tick.
    pub dead_ends:   usize,
    /// Agents done after the tick.
    pub done_agents: usize,
}

impl TickSummary {
    pub(crate) fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Idle              => self.idle += 1,
            StepOutcome::Moved { .. }      => self.moved += 1,
            StepOutcome::Arrived { .. }    => self.arrived += 1,
            StepOutcome::Restarted { .. }  => self.restarted += 1,
        }
    }
}
