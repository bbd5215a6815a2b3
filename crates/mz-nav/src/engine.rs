//! The navigation engine: turns decisions into state changes.

use tracing::{debug, info, trace};

use mz_agent::{AgentState, DeadEndRegistry};
use mz_core::{Position, RandomSource};
use mz_grid::Grid;

use crate::{Decision, StepOutcome, decide};

/// Applies navigation decisions for a maze with fixed start and end cells.
///
/// Holds no per-agent state; one engine serves every agent in a run.
#[derive(Copy, Clone, Debug)]
pub struct NavigationEngine {
    start: Position,
    end:   Position,
}

impl NavigationEngine {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Advance `agent` by exactly one tick: [`decide`] then [`apply`](Self::apply).
    pub fn step<S: RandomSource>(
        &self,
        grid:      &Grid,
        agent:     &mut AgentState,
        dead_ends: &mut DeadEndRegistry,
        rng:       &mut S,
    ) -> StepOutcome {
        let decision = decide(grid, agent, dead_ends, rng);
        self.apply(agent, decision, dead_ends)
    }

    /// Carry out `decision` for `agent`.
    ///
    /// A `Move` decided against an older registry is applied as-is even if
    /// its target has since been reported; the agent wastes at most one
    /// exploration step.  A done agent is never changed.
    pub fn apply(
        &self,
        agent:     &mut AgentState,
        decision:  Decision,
        dead_ends: &mut DeadEndRegistry,
    ) -> StepOutcome {
        if agent.done {
            return StepOutcome::Idle;
        }

        match decision {
            Decision::Hold => StepOutcome::Idle,

            Decision::Move(to) => {
                let from = agent.position;
                agent.advance_to(to);
                trace!(agent = agent.id.0, row = to.row, col = to.col, "agent moved");

                if to == self.end {
                    agent.finish();
                    info!(
                        agent    = agent.id.0,
                        moves    = agent.moves,
                        restarts = agent.restarts,
                        "agent reached the end cell",
                    );
                    StepOutcome::Arrived { from, to }
                } else {
                    StepOutcome::Moved { from, to }
                }
            }

            Decision::Cornered => {
                let from = agent.position;
                let dead_end = agent.last_visited();
                if let Some(cell) = dead_end {
                    if dead_ends.insert(cell) {
                        debug!(row = cell.row, col = cell.col, total = dead_ends.len(), "dead end registered");
                    }
                }
                agent.restart(self.start);
                debug!(
                    agent    = agent.id.0,
                    row      = from.row,
                    col      = from.col,
                    restarts = agent.restarts,
                    "agent cornered, restarting",
                );
                StepOutcome::Restarted { from, dead_end }
            }
        }
    }
}
