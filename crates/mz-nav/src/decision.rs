//! Move selection from local sensing only.

use mz_agent::{AgentState, DeadEndRegistry};
use mz_core::{Direction, Position, RandomSource};
use mz_grid::Grid;

/// What an agent intends to do this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Decision {
    /// The agent is done; nothing happens.
    Hold,
    /// Move to this neighbor.
    Move(Position),
    /// No valid neighbor: report a dead end and restart.
    Cornered,
}

/// Neighbors of the agent's cell it may move to, in `Direction::ALL` order.
///
/// A neighbor qualifies iff it is in bounds, a passage, not in the agent's
/// visited set, and not in the shared dead-end registry.
pub fn valid_moves(grid: &Grid, agent: &AgentState, dead_ends: &DeadEndRegistry) -> Vec<Position> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| grid.neighbor(agent.position, dir, 1))
        .filter(|&next| {
            grid.is_passage(next) && !agent.has_visited(next) && !dead_ends.contains(next)
        })
        .collect()
}

/// Decide the agent's next action without mutating anything.
pub fn decide<S: RandomSource>(
    grid:      &Grid,
    agent:     &AgentState,
    dead_ends: &DeadEndRegistry,
    rng:       &mut S,
) -> Decision {
    if agent.done {
        return Decision::Hold;
    }
    let moves = valid_moves(grid, agent, dead_ends);
    match rng.choose(&moves) {
        Some(&next) => Decision::Move(next),
        None        => Decision::Cornered,
    }
}
