//! Per-agent exploration state.

use mz_core::{AgentId, Position};

use crate::PositionSet;

/// Lifecycle of an agent.  `Done` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AgentPhase {
    Exploring,
    Done,
}

/// Everything one agent remembers.
///
/// `visited` and `history` are private memory: they are cleared by
/// [`restart`](Self::restart) and never read by other agents.  `restarts`
/// and `moves` are lifetime counters and survive restarts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AgentState {
    pub id: AgentId,

    /// Current cell.  Always a passage.
    pub position: Position,

    /// Cells the agent has stood on and left since its last restart.
    pub visited: PositionSet,

    /// Cells moved to since the last restart, oldest first.
    pub history: Vec<Position>,

    /// Set on reaching the end cell; never cleared.
    pub done: bool,

    /// Number of restarts so far.
    pub restarts: u64,

    /// Number of moves so far, across restarts.
    pub moves: u64,
}

impl AgentState {
    /// A fresh agent standing at `start` with empty memory.
    pub fn new(id: AgentId, start: Position) -> Self {
        Self {
            id,
            position: start,
            visited:  PositionSet::default(),
            history:  Vec::new(),
            done:     false,
            restarts: 0,
            moves:    0,
        }
    }

    #[inline]
    pub fn phase(&self) -> AgentPhase {
        if self.done { AgentPhase::Done } else { AgentPhase::Exploring }
    }

    #[inline]
    pub fn has_visited(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    /// The most recent history entry: the cell reported as a dead end when
    /// the agent gets cornered.
    #[inline]
    pub fn last_visited(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Move to `next`, remembering the cell being left.
    pub fn advance_to(&mut self, next: Position) {
        self.visited.insert(self.position);
        self.history.push(next);
        self.position = next;
        self.moves += 1;
    }

    /// Freeze the agent permanently.
    #[inline]
    pub fn finish(&mut self) {
        self.done = true;
    }

    /// Return to `start` and forget everything since the last restart.
    ///
    /// `done` is untouched: a done agent is never restarted.
    pub fn restart(&mut self, start: Position) {
        self.position = start;
        self.visited.clear();
        self.history.clear();
        self.restarts += 1;
    }
}
