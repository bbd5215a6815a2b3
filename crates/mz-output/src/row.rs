//! Plain data row types written by output backends.

use mz_sim::{AgentSnapshot, TickSummary};

/// One agent's cell and completion flag at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub row:      usize,
    pub col:      usize,
    pub done:     bool,
}

impl AgentSnapshotRow {
    pub fn from_snapshot(tick: u64, snap: &AgentSnapshot) -> Self {
        Self {
            agent_id: snap.id.0,
            tick,
            row:      snap.position.row,
            col:      snap.position.col,
            done:     snap.done,
        }
    }
}

/// Outcome counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub moved:       u64,
    pub arrived:     u64,
    pub restarted:   u64,
    pub idle:        u64,
    pub dead_ends:   u64,
    pub done_agents: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:        s.tick.0,
            moved:       s.moved as u64,
            arrived:     s.arrived as u64,
            restarted:   s.restarted as u64,
            idle:        s.idle as u64,
            dead_ends:   s.dead_ends as u64,
            done_agents: s.done_agents as u64,
        }
    }
}
