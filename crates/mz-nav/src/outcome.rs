use mz_core::Position;

/// The effect of one navigation step on one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The agent was already done.
    Idle,

    /// The agent moved one cell.
    Moved { from: Position, to: Position },

    /// The agent moved onto the end cell and is now frozen.
    Arrived { from: Position, to: Position },

    /// The agent was cornered at `from` and went back to the start.
    ///
    /// `dead_end` is the history entry reported to the registry; `None` when
    /// the agent was cornered before making any move.
    Restarted { from: Position, dead_end: Option<Position> },
}

impl StepOutcome {
    /// `true` for `Moved` and `Arrived`.
    #[inline]
    pub fn is_move(self) -> bool {
        matches!(self, StepOutcome::Moved { .. } | StepOutcome::Arrived { .. })
    }
}
