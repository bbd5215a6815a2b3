//! Simulation observer trait for progress reporting and data collection.

use mz_core::Tick;

use crate::{AgentSnapshot, GridSnapshot, TickSummary};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} done, {} dead ends", summary.tick, summary.done_agents, summary.dead_ends);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick of a `run`, with the finished maze.
    fn on_sim_start(&mut self, _grid: &GridSnapshot<'_>) {}

    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with its outcome counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after the tick's moves.
    fn on_snapshot(
        &mut self,
        _tick:   Tick,
        _grid:   &GridSnapshot<'_>,
        _agents: &[AgentSnapshot],
    ) {}

    /// Called once after the loop exits.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
