//! The `Simulation` struct and its tick loop.

use mz_agent::{AgentRngs, AgentState, AgentStore, DeadEndRegistry};
use mz_core::{AgentId, AgentRng, SimConfig, Tick, TickMode};
use mz_grid::{Grid, is_connected};
use mz_nav::{Decision, NavigationEngine, decide};

use crate::{AgentSnapshot, GridSnapshot, SimObserver, StopHandle, TickSummary};

/// The simulation runner: one maze, its agents, and the memory they share.
///
/// All state is owned here and handed to the navigation engine by reference
/// each tick; nothing is global.  Agents are processed in ascending
/// `AgentId` order, so a dead end reported by agent `i` is already visible
/// to agent `i + 1` within the same tick.  With `TickMode::TwoPhase`
/// decisions see the registry as of tick start instead.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    /// Configuration the simulation was built from.
    pub config: SimConfig,

    /// The next tick to be processed.
    pub current_tick: Tick,

    /// The maze.  Never modified after build.
    pub grid: Grid,

    /// Every agent's state, indexed by `AgentId`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Dead ends reported by any agent.  Only grows.
    pub dead_ends: DeadEndRegistry,

    /// Move/restart rules for this maze's start and end cells.
    pub engine: NavigationEngine,

    pub(crate) stop: StopHandle,
}

impl Simulation {
    // ── Host-facing API ───────────────────────────────────────────────────

    /// Advance every non-done agent by one step.
    ///
    /// Returns `None` without touching any state once a stop has been
    /// requested.
    pub fn tick(&mut self) -> Option<TickSummary> {
        if self.stop.is_stopped() {
            return None;
        }
        let summary = self.process_tick(self.current_tick);
        self.current_tick = self.current_tick.next();
        Some(summary)
    }

    /// Tick until a stop is requested or `max_ticks` is reached.  With
    /// `stop_when_all_done` set, the run also ends once every agent is done.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_sim_start(&self.grid_snapshot());
        while !self.should_halt() {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.current_tick);
    }

    /// Run up to `n` ticks from the current position, ignoring `max_ticks`
    /// and completion but still honouring a stop request.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.stop.is_stopped() {
                break;
            }
            self.observed_tick(observer);
        }
    }

    /// `true` if [`run`](Self::run) would exit before the next tick.
    pub fn should_halt(&self) -> bool {
        self.stop.is_stopped()
            || self.config.tick_limit_reached(self.current_tick.0)
            || (self.config.stop_when_all_done && self.all_done())
    }

    /// Request a stop; takes effect before the next tick.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// A handle that can stop this simulation from another thread or from
    /// inside an observer.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    // ── Snapshots and queries ─────────────────────────────────────────────

    pub fn grid_snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot {
            grid:  &self.grid,
            start: self.engine.start(),
            end:   self.engine.end(),
        }
    }

    /// Every agent's position and completion flag, in index order.
    pub fn agent_snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(AgentSnapshot::from).collect()
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.get(id)
    }

    /// `true` once every agent has reached the end cell.
    ///
    /// The run does not stop on its own when this becomes true unless
    /// `stop_when_all_done` is set.
    pub fn all_done(&self) -> bool {
        self.agents.all_done()
    }

    /// Diagnostic: `false` means agents can never finish and will restart
    /// forever.
    pub fn end_reachable(&self) -> bool {
        is_connected(&self.grid, self.engine.start(), self.engine.end())
    }

    pub fn dead_ends(&self) -> &DeadEndRegistry {
        &self.dead_ends
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now);
        observer.on_tick_end(&summary);
        if self.config.output_interval_ticks > 0
            && now.0 % self.config.output_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.grid_snapshot(), &self.agent_snapshots());
        }
        self.current_tick = now.next();
    }

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        let summary = match self.config.tick_mode {
            TickMode::Sequential => self.sequential_tick(now),
            TickMode::TwoPhase   => self.two_phase_tick(now),
        };
        self.finish_summary(summary)
    }

    fn sequential_tick(&mut self, now: Tick) -> TickSummary {
        let mut summary = TickSummary::new(now);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid      = &self.grid;
        let engine    = &self.engine;
        let dead_ends = &mut self.dead_ends;

        for (agent, rng) in self.agents.states.iter_mut().zip(self.rngs.inner.iter_mut()) {
            let outcome = engine.step(grid, agent, dead_ends, rng);
            summary.record(outcome);
        }

        summary
    }

    /// Every agent decides against the registry as it stood at tick start,
    /// then decisions are applied in ascending `AgentId` order.  An agent may
    /// therefore step onto a cell reported earlier in the same tick.
    fn two_phase_tick(&mut self, now: Tick) -> TickSummary {
        let mut summary = TickSummary::new(now);

        let decisions = decide_all(
            &self.grid,
            &self.agents.states,
            &mut self.rngs.inner,
            &self.dead_ends,
        );

        let engine    = &self.engine;
        let dead_ends = &mut self.dead_ends;
        for (agent, decision) in self.agents.states.iter_mut().zip(decisions) {
            let outcome = engine.apply(agent, decision, dead_ends);
            summary.record(outcome);
        }

        summary
    }

    fn finish_summary(&self, mut summary: TickSummary) -> TickSummary {
        summary.dead_ends   = self.dead_ends.len();
        summary.done_agents = self.agents.done_count();
        summary
    }
}

// ── Decide phase ──────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
fn decide_all(
    grid:      &Grid,
    states:    &[AgentState],
    rngs:      &mut [AgentRng],
    dead_ends: &DeadEndRegistry,
) -> Vec<Decision> {
    use rayon::prelude::*;

    states
        .par_iter()
        .zip(rngs.par_iter_mut())
        .map(|(agent, rng)| decide(grid, agent, dead_ends, rng))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn decide_all(
    grid:      &Grid,
    states:    &[AgentState],
    rngs:      &mut [AgentRng],
    dead_ends: &DeadEndRegistry,
) -> Vec<Decision> {
    states
        .iter()
        .zip(rngs.iter_mut())
        .map(|(agent, rng)| decide(grid, agent, dead_ends, rng))
        .collect()
}
