//! Fluent builder for constructing a [`Simulation`].

use tracing::{info, warn};

use mz_agent::{AgentStoreBuilder, DeadEndRegistry};
use mz_core::{SimConfig, SimRng, Tick};
use mz_grid::{Grid, carve_maze, is_connected};
use mz_nav::NavigationEngine;

use crate::{SimError, SimResult, Simulation, StopHandle};

/// Seed offset for the maze-carving stream.
const MAZE_STREAM: u64 = 1;
/// Seed offset for the agent-seeding stream.
const AGENT_STREAM: u64 = 2;

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`]: dimensions, stride, agent count, start/end, seed
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                                               |
/// |-------------|-------------------------------------------------------|
/// | `.grid(g)`  | A maze carved from `config.start` with `config.seed`  |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig { seed: 7, ..SimConfig::reference() };
/// let mut sim = SimulationBuilder::new(config).build()?;
/// while !sim.all_done() {
///     sim.tick();
/// }
/// ```
pub struct SimulationBuilder {
    config: SimConfig,
    grid:   Option<Grid>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, grid: None }
    }

    /// Use a prebuilt grid instead of carving one.
    ///
    /// Must match the configured dimensions and have a passage at
    /// `config.start`.  It is not checked for being a perfect maze.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Validate the configuration, obtain the maze, and spawn the agents.
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        config.validate()?;

        // Both streams are always drawn so agent seeds do not depend on
        // whether the grid was supplied.
        let mut root = SimRng::new(config.seed);
        let mut maze_rng = root.child(MAZE_STREAM);
        let agent_seed = root.next_seed(AGENT_STREAM);

        let grid = match self.grid {
            Some(grid) => {
                if grid.rows() != config.rows || grid.cols() != config.cols {
                    return Err(SimError::GridDimensionMismatch {
                        rows:     config.rows,
                        cols:     config.cols,
                        got_rows: grid.rows(),
                        got_cols: grid.cols(),
                    });
                }
                grid
            }
            None => carve_maze(
                config.rows,
                config.cols,
                config.carving_stride,
                config.start,
                &mut maze_rng,
            ),
        };

        if !grid.is_passage(config.start) {
            return Err(SimError::StartNotPassage(config.start));
        }
        if !is_connected(&grid, config.start, config.end) {
            warn!(
                row = config.end.row,
                col = config.end.col,
                "end cell is not reachable from start; agents will restart forever",
            );
        }

        let (agents, rngs) = AgentStoreBuilder::new(config.agent_count, agent_seed)
            .start(config.start)
            .build();

        info!(
            rows     = config.rows,
            cols     = config.cols,
            passages = grid.passage_count(),
            agents   = config.agent_count,
            seed     = config.seed,
            "simulation built",
        );

        Ok(Simulation {
            engine:       NavigationEngine::new(config.start, config.end),
            current_tick: Tick::ZERO,
            grid,
            agents,
            rngs,
            dead_ends:    DeadEndRegistry::new(),
            stop:         StopHandle::new(),
            config,
        })
    }
}
