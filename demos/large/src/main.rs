//! `large` — 64 agents sharing dead ends in a 201×201 maze.
//!
//! Decisions are computed on Rayon's thread pool each tick and applied in
//! agent order.  The maze, tick summaries, and agent snapshots every
//! `OUTPUT_INTERVAL_TICKS` are written as CSV to `output/large/`.
//!
//! Run with:
//!   cargo run -p large --release

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use memory_stats::memory_stats;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mz_core::{Position, SimConfig, Tick, TickMode};
use mz_output::{CsvWriter, SimOutputObserver};
use mz_sim::{AgentSnapshot, GridSnapshot, SimObserver, SimulationBuilder, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIDE:                  usize = 201;
const AGENT_COUNT:           usize = 64;
const SEED:                  u64   = 42;
const MAX_TICKS:             u64   = 2_000_000;
const OUTPUT_INTERVAL_TICKS: u64   = 500;
/// Log progress every N ticks.
const PROGRESS_INTERVAL:     u64   = 10_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Forwards to the CSV observer and logs a progress line periodically.
struct ProgressObserver<O: SimObserver> {
    inner:    O,
    t0:       Instant,
    restarts: u64,
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_sim_start(&mut self, grid: &GridSnapshot<'_>) {
        self.t0 = Instant::now();
        self.inner.on_sim_start(grid);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.restarts += summary.restarted as u64;
        if summary.tick.0 % PROGRESS_INTERVAL == 0 {
            info!(
                tick      = summary.tick.0,
                done      = summary.done_agents,
                dead_ends = summary.dead_ends,
                restarts  = self.restarts,
                secs      = self.t0.elapsed().as_secs_f64(),
                "progress",
            );
        }
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &GridSnapshot<'_>, agents: &[AgentSnapshot]) {
        self.inner.on_snapshot(tick, grid, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    println!("=== large — maze_swarm ===");
    println!("Grid: {SIDE}×{SIDE}  |  Agents: {AGENT_COUNT}  |  Seed: {SEED}");
    println!();

    let config = SimConfig {
        rows:                  SIDE,
        cols:                  SIDE,
        agent_count:           AGENT_COUNT,
        end:                   Position::new(SIDE - 1, SIDE - 1),
        seed:                  SEED,
        max_ticks:             Some(MAX_TICKS),
        stop_when_all_done:    true,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        tick_mode:             TickMode::TwoPhase,
        ..SimConfig::reference()
    };

    let t_build = Instant::now();
    let mut sim = SimulationBuilder::new(config).build()?;
    println!(
        "Maze carved in {:.3} s: {} passages  |  memory {:.1} MB",
        t_build.elapsed().as_secs_f64(),
        sim.grid.passage_count(),
        mem_mb(),
    );
    if !sim.end_reachable() {
        warn!("end cell is unreachable; the run will stop at the tick cap");
    }

    let out_dir = Path::new("output/large");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir)?;
    let mut obs = ProgressObserver {
        inner:    SimOutputObserver::new(writer),
        t0:       Instant::now(),
        restarts: 0,
    };

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let ticks = sim.current_tick.0;
    println!();
    println!("Run complete in {:.3} s ({ticks} ticks)", elapsed.as_secs_f64());
    println!(
        "  ticks/s     : {:.0}",
        ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("  agents done : {}/{AGENT_COUNT}", sim.agents.done_count());
    println!("  dead ends   : {}", sim.dead_ends().len());
    println!("  restarts    : {}", obs.restarts);
    println!("  memory      : {:.1} MB", mem_mb());
    println!("  output      : {}", out_dir.display());

    Ok(())
}
