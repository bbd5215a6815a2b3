//! reference — three agents exploring a 30×30 maze, drawn in the terminal.
//!
//! Usage:
//!   cargo run -p reference [--release] -- [CONFIG.json] [--headless]
//!
//! The optional JSON file overrides any `SimConfig` fields; missing fields
//! keep their reference values.  `--headless` skips rendering and runs at
//! full speed.  Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

mod render;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use memory_stats::memory_stats;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mz_core::SimConfig;
use mz_sim::{NoopObserver, SimulationBuilder};

use render::TerminalRenderer;

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAMES_PER_SEC: u32 = 10;
/// Upper bound on a run when the config sets none.
const DEFAULT_MAX_TICKS: u64 = 100_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::reference());
    };
    let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let headless = args.iter().any(|a| a == "--headless");
    let config_path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let mut config = load_config(config_path)?;
    config.stop_when_all_done = true;
    config.max_ticks.get_or_insert(DEFAULT_MAX_TICKS);

    let mut sim = SimulationBuilder::new(config.clone()).build()?;
    if !sim.end_reachable() {
        eprintln!(
            "warning: end {} is not reachable from start {}; agents cannot finish",
            config.end, config.start
        );
    }
    info!(passages = sim.grid.passage_count(), "maze ready");

    let t0 = Instant::now();
    if headless {
        sim.run(&mut NoopObserver);
    } else {
        sim.run(&mut TerminalRenderer::new(FRAMES_PER_SEC));
    }
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────────
    println!();
    println!(
        "{} after {} ticks in {:.3} s  |  dead ends: {}  |  memory: {:.1} MB",
        if sim.all_done() { "All agents reached the end" } else { "Stopped" },
        sim.current_tick.0,
        elapsed.as_secs_f64(),
        sim.dead_ends().len(),
        mem_mb(),
    );
    println!();
    println!("{:<8} {:<6} {:<10} {:<8} {:<8}", "Agent", "Done", "Position", "Moves", "Restarts");
    println!("{}", "-".repeat(44));
    for agent in sim.agents.iter() {
        println!(
            "{:<8} {:<6} {:<10} {:<8} {:<8}",
            agent.id.0,
            if agent.done { "yes" } else { "no" },
            agent.position.to_string(),
            agent.moves,
            agent.restarts,
        );
    }

    Ok(())
}
