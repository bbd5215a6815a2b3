//! `mz-output` — simulation output writers for the maze_swarm framework.
//!
//! | Writer      | Files created                                              |
//! |-------------|------------------------------------------------------------|
//! | `CsvWriter` | `maze.csv`, `agent_snapshots.csv`, `tick_summaries.csv`    |
//!
//! `maze.csv` has no header: one line per grid row, `1` for wall and `0`
//! for passage.
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `mz_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mz_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
