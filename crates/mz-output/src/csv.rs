//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `maze.csv`
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use mz_grid::Grid;

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

const SNAPSHOT_HEADER: [&str; 5] = ["agent_id", "tick", "row", "col", "done"];
const SUMMARY_HEADER: [&str; 7] =
    ["tick", "moved", "arrived", "restarted", "idle", "dead_ends", "done_agents"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    maze:       Writer<File>,
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    ///
    /// `maze.csv` gets no header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let maze = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join("maze.csv"))?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            maze,
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_maze(&mut self, grid: &Grid) -> OutputResult<()> {
        for row in grid.iter_rows() {
            self.maze
                .write_record(row.iter().map(|cell| if cell.is_passage() { "0" } else { "1" }))?;
        }
        self.maze.flush()?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                (row.done as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moved.to_string(),
            row.arrived.to_string(),
            row.restarted.to_string(),
            row.idle.to_string(),
            row.dead_ends.to_string(),
            row.done_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.maze.flush()?;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
