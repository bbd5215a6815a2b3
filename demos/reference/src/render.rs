//! Plain-text frame rendering for the terminal.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use mz_core::Tick;
use mz_grid::Cell;
use mz_sim::{AgentSnapshot, GridSnapshot, SimObserver, TickSummary};

const WALL:    char = '#';
const PASSAGE: char = ' ';
const START:   char = 'S';
const END:     char = 'E';

/// Draw the maze with its designated cells and agents, one text line per
/// grid row.
///
/// An exploring agent shows as the last digit of its id; done agents are
/// drawn under the `E`.  Later agents overwrite earlier ones on a shared
/// cell.
pub fn render_frame(grid: &GridSnapshot<'_>, agents: &[AgentSnapshot]) -> String {
    let mut canvas: Vec<Vec<char>> = grid
        .grid
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Wall    => WALL,
                    Cell::Passage => PASSAGE,
                })
                .collect()
        })
        .collect();

    let mut put = |row: usize, col: usize, glyph: char| {
        if let Some(slot) = canvas.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = glyph;
        }
    };
    put(grid.start.row, grid.start.col, START);
    for agent in agents.iter().filter(|a| !a.done) {
        let digit = char::from_digit(agent.id.0 % 10, 10).unwrap_or('@');
        put(agent.position.row, agent.position.col, digit);
    }
    put(grid.end.row, grid.end.col, END);

    let mut out = String::with_capacity(canvas.len() * (grid.grid.cols() + 1));
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Redraws the terminal on every snapshot, paced to a fixed frame rate.
pub struct TerminalRenderer {
    frame:      Duration,
    next_frame: Instant,
    last:       Option<TickSummary>,
}

impl TerminalRenderer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame:      Duration::from_secs(1) / fps.max(1),
            next_frame: Instant::now(),
            last:       None,
        }
    }

    fn pace(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
        }
        self.next_frame = Instant::now() + self.frame;
    }
}

impl SimObserver for TerminalRenderer {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.last = Some(*summary);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &GridSnapshot<'_>, agents: &[AgentSnapshot]) {
        self.pace();
        let frame = render_frame(grid, agents);
        let status = match self.last {
            Some(s) => format!(
                "{tick}  done {}/{}  dead ends {}",
                s.done_agents,
                agents.len(),
                s.dead_ends
            ),
            None => format!("{tick}"),
        };

        // Clear screen, home cursor.
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\x1b[2J\x1b[H{frame}{status}");
        let _ = stdout.flush();
    }
}
