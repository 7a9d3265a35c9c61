//! Display and output formatting utilities

use crate::render::Palette;
use crate::universe::Universe;
use itertools::Itertools;
use serde::Serialize;

/// Format universes for terminal output
pub struct UniverseFormatter;

impl UniverseFormatter {
    /// Format the grid in compact form
    pub fn format_compact(universe: &Universe) -> String {
        universe.to_string()
    }

    /// Format the grid as ANSI truecolor blocks, two columns per cell
    pub fn format_painted(universe: &Universe, palette: &Palette) -> String {
        let mut output = String::new();
        for row in universe.cells().chunks(universe.width() as usize) {
            for cell in row {
                let color = cell.color(palette);
                output.push_str(&format!("\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b));
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }

    /// Format the grid with row and column coordinates
    pub fn format_with_coords(universe: &Universe) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        output.push_str(&(0..universe.width()).map(|x| format!("{:2}", x % 10)).join(""));
        output.push('\n');

        for (y, row) in universe.cells().chunks(universe.width() as usize).enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Header line printed above each frame
    pub fn format_frame_header(universe: &Universe) -> String {
        format!(
            "Generation {} (Living: {}/{})",
            universe.generation(),
            universe.population(),
            universe.cells().len()
        )
    }
}

/// Per-generation statistics emitted by `--format json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub generation: u64,
    pub width: u32,
    pub height: u32,
    pub population: usize,
    pub density: f64,
    pub living_cells: Vec<(u32, u32)>,
}

impl GenerationReport {
    pub fn from_universe(universe: &Universe) -> Self {
        let total = universe.cells().len();
        let population = universe.population();
        Self {
            generation: universe.generation(),
            width: universe.width(),
            height: universe.height(),
            population,
            density: population as f64 / total as f64,
            living_cells: universe.living_cells(),
        }
    }

    pub fn to_json_line(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Progress indicator for long-running operations
pub struct ProgressIndicator {
    total: u64,
    current: u64,
    last_update: std::time::Instant,
    start_time: std::time::Instant,
}

impl ProgressIndicator {
    pub fn new(total: u64) -> Self {
        let now = std::time::Instant::now();
        Self {
            total,
            current: 0,
            last_update: now,
            start_time: now,
        }
    }

    /// Update progress and redraw at most every 100ms
    pub fn update(&mut self, current: u64) {
        self.current = current;
        let now = std::time::Instant::now();

        if now.duration_since(self.last_update).as_millis() > 100 {
            self.display();
            self.last_update = now;
        }
    }

    pub fn display(&self) {
        let percentage = self.percentage();

        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.current as f64 / elapsed
        } else {
            0.0
        };

        eprint!(
            "\rProgress: {}/{} ({:.1}%) - {:.0} gen/s",
            self.current, self.total, percentage, rate
        );
    }

    /// Finish and clear the progress line
    pub fn finish(&self) {
        eprintln!("{}", self.summary());
    }

    fn summary(&self) -> String {
        format!(
            "\rCompleted: {}/{} ({:.1}%) - Total time: {:.3}s",
            self.current,
            self.total,
            self.percentage(),
            self.start_time.elapsed().as_secs_f64()
        )
    }

    fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            100.0
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: TermColor) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// False when `NO_COLOR` is set or `TERM` is `dumb`
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, TermColor::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, TermColor::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, TermColor::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TermColor {
    Green,
    Yellow,
    Blue,
}

impl TermColor {
    fn code(self) -> u8 {
        match self {
            TermColor::Green => 32,
            TermColor::Yellow => 33,
            TermColor::Blue => 34,
        }
    }
}
