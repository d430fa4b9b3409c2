//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Format grids and evolution histories for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.side * (grid.side + 1));
        for row in 0..grid.side {
            for col in 0..grid.side {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column labels
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.side {
            output.push_str(&format!("{}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.side {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.side {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }

        output
    }

    /// Format every generation of an evolution history
    pub fn format_evolution(path: &[Grid]) -> String {
        let mut output = String::new();

        for (generation, grid) in path.iter().enumerate() {
            output.push_str(&format!(
                "Generation {} (living: {}):\n",
                generation,
                grid.living_count()
            ));
            output.push_str(&Self::format_grid_compact(grid));
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
