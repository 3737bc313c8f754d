//! Terminal output encoder for pixel lists.
//!
//! Renders a pixel list onto a character grid spanning the pixels' bounding
//! box, with y pointing up (the top line is the largest row). Supports:
//! - ASCII: coverage mapped onto ` .:-=+*#%@`
//! - Binary: any covered pixel drawn as `#`

use std::collections::HashMap;

use crate::geometry::Pixel;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Coverage ramp (shows Wu anti-aliasing).
    #[default]
    Ascii,
    /// One glyph for every pixel with non-zero coverage.
    Binary,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    background: char,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII coverage ramp from empty to full (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), background: '.' }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Character used for cells with no pixel.
    #[must_use]
    pub fn background(mut self, background: char) -> Self {
        self.background = background;
        self
    }

    /// Render pixels to a string, one line per row.
    ///
    /// Repeated pixels keep their highest coverage. An empty list renders as
    /// an empty string.
    #[must_use]
    pub fn render(&self, pixels: &[Pixel]) -> String {
        let Some(first) = pixels.first() else {
            return String::new();
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        let mut cells: HashMap<(i32, i32), f64> = HashMap::with_capacity(pixels.len());
        for p in pixels {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            let cell = cells.entry(p.position()).or_insert(0.0);
            *cell = cell.max(p.coverage);
        }

        let width = (i64::from(max_x) - i64::from(min_x) + 2) as usize;
        let height = (i64::from(max_y) - i64::from(min_y) + 1) as usize;
        let mut output = String::with_capacity(width * height);

        for y in (min_y..=max_y).rev() {
            for x in min_x..=max_x {
                let glyph = match cells.get(&(x, y)) {
                    Some(&coverage) => self.glyph(coverage),
                    None => self.background,
                };
                output.push(glyph);
            }
            output.push('\n');
        }

        output
    }

    fn glyph(&self, coverage: f64) -> char {
        match self.mode {
            TerminalMode::Ascii => Self::ASCII_RAMP[Self::coverage_to_index(coverage)],
            TerminalMode::Binary if coverage > 0.0 => '#',
            TerminalMode::Binary => self.background,
        }
    }

    /// Convert coverage (0.0-1.0) to ASCII ramp index.
    fn coverage_to_index(coverage: f64) -> usize {
        let last = Self::ASCII_RAMP.len() - 1;
        let idx = (coverage.clamp(0.0, 1.0) * last as f64).round() as usize;
        idx.min(last)
    }

    /// Write output directly to stdout.
    pub fn print(&self, pixels: &[Pixel]) {
        print!("{}", self.render(pixels));
    }
}
