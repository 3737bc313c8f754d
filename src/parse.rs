//! Geometry file parser.
//!
//! Reads the line-oriented text format that supplies segments and a clip
//! window to the clippers.
//!
//! # Syntax
//!
//! ```text
//! * comment lines start with '*'; blank lines are ignored
//! <n> [trailing text ignored]
//! x1 y1 x2 y2        - n segment lines
//! ...
//! xa ya xb yb        - clip window, any two opposite corners
//! ```
//!
//! # Example
//!
//! ```rust
//! use raster_clip::parse::GeometryFile;
//!
//! let text = "* demo\n2\n0 0 10 10\n-5 3 5 3\n8 8 -2 -2\n";
//! let file: GeometryFile = text.parse().unwrap();
//! assert_eq!(file.segments.len(), 2);
//! assert_eq!(file.window.min.x, -2.0);
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Point, Polygon, Rect, Segment};

/// Parsed contents of a geometry file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFile {
    /// Segments in file order.
    pub segments: Vec<Segment>,
    /// Clip window with min/max derived component-wise.
    pub window: Rect,
}

impl GeometryFile {
    /// Parse geometry from text.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingData`] when fewer lines are present than the header promises
    /// - [`Error::Parse`] for a bad header, a non-numeric or non-finite value,
    ///   or a data line with fewer than four numbers
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('*'))
            .collect();

        let Some(&(header_line, header)) = lines.first() else {
            return Err(Error::MissingData { expected: 1, found: 0 });
        };
        let count = parse_count(header_line, header)?;

        let data = &lines[1..];
        let expected = count.checked_add(1).ok_or_else(|| Error::Parse {
            line: header_line,
            message: format!("segment count {count} is too large"),
        })?;
        if data.len() < expected {
            return Err(Error::MissingData { expected, found: data.len() });
        }

        let segments = data[..count]
            .iter()
            .map(|&(line_no, line)| {
                let [x1, y1, x2, y2] = parse_quad(line_no, line)?;
                Ok(Segment::from_coords(x1, y1, x2, y2))
            })
            .collect::<Result<Vec<_>>>()?;

        let (window_line, window_text) = data[count];
        let [xa, ya, xb, yb] = parse_quad(window_line, window_text)?;
        let window = Rect::from_corners(Point::new(xa, ya), Point::new(xb, yb))?;

        if data.len() > expected {
            log::debug!("ignoring {} lines after the clip window", data.len() - expected);
        }

        Ok(Self { segments, window })
    }

    /// Read and parse a geometry file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Regular polygon inscribed in the window, used as a default clip polygon.
    pub fn inscribed_polygon(&self, sides: usize) -> Result<Polygon> {
        Polygon::inscribed(&self.window, sides)
    }
}

impl FromStr for GeometryFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Leading integer of the first token; anything after it is ignored.
fn parse_count(line: usize, text: &str) -> Result<usize> {
    let token = text.split_whitespace().next().unwrap_or_default();
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();

    digits.parse().map_err(|_| Error::Parse {
        line,
        message: format!("expected segment count, found '{token}'"),
    })
}

/// First four whitespace-separated numbers of a line.
fn parse_quad(line: usize, text: &str) -> Result<[f64; 4]> {
    let mut values = [0.0; 4];
    let mut tokens = text.split_whitespace();

    for (i, slot) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| Error::Parse {
            line,
            message: format!("expected 4 numbers, found {i}"),
        })?;
        let value: f64 = token.parse().map_err(|_| Error::Parse {
            line,
            message: format!("invalid number '{token}'"),
        })?;
        if !value.is_finite() {
            return Err(Error::Parse { line, message: format!("non-finite number '{token}'") });
        }
        *slot = value;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
* Segments for clipping
3 segments follow

-10 0 10 0
* inside one
0.5 0.5 -0.5 -0.5
5 5 6 6
1 -1 -1 1
";

    #[test]
    fn test_parse_sample() {
        let file = GeometryFile::parse(SAMPLE).unwrap();

        assert_eq!(file.segments.len(), 3);
        assert_eq!(file.segments[0], Segment::from_coords(-10.0, 0.0, 10.0, 0.0));
        assert_eq!(file.segments[1], Segment::from_coords(0.5, 0.5, -0.5, -0.5));
        assert_eq!(file.window.min, Point::new(-1.0, -1.0));
        assert_eq!(file.window.max, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_parse_tabs_and_extra_spaces() {
        let file = GeometryFile::parse("1\n  0\t0   4 4\n0 0 2 2").unwrap();
        assert_eq!(file.segments[0], Segment::from_coords(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn test_parse_zero_segments() {
        let file = GeometryFile::parse("0\n0 0 1 1\n").unwrap();
        assert!(file.segments.is_empty());
    }

    #[test]
    fn test_missing_window() {
        let err = GeometryFile::parse("2\n0 0 1 1\n1 1 2 2\n").unwrap_err();
        assert!(matches!(err, Error::MissingData { expected: 3, found: 2 }));
    }

    #[test]
    fn test_empty_input() {
        let err = GeometryFile::parse("* only a comment\n\n").unwrap_err();
        assert!(matches!(err, Error::MissingData { found: 0, .. }));
    }

    #[test]
    fn test_bad_header() {
        let err = GeometryFile::parse("many\n0 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_huge_count_is_error() {
        let err = GeometryFile::parse("18446744073709551615\n0 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "got {err}");

        let err = GeometryFile::parse("18446744073709551614\n0 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::MissingData { found: 1, .. }), "got {err}");
    }

    #[test]
    fn test_bad_number_reports_line() {
        let err = GeometryFile::parse("* c\n1\n0 0 x 1\n0 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "got {err}");
    }

    #[test]
    fn test_short_line() {
        let err = GeometryFile::parse("1\n0 0 1\n0 0 1 1\n").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_rejects_nan_literal() {
        assert!(GeometryFile::parse("1\n0 0 NaN 1\n0 0 1 1\n").is_err());
    }

    #[test]
    fn test_inscribed_polygon() {
        let file = GeometryFile::parse(SAMPLE).unwrap();
        let poly = file.inscribed_polygon(5).unwrap();
        assert_eq!(poly.len(), 5);
        assert!(poly.contains(Point::ORIGIN));
    }
}
