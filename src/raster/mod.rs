//! Rasterization of line segments and circles into pixel lists.
//!
//! Six interchangeable algorithms are selected through [`Algorithm`] and run
//! through a single entry point, [`rasterize`]. Each algorithm is a stateless
//! pure function; the output is a finite, fully materialized `Vec<Pixel>`.
//!
//! The per-algorithm functions trust their input. [`rasterize`] checks it
//! first: coordinates must be finite and round to pixels inside
//! `±`[`MAX_COORDINATE`].
//!
//! # Algorithms
//!
//! - **Stepwise**: slope-intercept `y = kx + b`, one pixel per integer x
//! - **DDA**: digital differential analyzer with fractional increments
//! - **Bresenham line**: integer-only error accumulation
//! - **Bresenham circle**: midpoint circle with 8-way symmetry
//! - **Wu**: anti-aliased line with per-pixel coverage
//! - **Castle-Pitway**: step pattern built from the Euclidean algorithm
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Castle, C. M. A., & Pitteway, M. L. V. (1987). "An efficient structural technique
//!   for encoding 'best-fit' straight lines." The Computer Journal.

mod circle;
mod line;
mod wu;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Pixel, Point, Segment};

pub use circle::bresenham_circle;
pub use line::{bresenham_line, castle_pitway, dda, step, step_major_axis};
pub use wu::wu_line;

/// Rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Slope-intercept stepping along x.
    Step,
    /// Digital differential analyzer.
    Dda,
    /// Integer Bresenham line.
    BresenhamLine,
    /// Midpoint (Bresenham) circle.
    BresenhamCircle,
    /// Wu anti-aliased line.
    Wu,
    /// Castle-Pitway Euclidean step pattern.
    #[serde(rename = "castle_piteway", alias = "castle_pitway")]
    CastlePitway,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Step,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::Wu,
        Self::CastlePitway,
    ];

    /// Stable identifier used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham_line",
            Self::BresenhamCircle => "bresenham_circle",
            Self::Wu => "wu",
            Self::CastlePitway => "castle_piteway",
        }
    }

    /// True for algorithms that take a segment rather than a circle.
    #[must_use]
    pub const fn is_line(self) -> bool {
        !matches!(self, Self::BresenhamCircle)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "step" => Ok(Self::Step),
            "dda" => Ok(Self::Dda),
            "bresenham_line" | "bresenham" => Ok(Self::BresenhamLine),
            "bresenham_circle" | "circle" => Ok(Self::BresenhamCircle),
            "wu" => Ok(Self::Wu),
            "castle_piteway" | "castle_pitway" => Ok(Self::CastlePitway),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Geometry handed to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// A line segment.
    Line(Segment),
    /// A circle around `center` with an integer radius.
    Circle {
        /// Circle center; rounded to the nearest pixel.
        center: Point,
        /// Radius in pixels.
        radius: u32,
    },
}

/// Exclusive bound on the magnitude of any pixel coordinate [`rasterize`]
/// will produce.
///
/// Keeps every span and doubled error term of the integer walkers inside
/// `i32`.
pub const MAX_COORDINATE: i32 = 1 << 29;

impl Primitive {
    /// Reject non-finite input and geometry that reaches past
    /// [`MAX_COORDINATE`] once rounded to pixels.
    fn validate(&self) -> Result<()> {
        match *self {
            Self::Line(segment) => {
                segment.ensure_finite()?;
                ensure_in_range(segment.p1, 0)?;
                ensure_in_range(segment.p2, 0)
            }
            Self::Circle { center, radius } => {
                center.ensure_finite()?;
                ensure_in_range(center, radius)
            }
        }
    }
}

/// `p` rounded to a pixel, grown by `margin` on every side, must stay
/// strictly inside `±MAX_COORDINATE`.
fn ensure_in_range(p: Point, margin: u32) -> Result<()> {
    let limit = f64::from(MAX_COORDINATE);
    let reach = |v: f64| (v + 0.5).floor().abs() + f64::from(margin);

    if reach(p.x) < limit && reach(p.y) < limit {
        Ok(())
    } else {
        Err(Error::CoordinateOutOfRange { x: p.x, y: p.y, limit: MAX_COORDINATE })
    }
}

impl From<Segment> for Primitive {
    fn from(segment: Segment) -> Self {
        Self::Line(segment)
    }
}

/// Per-call rasterization knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RasterOptions {
    /// Let the stepwise algorithm step along y for steep segments.
    ///
    /// Off by default: the plain stepwise algorithm always steps along x and
    /// under-samples steep segments.
    #[serde(default)]
    pub step_major_axis: bool,
}

impl RasterOptions {
    /// Enable or disable major-axis stepping for [`Algorithm::Step`].
    #[must_use]
    pub fn step_major_axis(mut self, enabled: bool) -> Self {
        self.step_major_axis = enabled;
        self
    }
}

/// Rasterize a primitive with the selected algorithm.
///
/// # Errors
///
/// - [`Error::NonFiniteCoordinate`] for NaN or infinite input
/// - [`Error::CoordinateOutOfRange`] when a pixel would land at or beyond
///   [`MAX_COORDINATE`]
/// - [`Error::PrimitiveMismatch`] when a circle goes to a line algorithm or vice versa
/// - [`Error::DegenerateSegment`] for a zero-length segment under DDA
///
/// # Example
///
/// ```
/// use raster_clip::geometry::Segment;
/// use raster_clip::raster::{rasterize, Algorithm, Primitive, RasterOptions};
///
/// let line = Primitive::Line(Segment::from_coords(0.0, 0.0, 5.0, 2.0));
/// let pixels = rasterize(Algorithm::BresenhamLine, &line, &RasterOptions::default()).unwrap();
/// let coords: Vec<_> = pixels.iter().map(|p| p.position()).collect();
/// assert_eq!(coords, [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
/// ```
pub fn rasterize(
    algorithm: Algorithm,
    primitive: &Primitive,
    options: &RasterOptions,
) -> Result<Vec<Pixel>> {
    primitive.validate()?;

    let pixels = match (algorithm, *primitive) {
        (Algorithm::BresenhamCircle, Primitive::Circle { center, radius }) => {
            bresenham_circle(center, radius)
        }
        (Algorithm::BresenhamCircle, Primitive::Line(_)) => {
            return Err(Error::PrimitiveMismatch { algorithm: algorithm.name(), expected: "circle" });
        }
        (_, Primitive::Circle { .. }) => {
            return Err(Error::PrimitiveMismatch { algorithm: algorithm.name(), expected: "line" });
        }
        (Algorithm::Step, Primitive::Line(segment)) => {
            if options.step_major_axis {
                step_major_axis(segment)
            } else {
                step(segment)
            }
        }
        (Algorithm::Dda, Primitive::Line(segment)) => dda(segment)?,
        (Algorithm::BresenhamLine, Primitive::Line(segment)) => bresenham_line(segment),
        (Algorithm::Wu, Primitive::Line(segment)) => wu_line(segment),
        (Algorithm::CastlePitway, Primitive::Line(segment)) => castle_pitway(segment),
    };

    log::debug!("{algorithm}: {} pixels", pixels.len());
    Ok(pixels)
}

/// Rasterize many primitives, preserving input order.
///
/// Each job is independent; with the `parallel` feature the jobs run on the
/// rayon thread pool.
pub fn rasterize_all(
    jobs: &[(Algorithm, Primitive)],
    options: &RasterOptions,
) -> Vec<Result<Vec<Pixel>>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        jobs.par_iter()
            .map(|(algorithm, primitive)| rasterize(*algorithm, primitive, options))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .map(|(algorithm, primitive)| rasterize(*algorithm, primitive, options))
            .collect()
    }
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
pub(crate) fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
