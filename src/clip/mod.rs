//! Segment clipping by recursive midpoint subdivision.
//!
//! Both clippers share one subdivision primitive: a segment is classified as
//! accepted, rejected, or split at its midpoint, and the halves are pushed on
//! an explicit work stack together with their depth. Each boundary supplies
//! only the classification rule:
//!
//! - [`Boundary::Rect`]: Cohen-Sutherland outcodes (see [`rect`])
//! - [`Boundary::Polygon`]: convex inside test plus centroid-side trivial reject
//!   (see [`polygon`])
//!
//! The depth ceiling and the minimum piece size are tolerance knobs, not
//! geometric truth: hitting either one yields a best-effort result, never an
//! error. Accepted pieces that share an endpoint are merged before returning.

pub mod polygon;
pub mod rect;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Polygon, Rect, Segment};

pub use polygon::{clip_polygon, PolygonClipConfig};
pub use rect::{clip_rect, OutCode, RectClipConfig};

/// Convex clip boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Axis-aligned clip window.
    Rect(Rect),
    /// Convex polygon in either winding order.
    Polygon(Polygon),
}

impl From<Rect> for Boundary {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Polygon> for Boundary {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

/// Tolerances for both clippers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Rectangle clipper settings.
    #[serde(default)]
    pub rect: RectClipConfig,
    /// Polygon clipper settings.
    #[serde(default)]
    pub polygon: PolygonClipConfig,
}

impl ClipConfig {
    /// Check every tolerance is usable.
    pub fn validate(&self) -> Result<()> {
        self.rect.validate()?;
        self.polygon.validate()
    }
}

/// Clip a segment against a boundary with default tolerances.
///
/// # Example
///
/// ```
/// use raster_clip::clip::{clip, Boundary};
/// use raster_clip::geometry::{Point, Rect, Segment};
///
/// let window = Rect::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)).unwrap();
/// let inside = Segment::from_coords(-0.5, 0.0, 0.5, 0.5);
/// assert_eq!(clip(inside, &Boundary::Rect(window)).unwrap(), vec![inside]);
/// ```
pub fn clip(segment: Segment, boundary: &Boundary) -> Result<Vec<Segment>> {
    clip_with(segment, boundary, &ClipConfig::default())
}

/// Clip a segment against a boundary.
///
/// Returns zero or more sub-segments in input direction order; against a
/// convex boundary this is normally zero or one.
///
/// # Errors
///
/// Fails on non-finite input, an inverted rectangle, or an invalid config.
pub fn clip_with(segment: Segment, boundary: &Boundary, config: &ClipConfig) -> Result<Vec<Segment>> {
    segment.ensure_finite()?;
    config.validate()?;

    match boundary {
        Boundary::Rect(rect) => {
            let rect = Rect::new(rect.min, rect.max)?;
            Ok(clip_rect(segment, &rect, &config.rect))
        }
        Boundary::Polygon(polygon) => Ok(clip_polygon(segment, polygon, &config.polygon)),
    }
}

/// Clip many segments against one boundary, preserving input order.
///
/// With the `parallel` feature the segments are clipped on the rayon pool.
pub fn clip_all(
    segments: &[Segment],
    boundary: &Boundary,
    config: &ClipConfig,
) -> Result<Vec<Vec<Segment>>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        segments
            .par_iter()
            .map(|segment| clip_with(*segment, boundary, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        segments.iter().map(|segment| clip_with(*segment, boundary, config)).collect()
    }
}

/// Verdict for one pending piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Accept,
    Reject,
    Split,
}

/// Run midpoint subdivision on an explicit stack.
///
/// `decide` sees each piece with its depth (0 for the input segment). The
/// first half is always processed before the second, so accepted pieces come
/// out in the direction of the input.
pub(crate) fn subdivide<F>(segment: Segment, mut decide: F) -> Vec<Segment>
where
    F: FnMut(&Segment, u32) -> Decision,
{
    let mut stack = vec![(segment, 0_u32)];
    let mut accepted = Vec::new();

    while let Some((piece, depth)) = stack.pop() {
        match decide(&piece, depth) {
            Decision::Accept => accepted.push(piece),
            Decision::Reject => {}
            Decision::Split => {
                let mid = piece.midpoint();
                stack.push((Segment::new(mid, piece.p2), depth + 1));
                stack.push((Segment::new(piece.p1, mid), depth + 1));
            }
        }
    }

    merge_adjacent(accepted)
}

/// Join consecutive pieces where one ends exactly where the next begins.
fn merge_adjacent(pieces: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match merged.last_mut() {
            Some(last) if last.p2 == piece.p1 => last.p2 = piece.p2,
            _ => merged.push(piece),
        }
    }
    merged
}
