//! Convex polygon clipping by midpoint subdivision.
//!
//! An approximation of exact edge clipping: pieces are bisected until they
//! are wholly inside, provably outside one edge, or too small or too deep to
//! refine further, in which case the piece midpoint decides.

use serde::{Deserialize, Serialize};

use super::{subdivide, Decision};
use crate::error::{Error, Result};
use crate::geometry::{cross, Point, Polygon, Segment};

/// Polygon clipper tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonClipConfig {
    /// Pieces deeper than this are classified by their midpoint.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Pieces with squared length below this are classified by their midpoint.
    #[serde(default = "default_min_length_sq")]
    pub min_length_sq: f64,
}

fn default_max_depth() -> u32 {
    12
}
fn default_min_length_sq() -> f64 {
    1.0
}

impl Default for PolygonClipConfig {
    fn default() -> Self {
        Self { max_depth: default_max_depth(), min_length_sq: default_min_length_sq() }
    }
}

impl PolygonClipConfig {
    /// Set the depth ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the minimum squared piece length.
    #[must_use]
    pub fn with_min_length_sq(mut self, min_length_sq: f64) -> Self {
        self.min_length_sq = min_length_sq;
        self
    }

    /// Reject non-finite or negative length thresholds.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_length_sq.is_finite() && self.min_length_sq >= 0.0) {
            return Err(Error::InvalidConfig {
                key: "polygon.min_length_sq",
                message: format!("must be a non-negative finite number, got {}", self.min_length_sq),
            });
        }
        Ok(())
    }
}

/// True when both endpoints lie strictly outside the same polygon edge.
///
/// The interior side of each edge is the side holding `centroid`. A centroid
/// lying on an edge's line is treated as the positive side.
#[must_use]
pub fn is_trivially_outside(segment: &Segment, polygon: &Polygon, centroid: Point) -> bool {
    polygon.edges().any(|(a, b)| {
        let inner_positive = cross(a, b, centroid) >= 0.0;
        let outside = |p: Point| {
            let cp = cross(a, b, p);
            if inner_positive {
                cp < 0.0
            } else {
                cp > 0.0
            }
        };
        outside(segment.p1) && outside(segment.p2)
    })
}

/// Clip a segment against a convex polygon.
///
/// A piece is kept whole when both endpoints are inside, dropped when it is
/// trivially outside one edge, and bisected otherwise. Past the depth ceiling
/// or below the minimum length, the piece is kept only if its midpoint is
/// inside.
#[must_use]
pub fn clip_polygon(segment: Segment, polygon: &Polygon, config: &PolygonClipConfig) -> Vec<Segment> {
    let centroid = polygon.centroid();

    subdivide(segment, |piece, depth| {
        if depth > config.max_depth || piece.length_sq() < config.min_length_sq {
            return if polygon.contains(piece.midpoint()) {
                Decision::Accept
            } else {
                Decision::Reject
            };
        }
        if polygon.contains(piece.p1) && polygon.contains(piece.p2) {
            return Decision::Accept;
        }
        if is_trivially_outside(piece, polygon, centroid) {
            return Decision::Reject;
        }
        log::trace!("polygon clip: split {piece:?} at depth {depth}");
        Decision::Split
    })
}
