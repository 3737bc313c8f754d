//! Rectangle clipping with Cohen-Sutherland outcodes.

use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

use super::{subdivide, Decision};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Segment};

/// 4-bit region code of a point relative to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutCode(u8);

impl OutCode {
    /// Inside the rectangle.
    pub const INSIDE: Self = Self(0b0000);
    /// Left of `min.x`.
    pub const LEFT: Self = Self(0b0001);
    /// Right of `max.x`.
    pub const RIGHT: Self = Self(0b0010);
    /// Below `min.y`.
    pub const BOTTOM: Self = Self(0b0100);
    /// Above `max.y`.
    pub const TOP: Self = Self(0b1000);

    /// Region code of `p` relative to `rect`. The boundary counts as inside.
    #[must_use]
    pub fn of(p: Point, rect: &Rect) -> Self {
        let mut code = Self::INSIDE;
        if p.x < rect.min.x {
            code = code | Self::LEFT;
        } else if p.x > rect.max.x {
            code = code | Self::RIGHT;
        }
        if p.y < rect.min.y {
            code = code | Self::BOTTOM;
        } else if p.y > rect.max.y {
            code = code | Self::TOP;
        }
        code
    }

    /// True when no bit is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for OutCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for OutCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Rectangle clipper tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectClipConfig {
    /// Pieces deeper than this are accepted as they are.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Pieces smaller than this on both axes are accepted as points.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_max_depth() -> u32 {
    10
}
fn default_tolerance() -> f64 {
    0.5
}

impl Default for RectClipConfig {
    fn default() -> Self {
        Self { max_depth: default_max_depth(), tolerance: default_tolerance() }
    }
}

impl RectClipConfig {
    /// Set the depth ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the point-acceptance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject non-finite or non-positive tolerances.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConfig {
                key: "rect.tolerance",
                message: format!("must be a positive finite number, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}

/// Clip a segment against an axis-aligned rectangle.
///
/// Each piece is accepted when both outcodes are zero, rejected when they
/// share a bit, accepted as a point when smaller than the tolerance on both
/// axes, accepted as-is past the depth ceiling, and otherwise bisected.
/// Boundary ambiguity is resolved by acceptance, so results may overshoot the
/// window by up to the tolerance.
#[must_use]
pub fn clip_rect(segment: Segment, rect: &Rect, config: &RectClipConfig) -> Vec<Segment> {
    let mut ceiling_hits = 0_usize;

    let pieces = subdivide(segment, |piece, depth| {
        let code1 = OutCode::of(piece.p1, rect);
        let code2 = OutCode::of(piece.p2, rect);

        if (code1 | code2).is_inside() {
            return Decision::Accept;
        }
        if !(code1 & code2).is_inside() {
            return Decision::Reject;
        }
        if piece.dx().abs() < config.tolerance && piece.dy().abs() < config.tolerance {
            return Decision::Accept;
        }
        if depth > config.max_depth {
            ceiling_hits += 1;
            return Decision::Accept;
        }
        log::trace!("rect clip: split {piece:?} at depth {depth}");
        Decision::Split
    });

    if ceiling_hits > 0 {
        log::debug!("rect clip: {ceiling_hits} pieces accepted at depth ceiling {}", config.max_depth);
    }
    pieces
}
