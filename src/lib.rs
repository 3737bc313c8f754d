//! # Raster-Clip
//!
//! Discrete-geometry engine: line and circle rasterization plus segment
//! clipping against rectangles and convex polygons.
//!
//! Both halves are pure functions over small value types. A caller picks an
//! algorithm, supplies geometry, and receives a fully materialized result;
//! drawing that result is left to the caller.
//!
//! ## Features
//!
//! - **Six rasterizers**: stepwise, DDA, Bresenham line, Bresenham circle,
//!   Wu anti-aliased line, Castle-Pitway
//! - **Two clippers**: midpoint subdivision against a rectangle (outcodes) or a
//!   convex polygon (inside test), sharing one explicit work stack
//! - **Typed errors**: non-finite input and degenerate primitives are rejected
//!   before dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_clip::prelude::*;
//!
//! let line = Primitive::Line(Segment::from_coords(0.0, 0.0, 5.0, 2.0));
//! let pixels = rasterize(Algorithm::BresenhamLine, &line, &RasterOptions::default())?;
//! assert_eq!(pixels.len(), 6);
//!
//! let window = Rect::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0))?;
//! let visible = clip(Segment::from_coords(-10.0, 0.0, 10.0, 0.0), &Boundary::Rect(window))?;
//! assert_eq!(visible.len(), 1);
//! # Ok::<(), raster_clip::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: run `rasterize_all` / `clip_all` on the rayon pool
//! - `cli`: build the `rastclip` binary (default)
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Castle, C. M. A., & Pitteway, M. L. V. (1987). Structural encoding of best-fit lines.
//! - Sproull, R. F., & Sutherland, I. E. (1968). Midpoint subdivision clipping.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric value types (points, segments, rectangles, polygons, pixels).
pub mod geometry;

/// Rasterization algorithms.
pub mod raster;

/// Segment clipping by midpoint subdivision.
pub mod clip;

// ============================================================================
// Supporting Modules
// ============================================================================

/// YAML configuration of tolerance knobs.
pub mod config;

/// Geometry file parser.
pub mod parse;

/// Text rendering of pixel lists.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-clip operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use raster_clip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip, clip_all, clip_with, Boundary, ClipConfig};
    pub use crate::config::EngineConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Pixel, Point, Polygon, Rect, Segment};
    pub use crate::parse::GeometryFile;
    pub use crate::raster::{rasterize, rasterize_all, Algorithm, Primitive, RasterOptions};
}
