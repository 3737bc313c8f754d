//! Error types for rasterization and clipping operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-clip operations.
///
/// Every variant is a permanent failure: the engine is a set of deterministic
/// pure computations, so retrying the same call yields the same error.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate was NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X value.
        x: f64,
        /// Y value.
        y: f64,
    },

    /// A coordinate rounds to a pixel beyond the supported raster extent.
    #[error("Coordinate ({x}, {y}) outside raster range ±{limit}")]
    CoordinateOutOfRange {
        /// X value.
        x: f64,
        /// Y value.
        y: f64,
        /// Largest supported pixel magnitude (exclusive).
        limit: i32,
    },

    /// A zero-length segment was given to an algorithm that needs at least one step.
    #[error("Degenerate zero-length segment passed to {algorithm}")]
    DegenerateSegment {
        /// Name of the algorithm that rejected the segment.
        algorithm: &'static str,
    },

    /// The primitive does not match the algorithm (e.g. a circle passed to Bresenham line).
    #[error("Algorithm {algorithm} expects a {expected} primitive")]
    PrimitiveMismatch {
        /// Name of the selected algorithm.
        algorithm: &'static str,
        /// Kind of primitive the algorithm accepts.
        expected: &'static str,
    },

    /// Polygon with fewer than three vertices.
    #[error("Polygon needs at least 3 vertices, got {vertices}")]
    PolygonTooSmall {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Two consecutive polygon vertices coincide.
    #[error("Polygon vertex {index} duplicates its predecessor")]
    DuplicateVertex {
        /// Index of the duplicated vertex.
        index: usize,
    },

    /// Rectangle whose minimum corner exceeds its maximum corner.
    #[error("Invalid rectangle: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidRect {
        /// Minimum x.
        min_x: f64,
        /// Minimum y.
        min_y: f64,
        /// Maximum x.
        max_x: f64,
        /// Maximum y.
        max_y: f64,
    },

    /// Algorithm name not recognised.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Geometry file syntax error.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Source line number (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Geometry file ended before all expected data lines were read.
    #[error("Missing data: expected {expected} data lines, found {found}")]
    MissingData {
        /// Number of significant lines the header promised.
        expected: usize,
        /// Number of significant lines actually present.
        found: usize,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfig {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Why the value is invalid.
        message: String,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
