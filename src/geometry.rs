//! Geometric value types consumed and produced by the engine.
//!
//! All types are small, immutable-by-convention values created per call.
//! Constructors that can violate an invariant return [`Result`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point with real-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reject NaN and infinite coordinates.
    pub fn ensure_finite(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFiniteCoordinate { x: self.x, y: self.y })
        }
    }

    /// Midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Squared euclidean distance to another point.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Signed area of the parallelogram spanned by `a->b` and `a->p`.
///
/// Positive when `p` lies to the left of the directed edge `a->b`.
#[inline]
#[must_use]
pub fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// An ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub p1: Point,
    /// Second endpoint.
    pub p2: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Create a segment from raw coordinates.
    #[must_use]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Reject segments with a non-finite endpoint.
    pub fn ensure_finite(self) -> Result<Self> {
        self.p1.ensure_finite()?;
        self.p2.ensure_finite()?;
        Ok(self)
    }

    /// Signed extent along x.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    /// Signed extent along y.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// Squared length.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.p1.distance_sq(self.p2)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.p1.midpoint(self.p2)
    }

    /// True if |dy| > |dx|.
    #[must_use]
    pub fn is_steep(&self) -> bool {
        self.dy().abs() > self.dx().abs()
    }
}

/// An axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectCorners")]
pub struct Rect {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle, checking `min <= max` on both axes.
    pub fn new(min: Point, max: Point) -> Result<Self> {
        min.ensure_finite()?;
        max.ensure_finite()?;
        if min.x > max.x || min.y > max.y {
            return Err(Error::InvalidRect {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Create a rectangle from any two opposite corners.
    ///
    /// The minimum and maximum are derived component-wise, so the order of
    /// the corners does not matter.
    pub fn from_corners(a: Point, b: Point) -> Result<Self> {
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Check if a point is inside the rectangle (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Unchecked wire form of [`Rect`].
#[derive(Deserialize)]
struct RectCorners {
    min: Point,
    max: Point,
}

impl TryFrom<RectCorners> for Rect {
    type Error = Error;

    fn try_from(corners: RectCorners) -> Result<Self> {
        Self::new(corners.min, corners.max)
    }
}

/// A convex polygon with at least three vertices, in either winding order.
///
/// Edges run between consecutive vertices plus the closing edge from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Fails with fewer than three vertices, a non-finite vertex, or two
    /// adjacent vertices (including last/first) that coincide.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::PolygonTooSmall { vertices: vertices.len() });
        }
        for (index, vertex) in vertices.iter().enumerate() {
            vertex.ensure_finite()?;
            let prev = vertices[(index + vertices.len() - 1) % vertices.len()];
            if prev == *vertex {
                return Err(Error::DuplicateVertex { index });
            }
        }
        Ok(Self { vertices })
    }

    /// Regular polygon inscribed in a window.
    ///
    /// The vertices lie on an ellipse around the window center with radii
    /// `width / 2.5` and `height / 2.5`; the first vertex points toward -y.
    pub fn inscribed(window: &Rect, sides: usize) -> Result<Self> {
        let center = window.center();
        let rx = window.width() / 2.5;
        let ry = window.height() / 2.5;

        let vertices = (0..sides)
            .map(|i| {
                let angle = (i as f64 * 2.0 * PI) / sides as f64 - PI / 2.0;
                Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
            })
            .collect();

        Self::new(vertices)
    }

    /// The polygon vertices in input order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a valid polygon has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in vertex order, ending with the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vertex average, used as the interior reference point.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Point::new(sx / n, sy / n)
    }

    /// Winding-agnostic inside test for convex polygons.
    ///
    /// A point is inside unless it lies strictly left of one edge and strictly
    /// right of another. Points on an edge count as inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let mut positive = false;
        let mut negative = false;

        for (a, b) in self.edges() {
            let cp = cross(a, b, point);
            if cp > 0.0 {
                positive = true;
            }
            if cp < 0.0 {
                negative = true;
            }
            if positive && negative {
                return false;
            }
        }
        true
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// A discrete pixel with a coverage (alpha) value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Coverage; 1.0 unless produced by an anti-aliasing algorithm.
    pub coverage: f64,
}

impl Pixel {
    /// Fully covered pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, coverage: 1.0 }
    }

    /// Pixel with an explicit coverage value.
    #[must_use]
    pub const fn with_coverage(x: i32, y: i32, coverage: f64) -> Self {
        Self { x, y, coverage }
    }

    /// Integer position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
