//! Non-antialiased line algorithms.

use std::ops::RangeInclusive;

use super::round_half_up;
use crate::error::{Error, Result};
use crate::geometry::{Pixel, Segment};

// ============================================================================
// Stepwise (slope-intercept)
// ============================================================================

/// Slope-intercept rasterization, always stepping along x.
///
/// Emits one pixel per integer x in `[min(x1, x2), max(x1, x2)]` with
/// `y = round(k * x + b)`. A vertical segment, or one that spans no integer
/// column, yields the single pixel at `p1`. Steep segments are under-sampled
/// along y; use [`step_major_axis`] for the symmetric variant.
#[must_use]
pub fn step(segment: Segment) -> Vec<Pixel> {
    let Segment { p1, p2 } = segment;
    let dx = segment.dx();

    let Some(columns) = integer_span(p1.x, p2.x).filter(|_| dx != 0.0) else {
        return vec![Pixel::new(round_half_up(p1.x), round_half_up(p1.y))];
    };

    let k = segment.dy() / dx;
    let b = p1.y - k * p1.x;

    columns
        .map(|x| Pixel::new(x, round_half_up(k * f64::from(x) + b)))
        .collect()
}

/// Slope-intercept rasterization stepping along the dominant axis.
///
/// Identical to [`step`] unless `|dy| > |dx|`, in which case the roles of the
/// axes are exchanged: one pixel per integer y in `[min(y1, y2), max(y1, y2)]`
/// with `x = round(k * y + b)`.
#[must_use]
pub fn step_major_axis(segment: Segment) -> Vec<Pixel> {
    if !segment.is_steep() {
        return step(segment);
    }

    let Segment { p1, p2 } = segment;
    let Some(rows) = integer_span(p1.y, p2.y) else {
        return vec![Pixel::new(round_half_up(p1.x), round_half_up(p1.y))];
    };

    let k = segment.dx() / segment.dy();
    let b = p1.x - k * p1.y;

    rows.map(|y| Pixel::new(round_half_up(k * f64::from(y) + b), y))
        .collect()
}

/// Integers lying in the closed interval between `a` and `b`, if any.
fn integer_span(a: f64, b: f64) -> Option<RangeInclusive<i32>> {
    let first = a.min(b).ceil() as i32;
    let last = a.max(b).floor() as i32;
    (first <= last).then_some(first..=last)
}

// ============================================================================
// DDA
// ============================================================================

/// Digital differential analyzer.
///
/// Takes `steps = max(|dx|, |dy|)` increments of `(dx, dy) / steps` and
/// rounds every sample, producing `floor(steps) + 1` pixels.
///
/// # Errors
///
/// Returns [`Error::DegenerateSegment`] when both endpoints coincide.
pub fn dda(segment: Segment) -> Result<Vec<Pixel>> {
    let dx = segment.dx();
    let dy = segment.dy();
    let steps = dx.abs().max(dy.abs());

    if steps == 0.0 {
        return Err(Error::DegenerateSegment { algorithm: "dda" });
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;
    let count = steps.floor() as usize + 1;

    let mut x = segment.p1.x;
    let mut y = segment.p1.y;
    let mut pixels = Vec::with_capacity(count);

    for _ in 0..count {
        pixels.push(Pixel::new(round_half_up(x), round_half_up(y)));
        x += x_inc;
        y += y_inc;
    }

    Ok(pixels)
}

// ============================================================================
// Bresenham
// ============================================================================

/// Integer Bresenham line between the rounded endpoints.
///
/// Visits exactly `max(|dx|, |dy|) + 1` pixels from `p1` to `p2`, each
/// 8-connected to the previous one.
#[must_use]
pub fn bresenham_line(segment: Segment) -> Vec<Pixel> {
    let mut x = round_half_up(segment.p1.x);
    let mut y = round_half_up(segment.p1.y);
    let x1 = round_half_up(segment.p2.x);
    let y1 = round_half_up(segment.p2.y);

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        pixels.push(Pixel::new(x, y));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    pixels
}

// ============================================================================
// Castle-Pitway
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// Advance along the dominant axis only.
    Straight,
    /// Advance along both axes.
    Diagonal,
}

/// Castle-Pitway line built from a Euclidean step pattern.
///
/// The run `(a, b) = (max(|dx|, |dy|), min(|dx|, |dy|))` is reduced by
/// repeated subtraction. Each reduction prepends one move sequence to the
/// other; when the two counters meet at `g = gcd(a, b)` the pattern
/// `m2 ++ m1` is repeated `g` times. Axis-aligned and pure-diagonal runs are
/// stepped directly.
#[must_use]
pub fn castle_pitway(segment: Segment) -> Vec<Pixel> {
    let mut x = round_half_up(segment.p1.x);
    let mut y = round_half_up(segment.p1.y);
    let dx = round_half_up(segment.dx());
    let dy = round_half_up(segment.dy());

    let sign_x = dx.signum();
    let sign_y = dy.signum();

    let (a, b, swapped) = if dy.abs() > dx.abs() {
        (dy.abs(), dx.abs(), true)
    } else {
        (dx.abs(), dy.abs(), false)
    };

    let mut pixels = Vec::with_capacity(a as usize + 1);
    pixels.push(Pixel::new(x, y));

    let mut apply = |m: Move| {
        match (m, swapped) {
            (Move::Straight, false) => x += sign_x,
            (Move::Straight, true) => y += sign_y,
            (Move::Diagonal, _) => {
                x += sign_x;
                y += sign_y;
            }
        }
        pixels.push(Pixel::new(x, y));
    };

    if b == 0 {
        (0..a).for_each(|_| apply(Move::Straight));
        return pixels;
    }
    if a == b {
        (0..a).for_each(|_| apply(Move::Diagonal));
        return pixels;
    }

    let mut straight_count = a - b;
    let mut diagonal_count = b;
    let mut m1 = vec![Move::Straight];
    let mut m2 = vec![Move::Diagonal];

    while straight_count != diagonal_count {
        if straight_count > diagonal_count {
            straight_count -= diagonal_count;
            m2 = [m1.as_slice(), m2.as_slice()].concat();
        } else {
            diagonal_count -= straight_count;
            m1 = [m2.as_slice(), m1.as_slice()].concat();
        }
    }

    let pattern = [m2.as_slice(), m1.as_slice()].concat();
    for _ in 0..straight_count {
        pattern.iter().copied().for_each(&mut apply);
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pixels: &[Pixel]) -> Vec<(i32, i32)> {
        pixels.iter().map(Pixel::position).collect()
    }

    #[test]
    fn test_step_shallow() {
        let pixels = step(Segment::from_coords(0.0, 0.0, 5.0, 2.0));
        assert_eq!(coords(&pixels), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_step_vertical_single_pixel() {
        let pixels = step(Segment::from_coords(2.0, 1.0, 2.0, 9.0));
        assert_eq!(coords(&pixels), [(2, 1)]);
    }

    #[test]
    fn test_step_reversed_iterates_ascending() {
        let pixels = step(Segment::from_coords(4.0, 4.0, 0.0, 0.0));
        assert_eq!(coords(&pixels), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_step_steep_undersamples() {
        let pixels = step(Segment::from_coords(0.0, 0.0, 2.0, 8.0));
        assert_eq!(coords(&pixels), [(0, 0), (1, 4), (2, 8)]);
    }

    #[test]
    fn test_step_stays_inside_fractional_range() {
        let pixels = step(Segment::from_coords(0.4, 0.0, 2.6, 2.2));
        let xs: Vec<i32> = pixels.iter().map(|p| p.x).collect();
        assert_eq!(xs, [1, 2]);
    }

    #[test]
    fn test_step_no_integer_column_is_single_pixel() {
        let pixels = step(Segment::from_coords(0.2, 1.0, 0.7, 3.0));
        assert_eq!(coords(&pixels), [(0, 1)]);
    }

    #[test]
    fn test_step_major_axis_fractional_rows() {
        let pixels = step_major_axis(Segment::from_coords(0.0, 0.4, 1.0, 5.6));
        let ys: Vec<i32> = pixels.iter().map(|p| p.y).collect();
        assert_eq!(ys, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_step_major_axis_steep() {
        let pixels = step_major_axis(Segment::from_coords(0.0, 0.0, 2.0, 8.0));
        assert_eq!(pixels.len(), 9);
        assert_eq!(pixels[0].position(), (0, 0));
        assert_eq!(pixels[8].position(), (2, 8));
    }

    #[test]
    fn test_dda_shallow() {
        let pixels = dda(Segment::from_coords(0.0, 0.0, 5.0, 2.0)).unwrap();
        assert_eq!(coords(&pixels), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_dda_direction_follows_input() {
        let pixels = dda(Segment::from_coords(3.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(coords(&pixels), [(3, 0), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_bresenham_concrete() {
        let pixels = bresenham_line(Segment::from_coords(0.0, 0.0, 5.0, 2.0));
        assert_eq!(coords(&pixels), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
        assert!(pixels.iter().all(|p| p.coverage == 1.0));
    }

    #[test]
    fn test_bresenham_single_point() {
        let pixels = bresenham_line(Segment::from_coords(7.0, -3.0, 7.0, -3.0));
        assert_eq!(coords(&pixels), [(7, -3)]);
    }

    #[test]
    fn test_bresenham_steep_negative() {
        let pixels = bresenham_line(Segment::from_coords(0.0, 0.0, -2.0, -5.0));
        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels.last().unwrap().position(), (-2, -5));
    }

    #[test]
    fn test_castle_pitway_shallow() {
        let pixels = castle_pitway(Segment::from_coords(0.0, 0.0, 5.0, 2.0));
        assert_eq!(coords(&pixels), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_castle_pitway_steep_swaps_axes() {
        let pixels = castle_pitway(Segment::from_coords(0.0, 0.0, 2.0, 5.0));
        assert_eq!(coords(&pixels), [(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_castle_pitway_repeats_gcd_times() {
        // gcd(6, 4) = 2, so the 3-move pattern runs twice.
        let pixels = castle_pitway(Segment::from_coords(0.0, 0.0, 6.0, 4.0));
        assert_eq!(pixels.len(), 7);
        assert_eq!(pixels[3].position(), (3, 2));
        assert_eq!(pixels[6].position(), (6, 4));
    }

    #[test]
    fn test_castle_pitway_axis_aligned() {
        let pixels = castle_pitway(Segment::from_coords(0.0, 0.0, 0.0, -3.0));
        assert_eq!(coords(&pixels), [(0, 0), (0, -1), (0, -2), (0, -3)]);
    }

    #[test]
    fn test_castle_pitway_zero_length() {
        let pixels = castle_pitway(Segment::from_coords(1.0, 1.0, 1.0, 1.0));
        assert_eq!(coords(&pixels), [(1, 1)]);
    }
}
