//! Xiaolin Wu's anti-aliased line.

use super::round_half_up;
use crate::geometry::{Pixel, Segment};

/// Rasterize an anti-aliased line using Wu's algorithm.
///
/// Two adjacent pixels are emitted per step along the major axis, their
/// coverages split by the fractional part of the interpolated minor
/// coordinate so that each interior pair sums to 1. Both endpoints are
/// weighted by their horizontal gap before the interior loop runs.
///
/// Steep lines are processed with x and y exchanged and swapped back on
/// emission. Endpoint order does not matter.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
#[must_use]
pub fn wu_line(segment: Segment) -> Vec<Pixel> {
    let steep = segment.is_steep();
    let Segment { p1, p2 } = segment;

    let (x0, y0, x1, y1) = if steep { (p1.y, p1.x, p2.y, p2.x) } else { (p1.x, p1.y, p2.x, p2.y) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut pixels = Vec::with_capacity(2 * (dx as usize + 2));
    let mut plot = |x: i32, y: i32, coverage: f64| {
        let pixel = if steep {
            Pixel::with_coverage(y, x, coverage)
        } else {
            Pixel::with_coverage(x, y, coverage)
        };
        pixels.push(pixel);
    };

    // First endpoint
    let xpxl1 = round_half_up(x0);
    let yend = y0 + gradient * (f64::from(xpxl1) - x0);
    let xgap = rfpart(x0 + 0.5);
    let ypxl1 = ipart(yend);
    plot(xpxl1, ypxl1, rfpart(yend) * xgap);
    plot(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let xpxl2 = round_half_up(x1);
    let yend = y1 + gradient * (f64::from(xpxl2) - x1);
    let xgap = fpart(x1 + 0.5);
    let ypxl2 = ipart(yend);
    plot(xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    // Interior columns
    for x in (xpxl1 + 1)..xpxl2 {
        let y = ipart(intery);
        plot(x, y, rfpart(intery));
        plot(x, y + 1, fpart(intery));
        intery += gradient;
    }

    pixels
}

/// Integer part (floor).
#[inline]
fn ipart(x: f64) -> i32 {
    x.floor() as i32
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
