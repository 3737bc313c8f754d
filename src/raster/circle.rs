//! Midpoint (Bresenham) circle.

use super::round_half_up;
use crate::geometry::{Pixel, Point};

/// Rasterize a circle outline with the integer midpoint algorithm.
///
/// One octant is walked from `(0, r)` with decision variable `d = 3 - 2r`;
/// every step emits the 8 symmetric points in the fixed order
/// `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
/// Points on the axes and diagonals appear more than once. A radius of zero
/// yields the single center pixel.
///
/// The center is rounded to the nearest pixel.
#[must_use]
pub fn bresenham_circle(center: Point, radius: u32) -> Vec<Pixel> {
    let cx = i64::from(round_half_up(center.x));
    let cy = i64::from(round_half_up(center.y));

    if radius == 0 {
        return vec![Pixel::new(cx as i32, cy as i32)];
    }

    let mut x: i64 = 0;
    let mut y = i64::from(radius);
    let mut d = 3 - 2 * y;

    // Octant length is about r / sqrt(2) steps, 8 points each.
    let mut pixels = Vec::with_capacity(radius as usize * 6 + 8);
    let mut plot = |px: i64, py: i64| pixels.push(Pixel::new((cx + px) as i32, (cy + py) as i32));

    while y >= x {
        plot(x, y);
        plot(-x, y);
        plot(x, -y);
        plot(-x, -y);
        plot(y, x);
        plot(-y, x);
        plot(y, -x);
        plot(-y, -x);

        if d > 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;
    }

    pixels
}
