//! Integer line rasterization (Bresenham)
//!
//! The dominant axis is the one with the strictly larger delta (ties go to
//! y). The path steps one pixel per iteration along it and moves the minor
//! axis whenever the doubled error term is non-negative, so everything stays
//! in integer arithmetic without division.
//!
//! Endpoints are ordered so the dominant axis is always walked upwards. That
//! makes the pixel set independent of the direction the line was given in.

use crate::PixelBuffer;

/// The pixels of a line, from one endpoint to the other (both inclusive)
#[derive(Clone, Debug)]
pub struct LinePath {
    x: i32,
    y: i32,
    x_end: i32,
    y_end: i32,
    /// Minor-axis step (-1, 0 or 1)
    minor_step: i32,
    /// Doubled absolute deltas
    ax: i64,
    ay: i64,
    /// Error term
    d: i64,
    x_dominant: bool,
    done: bool,
}

impl LinePath {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let x_dominant = (x2 as i64 - x1 as i64).abs() > (y2 as i64 - y1 as i64).abs();

        // Walk the dominant axis in the positive direction
        let (x1, y1, x2, y2) = if (x_dominant && x2 < x1) || (!x_dominant && y2 < y1) {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };

        let dx = x2 as i64 - x1 as i64;
        let dy = y2 as i64 - y1 as i64;
        let ax = dx.abs() << 1;
        let ay = dy.abs() << 1;

        let (minor_step, d) = if x_dominant {
            (dy.signum() as i32, ay - (ax >> 1))
        } else {
            (dx.signum() as i32, ax - (ay >> 1))
        };

        Self {
            x: x1,
            y: y1,
            x_end: x2,
            y_end: y2,
            minor_step,
            ax,
            ay,
            d,
            x_dominant,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else if self.x_dominant {
            (self.x_end as i64 - self.x as i64) as usize + 1
        } else {
            (self.y_end as i64 - self.y as i64) as usize + 1
        }
    }
}

impl Iterator for LinePath {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);

        if self.x_dominant {
            if self.x == self.x_end {
                self.done = true;
                return Some(current);
            }
            if self.d >= 0 {
                self.y += self.minor_step;
                self.d -= self.ax;
            }
            self.x += 1;
            self.d += self.ay;
        } else {
            if self.y == self.y_end {
                self.done = true;
                return Some(current);
            }
            if self.d >= 0 {
                self.x += self.minor_step;
                self.d -= self.ay;
            }
            self.y += 1;
            self.d += self.ax;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePath {}

impl std::iter::FusedIterator for LinePath {}

/// Draw a line into `buffer`, skipping pixels that fall outside it
pub fn draw_line(buffer: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: u16) {
    for (x, y) in LinePath::new(x1, y1, x2, y2) {
        buffer.put_pixel(x, y, color);
    }
}

/// Draw a line into `buffer` without per-pixel range checks
///
/// # Safety
/// Both endpoints must lie inside the buffer. Every pixel of the path lies
/// within the bounding box of its endpoints, so this covers the whole line.
pub unsafe fn draw_line_unchecked(
    buffer: &mut PixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: u16,
) {
    debug_assert!(buffer.in_bounds(x1, y1) && buffer.in_bounds(x2, y2));
    for (x, y) in LinePath::new(x1, y1, x2, y2) {
        // SAFETY: (x, y) is inside the endpoints' bounding box, which the
        // caller guarantees is inside the buffer
        unsafe { buffer.put_pixel_unchecked(x, y, color) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
        LinePath::new(x1, y1, x2, y2).collect()
    }

    #[test]
    fn test_single_point() {
        assert_eq!(path(5, 7, 5, 7), vec![(5, 7)]);
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(path(3, 1, 0, 1), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(path(2, 0, 2, 3), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_walks_y_upwards() {
        assert_eq!(path(0, 0, 3, -3), vec![(3, -3), (2, -2), (1, -1), (0, 0)]);
    }

    #[test]
    fn test_shallow_slope() {
        assert_eq!(path(0, 0, 4, 2), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_reversed_tie_break_is_symmetric() {
        let mut forward = path(0, 0, 2, 1);
        let mut backward = path(2, 1, 0, 0);
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_exact_size() {
        let p = LinePath::new(-4, 10, 6, 3);
        assert_eq!(p.len(), 11);
        assert_eq!(p.count(), 11);
    }

    #[test]
    fn test_draw_line_writes_color() {
        let mut buf = PixelBuffer::new(8, 8);
        draw_line(&mut buf, 0, 0, 7, 3, 0xf800);
        assert_eq!(buf.count_color(0xf800), 8);
        assert_eq!(buf.pixel(0, 0), Some(0xf800));
        assert_eq!(buf.pixel(7, 3), Some(0xf800));
    }

    #[test]
    fn test_draw_line_clips() {
        let mut buf = PixelBuffer::new(4, 4);
        draw_line(&mut buf, -3, 1, 10, 1, 1);
        assert_eq!(buf.count_color(1), 4);
    }

    #[test]
    fn test_draw_line_unchecked_matches_checked() {
        let mut a = PixelBuffer::new(16, 16);
        let mut b = PixelBuffer::new(16, 16);
        draw_line(&mut a, 1, 14, 13, 2, 3);
        unsafe { draw_line_unchecked(&mut b, 1, 14, 13, 2, 3) };
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
