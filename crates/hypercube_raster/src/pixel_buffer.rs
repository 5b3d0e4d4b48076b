//! A 16-bit pixel surface
//!
//! Rows are `stride` pixels apart; only the first `width` pixels of each row
//! are visible. Checked accessors silently ignore out-of-range coordinates,
//! the unchecked writer leaves range checks to the caller.

use crate::color::PixelFormat;

/// Axis-aligned rectangle in pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Raw pixel memory with explicit geometry and format
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: u32,
    format: PixelFormat,
    pixels: Vec<u16>,
}

impl PixelBuffer {
    /// Create a zero-filled RGB565 buffer with rows packed back to back
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_stride(width, height, width)
    }

    /// Create a zero-filled RGB565 buffer whose rows are `stride` pixels apart
    ///
    /// # Panics
    /// Panics if `stride < width`.
    pub fn with_stride(width: u32, height: u32, stride: u32) -> Self {
        assert!(stride >= width, "stride {} smaller than width {}", stride, width);
        Self {
            width,
            height,
            stride,
            format: PixelFormat::Rgb565,
            pixels: vec![0; stride as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between rows, in pixels
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Pack a color in this buffer's pixel format
    #[inline]
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> u16 {
        self.format.map_rgb(r, g, b)
    }

    /// Full rectangle covering the visible area
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.stride as usize + x as usize
    }

    /// Write one pixel if it lies inside the buffer; returns whether it did
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u16) -> bool {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Write one pixel without a range check
    ///
    /// # Safety
    /// `(x, y)` must lie inside the buffer (`0 <= x < width`, `0 <= y < height`).
    #[inline]
    pub unsafe fn put_pixel_unchecked(&mut self, x: i32, y: i32, color: u16) {
        debug_assert!(self.in_bounds(x, y), "pixel ({}, {}) out of bounds", x, y);
        let idx = self.index(x, y);
        // SAFETY: the caller guarantees (x, y) is in bounds, so idx < stride * height
        unsafe {
            *self.pixels.get_unchecked_mut(idx) = color;
        }
    }

    /// Read one pixel, `None` outside the buffer
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Fill a rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, rect: Rect, color: u16) {
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.x as i64 + rect.w as i64).min(self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.stride as usize;
        for y in y0 as usize..y1 as usize {
            let row = y * stride;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Fill the whole visible area
    pub fn clear(&mut self, color: u16) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    /// Raw pixels, `stride * height` entries
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.pixels
    }

    /// Number of pixels holding `color` in the visible area
    pub fn count_color(&self, color: u16) -> usize {
        if self.stride == 0 {
            return 0;
        }
        self.pixels
            .chunks(self.stride as usize)
            .map(|row| row[..self.width as usize].iter().filter(|&&p| p == color).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.as_slice().len(), 12);
        assert!(buf.as_slice().iter().all(|&p| p == 0));
        assert_eq!(buf.stride(), 4);
        assert_eq!(buf.format(), PixelFormat::Rgb565);
    }

    #[test]
    fn test_put_and_read_pixel() {
        let mut buf = PixelBuffer::new(4, 3);
        assert!(buf.put_pixel(3, 2, 0xabcd));
        assert_eq!(buf.pixel(3, 2), Some(0xabcd));
        assert_eq!(buf.as_slice()[2 * 4 + 3], 0xabcd);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut buf = PixelBuffer::new(4, 3);
        assert!(!buf.put_pixel(-1, 0, 1));
        assert!(!buf.put_pixel(4, 0, 1));
        assert!(!buf.put_pixel(0, 3, 1));
        assert_eq!(buf.pixel(4, 0), None);
        assert_eq!(buf.count_color(1), 0);
    }

    #[test]
    fn test_unchecked_write() {
        let mut buf = PixelBuffer::new(4, 3);
        unsafe { buf.put_pixel_unchecked(1, 1, 7) };
        assert_eq!(buf.pixel(1, 1), Some(7));
    }

    #[test]
    fn test_stride_padding_untouched() {
        let mut buf = PixelBuffer::with_stride(3, 2, 5);
        buf.clear(9);
        assert_eq!(buf.count_color(9), 6);
        assert_eq!(buf.as_slice(), &[9u16, 9, 9, 0, 0, 9, 9, 9, 0, 0]);
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(Rect::new(-2, 2, 4, 10), 5);
        assert_eq!(buf.count_color(5), 4);
        assert_eq!(buf.pixel(0, 2), Some(5));
        assert_eq!(buf.pixel(1, 3), Some(5));
        assert_eq!(buf.pixel(2, 2), Some(0));
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(Rect::new(10, 10, 4, 4), 5);
        buf.fill_rect(Rect::new(0, 0, 0, 4), 5);
        assert_eq!(buf.count_color(5), 0);
    }

    #[test]
    #[should_panic]
    fn test_stride_smaller_than_width_panics() {
        PixelBuffer::with_stride(10, 1, 5);
    }
}
