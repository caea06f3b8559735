//! Bit-packed framebuffer for a 128x64 monochrome display
//!
//! The buffer mirrors the SSD1306 controller's native memory layout: eight
//! horizontal "pages" of 128 bytes, each page covering 8 pixel rows. Byte
//! `page * WIDTH + x` holds column `x` of that page, with bit 0 as the
//! topmost row. Keeping the host copy in controller order means a flush is
//! a straight per-page byte stream with no reshuffling.

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Total backing store size in bytes
pub const BUFFER_SIZE: usize = PAGES * WIDTH;

/// In-memory mirror of the display contents
///
/// Allocated once and mutated in place; it is never resized. All pixel
/// coordinates are tolerant: anything outside `[0, WIDTH) x [0, HEIGHT)`
/// is silently ignored, so callers do not need to pre-clip computed
/// positions.
pub struct Framebuffer {
    buf: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a zeroed (all pixels off) framebuffer
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Set or clear a single pixel
    ///
    /// Out-of-range coordinates are a no-op. Only the addressed bit is
    /// touched; the other seven rows sharing the byte keep their state.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return;
        }

        let index = (y as usize / 8) * WIDTH + x as usize;
        let mask = 1u8 << (y as usize % 8);

        if on {
            self.buf[index] |= mask;
        } else {
            self.buf[index] &= !mask;
        }
    }

    /// Read a single pixel
    ///
    /// Out-of-range coordinates read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return false;
        }

        let index = (y as usize / 8) * WIDTH + x as usize;
        self.buf[index] & (1 << (y as usize % 8)) != 0
    }

    /// Borrow one page (8 pixel rows) as a byte slice, in column order
    ///
    /// Out-of-range page numbers yield an empty slice.
    pub fn page(&self, page: usize) -> &[u8] {
        if page >= PAGES {
            return &[];
        }
        &self.buf[page * WIDTH..(page + 1) * WIDTH]
    }

    /// Borrow the whole packed buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_all_off() {
        let fb = Framebuffer::new();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_addressing_corners() {
        let mut fb = Framebuffer::new();

        // Top-left pixel: byte 0, bit 0
        fb.set_pixel(0, 0, true);
        assert_eq!(fb.as_bytes()[0], 0x01);

        // Bottom-right pixel: last byte, bit 7
        fb.set_pixel(127, 63, true);
        assert_eq!(fb.as_bytes()[BUFFER_SIZE - 1], 0x80);

        // Row 8 starts page 1
        fb.set_pixel(0, 8, true);
        assert_eq!(fb.as_bytes()[WIDTH], 0x01);
    }

    #[test]
    fn test_set_read_roundtrip_all_pixels() {
        let mut fb = Framebuffer::new();

        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                fb.set_pixel(x, y, true);
                assert!(fb.pixel(x, y));
                fb.set_pixel(x, y, false);
                assert!(!fb.pixel(x, y));
            }
        }

        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_touches_only_its_bit() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(10, 20, true);

        let mut on_count = 0;
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                if fb.pixel(x, y) {
                    on_count += 1;
                    assert_eq!((x, y), (10, 20));
                }
            }
        }
        assert_eq!(on_count, 1);

        // Clearing an already-off neighbor in the same byte leaves the set bit
        fb.set_pixel(10, 21, false);
        assert!(fb.pixel(10, 20));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(5, 5, true);
        let mut before = [0u8; BUFFER_SIZE];
        before.copy_from_slice(fb.as_bytes());

        for &(x, y) in &[
            (-1, 0),
            (0, -1),
            (WIDTH as i32, 0),
            (0, HEIGHT as i32),
            (i32::MIN, i32::MIN),
            (i32::MAX, 32),
        ] {
            fb.set_pixel(x, y, true);
            fb.set_pixel(x, y, false);
            assert!(!fb.pixel(x, y));
        }

        assert_eq!(fb.as_bytes(), &before[..]);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new();
        for i in 0..BUFFER_SIZE as i32 {
            fb.set_pixel(i % WIDTH as i32, i % HEIGHT as i32, true);
        }
        fb.clear();

        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                assert!(!fb.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_page_view() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 17, true); // page 2 (rows 16..24), bit 1

        let page = fb.page(2);
        assert_eq!(page.len(), WIDTH);
        assert_eq!(page[3], 0x02);
        assert!(fb.page(0).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let fb = Framebuffer::new();
        assert!(fb.page(PAGES).is_empty());
        assert!(fb.page(usize::MAX).is_empty());
    }

    /// Coordinates clustered around the display edges, with the occasional
    /// arbitrary value thrown in.
    fn coord() -> impl Strategy<Value = i32> {
        prop_oneof![4 => -16i32..144, 1 => any::<i32>()]
    }

    proptest! {
        #[test]
        fn prop_set_pixel_roundtrips_in_range_noop_outside(
            x in coord(),
            y in coord(),
            on: bool,
        ) {
            let mut fb = Framebuffer::new();
            fb.set_pixel(x, y, on);

            let in_range =
                (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y);
            if in_range {
                prop_assert_eq!(fb.pixel(x, y), on);
                fb.set_pixel(x, y, false);
            } else {
                prop_assert!(!fb.pixel(x, y));
            }

            // Either way the buffer ends up blank again
            prop_assert!(fb.as_bytes().iter().all(|&b| b == 0));
        }
    }
}
