//! Packed monochrome frame buffer
//!
//! The SSD1306 stores pixels in *pages*: each byte covers one column and
//! eight vertically stacked rows, least significant bit on top. A buffer of
//! `W x H` pixels therefore holds `W * ceil(H / 8)` bytes laid out page by page:
//!
//! ```text
//! byte index = x + (y / 8) * W
//! bit mask   = 1 << (y % 8)
//! ```
//!
//! Every operation that takes coordinates ignores pixels outside
//! `[0, W) x [0, H)`. This clipping is what makes it safe to draw shapes that
//! hang off the edge of the canvas.
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::{Color, PixelBuffer};
//!
//! let mut buffer = match PixelBuffer::new(8, 16, [0u8; 16]) {
//!     Ok(buffer) => buffer,
//!     Err(_) => return,
//! };
//!
//! buffer.set(3, 9);
//! assert!(buffer.get(3, 9));
//! // Column 3 of page 1, bit 1
//! assert_eq!(buffer.as_bytes()[3 + 8], 0b0000_0010);
//!
//! // Off-canvas writes are dropped
//! buffer.set(-1, 100);
//! assert!(!buffer.get(-1, 100));
//!
//! buffer.fill(Color::On);
//! assert!(buffer.as_bytes().iter().all(|&b| b == 0xFF));
//! ```

use crate::color::Color;
use crate::error::BufferTooSmall;

/// Monochrome pixel buffer in the controller's vertical page layout
///
/// Generic over the backing storage so it can live in a static array, a
/// borrowed slice or (with the `alloc` feature) a heap vector. Read-only
/// storage such as `&[u8]` is enough for a blit source.
#[derive(Clone, Debug)]
pub struct PixelBuffer<B> {
    width: u16,
    height: u16,
    storage: B,
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]>,
{
    /// Wrap storage holding a `width x height` image
    ///
    /// Storage longer than required is accepted; only the leading
    /// [`required_len`](Self::required_len) bytes are used.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooSmall`] if the storage cannot hold every page.
    pub fn new(width: u16, height: u16, storage: B) -> Result<Self, BufferTooSmall> {
        let required = Self::required_len(width, height);
        let provided = storage.as_ref().len();
        if provided < required {
            return Err(BufferTooSmall { required, provided });
        }
        Ok(Self {
            width,
            height,
            storage,
        })
    }

    /// Bytes needed for a `width x height` image
    pub fn required_len(width: u16, height: u16) -> usize {
        width as usize * height.div_ceil(8) as usize
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height.div_ceil(8)
    }

    /// Packed pixel bytes, page by page
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.as_ref()[..Self::required_len(self.width, self.height)]
    }

    /// Release the backing storage
    pub fn into_inner(self) -> B {
        self.storage
    }

    /// Whether the pixel at (x, y) is lit
    ///
    /// Returns `false` for coordinates outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(index, mask)| self.storage.as_ref()[index] & mask != 0)
    }

    /// Color of the pixel at (x, y), [`Color::Off`] outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        Color::from(self.get(x, y))
    }

    /// Byte index and bit mask of an on-canvas pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = x + (y / 8) * self.width as usize;
        let mask = 1 << (y % 8);
        Some((index, mask))
    }
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Light the pixel at (x, y)
    pub fn set(&mut self, x: i32, y: i32) {
        self.set_pixel(x, y, Color::On);
    }

    /// Darken the pixel at (x, y)
    pub fn clear(&mut self, x: i32, y: i32) {
        self.set_pixel(x, y, Color::Off);
    }

    /// Write a pixel; coordinates outside the buffer are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let byte = &mut self.storage.as_mut()[index];
        match color {
            Color::On => *byte |= mask,
            Color::Off => *byte &= !mask,
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let len = Self::required_len(self.width, self.height);
        self.storage.as_mut()[..len].fill(color.fill_byte());
    }

    /// Mutable access to the packed pixel bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = Self::required_len(self.width, self.height);
        &mut self.storage.as_mut()[..len]
    }

    /// Copy `src` into this buffer with its top-left corner at (dx, dy)
    ///
    /// Both lit and dark source pixels are written; the parts of `src` that
    /// land outside this buffer are dropped. When `dy` is a multiple of 8 the
    /// copy moves whole page bytes.
    pub fn blit<S>(&mut self, src: &PixelBuffer<S>, dx: i32, dy: i32)
    where
        S: AsRef<[u8]>,
    {
        if dy.rem_euclid(8) == 0 && src.height % 8 == 0 {
            self.blit_pages(src, dx, dy.div_euclid(8));
            return;
        }
        for sy in 0..i32::from(src.height) {
            for sx in 0..i32::from(src.width) {
                self.set_pixel(dx.saturating_add(sx), dy.saturating_add(sy), src.pixel(sx, sy));
            }
        }
    }

    /// Page-aligned blit: copies column bytes directly
    fn blit_pages<S>(&mut self, src: &PixelBuffer<S>, dx: i32, dpage: i32)
    where
        S: AsRef<[u8]>,
    {
        let (dst_w, dst_pages) = (i32::from(self.width), i32::from(self.pages()));
        let (src_w, src_pages) = (i32::from(src.width), i32::from(src.pages()));
        // Destination pages may extend past the last row when height % 8 != 0;
        // the padding bits are never read back.
        for sp in 0..src_pages {
            let page = dpage.saturating_add(sp);
            if page < 0 || page >= dst_pages {
                continue;
            }
            for sx in 0..src_w {
                let x = dx.saturating_add(sx);
                if x < 0 || x >= dst_w {
                    continue;
                }
                let byte = src.as_bytes()[(sx + sp * src_w) as usize];
                self.storage.as_mut()[(x + page * dst_w) as usize] = byte;
            }
        }
    }

    /// Clear the buffer, then blit `image` at (dx, dy)
    ///
    /// Used to replace the whole screen with a prepared image.
    pub fn replace_with<S>(&mut self, image: &PixelBuffer<S>, dx: i32, dy: i32)
    where
        S: AsRef<[u8]>,
    {
        self.fill(Color::Off);
        self.blit(image, dx, dy);
    }
}

#[cfg(feature = "alloc")]
impl PixelBuffer<alloc::vec::Vec<u8>> {
    /// Allocate a cleared `width x height` buffer on the heap
    pub fn allocate(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            storage: alloc::vec![0u8; Self::required_len(width, height)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: u16, height: u16) -> PixelBuffer<[u8; 1024]> {
        PixelBuffer::new(width, height, [0u8; 1024]).unwrap()
    }

    #[test]
    fn test_required_len_rounds_pages_up() {
        assert_eq!(PixelBuffer::<&[u8]>::required_len(128, 64), 1024);
        assert_eq!(PixelBuffer::<&[u8]>::required_len(128, 32), 512);
        assert_eq!(PixelBuffer::<&[u8]>::required_len(10, 9), 20);
    }

    #[test]
    fn test_new_rejects_short_storage() {
        let result = PixelBuffer::new(128, 32, [0u8; 511]);
        assert_eq!(
            result.err(),
            Some(BufferTooSmall {
                required: 512,
                provided: 511
            })
        );
    }

    #[test]
    fn test_address_mapping() {
        let mut buf = buffer(128, 32);
        buf.set(5, 0);
        buf.set(5, 7);
        buf.set(6, 8);
        buf.set(127, 31);
        let bytes = buf.as_bytes();
        assert_eq!(bytes[5], 0b1000_0001);
        assert_eq!(bytes[6 + 128], 0b0000_0001);
        assert_eq!(bytes[127 + 3 * 128], 0b1000_0000);
    }

    #[test]
    fn test_set_then_get_and_clear_then_get() {
        let mut buf = buffer(64, 48);
        buf.set(17, 33);
        assert!(buf.get(17, 33));
        buf.clear(17, 33);
        assert!(!buf.get(17, 33));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut buf = buffer(128, 32);
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 32), (i32::MAX, i32::MIN)] {
            buf.set(x, y);
            assert!(!buf.get(x, y));
        }
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        // Storage beyond the image is never touched either
        assert!(buf.into_inner()[512..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill() {
        let mut buf = buffer(128, 32);
        buf.fill(Color::On);
        assert!(buf.as_bytes().iter().all(|&b| b == 0xFF));
        assert!(buf.get(127, 31));
        buf.fill(Color::Off);
        assert!(buf.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_as_bytes_mut_edits_pixels() {
        let mut buf = PixelBuffer::new(8, 16, [0u8; 20]).unwrap();
        let bytes = buf.as_bytes_mut();
        assert_eq!(bytes.len(), PixelBuffer::<&[u8]>::required_len(8, 16));
        bytes[3 + 8] = 0b10;
        assert!(buf.get(3, 9));
        assert!(!buf.get(3, 8));
        buf.set(0, 0);
        assert_eq!(buf.as_bytes_mut()[0], 0b1);
        assert!(buf.into_inner()[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blit_at_coordinate_limits() {
        let src = PixelBuffer::new(4, 8, [0xFFu8; 4]).unwrap();
        let mut dst = buffer(8, 16);
        dst.blit(&src, i32::MAX - 1, 0);
        dst.blit(&src, 0, i32::MAX - 7);
        dst.blit(&src, i32::MIN, i32::MIN);
        dst.blit(&src, i32::MAX - 1, 3);
        assert!(dst.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_partial_last_page() {
        let mut buf = PixelBuffer::new(4, 10, [0u8; 8]).unwrap();
        buf.set(2, 9);
        assert_eq!(buf.as_bytes()[2 + 4], 0b0000_0010);
        buf.set(2, 10);
        assert_eq!(buf.as_bytes()[2 + 4], 0b0000_0010);
    }

    #[test]
    fn test_blit_page_aligned_copies_bytes() {
        let image = [0xAAu8, 0x55, 0xFF, 0x01];
        let src = PixelBuffer::new(2, 16, &image[..]).unwrap();
        let mut dst = buffer(8, 16);
        dst.blit(&src, 3, 0);
        let bytes = dst.as_bytes();
        assert_eq!(bytes[3], 0xAA);
        assert_eq!(bytes[4], 0x55);
        assert_eq!(bytes[3 + 8], 0xFF);
        assert_eq!(bytes[4 + 8], 0x01);
        assert_eq!(bytes[2], 0);
        assert_eq!(bytes[5], 0);
    }

    #[test]
    fn test_blit_unaligned_matches_pixels() {
        let mut src = PixelBuffer::new(3, 3, [0u8; 3]).unwrap();
        src.set(0, 0);
        src.set(2, 2);
        let mut dst = buffer(16, 16);
        dst.fill(Color::On);
        dst.blit(&src, 5, 6);
        assert!(dst.get(5, 6));
        assert!(!dst.get(6, 6));
        assert!(!dst.get(5, 7));
        assert!(dst.get(7, 8));
        assert!(dst.get(4, 6));
        assert!(dst.get(8, 8));
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let src = PixelBuffer::new(4, 8, [0xFFu8; 4]).unwrap();
        let mut dst = buffer(8, 16);
        dst.blit(&src, -2, 8);
        dst.blit(&src, 6, -8);
        let bytes = dst.as_bytes();
        assert_eq!(&bytes[8..10], &[0xFF, 0xFF]);
        assert_eq!(bytes[10], 0);
        assert!(bytes[..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_replace_with_clears_first() {
        let src = PixelBuffer::new(2, 8, [0x0Fu8; 2]).unwrap();
        let mut dst = buffer(8, 8);
        dst.fill(Color::On);
        dst.replace_with(&src, 0, 0);
        assert_eq!(&dst.as_bytes()[..8], &[0x0F, 0x0F, 0, 0, 0, 0, 0, 0]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_allocate_is_cleared() {
        let buf = PixelBuffer::allocate(72, 40);
        assert_eq!(buf.as_bytes().len(), 72 * 5);
        assert!(!buf.get(0, 0));
    }
}
