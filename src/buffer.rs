//! Rendering buffer

use crate::color::Rgb8;

use std::ops::Index;

/// Bytes per pixel of every buffer and bitmap
pub const BPP: usize = 4;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), one 32-bit pixel per
///   location laid out as `0x00RRGGBB` in little endian order, i.e. the
///   bytes B, G, R, unused. There is no alpha channel; the buffer is
///   opaque.
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel level data of Image
    pub(crate) data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the Image is allocated and set to black
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, bpp: BPP, data: vec![0u8; width * height * BPP]
        }
    }
    /// Size of underlying Rendering Buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Byte offset of pixel (`x`,`y`), None if outside of the buffer
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.bpp)
    }
    /// Read the pixel at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb8> {
        let i = self.offset(x, y)?;
        let p = u32::from_le_bytes([self.data[i], self.data[i+1], self.data[i+2], self.data[i+3]]);
        Some(Rgb8::new((p >> 16) as u8, (p >> 8) as u8, p as u8))
    }
    /// Write the pixel at (`x`,`y`)
    ///
    /// Locations outside of the buffer are ignored
    pub(crate) fn put(&mut self, x: usize, y: usize, c: Rgb8) {
        if let Some(i) = self.offset(x, y) {
            let p = u32::from(c.r) << 16 | u32::from(c.g) << 8 | u32::from(c.b);
            self.data[i .. i + BPP].copy_from_slice(&p.to_le_bytes());
        }
    }
    /// Set every pixel to `c`
    pub(crate) fn fill(&mut self, c: Rgb8) {
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                self.put(x, y, c);
            }
        }
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
