//! Glyph atlas packing
//!
//! Glyph coverage images are packed left to right into shelves, a new
//!   shelf starting below the tallest glyph of the previous one. Glyphs
//!   are separated by one pixel of padding so sampling past a glyph's edge
//!   reads zero coverage.

use log::debug;

use crate::color::premultiply_coverage;
use crate::load::LoadError;
use crate::text::CodepointRange;
use crate::text::Font;
use crate::text::PackedChar;

/// Gap between glyphs and shelves
const PADDING: usize = 1;

/// Coverage of a single rasterized glyph
#[derive(Debug,Default,Clone,PartialEq)]
pub struct GlyphImage {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// One byte per pixel, top row first
    pub coverage: Vec<u8>,
    /// Distance from the pen to the left edge
    pub left: i32,
    /// Distance from the baseline up to the top edge
    pub top: i32,
    /// Horizontal pen advance
    pub advance: f32,
}

impl GlyphImage {
    /// Glyph without pixels that only moves the pen, e.g. a space
    pub fn blank(advance: f32) -> Self {
        Self { advance, ..Self::default() }
    }
}

/// Builds a Font one glyph at a time
#[derive(Debug,Clone)]
pub struct AtlasBuilder {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
    range: CodepointRange,
    glyphs: Vec<PackedChar>,
    x: usize,
    y: usize,
    shelf: usize,
}

impl AtlasBuilder {
    /// Empty atlas of `width` x `height` for the codepoints in `range`
    pub fn new(width: usize, height: usize, range: CodepointRange) -> Result<Self, LoadError> {
        if range.is_empty() {
            return Err(LoadError::EmptyRange { min: range.min, max: range.max });
        }
        Ok(Self {
            width, height, range,
            coverage: vec![0u8; width * height],
            glyphs: Vec::with_capacity(range.len()),
            x: 0, y: 0, shelf: 0,
        })
    }
    /// Codepoint the next added glyph is for
    pub fn next_codepoint(&self) -> Option<u32> {
        if self.glyphs.len() < self.range.len() {
            Some(self.range.min + self.glyphs.len() as u32)
        } else {
            None
        }
    }
    /// Pack the next glyph of the range
    pub fn add(&mut self, glyph: &GlyphImage) -> Result<PackedChar, LoadError> {
        let codepoint = match self.next_codepoint() {
            Some(c) => c,
            None => return Err(LoadError::GlyphCount { expected: self.range.len(),
                                                       got: self.glyphs.len() + 1 }),
        };
        let (w, h) = (glyph.width, glyph.height);
        if glyph.coverage.len() != w * h {
            return Err(LoadError::PixelData { expected: w * h, got: glyph.coverage.len() });
        }
        if w > 0 && self.x + w > self.width {
            self.x = 0;
            self.y += self.shelf + PADDING;
            self.shelf = 0;
        }
        if self.x + w > self.width || self.y + h > self.height {
            return Err(LoadError::AtlasFull { width: self.width, height: self.height, codepoint });
        }
        for row in 0 .. h {
            let dst = (self.y + row) * self.width + self.x;
            self.coverage[dst .. dst + w].copy_from_slice(&glyph.coverage[row * w .. (row + 1) * w]);
        }
        let left = glyph.left as f32;
        let top = -glyph.top as f32;
        let pc = PackedChar {
            x0: self.x,
            y0: self.y,
            x1: self.x + w,
            y1: self.y + h,
            xoff: left,
            yoff: top,
            xoff2: left + w as f32,
            yoff2: top + h as f32,
            xadvance: glyph.advance,
        };
        if w > 0 {
            self.x += w + PADDING;
            self.shelf = self.shelf.max(h);
        }
        self.glyphs.push(pc);
        Ok(pc)
    }
    /// Premultiply the coverage and produce the Font
    pub fn finish(self, size_pt: f32) -> Result<Font, LoadError> {
        let used = if self.x > 0 { self.y + self.shelf } else { self.y };
        debug!("atlas {}x{}: {} glyphs, {} rows used", self.width, self.height, self.glyphs.len(), used);
        let coverage = self.coverage.into_iter().map(premultiply_coverage).collect();
        Font::new(coverage, self.width, self.height, self.range, self.glyphs, size_pt)
    }
}
