//! Glyph quads and text
//!
//! A [Font] is a single channel coverage atlas plus one [PackedChar] per
//!   codepoint of a contiguous [CodepointRange]. Atlas rows run top to
//!   bottom; the pen works in the same frame as the color buffer where y
//!   increases upwards, so glyph rows are read flipped while blitting.
//!
//! [Font]: struct.Font.html
//! [PackedChar]: struct.PackedChar.html
//! [CodepointRange]: struct.CodepointRange.html

use log::warn;

use crate::base::RenderingBase;
use crate::color::Color;
use crate::debug::DebugSink;
use crate::load::LoadError;
use crate::math::Vec2;

/// Inclusive range of codepoints held by a Font
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct CodepointRange {
    pub min: u32,
    pub max: u32,
}

impl CodepointRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
    /// Printable ASCII, `' '` to `'~'`
    pub fn ascii() -> Self {
        Self::new(0x20, 0x7e)
    }
    /// Number of codepoints
    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, c: char) -> bool {
        let c = c as u32;
        c >= self.min && c <= self.max
    }
    /// Position of `c` within the range
    pub fn index(&self, c: char) -> Option<usize> {
        if self.contains(c) {
            Some((c as u32 - self.min) as usize)
        } else {
            None
        }
    }
    /// Every codepoint in order
    pub fn codepoints(&self) -> impl Iterator<Item = u32> {
        self.min ..= self.max
    }
}

/// Placement of one glyph in the atlas and relative to the pen
///
/// `x0,y0` .. `x1,y1` is the glyph's rectangle in the atlas, `x1,y1`
///   exclusive. Offsets are from the pen to the glyph's top left and
///   bottom right corners with y increasing downwards.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct PackedChar {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
    pub xoff: f32,
    pub yoff: f32,
    pub xoff2: f32,
    pub yoff2: f32,
    /// Horizontal pen advance
    pub xadvance: f32,
}

impl PackedChar {
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }
}

/// Screen quad `x0,y0` .. `x1,y1` and normalized atlas coordinates `s,t`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct AlignedQuad {
    pub x0: f32,
    pub y0: f32,
    pub s0: f32,
    pub t0: f32,
    pub x1: f32,
    pub y1: f32,
    pub s1: f32,
    pub t1: f32,
}

/// Coverage atlas and glyph metrics
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Font {
    coverage: Vec<u8>,
    glyphs: Vec<PackedChar>,
    /// Atlas width in pixels
    pub atlas_width: usize,
    /// Atlas height in pixels
    pub atlas_height: usize,
    /// Codepoints held
    pub range: CodepointRange,
    /// Size the glyphs were rasterized at
    pub size_pt: f32,
}

impl Font {
    /// Assemble a Font from a premultiplied coverage atlas
    ///
    /// `glyphs` holds one entry per codepoint of `range`, in order.
    pub fn new(coverage: Vec<u8>, atlas_width: usize, atlas_height: usize,
               range: CodepointRange, glyphs: Vec<PackedChar>, size_pt: f32) -> Result<Self, LoadError> {
        if range.is_empty() {
            return Err(LoadError::EmptyRange { min: range.min, max: range.max });
        }
        let expected = atlas_width * atlas_height;
        if coverage.len() != expected {
            return Err(LoadError::PixelData { expected, got: coverage.len() });
        }
        if glyphs.len() != range.len() {
            return Err(LoadError::GlyphCount { expected: range.len(), got: glyphs.len() });
        }
        Ok(Self { coverage, glyphs, atlas_width, atlas_height, range, size_pt })
    }
    /// No atlas or no glyphs
    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty() || self.glyphs.is_empty()
    }
    /// Atlas coverage at (`x`,`y`), 0 outside of the atlas
    pub fn coverage(&self, x: usize, y: usize) -> u8 {
        if x >= self.atlas_width || y >= self.atlas_height {
            return 0;
        }
        self.coverage[y * self.atlas_width + x]
    }
    /// Raw atlas, one byte per pixel, top row first
    pub fn atlas(&self) -> &[u8] {
        &self.coverage
    }
    /// Metrics for the glyph at `index` within the range
    pub fn packed_char(&self, index: usize) -> Option<&PackedChar> {
        self.glyphs.get(index)
    }
    /// Quad for the glyph at `index` drawn at `pen`, advancing the pen
    ///
    /// The quad's top left corner is snapped to whole pixels.
    pub fn packed_quad(&self, index: usize, pen: &mut Vec2) -> Option<AlignedQuad> {
        let b = self.glyphs.get(index)?;
        let ipw = 1.0 / self.atlas_width as f32;
        let iph = 1.0 / self.atlas_height as f32;
        let x = (pen.x + b.xoff + 0.5).floor();
        let y = (pen.y + b.yoff + 0.5).floor();
        let q = AlignedQuad {
            x0: x,
            y0: y,
            x1: x + b.xoff2 - b.xoff,
            y1: y + b.yoff2 - b.yoff,
            s0: b.x0 as f32 * ipw,
            t0: b.y0 as f32 * iph,
            s1: b.x1 as f32 * ipw,
            t1: b.y1 as f32 * iph,
        };
        pen.x += b.xadvance;
        Some(q)
    }
}

/// Draw `s` with the pen starting at `position`
///
/// At most `len` characters are drawn, `None` draws the whole string. A
///   character outside of the font's range stops the call. Returns the
///   number of characters drawn. `color` has straight alpha.
pub fn text<D: DebugSink>(ren: &mut RenderingBase<D>, font: &Font, position: Vec2, s: &str, color: Color, len: Option<usize>) -> usize {
    if font.is_empty() {
        return 0;
    }
    let color = color.premultiply();
    let len = len.unwrap_or(usize::MAX);
    let mut pen = position;
    let mut drawn = 0;
    for c in s.chars().take(len) {
        let index = match font.range.index(c) {
            Some(i) => i,
            None => {
                warn!("text: {:?} outside of codepoint range {:#x}..={:#x}, stopping after {} characters",
                      c, font.range.min, font.range.max, drawn);
                return drawn;
            }
        };
        let (pc, quad) = match (font.packed_char(index).copied(), font.packed_quad(index, &mut pen)) {
            (Some(pc), Some(quad)) => (pc, quad),
            _ => return drawn,
        };
        blit_glyph(ren, font, &pc, &quad, color);
        drawn += 1;
    }
    drawn
}

/// Copy one glyph's coverage, tinted by `color`, onto the buffer
fn blit_glyph<D: DebugSink>(ren: &mut RenderingBase<D>, font: &Font, pc: &PackedChar, quad: &AlignedQuad, color: Color) {
    let w = pc.width();
    let h = pc.height();
    let height_offset = pc.yoff + pc.yoff2;
    for y in 0 .. h {
        let src_y = pc.y0 + h - y;
        for x in 0 .. w {
            let cov = font.coverage(pc.x0 + x, src_y);
            if cov == 0 {
                continue;
            }
            let c = color.scale(f32::from(cov) / 255.0);
            let dx = (quad.x0 + x as f32).floor() as i32;
            let dy = (quad.y0 + y as f32 - height_offset).floor() as i32;
            ren.set_pixel(dx, dy, c);
        }
    }
}
