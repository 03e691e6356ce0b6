//! Loading of bitmaps and fonts
//!
//! Files are read through a [FileSource] so callers decide where bytes
//!   come from; [FsSource] reads the local filesystem.
//!
//! [FileSource]: trait.FileSource.html
//! [FsSource]: struct.FsSource.html

use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::bitmap::Bitmap;

#[cfg(feature = "freetype")]
use crate::atlas::AtlasBuilder;
#[cfg(feature = "freetype")]
use crate::atlas::GlyphImage;
#[cfg(feature = "freetype")]
use crate::text::CodepointRange;
#[cfg(feature = "freetype")]
use crate::text::Font;

/// Errors from loading bitmaps and fonts
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file")]
    Io(#[from] io::Error),
    #[error("failed to decode image")]
    Image(#[from] image::ImageError),
    #[cfg(feature = "freetype")]
    #[error("failed to rasterize font")]
    FreeType(#[from] freetype::Error),
    /// The glyph for `codepoint` does not fit in the atlas
    #[error("atlas of {width}x{height} is full at codepoint {codepoint:#x}")]
    AtlasFull {
        width: usize,
        height: usize,
        codepoint: u32,
    },
    #[error("codepoint range {min:#x}..={max:#x} is empty")]
    EmptyRange {
        min: u32,
        max: u32,
    },
    /// Pixel data does not match the stated dimensions
    #[error("expected {expected} bytes of pixel data, got {got}")]
    PixelData {
        expected: usize,
        got: usize,
    },
    /// A texel has a color component larger than its alpha
    #[error("texel {index} is not premultiplied")]
    NotPremultiplied {
        index: usize,
    },
    #[error("expected {expected} glyphs, got {got}")]
    GlyphCount {
        expected: usize,
        got: usize,
    },
}

/// Where loaders read bytes from
pub trait FileSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from the local filesystem
#[derive(Debug,Default,Copy,Clone)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Decode an image into a premultiplied, bottom row first [Bitmap]
///
/// Any format enabled in the `image` crate is accepted.
///
/// [Bitmap]: ../bitmap/struct.Bitmap.html
pub fn load_bitmap<S: FileSource, P: AsRef<Path>>(source: &S, path: P) -> Result<Bitmap, LoadError> {
    let path = path.as_ref();
    let bytes = source.read(path)?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = img.dimensions();
    debug!("loaded bitmap {}: {}x{}", path.display(), w, h);
    Bitmap::from_rgba8(w as usize, h as usize, img.as_raw())
}

/// Rasterize the codepoints of `range` at `size_pt` into an atlas of
///   `atlas_width` x `atlas_height`
///
/// Glyphs FreeType cannot load are replaced by blank glyphs.
#[cfg(feature = "freetype")]
pub fn load_font<S: FileSource, P: AsRef<Path>>(source: &S, path: P,
                                                atlas_width: usize, atlas_height: usize,
                                                range: CodepointRange, size_pt: f32) -> Result<Font, LoadError> {
    use std::rc::Rc;
    use freetype::face::LoadFlag;
    use log::warn;

    let path = path.as_ref();
    let bytes = source.read(path)?;
    let mut atlas = AtlasBuilder::new(atlas_width, atlas_height, range)?;

    let lib = freetype::Library::init()?;
    let face = lib.new_memory_face(Rc::new(bytes), 0)?;
    face.set_char_size((size_pt * 64.0) as isize, 0, 72, 0)?;

    for cp in range.codepoints() {
        if let Err(err) = face.load_char(cp as usize, LoadFlag::RENDER) {
            warn!("{}: no glyph for {:#x}: {}", path.display(), cp, err);
            atlas.add(&GlyphImage::blank(0.0))?;
            continue;
        }
        let slot = face.glyph();
        let bm = slot.bitmap();
        let width = bm.width().max(0) as usize;
        let height = bm.rows().max(0) as usize;
        let pitch = bm.pitch().unsigned_abs() as usize;
        let buf = bm.buffer();
        let mut coverage = Vec::with_capacity(width * height);
        for row in 0 .. height {
            let start = row * pitch;
            match buf.get(start .. start + width) {
                Some(r) => coverage.extend_from_slice(r),
                None => coverage.resize(coverage.len() + width, 0),
            }
        }
        let glyph = GlyphImage {
            width, height, coverage,
            left: slot.bitmap_left(),
            top: slot.bitmap_top(),
            advance: (slot.advance().x >> 6) as f32,
        };
        atlas.add(&glyph)?;
    }
    debug!("loaded font {}: {} glyphs at {}pt", path.display(), range.len(), size_pt);
    atlas.finish(size_pt)
}
