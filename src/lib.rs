//! CPU software rasterizer
//!
//! Draws aliased lines, filled rectangles and triangles, textured quads
//!   and glyph quads into a packed 32-bit color buffer, compositing with
//!   premultiplied alpha.
//!
//! # Example
//!
//!     use swraster::*;
//!
//!     let mut ren = RenderingBase::new(100, 100);
//!     ren.clear(Color::black());
//!
//!     rectangle(&mut ren, Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0),
//!               Color::white(), &Transform::default());
//!     triangle(&mut ren, Vec2::new(40.0, 40.0), Vec2::new(80.0, 40.0), Vec2::new(40.0, 80.0),
//!              Color::new(255.0, 0.0, 0.0, 128.0), &Transform::centered_triangle().with_rotation(0.3));
//!     line(&mut ren, Vec2i::new(0, 99), Vec2i::new(99, 0), Color::rgb(0.0, 255.0, 0.0));
//!
//!     assert_eq!(ren.get(15, 15), Some(Rgb8::white()));
//!     assert_eq!(ren.get(5, 5), Some(Rgb8::black()));
//!
//! # How does this work
//!
//! ```text
//!     clear / line / rectangle / triangle / bitmap / text
//!       transform_rect_points, transform_points   -- place the primitive
//!       bounding_box, Rect::clip                  -- limit the scan
//!       inside test (edges, quad, glyph coverage) -- pick pixels
//!         RenderingBase::set_pixel                -- blend, bounds check
//!           RenderingBuffer::put                  -- pack 0x00RRGGBB
//! ```
//!
//! Every draw call runs to completion on the caller's thread against a
//!   `&mut RenderingBase`; fonts and bitmaps are only borrowed.

pub mod math;
pub mod color;
pub mod buffer;
pub mod config;
pub mod debug;
pub mod base;
pub mod transform;
pub mod line;
pub mod rect;
pub mod triangle;
pub mod bitmap;
pub mod text;
pub mod atlas;
pub mod load;
pub mod dump;

pub use math::*;
pub use color::*;
pub use buffer::*;
pub use config::*;
pub use debug::DebugSink;
pub use debug::NoDebug;
pub use debug::FrameStats;
pub use base::*;
pub use transform::*;
pub use line::*;
pub use rect::*;
pub use triangle::*;
pub use bitmap::*;
pub use text::*;
pub use atlas::*;
pub use load::*;
pub use dump::*;

/// Access to the raw bytes of a color buffer
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Fill the whole buffer with `rgb`, no blending
///
/// Components must be in [0,255]; alpha is ignored.
pub fn clear<D: DebugSink>(ren: &mut RenderingBase<D>, rgb: Color) {
    ren.clear(rgb);
}
