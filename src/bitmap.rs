//! Bitmaps and the textured quad resampler

use log::trace;

use crate::base::RenderingBase;
use crate::buffer::BPP;
use crate::color::Color;
use crate::debug::DebugSink;
use crate::debug::draw_box;
use crate::debug::draw_marker;
use crate::debug::draw_outline;
use crate::debug::BLUE;
use crate::debug::GREEN;
use crate::debug::PURPLE;
use crate::debug::RED;
use crate::debug::YELLOW;
use crate::load::LoadError;
use crate::math::Vec2;
use crate::transform::Transform;
use crate::transform::transform_rect_points;

/// Premultiplied RGBA image
///
/// Texels are 4 bytes, R, G, B, A, rows stored bottom row first.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Bitmap {
    /// Width in texels
    pub width: usize,
    /// Height in texels
    pub height: usize,
    /// Bytes per texel
    pub bpp: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap texels that are already premultiplied and flipped
    ///
    /// Every texel must have red, green and blue no larger than alpha.
    pub fn from_premultiplied(width: usize, height: usize, data: Vec<u8>) -> Result<Self, LoadError> {
        let expected = width * height * BPP;
        if data.len() != expected {
            return Err(LoadError::PixelData { expected, got: data.len() });
        }
        if let Some(index) = data.chunks(BPP).position(|p| p[0] > p[3] || p[1] > p[3] || p[2] > p[3]) {
            return Err(LoadError::NotPremultiplied { index });
        }
        Ok(Self { width, height, bpp: BPP, data })
    }
    /// Convert straight alpha, top row first, sRGB texels
    ///
    /// Rows are flipped so row 0 is the bottom and every texel is
    ///   premultiplied in linear space. A component re-encoded to sRGB can
    ///   land above its alpha and is clamped to it.
    ///
    ///     use swraster::Bitmap;
    ///
    ///     let top: [u8; 4] = [255, 255, 255, 255];
    ///     let bottom: [u8; 4] = [255, 0, 0, 0];
    ///     let bmp = Bitmap::from_rgba8(1, 2, &[top, bottom].concat()).unwrap();
    ///     assert_eq!(bmp.data(), &[0, 0, 0, 0, 255, 255, 255, 255]);
    ///
    pub fn from_rgba8(width: usize, height: usize, rgba: &[u8]) -> Result<Self, LoadError> {
        let expected = width * height * BPP;
        if rgba.len() != expected {
            return Err(LoadError::PixelData { expected, got: rgba.len() });
        }
        let pitch = width * BPP;
        let mut data = Vec::with_capacity(expected);
        for row in rgba.chunks(pitch.max(1)).rev() {
            for px in row.chunks(BPP) {
                let c = Color::from_rgba8(px).premultiply_srgb();
                let a = to_u8(c.a);
                data.extend_from_slice(&[to_u8(c.r).min(a), to_u8(c.g).min(a), to_u8(c.b).min(a), a]);
            }
        }
        Self::from_premultiplied(width, height, data)
    }
    /// No texels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
    /// Raw premultiplied texels
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Texel at (`x`,`y`), None outside of the bitmap
    pub fn texel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.at(x, y))
    }
    fn at(&self, x: usize, y: usize) -> Color {
        let i = (y * self.width + x) * self.bpp;
        Color::from_rgba8(&self.data[i .. i + self.bpp])
    }
    /// Bilinear sample at normalized (`u`,`v`)
    ///
    /// `u` and `v` are clamped to [0,1] and map onto texel centres
    ///   `0 ..= width-1` and `0 ..= height-1`; neighbours past the last
    ///   row or column are clamped.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        if self.is_empty() {
            return Color::transparent();
        }
        let u = u.max(0.0).min(1.0);
        let v = v.max(0.0).min(1.0);
        let tx = u * (self.width - 1) as f32;
        let ty = v * (self.height - 1) as f32;
        let x0 = (tx as usize).min(self.width - 1);
        let y0 = (ty as usize).min(self.height - 1);
        let fx = tx - x0 as f32;
        let fy = ty - y0 as f32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let c12 = self.at(x0, y0).lerp(fx, self.at(x1, y0));
        let c34 = self.at(x0, y1).lerp(fx, self.at(x1, y1));
        c12.lerp(fy, c34)
    }
}

fn to_u8(v: f32) -> u8 {
    v.round().max(0.0).min(255.0) as u8
}

/// Draw `bmp` with its minimum corner at `position`, placed by `transform`
///
/// The bitmap covers `position .. position + (width, height)`. Each pixel
///   inside the transformed quad is projected onto the quad's axes and
///   sampled bilinearly; texels are premultiplied already and blend as is.
///
///     use swraster::{RenderingBase, Bitmap, Rgb8, Transform, Vec2, bitmap};
///
///     let red = [255, 0, 0, 255].repeat(4);
///     let bmp = Bitmap::from_premultiplied(2, 2, red).unwrap();
///     let mut ren = RenderingBase::new(8, 8);
///     bitmap(&mut ren, &bmp, Vec2::new(3.0, 3.0), &Transform::default());
///     assert_eq!(ren.get(3, 3), Some(Rgb8::new(255, 0, 0)));
///     assert_eq!(ren.get(5, 3), Some(Rgb8::black()));
///
pub fn bitmap<D: DebugSink>(ren: &mut RenderingBase<D>, bmp: &Bitmap, position: Vec2, transform: &Transform) {
    if bmp.is_empty() {
        return;
    }
    let t = transform;
    let min = position;
    let max = position + Vec2::new(bmp.width as f32, bmp.height as f32);
    ren.debug_text(|| format!("OldRect: ({:5.2}, {:5.2}), ({:5.2}, {:5.2})", min.x, min.y, max.x, max.y));

    let quad = match transform_rect_points(min, max, t.anchor, t.scale, t.rotation) {
        Some(q) => q,
        None => return,
    };
    let bounds = quad.bounding_box();
    let clipped = bounds.clip(&ren.clip_box());
    ren.debug_text(|| format!("ClippedRect: ({:5.2}, {:5.2}), ({:5.2}, {:5.2})",
                              clipped.min.x, clipped.min.y, clipped.max.x, clipped.max.y));
    ren.debug_text(|| format!("ClippedSize: ({:5.2}, {:5.2})", clipped.width(), clipped.height()));
    trace!("bitmap {}x{} at {:?} clipped to {:?}", bmp.width, bmp.height, bounds, clipped);

    let basis = quad.basis();
    let x_axis = quad.x_axis();
    let y_axis = quad.y_axis();
    let inv_x_len2 = 1.0 / x_axis.length_squared();
    let inv_y_len2 = 1.0 / y_axis.length_squared();

    let x0 = clipped.min.x as i32;
    let y0 = clipped.min.y as i32;
    for y in 0 .. clipped.height() as i32 {
        let by = y0 + y;
        for x in 0 .. clipped.width() as i32 {
            let bx = x0 + x;
            let p = Vec2::new(bx as f32, by as f32);
            if !quad.contains(p) {
                continue;
            }
            let rel = p - basis;
            let u = rel.dot(x_axis) * inv_x_len2;
            let v = rel.dot(y_axis) * inv_y_len2;
            ren.set_pixel(bx, by, bmp.sample(u, v));
        }
    }

    if ren.config().debug_overlay {
        draw_box(ren, &bounds, YELLOW);
        if !t.is_axis_aligned() {
            draw_outline(ren, quad.points(), GREEN);
        }
        draw_marker(ren, quad.basis(), RED);
        draw_marker(ren, quad.x_corner(), GREEN);
        draw_marker(ren, quad.opposite(), BLUE);
        draw_marker(ren, quad.y_corner(), PURPLE);
    }
}
