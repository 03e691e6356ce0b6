//! Rendering Base
//!
//! Owns the color buffer and is the only place blended pixels are written.

use crate::buffer::RenderingBuffer;
use crate::color::Color;
use crate::color::Rgb8;
use crate::config::RenderConfig;
use crate::debug::DebugSink;
use crate::debug::NoDebug;
use crate::math::Rect;
use crate::PixelData;

/// Color buffer plus configuration and debug sink
///
///     use swraster::{RenderingBase, Color, Rgb8};
///
///     let mut ren = RenderingBase::new(4, 4);
///     ren.clear(Color::rgb(0.0, 0.0, 0.0));
///     ren.set_pixel(1, 2, Color::white());
///     assert_eq!(ren.get(1, 2), Some(Rgb8::white()));
///     assert_eq!(ren.get(2, 1), Some(Rgb8::black()));
///
#[derive(Debug,Default)]
pub struct RenderingBase<D: DebugSink = NoDebug> {
    rbuf: RenderingBuffer,
    config: RenderConfig,
    debug: D,
}

impl RenderingBase<NoDebug> {
    /// Create a black buffer of `width` x `height` pixels
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_debug(width, height, NoDebug)
    }
}

impl<D: DebugSink> RenderingBase<D> {
    /// Create a black buffer reporting to `debug`
    pub fn with_debug(width: usize, height: usize, debug: D) -> Self {
        Self::from_buffer(RenderingBuffer::new(width, height), debug)
    }
    /// Wrap an existing buffer
    pub fn from_buffer(rbuf: RenderingBuffer, debug: D) -> Self {
        Self { rbuf, config: RenderConfig::default(), debug }
    }
    /// Replace the configuration
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }
    /// The color buffer, read only; pixels are written by [set_pixel]
    ///
    /// [set_pixel]: #method.set_pixel
    pub fn buffer(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    pub fn debug(&self) -> &D {
        &self.debug
    }
    pub fn debug_mut(&mut self) -> &mut D {
        &mut self.debug
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Full extent of the buffer, used to clip primitives
    pub fn clip_box(&self) -> Rect {
        Rect::with_size(self.width() as f32, self.height() as f32)
    }
    /// Inclusive writable range as (xmin, xmax, ymin, ymax)
    ///
    /// The configured border is excluded. An empty range has max < min.
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let b = self.config.border as i64;
        let w = self.width() as i64;
        let h = self.height() as i64;
        (b, w - 1 - b, b, h - 1 - b)
    }
    /// Read the pixel at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb8> {
        self.rbuf.get(x, y)
    }
    /// Fill the whole buffer with an opaque color, no blending
    ///
    /// Alpha is ignored
    pub fn clear(&mut self, color: Color) {
        debug_assert!(color.r >= 0.0 && color.r <= 255.0, "clear red {}", color.r);
        debug_assert!(color.g >= 0.0 && color.g <= 255.0, "clear green {}", color.g);
        debug_assert!(color.b >= 0.0 && color.b <= 255.0, "clear blue {}", color.b);
        let c = Rgb8::new(clamp_u8(color.r), clamp_u8(color.g), clamp_u8(color.b));
        self.rbuf.fill(c);
    }
    /// Blend a premultiplied `color` onto the pixel at (`x`,`y`)
    ///
    /// `result = src.rgb + (1 - src.a/255) * dst.rgb`
    ///
    /// Locations outside of the writable range are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (xi, yi) = (i64::from(x), i64::from(y));
        if xi < xmin || xi > xmax || yi < ymin || yi > ymax {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let dst = match self.rbuf.get(x, y) {
            Some(p) => p,
            None => return,
        };
        let inv_a = 1.0 - color.a / 255.0;
        let eps = self.config.color_epsilon;
        let r = blend_channel(color.r, dst.r, inv_a, eps);
        let g = blend_channel(color.g, dst.g, inv_a, eps);
        let b = blend_channel(color.b, dst.b, inv_a, eps);
        self.rbuf.put(x, y, Rgb8::new(r, g, b));
        self.debug.pixel_written(x, y);
    }
    /// Tell the debug sink a frame has finished
    pub fn end_frame(&mut self) {
        self.debug.end_frame();
    }
    /// Push diagnostic text, formatting only when the sink wants it
    pub(crate) fn debug_text<F: FnOnce() -> String>(&mut self, f: F) {
        if self.debug.wants_text() {
            let s = f();
            self.debug.push_text(&s);
        }
    }
}

/// Blend one component; values over 255 by less than `eps` are clamped
fn blend_channel(src: f32, dst: u8, inv_a: f32, eps: f32) -> u8 {
    let v = src + inv_a * f32::from(dst);
    debug_assert!(v >= 0.0, "blended component below zero: {}", v);
    if v > 255.0 {
        debug_assert!(v - 255.0 < eps, "blended component overflow: {}", v);
        return 255;
    }
    clamp_u8(v)
}

fn clamp_u8(v: f32) -> u8 {
    v.max(0.0).min(255.0) as u8
}

impl<D: DebugSink> PixelData for RenderingBase<D> {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEGACY_BORDER;
    use crate::debug::FrameStats;

    #[test]
    fn transparent_source_is_noop() {
        let mut ren = RenderingBase::new(4, 4);
        ren.clear(Color::rgb(13.0, 77.0, 254.0));
        ren.set_pixel(2, 2, Color::transparent());
        assert_eq!(ren.get(2, 2), Some(Rgb8::new(13, 77, 254)));
    }

    #[test]
    fn opaque_source_replaces() {
        let mut ren = RenderingBase::new(4, 4);
        ren.clear(Color::rgb(200.0, 10.0, 99.0));
        ren.set_pixel(1, 1, Color::rgb(3.0, 250.0, 128.0).premultiply());
        assert_eq!(ren.get(1, 1), Some(Rgb8::new(3, 250, 128)));
    }

    #[test]
    fn half_alpha_blend() {
        let mut ren = RenderingBase::new(2, 2);
        ren.clear(Color::rgb(100.0, 100.0, 100.0));
        let c = Color::new(255.0, 0.0, 0.0, 127.5).premultiply();
        ren.set_pixel(0, 0, c);
        // 127.5 + 0.5 * 100, 0 + 0.5 * 100
        assert_eq!(ren.get(0, 0), Some(Rgb8::new(177, 50, 50)));
    }

    #[test]
    fn near_overflow_clamps() {
        let mut ren = RenderingBase::new(2, 2);
        ren.clear(Color::rgb(255.0, 255.0, 255.0));
        // 255.05 is within the default epsilon
        ren.set_pixel(0, 0, Color::new(0.05, 0.0, 0.0, 0.0));
        assert_eq!(ren.get(0, 0), Some(Rgb8::white()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "blended component overflow")]
    fn overflow_past_epsilon_panics() {
        let mut ren = RenderingBase::new(2, 2);
        ren.clear(Color::white());
        // Straight alpha white on white blends to 510
        ren.set_pixel(0, 0, Color::new(255.0, 255.0, 255.0, 0.0));
    }

    #[test]
    fn custom_epsilon_widens_clamp() {
        let mut ren = RenderingBase::new(2, 2)
            .with_config(RenderConfig::new().color_epsilon(2.0));
        ren.clear(Color::white());
        // 256.5 is past the default epsilon but within 2.0
        ren.set_pixel(0, 0, Color::new(1.5, 1.5, 1.5, 0.0));
        assert_eq!(ren.get(0, 0), Some(Rgb8::white()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "blended component overflow")]
    fn custom_epsilon_tightens_clamp() {
        let mut ren = RenderingBase::new(2, 2)
            .with_config(RenderConfig::new().color_epsilon(0.01));
        ren.clear(Color::white());
        // 255.05 passes the default epsilon but not 0.01
        ren.set_pixel(0, 0, Color::new(0.05, 0.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_dropped() {
        let mut ren = RenderingBase::with_debug(3, 3, FrameStats::new());
        for &(x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)].iter() {
            ren.set_pixel(x, y, Color::white());
        }
        assert_eq!(ren.debug().pixels_this_frame, 0);
        ren.set_pixel(2, 2, Color::white());
        assert_eq!(ren.debug().pixels_this_frame, 1);
    }

    #[test]
    fn legacy_border() {
        let mut ren = RenderingBase::new(4, 4)
            .with_config(RenderConfig::new().border(LEGACY_BORDER));
        assert_eq!(ren.limits(), (1, 2, 1, 2));
        ren.set_pixel(0, 1, Color::white());
        ren.set_pixel(3, 1, Color::white());
        ren.set_pixel(1, 0, Color::white());
        ren.set_pixel(1, 3, Color::white());
        assert!(ren.pixeldata().iter().all(|&v| v == 0));
        ren.set_pixel(1, 1, Color::white());
        assert_eq!(ren.get(1, 1), Some(Rgb8::white()));
    }

    #[test]
    fn buffer_sees_blended_writes() {
        let mut ren = RenderingBase::new(3, 1);
        ren.set_pixel(2, 0, Color::rgb(1.0, 2.0, 3.0));
        assert_eq!(ren.buffer().get(2, 0), Some(Rgb8::new(1, 2, 3)));
        assert_eq!(&ren.buffer()[(2,0)], &[3, 2, 1, 0]);
        assert_eq!(ren.buffer().width, 3);
    }

    #[test]
    fn empty_buffer_is_safe() {
        let mut ren = RenderingBase::new(0, 0);
        ren.clear(Color::white());
        ren.set_pixel(0, 0, Color::white());
        assert!(ren.pixeldata().is_empty());
    }
}
