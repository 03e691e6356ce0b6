//! Colors

use crate::math::lerp;

/// Convert from sRGB to linear RGB for a single [0,1] component
pub fn srgb_to_linear(x: f32) -> f32 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}
/// Convert from linear RGB to sRGB for a single [0,1] component
pub fn linear_to_srgb(x: f32) -> f32 {
    if x <= 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0/2.4) - 0.055
    }
}

/// Premultiply an 8-bit glyph coverage value against itself
///
/// Coverage is both the color and the alpha of a glyph texel; the product
///   is formed in linear space and stored back as sRGB
pub fn premultiply_coverage(coverage: u8) -> u8 {
    let alpha = f32::from(coverage) / 255.0;
    let linear = srgb_to_linear(alpha) * alpha;
    let v = linear_to_srgb(linear) * 255.0;
    v.max(0.0).min(255.0) as u8
}

/// Color as Red, Green, Blue and Alpha
///
/// Components are in the [0,255] domain, not [0,1]. At the drawing API
///   boundary alpha is straight; [premultiply] converts it before any
///   pixel is written.
///
/// [premultiply]: #method.premultiply
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Create new color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 255.0 }
    }
    /// White Color (255,255,255,255)
    pub const fn white() -> Self {
        Self::rgb(255.0, 255.0, 255.0)
    }
    /// Black Color (0,0,0,255)
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    /// Fully transparent
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Convert straight alpha to premultiplied alpha
    ///
    /// Red, green and blue are scaled by `a/255`, alpha is left as is
    pub fn premultiply(self) -> Self {
        let norm_a = self.a / 255.0;
        Self::new(self.r * norm_a, self.g * norm_a, self.b * norm_a, self.a)
    }
    /// Premultiply with sRGB to linear conversion
    ///
    /// Color components are taken to be sRGB encoded, multiplied by alpha
    ///   in linear space, and encoded back to sRGB
    pub fn premultiply_srgb(self) -> Self {
        let norm_a = self.a / 255.0;
        let conv = |c: f32| linear_to_srgb(srgb_to_linear(c / 255.0) * norm_a) * 255.0;
        Self::new(conv(self.r), conv(self.g), conv(self.b), self.a)
    }
    /// Scale all four components, including alpha, by `f`
    pub fn scale(self, f: f32) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f, self.a * f)
    }
    /// Interpolate each component from `self` towards `other` by `t`
    pub fn lerp(self, t: f32, other: Color) -> Self {
        Self::new(lerp(self.r, t, other.r),
                  lerp(self.g, t, other.g),
                  lerp(self.b, t, other.b),
                  lerp(self.a, t, other.a))
    }
    /// Color from 4 bytes in R,G,B,A order
    pub fn from_rgba8(p: &[u8]) -> Self {
        Self::new(f32::from(p[0]), f32::from(p[1]), f32::from(p[2]), f32::from(p[3]))
    }
}

/// Free function form of [Color::premultiply]
///
/// [Color::premultiply]: struct.Color.html#method.premultiply
pub fn premultiply_alpha(color: Color) -> Color {
    color.premultiply()
}

/// Color as Red, Green, Blue; what a buffer pixel holds
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub const fn white() -> Self {
        Self::new(255,255,255)
    }
    pub const fn black() -> Self {
        Self::new(0,0,0)
    }
    pub const fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
}

impl From<Rgb8> for Color {
    fn from(c: Rgb8) -> Color {
        Color::rgb(f32::from(c.r), f32::from(c.g), f32::from(c.b))
    }
}
