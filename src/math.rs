//! Vectors and Rectangles

use std::ops::Add;
use std::ops::Mul;
use std::ops::Sub;

/// Linear interpolation from `a` to `b` by `t`
///
/// `t` of 0.0 returns `a` exactly
pub fn lerp(a: f32, t: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// 2D Point or Vector with f32 components
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new Vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    /// Vector with both components set to `v`
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
    /// Dot product
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }
    /// Squared length, avoids the square root
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }
    /// Component-wise minimum
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }
    /// Component-wise maximum
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
    /// Neither component is infinite or NaN
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Vec2i> for Vec2 {
    fn from(v: Vec2i) -> Vec2 {
        Vec2::new(v.x as f32, v.y as f32)
    }
}

/// 2D Point with integer components
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    /// Create a new integer Point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    /// Convert by truncating each component toward zero
    pub fn truncate(v: Vec2) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }
}

impl Add for Vec2i {
    type Output = Vec2i;
    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis aligned Rectangle
///
/// A Rectangle with `max` not greater than `min` in either axis is empty
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rect {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Rect {
    /// Create a new Rectangle
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
    /// Rectangle from the origin to (`width`,`height`)
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::splat(0.0), Vec2::new(width, height))
    }
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
    /// Intersection with `clip`
    ///
    /// Disjoint rectangles produce an empty Rectangle anchored at the
    ///   clamped minimum, never one with negative size
    pub fn clip(&self, clip: &Rect) -> Rect {
        let min = self.min.max(clip.min);
        let max = self.max.min(clip.max);
        Rect::new(min, max.max(min))
    }
}
