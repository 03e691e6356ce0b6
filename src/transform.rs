//! Transformations
//!
//! Primitives are placed by a [Transform]: a per-axis scale, a rotation
//!   in radians and an anchor. The anchor is a normalized pivot in the
//!   primitive's own extents, (0,0) is the minimum corner and (1,1) the
//!   maximum; scale and rotation happen about it.
//!
//! [Transform]: struct.Transform.html

use crate::math::Rect;
use crate::math::Vec2;

/// Scale, rotation and anchor applied to a primitive
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    /// Scale along the rotated x and y axes
    pub scale: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Normalized pivot
    pub anchor: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self { scale: Vec2::splat(1.0), rotation: 0.0, anchor: Vec2::splat(0.0) }
    }
}

impl Transform {
    /// Creates a new Transform
    pub fn new(scale: Vec2, rotation: f32, anchor: Vec2) -> Self {
        Self { scale, rotation, anchor }
    }
    /// Identity transform with the anchor at a triangle's centroid
    ///
    ///     use swraster::Transform;
    ///
    ///     let t = Transform::centered_triangle().with_rotation(0.5);
    ///     assert_eq!(t.anchor.x, 1.0 / 3.0);
    ///     assert_eq!(t.rotation, 0.5);
    ///
    pub fn centered_triangle() -> Self {
        Self::default().with_anchor(Vec2::splat(1.0 / 3.0))
    }
    /// Set the scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
    /// Set the rotation, in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
    /// Set the anchor
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }
    /// No rotation applied
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0
    }
}

/// Rotated and scaled basis vectors
fn axes(scale: Vec2, rotation: f32) -> (Vec2, Vec2) {
    let (sin, cos) = rotation.sin_cos();
    (Vec2::new(cos, sin) * scale.x, Vec2::new(-sin, cos) * scale.y)
}

/// Transform `points` in place
///
/// Each point is taken relative to `origin`:
///   `p' = origin + x_axis * p.x + y_axis * p.y` where
///   `x_axis = (cos, sin) * scale.x` and `y_axis = (-sin, cos) * scale.y`
pub fn transform_points(origin: Vec2, points: &mut [Vec2], scale: Vec2, rotation: f32) {
    if points.is_empty() {
        return;
    }
    let (x_axis, y_axis) = axes(scale, rotation);
    for p in points.iter_mut() {
        *p = origin + x_axis * p.x + y_axis * p.y;
    }
}

/// Component-wise minimum and maximum of `points`
///
/// No points produces an empty Rectangle at the origin
pub fn bounding_box(points: &[Vec2]) -> Rect {
    let first = match points.first() {
        Some(&p) => p,
        None => return Rect::default(),
    };
    points.iter().skip(1).fold(Rect::new(first, first), |r, &p| {
        Rect::new(r.min.min(p), r.max.max(p))
    })
}

/// Four corners of a transformed rectangle
///
/// Corners are ordered basis, x-axis corner, opposite corner, y-axis
///   corner. Only [transform_rect_points] builds one.
///
/// [transform_rect_points]: fn.transform_rect_points.html
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Quad {
    points: [Vec2; 4],
}

impl Quad {
    /// Corners in order
    pub fn points(&self) -> &[Vec2; 4] {
        &self.points
    }
    /// Corner the axes start from
    pub fn basis(&self) -> Vec2 {
        self.points[0]
    }
    /// Corner at the end of the x-axis
    pub fn x_corner(&self) -> Vec2 {
        self.points[1]
    }
    /// Corner opposite the basis
    pub fn opposite(&self) -> Vec2 {
        self.points[2]
    }
    /// Corner at the end of the y-axis
    pub fn y_corner(&self) -> Vec2 {
        self.points[3]
    }
    /// Edge from the basis along the x-axis
    pub fn x_axis(&self) -> Vec2 {
        self.points[1] - self.points[0]
    }
    /// Edge from the basis along the y-axis
    pub fn y_axis(&self) -> Vec2 {
        self.points[3] - self.points[0]
    }
    /// `p` lies on or inside all four edges
    ///
    /// Each edge `e = next - cur` must satisfy `e . (p - cur) >= 0`
    pub fn contains(&self, p: Vec2) -> bool {
        (0 .. 4).all(|i| {
            let cur = self.points[i];
            let next = self.points[(i + 1) % 4];
            (next - cur).dot(p - cur) >= 0.0
        })
    }
    /// Axis aligned bounds of the corners
    pub fn bounding_box(&self) -> Rect {
        bounding_box(&self.points)
    }
}

/// Corners of the rectangle `min`..`max` scaled and rotated about `anchor`
///
/// The origin is `min + anchor * (max - min)`. Rectangles without a
///   strictly positive width and height produce no Quad, nor does a
///   transform that leaves any corner infinite or NaN.
///
///     use swraster::{transform_rect_points, Vec2};
///
///     let q = transform_rect_points(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0),
///                                   Vec2::splat(0.0), Vec2::splat(1.0), 0.0).unwrap();
///     assert_eq!(q.basis(), Vec2::new(1.0, 2.0));
///     assert_eq!(q.opposite(), Vec2::new(4.0, 6.0));
///
pub fn transform_rect_points(min: Vec2, max: Vec2, anchor: Vec2, scale: Vec2, rotation: f32) -> Option<Quad> {
    let dim = max - min;
    if !(dim.x > 0.0 && dim.y > 0.0) {
        return None;
    }
    let origin = min + Vec2::new(anchor.x * dim.x, anchor.y * dim.y);
    let base = min - origin;
    let mut points = [
        base,
        base + Vec2::new(dim.x, 0.0),
        base + dim,
        base + Vec2::new(0.0, dim.y),
    ];
    transform_points(origin, &mut points, scale, rotation);
    if !points.iter().all(|p| p.is_finite()) {
        return None;
    }
    Some(Quad { points })
}
