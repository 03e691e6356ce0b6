//! Filled triangles
//!
//! Triangles are scan converted with three edge functions over the
//!   triangle's bounding box. Each function is evaluated once at the
//!   corner of the box and then stepped by constant increments, one add
//!   per pixel. A pixel is filled when it lies on or inside all three
//!   edges, so adjacent triangles both draw their shared edge.

use log::trace;

use crate::base::RenderingBase;
use crate::color::Color;
use crate::debug::DebugSink;
use crate::debug::draw_basis;
use crate::debug::draw_box;
use crate::debug::draw_marker;
use crate::debug::BLUE;
use crate::debug::GREEN;
use crate::debug::PURPLE;
use crate::math::Vec2;
use crate::transform::Transform;
use crate::transform::bounding_box;
use crate::transform::transform_points;

/// Twice the signed area of a triangle
///
/// Positive for clockwise points in a y-up frame, i.e. counter
///   clockwise on screen
pub fn signed_area2(p: &[Vec2; 3]) -> f32 {
    (0 .. 3).map(|i| {
        let a = p[i];
        let b = p[(i + 1) % 3];
        (b.x - a.x) * (b.y + a.y)
    }).sum()
}

/// Linear function of (x,y) that is zero along the edge `a` -> `b`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
struct EdgeFunction {
    /// Value at the current pixel
    value: f32,
    /// Change for a step of +1 in x
    step_x: f32,
    /// Change for a step of +1 in y
    step_y: f32,
}

impl EdgeFunction {
    fn new(a: Vec2, b: Vec2, p: Vec2) -> Self {
        let value = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        Self { value, step_x: a.y - b.y, step_y: b.x - a.x }
    }
}

/// Fill the triangle `p1`, `p2`, `p3` placed by `transform`
///
/// The anchor is interpolated across the triangle's own edges, the origin
///   being `p1 + anchor.x * (p2 - p1) + anchor.y * (p3 - p1)`. Either
///   winding fills the same pixels; collinear points fill nothing.
///   `color` has straight alpha.
///
/// The bounding box is clamped to the last row and column of the buffer
///   and scanned half-open, so a triangle never fills the buffer's last
///   row or last column.
///
///     use swraster::{RenderingBase, Color, Rgb8, Transform, Vec2, triangle};
///
///     let mut ren = RenderingBase::new(16, 16);
///     triangle(&mut ren, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0),
///              Color::white(), &Transform::default());
///     assert_eq!(ren.get(1, 1), Some(Rgb8::white()));
///     assert_eq!(ren.get(9, 9), Some(Rgb8::black()));
///
pub fn triangle<D: DebugSink>(ren: &mut RenderingBase<D>, p1: Vec2, p2: Vec2, p3: Vec2, color: Color, transform: &Transform) {
    let t = transform;
    let origin = p1 + (p2 - p1) * t.anchor.x + (p3 - p1) * t.anchor.y;
    let mut pts = [p1 - origin, p2 - origin, p3 - origin];
    transform_points(origin, &mut pts, t.scale, t.rotation);
    if !pts.iter().all(|p| p.is_finite()) {
        trace!("triangle {:?} is not finite", pts);
        return;
    }

    let area2 = signed_area2(&pts);
    if area2.abs() < 1e-6 {
        trace!("triangle {:?} is degenerate", pts);
        return;
    }
    if area2 > 0.0 {
        trace!("triangle {:?} swapping winding", pts);
        pts.swap(1, 2);
    }

    let bounds = bounding_box(&pts);
    if ren.width() > 0 && ren.height() > 0 {
        let fill = color.premultiply();
        let xmax = ren.width() as i32 - 1;
        let ymax = ren.height() as i32 - 1;
        let x0 = (bounds.min.x as i32).max(0).min(xmax);
        let y0 = (bounds.min.y as i32).max(0).min(ymax);
        let x1 = (bounds.max.x as i32).max(0).min(xmax);
        let y1 = (bounds.max.y as i32).max(0).min(ymax);

        let start = Vec2::new(x0 as f32, y0 as f32);
        let mut rows = [
            EdgeFunction::new(pts[0], pts[1], start),
            EdgeFunction::new(pts[1], pts[2], start),
            EdgeFunction::new(pts[2], pts[0], start),
        ];
        for y in y0 .. y1 {
            let mut e = rows;
            for x in x0 .. x1 {
                if e.iter().all(|f| f.value >= 0.0) {
                    ren.set_pixel(x, y, fill);
                }
                for f in e.iter_mut() {
                    f.value += f.step_x;
                }
            }
            for f in rows.iter_mut() {
                f.value += f.step_y;
            }
        }
    }

    if ren.config().debug_overlay {
        draw_box(ren, &bounds, color);
        draw_basis(ren, origin, t);
        draw_marker(ren, pts[0], GREEN);
        draw_marker(ren, pts[1], BLUE);
        draw_marker(ren, pts[2], PURPLE);
    }
}
