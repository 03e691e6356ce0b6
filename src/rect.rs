//! Filled rectangles

use log::trace;

use crate::base::RenderingBase;
use crate::color::Color;
use crate::debug::DebugSink;
use crate::debug::draw_box;
use crate::debug::draw_outline;
use crate::debug::GREEN;
use crate::math::Vec2;
use crate::transform::Transform;
use crate::transform::transform_rect_points;

/// Fill the rectangle `min`..`max` placed by `transform`
///
/// Without rotation every pixel of the clipped bounding box is filled,
///   otherwise only pixels inside all four transformed edges. Pixels are
///   addressed by their integer coordinates, so `(0,0)`..`(10,10)` covers
///   `[0,10) x [0,10)`. `color` has straight alpha.
///
///     use swraster::{RenderingBase, Color, Rgb8, Transform, Vec2, rectangle};
///
///     let mut ren = RenderingBase::new(100, 100);
///     rectangle(&mut ren, Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0),
///               Color::white(), &Transform::default());
///     assert_eq!(ren.get(15, 15), Some(Rgb8::white()));
///     assert_eq!(ren.get(5, 5), Some(Rgb8::black()));
///
pub fn rectangle<D: DebugSink>(ren: &mut RenderingBase<D>, min: Vec2, max: Vec2, color: Color, transform: &Transform) {
    let t = transform;
    let quad = match transform_rect_points(min, max, t.anchor, t.scale, t.rotation) {
        Some(q) => q,
        None => return,
    };
    let fill = color.premultiply();
    let bounds = quad.bounding_box();
    let clipped = bounds.clip(&ren.clip_box());
    trace!("rectangle {:?} clipped to {:?}", bounds, clipped);

    let x0 = clipped.min.x as i32;
    let y0 = clipped.min.y as i32;
    let w = clipped.width() as i32;
    let h = clipped.height() as i32;
    if t.is_axis_aligned() {
        for y in 0 .. h {
            for x in 0 .. w {
                ren.set_pixel(x0 + x, y0 + y, fill);
            }
        }
    } else {
        for y in 0 .. h {
            for x in 0 .. w {
                let p = Vec2::new((x0 + x) as f32, (y0 + y) as f32);
                if quad.contains(p) {
                    ren.set_pixel(x0 + x, y0 + y, fill);
                }
            }
        }
    }

    if ren.config().debug_overlay {
        draw_box(ren, &bounds, color);
        if !t.is_axis_aligned() {
            draw_outline(ren, quad.points(), GREEN);
        }
    }
}
