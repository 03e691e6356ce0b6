//! Aliased lines

use crate::base::RenderingBase;
use crate::color::Color;
use crate::debug::DebugSink;
use crate::math::Vec2i;

/// Draw an aliased line from `a` to `b`, both endpoints included
///
/// Bresenham stepping along the major axis: one pixel per column (or row
///   for steep lines). `color` has straight alpha.
///
///     use swraster::{RenderingBase, Color, Rgb8, Vec2i, line};
///
///     let mut ren = RenderingBase::new(8, 8);
///     line(&mut ren, Vec2i::new(1, 1), Vec2i::new(6, 1), Color::white());
///     assert_eq!(ren.get(1, 1), Some(Rgb8::white()));
///     assert_eq!(ren.get(6, 1), Some(Rgb8::white()));
///     assert_eq!(ren.get(7, 1), Some(Rgb8::black()));
///
pub fn line<D: DebugSink>(ren: &mut RenderingBase<D>, a: Vec2i, b: Vec2i, color: Color) {
    let color = color.premultiply();
    let (x1,y1,x2,y2) = (i64::from(a.x), i64::from(a.y), i64::from(b.x), i64::from(b.y));

    let steep = (x2-x1).abs() < (y2-y1).abs();
    let (x1,y1,x2,y2) = if steep   { (y1,x1,y2,x2) } else { (x1,y1,x2,y2) };
    let (x1,y1,x2,y2) = if x2 < x1 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };

    let run  = x2 - x1;
    let rise = y2 - y1;
    let step = rise.signum();

    let mut acc = 0;
    let mut y = y1;
    for x in x1 ..= x2 {
        if steep {
            ren.set_pixel(y as i32, x as i32, color);
        } else {
            ren.set_pixel(x as i32, y as i32, color);
        }
        acc += rise.abs() * 2;
        if acc > run {
            y += step;
            acc -= run * 2;
        }
    }
}
