
extern crate swraster;

use std::f32::consts::PI;

use swraster::{Bitmap, Color, Rgb8, RenderingBase, RenderConfig, FrameStats, Transform, Vec2};

/// Opaque bitmap where texel (x,y) is (10x, 10y, 99)
fn ramp(w: usize, h: usize) -> Bitmap {
    let mut data = vec![];
    for y in 0 .. h {
        for x in 0 .. w {
            data.extend_from_slice(&[(x * 10) as u8, (y * 10) as u8, 99, 255]);
        }
    }
    Bitmap::from_premultiplied(w, h, data).unwrap()
}

fn solid(w: usize, h: usize, rgba: [u8; 4]) -> Bitmap {
    Bitmap::from_premultiplied(w, h, rgba.repeat(w * h)).unwrap()
}

#[test_log::test]
fn unrotated_covers_bitmap_extent() {
    let bmp = solid(6, 4, [30, 60, 90, 255]);
    let mut ren = RenderingBase::with_debug(32, 32, FrameStats::new());
    swraster::bitmap(&mut ren, &bmp, Vec2::new(10.0, 12.0), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 24);
    for y in 12 .. 16 {
        for x in 10 .. 16 {
            assert_eq!(ren.get(x, y), Some(Rgb8::new(30, 60, 90)));
        }
    }
    assert_eq!(ren.get(16, 12), Some(Rgb8::black()));
    assert_eq!(ren.get(10, 16), Some(Rgb8::black()));
}

#[test_log::test]
fn basis_pixel_reproduces_first_texel() {
    let bmp = ramp(5, 5);
    let mut ren = RenderingBase::new(32, 32);
    swraster::bitmap(&mut ren, &bmp, Vec2::new(7.0, 9.0), &Transform::default());
    assert_eq!(ren.get(7, 9), Some(Rgb8::new(0, 0, 99)));
    // Later pixels sample between texels but stay within the ramp
    let last = ren.get(11, 13).unwrap();
    assert!(last.r > 0 && last.r < 40);
    assert!(last.g > 0 && last.g < 40);
    assert_eq!(last.b, 99);
}

#[test_log::test]
fn sampler_edges_are_exact() {
    let bmp = ramp(4, 3);
    assert_eq!(bmp.sample(0.0, 0.0), Color::new(0.0, 0.0, 99.0, 255.0));
    assert_eq!(bmp.sample(1.0, 0.0), Color::new(30.0, 0.0, 99.0, 255.0));
    assert_eq!(bmp.sample(0.0, 1.0), Color::new(0.0, 20.0, 99.0, 255.0));
    assert_eq!(bmp.sample(1.0, 1.0), Color::new(30.0, 20.0, 99.0, 255.0));
    assert_eq!(bmp.sample(5.0, 5.0), bmp.sample(1.0, 1.0));
    assert_eq!(bmp.sample(f32::NAN, 0.0), bmp.sample(0.0, 0.0));
}

#[test_log::test]
fn translucent_texels_blend() {
    // Premultiplied half white
    let bmp = solid(2, 2, [128, 128, 128, 128]);
    let mut ren = RenderingBase::new(8, 8);
    ren.clear(Color::rgb(200.0, 0.0, 0.0));
    swraster::bitmap(&mut ren, &bmp, Vec2::new(1.0, 1.0), &Transform::default());
    let p = ren.get(1, 1).unwrap();
    // 128 + (1 - 128/255) * dst
    assert_eq!(p, Rgb8::new(227, 128, 128));
    assert_eq!(ren.get(0, 0), Some(Rgb8::new(200, 0, 0)));
}

#[test_log::test]
fn rotated_bitmap_stays_in_quad() {
    let bmp = solid(10, 10, [255, 255, 255, 255]);
    let mut ren = RenderingBase::with_debug(40, 40, FrameStats::new());
    let t = Transform::default().with_anchor(Vec2::splat(0.5)).with_rotation(PI / 4.0);
    swraster::bitmap(&mut ren, &bmp, Vec2::new(15.0, 15.0), &t);
    assert_eq!(ren.get(20, 20), Some(Rgb8::white()));
    assert_eq!(ren.get(15, 15), Some(Rgb8::black()));
    let n = ren.debug().pixels_this_frame as i64;
    assert!((n - 100).abs() < 25, "rotated bitmap filled {}", n);
}

#[test_log::test]
fn clipped_and_empty_are_safe() {
    let bmp = solid(8, 8, [255, 0, 0, 255]);
    let mut ren = RenderingBase::with_debug(10, 10, FrameStats::new());
    swraster::bitmap(&mut ren, &bmp, Vec2::new(-4.0, 6.0), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 4 * 4);
    swraster::bitmap(&mut ren, &bmp, Vec2::new(50.0, 50.0), &Transform::default());
    swraster::bitmap(&mut ren, &Bitmap::default(), Vec2::new(1.0, 1.0), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 16);
}

#[test_log::test]
fn debug_text_reports_rects() {
    let bmp = solid(4, 4, [255, 0, 0, 255]);
    let mut ren = RenderingBase::with_debug(10, 10, FrameStats::new())
        .with_config(RenderConfig::new().debug_overlay(true));
    swraster::bitmap(&mut ren, &bmp, Vec2::new(8.0, 2.0), &Transform::default());
    let text = &ren.debug().text;
    assert_eq!(text.len(), 3);
    assert_eq!(text[0], "OldRect: ( 8.00,  2.00), (12.00,  6.00)");
    assert_eq!(text[1], "ClippedRect: ( 8.00,  2.00), (10.00,  6.00)");
    assert_eq!(text[2], "ClippedSize: ( 2.00,  4.00)");
    ren.end_frame();
    assert!(ren.debug().text.is_empty());
}

#[test_log::test]
fn non_finite_transform_draws_nothing() {
    let bmp = solid(4, 4, [255, 255, 255, 255]);
    let mut ren = RenderingBase::with_debug(16, 16, FrameStats::new());
    swraster::bitmap(&mut ren, &bmp, Vec2::new(2.0, 2.0), &Transform::default().with_scale(Vec2::new(f32::NAN, 1.0)));
    swraster::bitmap(&mut ren, &bmp, Vec2::new(2.0, 2.0), &Transform::default().with_scale(Vec2::new(1.0, f32::INFINITY)));
    swraster::bitmap(&mut ren, &bmp, Vec2::new(f32::INFINITY, 2.0), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 0);
}

#[test_log::test]
fn straight_alpha_texels_are_refused() {
    assert!(matches!(Bitmap::from_premultiplied(1, 1, vec![255, 255, 255, 0]),
                     Err(swraster::LoadError::NotPremultiplied { index: 0 })));
}

#[test_log::test]
fn translucent_rgba_blends_onto_white() {
    let rgba: Vec<u8> = [255, 255, 255, 128].repeat(4);
    let bmp = Bitmap::from_rgba8(2, 2, &rgba).unwrap();
    let mut ren = RenderingBase::new(8, 8);
    ren.clear(Color::white());
    swraster::bitmap(&mut ren, &bmp, Vec2::new(3.0, 3.0), &Transform::default());
    // 128 + (1 - 128/255) * 255 lands on 255 give or take rounding
    for &(x, y) in [(3, 3), (4, 4)].iter() {
        let p = ren.get(x, y).unwrap();
        assert!(p.r >= 254 && p.g >= 254 && p.b >= 254, "{:?}", p);
    }
}

#[test_log::test]
fn overlay_outlines_only_rotated_quads() {
    let bmp = solid(20, 20, [0, 0, 0, 255]);
    let cfg = RenderConfig::new().debug_overlay(true);
    let green = Rgb8::new(0, 255, 0);

    // Unrotated, the bounding box edge stays yellow
    let mut ren = RenderingBase::new(64, 64).with_config(cfg);
    swraster::bitmap(&mut ren, &bmp, Vec2::new(10.0, 10.0), &Transform::default());
    assert_eq!(ren.get(20, 10), Some(Rgb8::new(255, 255, 0)));

    // A quarter turn maps the square onto itself, the outline covers the box
    let mut ren = RenderingBase::new(64, 64).with_config(cfg);
    let t = Transform::default().with_anchor(Vec2::splat(0.5)).with_rotation(PI / 2.0);
    swraster::bitmap(&mut ren, &bmp, Vec2::new(10.0, 10.0), &t);
    assert!((9 .. 12).any(|y| ren.get(20, y) == Some(green)));
}
