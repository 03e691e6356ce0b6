
extern crate swraster;

use std::collections::BTreeSet;

use swraster::{Color, Rgb8, RenderingBase, RenderConfig, FrameStats, Transform, Vec2};

fn fill(p1: Vec2, p2: Vec2, p3: Vec2, t: &Transform) -> BTreeSet<(usize,usize)> {
    let mut ren = RenderingBase::new(64, 64);
    swraster::triangle(&mut ren, p1, p2, p3, Color::white(), t);
    let mut out = BTreeSet::new();
    for y in 0 .. ren.height() {
        for x in 0 .. ren.width() {
            if ren.get(x, y) != Some(Rgb8::black()) {
                out.insert((x,y));
            }
        }
    }
    out
}

#[test_log::test]
fn right_triangle_at_origin() {
    let mut ren = RenderingBase::new(16, 16);
    swraster::triangle(&mut ren, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0),
                       Color::white(), &Transform::default());
    assert_eq!(ren.get(1, 1), Some(Rgb8::white()));
    assert_eq!(ren.get(9, 9), Some(Rgb8::black()));
}

#[test_log::test]
fn winding_does_not_matter() {
    let tris = [
        (Vec2::new(3.0, 4.0), Vec2::new(50.0, 10.0), Vec2::new(20.0, 60.0)),
        (Vec2::new(60.0, 2.0), Vec2::new(5.0, 30.0), Vec2::new(40.0, 55.0)),
        (Vec2::new(10.0, 10.0), Vec2::new(30.0, 10.0), Vec2::new(20.0, 11.0)),
    ];
    for &(a, b, c) in tris.iter() {
        let t = Transform::default();
        let cw = fill(a, b, c, &t);
        let ccw = fill(a, c, b, &t);
        assert!(!cw.is_empty());
        assert_eq!(cw, ccw);
    }
}

#[test_log::test]
fn collinear_is_empty() {
    let t = Transform::default();
    assert!(fill(Vec2::new(1.0, 1.0), Vec2::new(20.0, 20.0), Vec2::new(40.0, 40.0), &t).is_empty());
    assert!(fill(Vec2::new(5.0, 9.0), Vec2::new(30.0, 9.0), Vec2::new(50.0, 9.0), &t).is_empty());
}

#[test_log::test]
fn shared_edge_drawn_by_both() {
    let a = Vec2::new(10.0, 10.0);
    let b = Vec2::new(50.0, 10.0);
    let c = Vec2::new(10.0, 50.0);
    let d = Vec2::new(50.0, 50.0);
    let t = Transform::default();
    let left = fill(a, b, c, &t);
    let right = fill(b, d, c, &t);
    // The diagonal from b to c lies on both
    assert!(left.contains(&(30, 30)));
    assert!(right.contains(&(30, 30)));
}

#[test_log::test]
fn rotation_about_centroid() {
    let a = Vec2::new(20.0, 20.0);
    let b = Vec2::new(44.0, 20.0);
    let c = Vec2::new(20.0, 44.0);
    let centroid = Vec2::new(28.0, 28.0);
    let plain = fill(a, b, c, &Transform::default());
    let turned = fill(a, b, c, &Transform::centered_triangle().with_rotation(std::f32::consts::PI));
    assert!(plain.contains(&(centroid.x as usize, centroid.y as usize)));
    assert!(turned.contains(&(centroid.x as usize, centroid.y as usize)));
    // Half turn about the centroid puts the right angle at (36,36)
    assert!(turned.contains(&(35, 35)));
    assert!(!plain.contains(&(35, 35)));
    // Edges on the far side of the half-open scan are lost after the turn
    let diff = (plain.len() as i64 - turned.len() as i64).abs();
    assert!(diff < 60, "{} vs {}", plain.len(), turned.len());
}

#[test_log::test]
fn default_anchor_pivots_on_first_point() {
    let a = Vec2::new(10.0, 10.0);
    let b = Vec2::new(30.0, 10.0);
    let c = Vec2::new(10.0, 30.0);
    let t = Transform::default().with_scale(Vec2::splat(2.0));
    let big = fill(a, b, c, &t);
    assert!(big.contains(&(11, 11)));
    assert!(big.contains(&(11, 45)));
    assert!(big.contains(&(45, 11)));
    assert!(!big.contains(&(9, 11)));
}

#[test_log::test]
fn offscreen_triangle_is_clamped() {
    let mut ren = RenderingBase::with_debug(16, 16, FrameStats::new());
    swraster::triangle(&mut ren, Vec2::new(-100.0, -100.0), Vec2::new(300.0, -100.0),
                       Vec2::new(-100.0, 300.0), Color::white(), &Transform::default());
    // Covers the whole buffer, minus the last row and column of the half-open scan
    assert_eq!(ren.debug().pixels_this_frame, 15 * 15);
    assert_eq!(ren.get(14, 14), Some(Rgb8::white()));
    assert_eq!(ren.get(15, 0), Some(Rgb8::black()));
    assert_eq!(ren.get(0, 15), Some(Rgb8::black()));

    let mut ren = RenderingBase::with_debug(16, 16, FrameStats::new());
    swraster::triangle(&mut ren, Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0),
                       Vec2::new(100.0, 200.0), Color::white(), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 0);
}

#[test_log::test]
fn overlay_marks_vertices() {
    let mut ren = RenderingBase::new(64, 64)
        .with_config(RenderConfig::new().debug_overlay(true));
    swraster::triangle(&mut ren, Vec2::new(20.0, 20.0), Vec2::new(40.0, 20.0), Vec2::new(20.0, 40.0),
                       Color::new(255.0, 255.0, 255.0, 64.0), &Transform::default());
    // Markers are opaque squares around each vertex
    assert_eq!(ren.get(18, 18), Some(Rgb8::new(0, 255, 0)));
    assert_ne!(ren.get(42, 18), Some(Rgb8::black()));
    assert_ne!(ren.get(18, 42), Some(Rgb8::black()));
}

#[test_log::test]
fn non_finite_points_draw_nothing() {
    let mut ren = RenderingBase::with_debug(16, 16, FrameStats::new());
    let (a, b, c) = (Vec2::new(1.0, 1.0), Vec2::new(12.0, 1.0), Vec2::new(1.0, 12.0));
    swraster::triangle(&mut ren, a, b, c, Color::white(), &Transform::default().with_scale(Vec2::new(f32::INFINITY, 1.0)));
    swraster::triangle(&mut ren, a, b, c, Color::white(), &Transform::default().with_scale(Vec2::splat(f32::NAN)));
    swraster::triangle(&mut ren, Vec2::new(f32::NAN, 1.0), b, c, Color::white(), &Transform::default());
    assert_eq!(ren.debug().pixels_this_frame, 0);
}
