//! Debug instrumentation
//!
//! A [DebugSink] is owned by the [RenderingBase] and told about every pixel
//!   written and any diagnostic text a primitive produces. The default
//!   [NoDebug] sink compiles away.
//!
//! The overlay helpers draw outlines and markers on top of primitives when
//!   [RenderConfig::debug_overlay] is set.
//!
//! [DebugSink]: trait.DebugSink.html
//! [NoDebug]: struct.NoDebug.html
//! [RenderingBase]: ../base/struct.RenderingBase.html
//! [RenderConfig::debug_overlay]: ../config/struct.RenderConfig.html#structfield.debug_overlay

use crate::base::RenderingBase;
use crate::color::Color;
use crate::line::line;
use crate::math::Rect;
use crate::math::Vec2;
use crate::math::Vec2i;
use crate::rect::rectangle;
use crate::transform::Transform;
use crate::transform::transform_points;

/// Receiver of debug events
pub trait DebugSink {
    /// A blended pixel was written at (`x`,`y`)
    fn pixel_written(&mut self, _x: usize, _y: usize) {}
    /// Diagnostic text
    fn push_text(&mut self, _text: &str) {}
    /// The frame driver finished a frame
    fn end_frame(&mut self) {}
    /// Whether text is wanted; formatting is skipped when false
    fn wants_text(&self) -> bool { false }
}

/// Sink that ignores everything
#[derive(Debug,Default,Copy,Clone)]
pub struct NoDebug;

impl DebugSink for NoDebug {}

/// Per-frame pixel counters and a queue of diagnostic text
#[derive(Debug,Default,Clone)]
pub struct FrameStats {
    /// Pixels written since the last `end_frame`
    pub pixels_this_frame: u64,
    /// Pixels written over the lifetime of the sink
    pub total_pixels: u64,
    /// Completed frames
    pub frames: u64,
    /// Text pushed since the last `end_frame`
    pub text: Vec<String>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DebugSink for FrameStats {
    fn pixel_written(&mut self, _x: usize, _y: usize) {
        self.pixels_this_frame += 1;
        self.total_pixels += 1;
    }
    fn push_text(&mut self, text: &str) {
        self.text.push(text.to_string());
    }
    fn end_frame(&mut self) {
        self.pixels_this_frame = 0;
        self.frames += 1;
        self.text.clear();
    }
    fn wants_text(&self) -> bool {
        true
    }
}

pub(crate) const RED: Color    = Color::rgb(255.0, 0.0, 0.0);
pub(crate) const GREEN: Color  = Color::rgb(0.0, 255.0, 0.0);
pub(crate) const BLUE: Color   = Color::rgb(0.0, 0.0, 255.0);
pub(crate) const PURPLE: Color = Color::rgb(255.0, 0.0, 255.0);
pub(crate) const CYAN: Color   = Color::rgb(0.0, 255.0, 255.0);
pub(crate) const YELLOW: Color = Color::rgb(255.0, 255.0, 0.0);

/// Half width of vertex markers
const MARKER: f32 = 5.0;
/// Length of the basis cross drawn at a triangle origin
const AXIS_LEN: f32 = 50.0;

/// Outline of an axis aligned box
pub(crate) fn draw_box<D: DebugSink>(ren: &mut RenderingBase<D>, r: &Rect, color: Color) {
    let corners = [r.min, Vec2::new(r.min.x, r.max.y), r.max, Vec2::new(r.max.x, r.min.y)];
    draw_outline(ren, &corners, color);
}

/// Closed polygon through `points`
pub(crate) fn draw_outline<D: DebugSink>(ren: &mut RenderingBase<D>, points: &[Vec2], color: Color) {
    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        line(ren, Vec2i::truncate(p), Vec2i::truncate(q), color);
    }
}

/// Small filled square centred on `p`
pub(crate) fn draw_marker<D: DebugSink>(ren: &mut RenderingBase<D>, p: Vec2, color: Color) {
    let half = Vec2::splat(MARKER);
    rectangle(ren, p - half, p + half, color, &Transform::default());
}

/// Rotated coordinate basis at `origin`
pub(crate) fn draw_basis<D: DebugSink>(ren: &mut RenderingBase<D>, origin: Vec2, t: &Transform) {
    let mut axes = [Vec2::new(AXIS_LEN, 0.0), Vec2::new(0.0, AXIS_LEN)];
    transform_points(origin, &mut axes, t.scale, t.rotation);
    let o = Vec2i::truncate(origin);
    for &end in axes.iter() {
        line(ren, o, Vec2i::truncate(end), CYAN);
    }
}
