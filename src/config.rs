//! Rendering configuration

/// Border width that reproduces the legacy behaviour of never writing the
///   outermost row and column of pixels
pub const LEGACY_BORDER: usize = 1;

/// Default tolerance for blended components that land above 255
pub const COLOR_EPSILON: f32 = 0.1;

/// Options held by a [RenderingBase](../base/struct.RenderingBase.html)
///
///     use swraster::RenderConfig;
///
///     let cfg = RenderConfig::new().border(1).debug_overlay(true);
///     assert_eq!(cfg.border, 1);
///     assert!(cfg.debug_overlay);
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RenderConfig {
    /// Pixels within `border` of any edge are never written
    pub border: usize,
    /// Draw diagnostic outlines and markers on top of primitives
    pub debug_overlay: bool,
    /// How far a blended component may exceed 255 before it is a bug
    pub color_epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { border: 0, debug_overlay: false, color_epsilon: COLOR_EPSILON }
    }
}

impl RenderConfig {
    /// Default configuration, no border and no overlay
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the border width
    pub fn border(mut self, border: usize) -> Self {
        self.border = border;
        self
    }
    /// Enable or disable the debug overlay
    pub fn debug_overlay(mut self, on: bool) -> Self {
        self.debug_overlay = on;
        self
    }
    /// Set the blend overflow tolerance
    pub fn color_epsilon(mut self, eps: f32) -> Self {
        self.color_epsilon = eps;
        self
    }
}
