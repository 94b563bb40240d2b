// File: crates/lapviz-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, documented render defaults).

use serde::Deserialize;

/// Default logical surface width in pixels.
pub const WIDTH: f32 = 800.0;
/// Default logical surface height in pixels.
pub const HEIGHT: f32 = 400.0;

/// Backing-store multiplier applied to every surface the engines render on.
/// Callers only ever work in logical pixels.
pub const DEFAULT_DEVICE_PIXEL_RATIO: f32 = 2.0;

/// Chart plot margin on every side, reserving room for ticks, titles and the legend.
pub const DEFAULT_CHART_PADDING: f32 = 60.0;
/// Margin kept free around the projected track map.
pub const DEFAULT_TRACK_PADDING: f32 = 50.0;
/// Half-extent of the dashed start/finish cross.
pub const DEFAULT_MARKER_SIZE: f32 = 15.0;
/// Share of a bar slot actually covered by bars; the rest is the gap between groups.
pub const DEFAULT_BAR_FILL_FACTOR: f32 = 0.8;
/// Evenly spaced ticks drawn per axis.
pub const DEFAULT_TICK_COUNT: usize = 6;

/// Screen margins, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }

    pub fn is_valid(&self) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(DEFAULT_CHART_PADDING)
    }
}
