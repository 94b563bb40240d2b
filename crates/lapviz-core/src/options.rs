// File: crates/lapviz-core/src/options.rs
// Summary: Per-render configuration knobs for the chart engine and track projector, with fixed defaults.

use serde::Deserialize;

use crate::error::ChartError;
use crate::legend::LegendPosition;
use crate::theme::Theme;
use crate::types::{
    Insets, DEFAULT_BAR_FILL_FACTOR, DEFAULT_DEVICE_PIXEL_RATIO, DEFAULT_MARKER_SIZE, DEFAULT_TICK_COUNT,
    DEFAULT_TRACK_PADDING,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Margins between the canvas edge and the plot area.
    pub padding: Insets,
    pub device_pixel_ratio: f32,
    pub legend_position: LegendPosition,
    /// Share of each bar slot covered by bars, in `(0, 1]`.
    pub bar_fill_factor: f32,
    /// Ticks per axis, at least 2.
    pub tick_count: usize,
    /// Tick labels, axis titles, legend labels and the chart title. Disable for
    /// font-independent output.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            padding: Insets::default(),
            device_pixel_ratio: DEFAULT_DEVICE_PIXEL_RATIO,
            legend_position: LegendPosition::default(),
            bar_fill_factor: DEFAULT_BAR_FILL_FACTOR,
            tick_count: DEFAULT_TICK_COUNT,
            draw_labels: true,
            theme: Theme::default(),
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_ratio(self.device_pixel_ratio)?;
        if !self.padding.is_valid() {
            return Err(ChartError::InvalidOption(format!("padding must be non-negative, got {:?}", self.padding)));
        }
        if !(self.bar_fill_factor > 0.0 && self.bar_fill_factor <= 1.0) {
            return Err(ChartError::InvalidOption(format!(
                "bar_fill_factor must be in (0, 1], got {}",
                self.bar_fill_factor
            )));
        }
        if self.tick_count < 2 {
            return Err(ChartError::InvalidOption(format!("tick_count must be at least 2, got {}", self.tick_count)));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackOptions {
    /// Free margin around the projected track.
    pub padding: f32,
    pub device_pixel_ratio: f32,
    /// Half-extent of the dashed start/finish cross.
    pub marker_size: f32,
    pub marker_width: f32,
    pub segment_width: f32,
    /// Dark underlay stroked beneath the colored segments. Off by default.
    pub draw_base: bool,
    pub base_width: f32,
    pub theme: Theme,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_TRACK_PADDING,
            device_pixel_ratio: DEFAULT_DEVICE_PIXEL_RATIO,
            marker_size: DEFAULT_MARKER_SIZE,
            marker_width: 3.0,
            segment_width: 6.0,
            draw_base: false,
            base_width: 8.0,
            theme: Theme::default(),
        }
    }
}

impl TrackOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_ratio(self.device_pixel_ratio)?;
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ChartError::InvalidOption(format!("padding must be non-negative, got {}", self.padding)));
        }
        Ok(())
    }
}

fn validate_ratio(ratio: f32) -> Result<(), ChartError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidOption(format!("device_pixel_ratio must be positive, got {ratio}")))
    }
}
