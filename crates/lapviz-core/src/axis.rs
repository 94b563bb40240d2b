// File: crates/lapviz-core/src/axis.rs
// Summary: Axis configuration (title, explicit limits, formatter, color) and y-axis identifiers.

use serde::Deserialize;

use crate::color::Color;
use crate::format::{self, TickFormatter};

/// Which value axis a line dataset is plotted against. Serialized with the external
/// charting library's ids (`"y"`, `"y1"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum YAxisId {
    #[default]
    #[serde(rename = "y")]
    Primary,
    #[serde(rename = "y1")]
    Secondary,
}

#[derive(Clone, Debug)]
pub struct AxisConfig {
    pub title: Option<String>,
    /// Explicit lower limit; overrides the data minimum.
    pub min: Option<f64>,
    /// Explicit upper limit; overrides the data maximum.
    pub max: Option<f64>,
    pub formatter: TickFormatter,
    /// Title and tick label color; the theme's colors when unset.
    pub color: Option<Color>,
}

impl AxisConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_formatter(mut self, formatter: TickFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn format(&self, value: f64) -> String {
        (self.formatter)(value)
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self { title: None, min: None, max: None, formatter: format::integer, color: None }
    }
}
