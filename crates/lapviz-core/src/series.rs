// File: crates/lapviz-core/src/series.rs
// Summary: Dataset model: series columns, line/bar datasets with style hints, and the tagged chart inputs.
// Notes:
// - Series keep separate x/y columns, matching the external payload shape. A length
//   mismatch is representable on purpose and is rejected per dataset by the engine.

use crate::axis::{AxisConfig, YAxisId};
use crate::chart::ChartKind;
use crate::color::Color;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn from_samples<I: IntoIterator<Item = (f64, f64)>>(samples: I) -> Self {
        let (x, y) = samples.into_iter().unzip();
        Self { x, y }
    }

    /// x and y columns have the same length.
    pub fn is_consistent(&self) -> bool {
        self.x.len() == self.y.len()
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Paired samples with both coordinates finite.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Stretches of consecutive finite samples. A non-finite sample ends the current
    /// stretch, so gaps in the telemetry stay gaps on screen.
    pub fn runs(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in self.x.iter().zip(&self.y) {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Rendering hints for a line dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetStyle {
    pub color: Color,
    /// Area fill color; defaults to `color` when `fill` is set.
    pub fill_color: Option<Color>,
    pub fill: bool,
    /// Staircase interpolation for discrete signals (gear, brake).
    pub stepped: bool,
    pub width: f32,
    /// Radius of a marker drawn on every sample; 0 disables markers.
    pub point_radius: f32,
}

impl DatasetStyle {
    pub fn new(color: Color) -> Self {
        Self { color, fill_color: None, fill: false, stepped: false, width: 2.0, point_radius: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineDataset {
    pub label: String,
    pub series: Series,
    pub style: DatasetStyle,
    pub y_axis: YAxisId,
}

impl LineDataset {
    pub fn new(label: impl Into<String>, series: Series, color: Color) -> Self {
        Self { label: label.into(), series, style: DatasetStyle::new(color), y_axis: YAxisId::Primary }
    }

    pub fn filled(mut self, fill_color: Color) -> Self {
        self.style.fill = true;
        self.style.fill_color = Some(fill_color);
        self
    }

    pub fn stepped(mut self) -> Self {
        self.style.stepped = true;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.style.width = width;
        self
    }

    pub fn with_points(mut self, radius: f32) -> Self {
        self.style.point_radius = radius;
        self
    }

    pub fn on_axis(mut self, axis: YAxisId) -> Self {
        self.y_axis = axis;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarDataset {
    pub label: String,
    /// One value per category, in category order. Non-finite entries are not drawn.
    pub values: Vec<f64>,
    pub color: Color,
    pub fill_color: Option<Color>,
}

impl BarDataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self { label: label.into(), values, color, fill_color: None }
    }

    pub fn bar_color(&self) -> Color {
        self.fill_color.unwrap_or(self.color)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LineChartInput {
    pub title: Option<String>,
    pub datasets: Vec<LineDataset>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    /// Right-hand axis for datasets assigned to [`YAxisId::Secondary`].
    pub y2_axis: AxisConfig,
}

impl LineChartInput {
    pub fn new(datasets: Vec<LineDataset>) -> Self {
        Self { datasets, ..Self::default() }
    }

    pub fn axis(&self, id: YAxisId) -> &AxisConfig {
        match id {
            YAxisId::Primary => &self.y_axis,
            YAxisId::Secondary => &self.y2_axis,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BarChartInput {
    pub title: Option<String>,
    /// Ordered category labels; one slot per category regardless of values.
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
    pub category_axis: AxisConfig,
    pub value_axis: AxisConfig,
}

impl BarChartInput {
    pub fn new(labels: Vec<String>, datasets: Vec<BarDataset>) -> Self {
        Self { labels, datasets, ..Self::default() }
    }
}

/// Everything one chart render needs, tagged by chart kind.
#[derive(Clone, Debug)]
pub enum ChartInput {
    Line(LineChartInput),
    Bar(BarChartInput),
}

impl ChartInput {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartInput::Line(_) => ChartKind::Line,
            ChartInput::Bar(_) => ChartKind::Bar,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ChartInput::Line(l) => l.title.as_deref(),
            ChartInput::Bar(b) => b.title.as_deref(),
        }
    }

    pub fn dataset_count(&self) -> usize {
        match self {
            ChartInput::Line(l) => l.datasets.len(),
            ChartInput::Bar(b) => b.datasets.len(),
        }
    }
}

impl From<LineChartInput> for ChartInput {
    fn from(v: LineChartInput) -> Self {
        ChartInput::Line(v)
    }
}

impl From<BarChartInput> for ChartInput {
    fn from(v: BarChartInput) -> Self {
        ChartInput::Bar(v)
    }
}
