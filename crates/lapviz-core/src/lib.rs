// File: crates/lapviz-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine, track projector and dataset adapter.

pub mod adapter;
pub mod axis;
pub mod bounds;
pub mod chart;
pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod options;
pub mod primitive;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod track;
pub mod types;

pub use adapter::{Dashboard, DatasetAdapter, DriverPalette, TelemetryPayload};
pub use axis::{AxisConfig, YAxisId};
pub use bounds::{Bounds, XyBounds};
pub use chart::{create_chart, render, ChartHandle, ChartKind, RenderReport};
pub use color::Color;
pub use error::{AdapterError, ChartError, ColorParseError, SurfaceError};
pub use geometry::{Point, Rect, Size};
pub use legend::LegendPosition;
pub use options::{ChartOptions, TrackOptions};
pub use primitive::{LineStyle, Painter};
pub use scale::{fit_aspect, map, Range, Transform};
pub use series::{BarChartInput, BarDataset, ChartInput, DatasetStyle, LineChartInput, LineDataset, Series};
pub use surface::{DrawCommand, LineCap, RecordingSurface, StrokeStyle, Surface, TextAlign, TextStyle};
pub use theme::Theme;
pub use track::{PathSegment, TrackInput, TrackProjector, TrackReport};
pub use types::Insets;
