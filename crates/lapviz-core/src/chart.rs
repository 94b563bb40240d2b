// File: crates/lapviz-core/src/chart.rs
// Summary: Chart engine: line and bar rendering (axes, ticks, legend, multi-dataset layout) onto a
//          high-DPI surface, behind an explicit `create_chart` factory and a per-surface handle.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::axis::{AxisConfig, YAxisId};
use crate::bounds::Bounds;
use crate::error::ChartError;
use crate::geometry::{Point, Rect, Size};
use crate::grid::ticks;
use crate::legend::{self, LegendEntry};
use crate::options::ChartOptions;
use crate::primitive::{staircase, LineStyle, Painter};
use crate::scale::{Range, Transform};
use crate::series::{BarChartInput, ChartInput, LineChartInput, LineDataset};
use crate::surface::{StrokeStyle, Surface, TextAlign};

const TICK_LENGTH: f32 = 5.0;
const TICK_LABEL_GAP: f32 = 10.0;
const X_LABEL_OFFSET: f32 = 20.0;
const X_TITLE_OFFSET: f32 = 42.0;
const Y_TITLE_OFFSET: f32 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("line") {
            Ok(ChartKind::Line)
        } else if s.eq_ignore_ascii_case("bar") {
            Ok(ChartKind::Bar)
        } else {
            Err(ChartError::UnknownKind(s.to_string()))
        }
    }
}

/// What one render pass actually drew.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    pub plot: Rect,
    pub drawn_datasets: usize,
    /// Datasets left out because of a shape mismatch, missing bounds or no finite samples.
    pub skipped_datasets: usize,
    pub x_bounds: Option<Bounds>,
    /// Primary value axis (the bar value axis for bar charts).
    pub y_bounds: Option<Bounds>,
    pub y2_bounds: Option<Bounds>,
}

impl RenderReport {
    fn empty(plot: Rect) -> Self {
        Self { plot, drawn_datasets: 0, skipped_datasets: 0, x_bounds: None, y_bounds: None, y2_bounds: None }
    }
}

/// A chart bound to one surface. Holding the handle keeps the surface mutably borrowed, so a
/// second chart cannot draw on the same surface until this one is destroyed or dropped.
pub struct ChartHandle<'s, S: Surface> {
    surface: &'s mut S,
    input: ChartInput,
    options: ChartOptions,
    report: RenderReport,
}

/// Render `input` as a `kind` chart onto `surface` and return the handle for later updates.
///
/// Errors only on configuration problems: a kind that does not match the input, an invalid
/// option, or a surface without drawable area. Data problems are logged and skipped.
pub fn create_chart<'s, S: Surface>(
    kind: ChartKind,
    input: ChartInput,
    surface: &'s mut S,
    options: ChartOptions,
) -> Result<ChartHandle<'s, S>, ChartError> {
    if input.kind() != kind {
        return Err(ChartError::KindMismatch { requested: kind, supplied: input.kind() });
    }
    options.validate()?;
    let report = draw_chart(&mut *surface, &input, &options)?;
    Ok(ChartHandle { surface, input, options, report })
}

/// [`create_chart`] with the kind taken from the input variant.
pub fn render<'s, S: Surface>(
    input: ChartInput,
    surface: &'s mut S,
    options: ChartOptions,
) -> Result<ChartHandle<'s, S>, ChartError> {
    create_chart(input.kind(), input, surface, options)
}

impl<'s, S: Surface> ChartHandle<'s, S> {
    pub fn kind(&self) -> ChartKind {
        self.input.kind()
    }

    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn report(&self) -> &RenderReport {
        &self.report
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Backend access for read-back (pixel export). Drawing through it is overwritten by the
    /// next `update`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Re-render from scratch. The backing store is reallocated and cleared first.
    pub fn update(&mut self) -> Result<&RenderReport, ChartError> {
        self.report = draw_chart(&mut *self.surface, &self.input, &self.options)?;
        Ok(&self.report)
    }

    /// Replace the chart input (same kind) and re-render.
    pub fn set_input(&mut self, input: ChartInput) -> Result<&RenderReport, ChartError> {
        if input.kind() != self.kind() {
            return Err(ChartError::KindMismatch { requested: self.kind(), supplied: input.kind() });
        }
        self.input = input;
        self.update()
    }

    /// Wipe the chart back to the background and hand the surface back to the caller.
    pub fn destroy(self) -> &'s mut S {
        self.surface.clear(self.options.theme.background);
        self.surface
    }
}

fn plot_area(size: Size, options: &ChartOptions) -> Rect {
    let p = options.padding;
    let right = (size.width - p.right).max(p.left + 1.0);
    let bottom = (size.height - p.bottom).max(p.top + 1.0);
    Rect::from_ltrb(p.left, p.top, right, bottom)
}

fn draw_chart(surface: &mut dyn Surface, input: &ChartInput, options: &ChartOptions) -> Result<RenderReport, ChartError> {
    let size = surface.logical_size();
    if size.is_empty() {
        return Err(ChartError::MissingSurface { width: size.width, height: size.height });
    }
    surface.configure(options.device_pixel_ratio)?;

    let mut painter = Painter::new(surface);
    painter.clear(options.theme.background);
    let plot = plot_area(size, options);

    let report = match input {
        ChartInput::Line(line) => draw_line_chart(&mut painter, plot, line, options),
        ChartInput::Bar(bar) => draw_bar_chart(&mut painter, plot, bar, options),
    };

    if let (true, Some(title)) = (options.draw_labels, input.title()) {
        let theme = &options.theme;
        let style = theme.text(theme.title, theme.title_font_size).aligned(TextAlign::Center).bold();
        let y = (options.padding.top * 0.5).max(theme.title_font_size);
        painter.draw_text(title, size.width * 0.5, y, &style);
    }

    debug!(
        kind = %input.kind(),
        drawn = report.drawn_datasets,
        skipped = report.skipped_datasets,
        "chart rendered"
    );
    Ok(report)
}

// ---- line charts --------------------------------------------------------------

fn draw_line_chart(painter: &mut Painter<'_>, plot: Rect, input: &LineChartInput, options: &ChartOptions) -> RenderReport {
    let mut report = RenderReport::empty(plot);

    let valid: Vec<&LineDataset> = input
        .datasets
        .iter()
        .filter(|d| {
            if d.series.is_consistent() {
                return true;
            }
            warn!(
                dataset = %d.label,
                x_len = d.series.x.len(),
                y_len = d.series.y.len(),
                "skipping dataset: x/y length mismatch"
            );
            false
        })
        .collect();
    report.skipped_datasets = input.datasets.len() - valid.len();

    let x_bounds = Bounds::with_limits(
        Bounds::union_all(valid.iter().map(|d| Bounds::of(d.series.samples().map(|(x, _)| x)))),
        input.x_axis.min,
        input.x_axis.max,
    );
    let y_bounds = |axis: YAxisId| {
        Bounds::with_limits(
            Bounds::union_all(
                valid
                    .iter()
                    .filter(|d| d.y_axis == axis)
                    .map(|d| Bounds::of(d.series.samples().map(|(_, y)| y))),
            ),
            input.axis(axis).min,
            input.axis(axis).max,
        )
    };
    report.x_bounds = x_bounds;
    report.y_bounds = y_bounds(YAxisId::Primary);
    report.y2_bounds = y_bounds(YAxisId::Secondary);

    let x_pixels = Range::new(plot.left as f64, plot.right as f64);
    let y_pixels = Range::new(plot.bottom as f64, plot.top as f64);
    let tx = x_bounds.map(|b| Transform::between(b.into(), x_pixels, 0.0));
    let ty = |b: Option<Bounds>| b.map(|b| (b, Transform::between(b.into(), y_pixels, 0.0)));
    let primary = ty(report.y_bounds);
    let secondary = ty(report.y2_bounds);

    for d in &valid {
        let axis = match d.y_axis {
            YAxisId::Primary => primary,
            YAxisId::Secondary => secondary,
        };
        let (Some(tx), Some((yb, ty))) = (tx, axis) else {
            debug!(dataset = %d.label, axis = ?d.y_axis, "skipping dataset: axis has no bounds");
            report.skipped_datasets += 1;
            continue;
        };
        let runs: Vec<Vec<Point>> = d
            .series
            .runs()
            .into_iter()
            .map(|run| run.into_iter().map(|(x, y)| Point::new(tx.apply(x) as f32, ty.apply(y) as f32)).collect())
            .collect();
        if runs.is_empty() {
            debug!(dataset = %d.label, "skipping dataset: no finite samples");
            report.skipped_datasets += 1;
            continue;
        }
        // Fill reaches down to zero when it is on screen, else to the nearest edge.
        let baseline = ty.apply(yb.clamp(0.0)) as f32;
        painter.clipped(plot, |painter| {
            for run in &runs {
                draw_line_dataset(painter, d, run, baseline);
            }
        });
        report.drawn_datasets += 1;
    }

    let n = options.tick_count;
    let x_labels = tx.map(|t| value_labels(&t, x_pixels, &input.x_axis, n)).unwrap_or_default();
    draw_horizontal_axis(painter, plot, &input.x_axis, &x_labels, options);

    let y_labels = primary.map(|(_, t)| value_labels(&t, y_pixels, &input.y_axis, n)).unwrap_or_default();
    draw_vertical_axis(painter, plot, Side::Left, &input.y_axis, &y_labels, options);

    if input.datasets.iter().any(|d| d.y_axis == YAxisId::Secondary) {
        let y2_labels = secondary.map(|(_, t)| value_labels(&t, y_pixels, &input.y2_axis, n)).unwrap_or_default();
        draw_vertical_axis(painter, plot, Side::Right, &input.y2_axis, &y2_labels, options);
    }

    let entries: Vec<LegendEntry> = input
        .datasets
        .iter()
        .map(|d| LegendEntry { label: d.label.clone(), color: d.style.color })
        .collect();
    legend::draw(painter, &entries, plot, options.legend_position, &options.theme, options.draw_labels);

    report
}

fn draw_line_dataset(painter: &mut Painter<'_>, d: &LineDataset, points: &[Point], baseline: f32) {
    let style = &d.style;
    if style.fill && points.len() >= 2 {
        let outline = if style.stepped { staircase(points) } else { points.to_vec() };
        let mut area = Vec::with_capacity(outline.len() + 2);
        area.push(Point::new(outline[0].x, baseline));
        area.extend_from_slice(&outline);
        area.push(Point::new(outline[outline.len() - 1].x, baseline));
        painter.draw_filled_path(&area, style.fill_color.unwrap_or(style.color));
    }

    let line = LineStyle { stroke: StrokeStyle::solid(style.color, style.width), stepped: style.stepped };
    painter.draw_line(points, &line);
    painter.draw_points(points, style.point_radius, style.color);
}

// ---- bar charts ---------------------------------------------------------------

fn draw_bar_chart(painter: &mut Painter<'_>, plot: Rect, input: &BarChartInput, options: &ChartOptions) -> RenderReport {
    let mut report = RenderReport::empty(plot);
    let categories = input.labels.len();
    let series_count = input.datasets.len();

    for d in &input.datasets {
        if d.values.len() != categories {
            warn!(
                dataset = %d.label,
                values = d.values.len(),
                categories,
                "bar dataset length does not match category count"
            );
        }
    }

    let value_bounds = Bounds::with_limits(
        Bounds::for_bars(input.datasets.iter().flat_map(|d| d.values.iter().take(categories).copied()), 0.0),
        input.value_axis.min,
        input.value_axis.max,
    );
    report.y_bounds = value_bounds;

    let slot = if categories > 0 { plot.width() / categories as f32 } else { 0.0 };
    let bar_width = if categories > 0 && series_count > 0 {
        plot.width() / (categories * series_count) as f32 * options.bar_fill_factor
    } else {
        0.0
    };
    let group_width = bar_width * series_count as f32;

    let y_pixels = Range::new(plot.bottom as f64, plot.top as f64);
    let ty = value_bounds.map(|b| (b, Transform::between(b.into(), y_pixels, 0.0)));

    match ty {
        Some((vb, ty)) => painter.clipped(plot, |painter| {
            let baseline = ty.apply(vb.clamp(0.0)) as f32;
            for (di, d) in input.datasets.iter().enumerate() {
                let mut any = false;
                for (ci, &v) in d.values.iter().take(categories).enumerate() {
                    if !v.is_finite() {
                        warn!(dataset = %d.label, category = %input.labels[ci], "skipping non-finite bar value");
                        continue;
                    }
                    let x = plot.left + ci as f32 * slot + (slot - group_width) * 0.5 + di as f32 * bar_width;
                    let top = ty.apply(v) as f32;
                    painter.draw_bar(x, top.min(baseline), bar_width, (baseline - top).abs(), d.bar_color());
                    any = true;
                }
                if any {
                    report.drawn_datasets += 1;
                } else {
                    debug!(dataset = %d.label, "skipping bar dataset: no drawable values");
                    report.skipped_datasets += 1;
                }
            }
        }),
        None => report.skipped_datasets = series_count,
    }

    let category_labels: Vec<(f32, String)> = input
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| (plot.left + (i as f32 + 0.5) * slot, label.clone()))
        .collect();
    draw_horizontal_axis(painter, plot, &input.category_axis, &category_labels, options);

    let y_labels = ty
        .map(|(_, t)| value_labels(&t, y_pixels, &input.value_axis, options.tick_count))
        .unwrap_or_default();
    draw_vertical_axis(painter, plot, Side::Left, &input.value_axis, &y_labels, options);

    let entries: Vec<LegendEntry> = input
        .datasets
        .iter()
        .map(|d| LegendEntry { label: d.label.clone(), color: d.bar_color() })
        .collect();
    legend::draw(painter, &entries, plot, options.legend_position, &options.theme, options.draw_labels);

    report
}

// ---- axes -----------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Evenly spaced tick pixels across `pixels` with their inverse-mapped, formatted values.
fn value_labels(t: &Transform, pixels: Range, axis: &AxisConfig, count: usize) -> Vec<(f32, String)> {
    ticks(t, pixels, count)
        .into_iter()
        .map(|tick| (tick.pixel as f32, axis.format(tick.value)))
        .collect()
}

fn draw_horizontal_axis(painter: &mut Painter<'_>, plot: Rect, axis: &AxisConfig, labels: &[(f32, String)], options: &ChartOptions) {
    let theme = &options.theme;
    let line = StrokeStyle::solid(theme.axis_line, 1.0);
    painter.draw_segment(Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom), &line);

    let label_style = theme.text(axis.color.unwrap_or(theme.tick_label), theme.font_size).aligned(TextAlign::Center);
    for (px, text) in labels {
        painter.draw_segment(Point::new(*px, plot.bottom), Point::new(*px, plot.bottom + TICK_LENGTH), &line);
        if options.draw_labels {
            painter.draw_text(text, *px, plot.bottom + X_LABEL_OFFSET, &label_style);
        }
    }

    if let (true, Some(title)) = (options.draw_labels, axis.title.as_deref()) {
        let style = theme.text(axis.color.unwrap_or(theme.axis_title), theme.font_size)
            .aligned(TextAlign::Center)
            .bold();
        painter.draw_text(title, plot.center_x(), plot.bottom + X_TITLE_OFFSET, &style);
    }
}

fn draw_vertical_axis(painter: &mut Painter<'_>, plot: Rect, side: Side, axis: &AxisConfig, labels: &[(f32, String)], options: &ChartOptions) {
    let theme = &options.theme;
    let line = StrokeStyle::solid(theme.axis_line, 1.0);
    let (x, outward, align) = match side {
        Side::Left => (plot.left, -1.0, TextAlign::Right),
        Side::Right => (plot.right, 1.0, TextAlign::Left),
    };
    painter.draw_segment(Point::new(x, plot.top), Point::new(x, plot.bottom), &line);

    let label_style = theme.text(axis.color.unwrap_or(theme.tick_label), theme.font_size).aligned(align);
    for (py, text) in labels {
        painter.draw_segment(Point::new(x, *py), Point::new(x + outward * TICK_LENGTH, *py), &line);
        if options.draw_labels {
            painter.draw_text(text, x + outward * TICK_LABEL_GAP, *py + 4.0, &label_style);
        }
    }

    if let (true, Some(title)) = (options.draw_labels, axis.title.as_deref()) {
        let title_align = match side {
            Side::Left => TextAlign::Left,
            Side::Right => TextAlign::Right,
        };
        let style = theme.text(axis.color.unwrap_or(theme.axis_title), theme.font_size)
            .aligned(title_align)
            .bold();
        painter.draw_text(title, x, plot.top - Y_TITLE_OFFSET, &style);
    }
}
