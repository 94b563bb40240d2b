// File: crates/lapviz-core/src/track.rs
// Summary: Track projector: aspect-locked fit of colored racing-line segments onto a surface,
//          with a dark underlay and a dashed start/finish cross.

use tracing::{debug, warn};

use crate::bounds::Bounds;
use crate::color::Color;
use crate::error::ChartError;
use crate::geometry::{Point, Size};
use crate::options::TrackOptions;
use crate::primitive::{LineStyle, Painter};
use crate::scale::{fit_aspect, Transform};
use crate::surface::{DrawCommand, RecordingSurface, StrokeStyle, Surface};

/// One colored stretch of racing line, usually the fastest driver through a minisector.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSegment {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Color,
    /// Driver that owns this stretch, if known.
    pub owner: Option<String>,
}

impl PathSegment {
    pub fn new(x: Vec<f64>, y: Vec<f64>, color: Color) -> Self {
        Self { x, y, color, owner: None }
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    fn is_consistent(&self) -> bool {
        self.x.len() == self.y.len()
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| (x, y)).filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackInput {
    pub segments: Vec<PathSegment>,
    /// Data-space position of the start/finish cross. Omitted when `None`.
    pub start_marker: Option<(f64, f64)>,
}

impl TrackInput {
    /// Segments with the start marker on the first point of the first segment.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        let start_marker = segments
            .first()
            .and_then(|s| s.x.first().copied().zip(s.y.first().copied()))
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        Self { segments, start_marker }
    }

    pub fn with_start_marker(mut self, marker: Option<(f64, f64)>) -> Self {
        self.start_marker = marker;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackReport {
    pub drawn_segments: usize,
    pub skipped_segments: usize,
    /// Shared x/y transforms; `None` when there was nothing to fit.
    pub transforms: Option<(Transform, Transform)>,
}

#[derive(Clone, Debug, Default)]
pub struct TrackProjector {
    options: TrackOptions,
}

impl TrackProjector {
    pub fn new(options: TrackOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TrackOptions {
        &self.options
    }

    /// Draw commands for `input` on a canvas of `canvas` logical size, without touching a backend.
    pub fn project(&self, input: &TrackInput, canvas: Size) -> Vec<DrawCommand> {
        let mut recording = RecordingSurface::new(canvas.width, canvas.height);
        self.draw(input, &mut recording);
        recording.into_commands()
    }

    /// Configure `surface` for the device ratio and draw the track onto it.
    pub fn render(&self, input: &TrackInput, surface: &mut dyn Surface) -> Result<TrackReport, ChartError> {
        self.options.validate()?;
        let size = surface.logical_size();
        if size.is_empty() {
            return Err(ChartError::MissingSurface { width: size.width, height: size.height });
        }
        surface.configure(self.options.device_pixel_ratio)?;
        Ok(self.draw(input, surface))
    }

    fn draw(&self, input: &TrackInput, surface: &mut dyn Surface) -> TrackReport {
        let opts = &self.options;
        let size = surface.logical_size();
        let mut painter = Painter::new(surface);
        painter.clear(opts.theme.track_background);

        let mut report = TrackReport::default();
        let valid: Vec<&PathSegment> = input
            .segments
            .iter()
            .filter(|s| {
                if s.is_consistent() {
                    return true;
                }
                warn!(
                    owner = s.owner.as_deref().unwrap_or("-"),
                    x_len = s.x.len(),
                    y_len = s.y.len(),
                    "skipping track segment: x/y length mismatch"
                );
                false
            })
            .collect();
        report.skipped_segments = input.segments.len() - valid.len();

        let xb = Bounds::union_all(valid.iter().map(|s| Bounds::of(s.points().map(|(x, _)| x))));
        let yb = Bounds::union_all(valid.iter().map(|s| Bounds::of(s.points().map(|(_, y)| y))));
        let (Some(xb), Some(yb)) = (xb, yb) else {
            debug!(segments = input.segments.len(), "track has no finite points; cleared only");
            report.skipped_segments = input.segments.len();
            return report;
        };

        let (tx, ty) = fit_aspect(xb, yb, size, opts.padding as f64);
        report.transforms = Some((tx, ty));
        let project = |s: &PathSegment| -> Vec<Point> {
            s.points().map(|(x, y)| Point::new(tx.apply(x) as f32, ty.apply(y) as f32)).collect()
        };

        let projected: Vec<(&PathSegment, Vec<Point>)> = valid.into_iter().map(|s| (s, project(s))).collect();

        if opts.draw_base {
            let base = LineStyle::new(StrokeStyle::solid(opts.theme.track_base, opts.base_width).round());
            for (_, points) in &projected {
                painter.draw_line(points, &base);
            }
        }

        for (segment, points) in &projected {
            if points.len() < 2 {
                debug!(owner = segment.owner.as_deref().unwrap_or("-"), points = points.len(), "skipping short track segment");
                report.skipped_segments += 1;
                continue;
            }
            let style = LineStyle::new(StrokeStyle::solid(segment.color, opts.segment_width).round());
            painter.draw_line(points, &style);
            report.drawn_segments += 1;
        }

        if let Some((x, y)) = input.start_marker.filter(|(x, y)| x.is_finite() && y.is_finite()) {
            let stroke = StrokeStyle::solid(opts.theme.start_marker, opts.marker_width);
            painter.draw_dashed_cross(tx.apply(x) as f32, ty.apply(y) as f32, opts.marker_size, &stroke);
        }

        debug!(drawn = report.drawn_segments, skipped = report.skipped_segments, "track rendered");
        report
    }
}
