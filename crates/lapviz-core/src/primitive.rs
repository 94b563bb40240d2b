// File: crates/lapviz-core/src/primitive.rs
// Summary: Primitive renderer: maps already-computed pixel geometry onto surface calls.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::surface::{StrokeStyle, Surface, TextStyle};

/// Dash pattern used by the start/finish cross when the style does not bring its own.
pub const DEFAULT_MARKER_DASH: [f32; 2] = [10.0, 5.0];

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub stroke: StrokeStyle,
    /// Hold each value until the next sample (horizontal, then vertical).
    pub stepped: bool,
}

impl LineStyle {
    pub fn new(stroke: StrokeStyle) -> Self {
        Self { stroke, stepped: false }
    }
}

/// Expand a polyline into staircase form: `a -> (b.x, a.y) -> b` for every pair.
pub fn staircase(points: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len().saturating_mul(2));
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(Point::new(p.x, points[i - 1].y));
        }
        out.push(*p);
    }
    out
}

pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self { surface }
    }

    pub fn clear(&mut self, color: Color) {
        self.surface.clear(color);
    }

    /// Connected polyline. Fewer than two points draws nothing.
    pub fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        if style.stepped {
            self.surface.stroke_polyline(&staircase(points), &style.stroke);
        } else {
            self.surface.stroke_polyline(points, &style.stroke);
        }
    }

    /// Run `draw` with every mark clipped to `rect`.
    pub fn clipped(&mut self, rect: Rect, draw: impl FnOnce(&mut Self)) {
        self.surface.push_clip(rect);
        draw(self);
        self.surface.pop_clip();
    }

    pub fn draw_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.surface.stroke_polyline(&[from, to], style);
    }

    /// Closed filled polygon. Fewer than three points draws nothing.
    pub fn draw_filled_path(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.surface.fill_polygon(points, color);
    }

    /// Filled bar with its top-left corner at `(x, y_top)`. A negative height is flipped.
    pub fn draw_bar(&mut self, x: f32, y_top: f32, width: f32, height: f32, color: Color) {
        let rect = Rect::from_ltwh(x, y_top, width, height).normalized();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        self.surface.fill_rect(rect, color);
    }

    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        self.surface.draw_text(text, Point::new(x, y), style);
    }

    /// An "X" of half-extent `size` centered on `(x, y)`, stroked dashed.
    pub fn draw_dashed_cross(&mut self, x: f32, y: f32, size: f32, style: &StrokeStyle) {
        let mut stroke = style.clone();
        stroke.dash.get_or_insert(DEFAULT_MARKER_DASH);
        self.surface.stroke_polyline(&[Point::new(x - size, y - size), Point::new(x + size, y + size)], &stroke);
        self.surface.stroke_polyline(&[Point::new(x - size, y + size), Point::new(x + size, y - size)], &stroke);
    }

    pub fn draw_points(&mut self, points: &[Point], radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        for p in points {
            self.surface.fill_circle(*p, radius, color);
        }
    }
}
