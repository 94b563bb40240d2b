// File: crates/lapviz-core/src/surface.rs
// Summary: Drawing-surface seam (backend trait), stroke/text styles, and a recording surface that
//          captures draw calls as a display list.

use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// `[on, off]` dash lengths; solid when `None`.
    pub dash: Option<[f32; 2]>,
    pub cap: LineCap,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None, cap: LineCap::Butt }
    }

    pub fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]), cap: LineCap::Butt }
    }

    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Sans-serif fallback chain used when a style names no families of its own.
pub const DEFAULT_FONT_FAMILIES: &[&str] =
    &["Inter", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
    pub bold: bool,
    /// Font families in fallback order.
    pub families: &'static [&'static str],
}

impl TextStyle {
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size, align: TextAlign::Left, bold: false, families: DEFAULT_FONT_FAMILIES }
    }

    pub fn with_families(mut self, families: &'static [&'static str]) -> Self {
        self.families = families;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A 2D drawing target. Coordinates are logical pixels; the backend owns the mapping to
/// device pixels.
///
/// Contract:
/// - `configure` (re)allocates the backing store at `logical_size * device_pixel_ratio` and
///   scales all later drawing by the ratio. Previous content is discarded.
/// - `clear` overwrites every pixel.
/// - Text is anchored at its baseline; `TextStyle::align` picks which end sits on `anchor.x`.
/// - `push_clip` restricts drawing to a rect until the matching `pop_clip`. Clips nest.
pub trait Surface {
    fn logical_size(&self) -> Size;
    fn device_pixel_ratio(&self) -> f32;
    fn configure(&mut self, device_pixel_ratio: f32) -> Result<(), SurfaceError>;
    fn clear(&mut self, color: Color);
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Configure { device_pixel_ratio: f32 },
    Clear(Color),
    Polyline { points: Vec<Point>, style: StrokeStyle },
    Polygon { points: Vec<Point>, color: Color },
    Rect { rect: Rect, color: Color },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, anchor: Point, style: TextStyle },
    PushClip(Rect),
    PopClip,
}

impl DrawCommand {
    /// Issue this command against another surface.
    pub fn replay(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        match self {
            DrawCommand::Configure { device_pixel_ratio } => surface.configure(*device_pixel_ratio)?,
            DrawCommand::Clear(c) => surface.clear(*c),
            DrawCommand::Polyline { points, style } => surface.stroke_polyline(points, style),
            DrawCommand::Polygon { points, color } => surface.fill_polygon(points, *color),
            DrawCommand::Rect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::Circle { center, radius, color } => surface.fill_circle(*center, *radius, *color),
            DrawCommand::Text { text, anchor, style } => surface.draw_text(text, *anchor, style),
            DrawCommand::PushClip(rect) => surface.push_clip(*rect),
            DrawCommand::PopClip => surface.pop_clip(),
        }
        Ok(())
    }
}

/// Surface that keeps the visible display list instead of pixels. `configure` and `clear`
/// drop everything recorded before them, matching what a raster surface would still show.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    ratio: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Size::new(width, height), ratio: 1.0, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Point], &StrokeStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, style } => Some((points.as_slice(), style)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> Size {
        self.size
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio
    }

    fn configure(&mut self, device_pixel_ratio: f32) -> Result<(), SurfaceError> {
        self.ratio = device_pixel_ratio;
        self.commands.clear();
        self.commands.push(DrawCommand::Configure { device_pixel_ratio });
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.commands.retain(|c| matches!(c, DrawCommand::Configure { .. }));
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), style: style.clone() });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), anchor, style: style.clone() });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
