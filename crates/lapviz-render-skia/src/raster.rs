// File: crates/lapviz-render-skia/src/raster.rs
// Summary: Skia CPU raster surface: high-DPI backing store sized logical x ratio, drawing in logical
//          pixels, RGBA and PNG read-back.

use std::path::Path;

use lapviz_core::surface::{LineCap, StrokeStyle, Surface, TextStyle};
use lapviz_core::{Color, Point, Rect, Size, SurfaceError};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn path_of(points: &[Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if close {
            path.close();
        }
    }
    path
}

fn allocate(logical: Size, ratio: f32) -> Result<skia::Surface, SurfaceError> {
    let width = (logical.width * ratio).round().max(1.0) as i32;
    let height = (logical.height * ratio).round().max(1.0) as i32;
    let mut surface =
        skia::surfaces::raster_n32_premul((width, height)).ok_or(SurfaceError::Allocation { width, height })?;
    surface.canvas().scale((ratio, ratio));
    Ok(surface)
}

/// Offscreen raster target. The caller thinks in logical pixels; the backing store holds
/// `logical * device_pixel_ratio` physical pixels.
pub struct RasterSurface {
    logical: Size,
    ratio: f32,
    surface: skia::Surface,
    text: TextShaper,
}

impl RasterSurface {
    /// A surface of `width x height` logical pixels at ratio 1 until configured.
    pub fn new(width: f32, height: f32) -> Result<Self, SurfaceError> {
        let logical = Size::new(width, height);
        if logical.is_empty() {
            return Err(SurfaceError::Allocation { width: width as i32, height: height as i32 });
        }
        Ok(Self { logical, ratio: 1.0, surface: allocate(logical, 1.0)?, text: TextShaper::new() })
    }

    /// Physical backing-store size.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32), SurfaceError> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, pixels.as_mut_slice(), row_bytes, (0, 0)) {
            return Err(SurfaceError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32))
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SurfaceError::Encode("PNG encoder returned no data".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path.as_ref(), bytes)?;
        debug!(path = %path.as_ref().display(), "wrote png");
        Ok(())
    }

    fn stroke_paint(style: &StrokeStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(to_skia(style.color));
        if style.cap == LineCap::Round {
            paint.set_stroke_cap(skia::paint::Cap::Round);
            paint.set_stroke_join(skia::paint::Join::Round);
        }
        if let Some([on, off]) = style.dash {
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        paint
    }

    fn fill_paint(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        paint
    }
}

impl Surface for RasterSurface {
    fn logical_size(&self) -> Size {
        self.logical
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio
    }

    /// Reallocates the backing store; previous content is discarded.
    fn configure(&mut self, device_pixel_ratio: f32) -> Result<(), SurfaceError> {
        self.surface = allocate(self.logical, device_pixel_ratio)?;
        self.ratio = device_pixel_ratio;
        let (w, h) = self.pixel_size();
        debug!(ratio = device_pixel_ratio, width = w, height = h, "raster surface configured");
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let paint = Self::stroke_paint(style);
        self.surface.canvas().draw_path(&path_of(points, false), &paint);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let paint = Self::fill_paint(color);
        self.surface.canvas().draw_path(&path_of(points, true), &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let paint = Self::fill_paint(color);
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let paint = Self::fill_paint(color);
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.text.draw(canvas, text, anchor.x, anchor.y, style);
    }

    fn push_clip(&mut self, rect: Rect) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), None, Some(true));
    }

    fn pop_clip(&mut self) {
        self.surface.canvas().restore();
    }
}
