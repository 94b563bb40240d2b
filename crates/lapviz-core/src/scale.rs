// File: crates/lapviz-core/src/scale.rs
// Summary: Space mapper: affine data-to-pixel transforms, their inverse, and the aspect-locked fit.

use crate::bounds::{Bounds, UNIT_SPAN};
use crate::geometry::Size;

/// A directed numeric interval. `end < start` is allowed; screen y ranges run bottom to top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    fn direction(&self) -> f64 {
        if self.span() < 0.0 { -1.0 } else { 1.0 }
    }
}

impl From<Bounds> for Range {
    fn from(b: Bounds) -> Self {
        Range::new(b.min, b.max)
    }
}

/// Source span with the degenerate-range policy applied.
fn source_span(source: Range) -> f64 {
    let s = source.span();
    if s.is_finite() && s != 0.0 { s } else { UNIT_SPAN }
}

/// Destination span left after padding on both ends, keeping the destination direction.
/// Padding is clamped so that at least one pixel (or the whole range if smaller) remains.
fn usable_span(dest: Range, padding: f64) -> f64 {
    let dir = dest.direction();
    let magnitude = dest.span().abs();
    let padding = padding.max(0.0).min(((magnitude - 1.0) * 0.5).max(0.0));
    let usable = magnitude - 2.0 * padding;
    dir * if usable > 0.0 { usable } else { 1.0 }
}

fn effective_padding(dest: Range, padding: f64) -> f64 {
    let magnitude = dest.span().abs();
    dest.direction() * padding.max(0.0).min(((magnitude - 1.0) * 0.5).max(0.0))
}

/// Map one value from `source` into `dest`, leaving `padding` pixels free at both ends:
///
/// `pixel = destMin + padding + (value - sourceMin) / (sourceMax - sourceMin) * (destSpan - 2*padding)`
///
/// A zero-width source range is treated as a unit span, so the result is always finite for
/// finite input.
pub fn map(value: f64, source: Range, dest: Range, padding: f64) -> f64 {
    dest.start
        + effective_padding(dest, padding)
        + (value - source.start) / source_span(source) * usable_span(dest, padding)
}

/// Affine `pixel = value * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub offset: f64,
}

impl Transform {
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// The transform equivalent to [`map`] for a fixed source/destination pair.
    pub fn between(source: Range, dest: Range, padding: f64) -> Self {
        let scale = usable_span(dest, padding) / source_span(source);
        let offset = dest.start + effective_padding(dest, padding) - source.start * scale;
        Self { scale, offset }
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Pixel back to data space. Scales built by this module are never zero.
    #[inline]
    pub fn invert(&self, pixel: f64) -> f64 {
        (pixel - self.offset) / self.scale
    }
}

/// Aspect-locked fit of a 2D bounding box into `canvas`: one uniform scale
/// `min(scaleX, scaleY)` for both axes, offsets chosen so the box is centered.
/// Returns the x and y transforms.
pub fn fit_aspect(x: Bounds, y: Bounds, canvas: Size, padding: f64) -> (Transform, Transform) {
    let width = canvas.width as f64;
    let height = canvas.height as f64;
    let avail_w = (width - 2.0 * padding).max(1.0);
    let avail_h = (height - 2.0 * padding).max(1.0);
    let scale = (avail_w / x.span()).min(avail_h / y.span());

    let offset_x = (width - (x.max - x.min) * scale) / 2.0 - x.min * scale;
    let offset_y = (height - (y.max - y.min) * scale) / 2.0 - y.min * scale;
    (Transform::new(scale, offset_x), Transform::new(scale, offset_y))
}
