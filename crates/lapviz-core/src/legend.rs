// File: crates/lapviz-core/src/legend.rs
// Summary: Legend layout: one swatch + label row per dataset, stacked vertically in a fixed plot corner.

use serde::Deserialize;

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::primitive::Painter;
use crate::theme::Theme;

pub const SWATCH_SIZE: f32 = 12.0;
pub const ROW_HEIGHT: f32 = 20.0;
/// Horizontal room reserved for a legend column.
pub const LEGEND_WIDTH: f32 = 150.0;
/// Distance kept from the plot edges.
pub const LEGEND_INSET: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch: Rect,
    /// Baseline anchor of the label text.
    pub label_at: Point,
}

/// Row geometry for `count` entries anchored in `position` of the `plot` rectangle.
pub fn layout(count: usize, plot: Rect, position: LegendPosition) -> Vec<LegendRow> {
    let total_h = count as f32 * ROW_HEIGHT;
    let (left, top) = match position {
        LegendPosition::Hidden => return Vec::new(),
        LegendPosition::TopRight => (plot.right - LEGEND_WIDTH, plot.top + LEGEND_INSET),
        LegendPosition::TopLeft => (plot.left + LEGEND_INSET, plot.top + LEGEND_INSET),
        LegendPosition::BottomRight => (plot.right - LEGEND_WIDTH, plot.bottom - LEGEND_INSET - total_h),
        LegendPosition::BottomLeft => (plot.left + LEGEND_INSET, plot.bottom - LEGEND_INSET - total_h),
    };
    (0..count)
        .map(|i| {
            let y = top + i as f32 * ROW_HEIGHT;
            LegendRow {
                swatch: Rect::from_ltwh(left, y, SWATCH_SIZE, SWATCH_SIZE),
                label_at: Point::new(left + SWATCH_SIZE + 8.0, y + SWATCH_SIZE - 2.0),
            }
        })
        .collect()
}

pub fn draw(painter: &mut Painter<'_>, entries: &[LegendEntry], plot: Rect, position: LegendPosition, theme: &Theme, labels: bool) {
    let style = theme.text(theme.legend_label, theme.font_size);
    for (row, entry) in layout(entries.len(), plot, position).iter().zip(entries) {
        painter.draw_bar(row.swatch.left, row.swatch.top, row.swatch.width(), row.swatch.height(), entry.color);
        if labels {
            painter.draw_text(&entry.label, row.label_at.x, row.label_at.y, &style);
        }
    }
}
