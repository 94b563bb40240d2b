// File: crates/lapviz-core/src/theme.rs
// Summary: Immutable style configuration (colors, fonts) handed to each engine at construction.

use serde::{Deserialize, Deserializer};

use crate::color::Color;
use crate::surface::{TextStyle, DEFAULT_FONT_FAMILIES};

/// Colors and font settings for one render. Values are fixed per preset; an engine
/// receives its theme through its options and never consults shared defaults.
///
/// Deserializes from a preset name (`"dark"`, `"light"`, `"high-contrast-dark"`).
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Chart canvas background.
    pub background: Color,
    /// Track map canvas background.
    pub track_background: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub axis_title: Color,
    pub legend_label: Color,
    pub title: Color,
    /// Underlay stroke drawn beneath the colored track segments.
    pub track_base: Color,
    pub start_marker: Color,
    /// Font fallback chain for every label drawn with this theme.
    pub font_families: &'static [&'static str],
    pub font_size: f32,
    pub title_font_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(0x1a, 0x1a, 0x1a),
            track_background: Color::from_rgb(0x0a, 0x0a, 0x0a),
            axis_line: Color::from_rgb(0x44, 0x44, 0x44),
            tick_label: Color::from_rgb(0xcc, 0xcc, 0xcc),
            axis_title: Color::WHITE,
            legend_label: Color::WHITE,
            title: Color::from_rgb(0x00, 0xff, 0x88),
            track_base: Color::from_rgb(0x33, 0x33, 0x33),
            start_marker: Color::WHITE,
            font_families: DEFAULT_FONT_FAMILIES,
            font_size: 12.0,
            title_font_size: 16.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            track_background: Color::from_rgb(245, 245, 247),
            axis_line: Color::from_rgb(60, 60, 70),
            tick_label: Color::from_rgb(100, 100, 110),
            axis_title: Color::from_rgb(20, 20, 30),
            legend_label: Color::from_rgb(20, 20, 30),
            title: Color::from_rgb(0, 140, 80),
            track_base: Color::from_rgb(210, 210, 215),
            start_marker: Color::from_rgb(20, 20, 30),
            font_families: DEFAULT_FONT_FAMILIES,
            font_size: 12.0,
            title_font_size: 16.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            track_background: Color::BLACK,
            axis_line: Color::WHITE,
            tick_label: Color::WHITE,
            axis_title: Color::WHITE,
            legend_label: Color::WHITE,
            title: Color::from_rgb(0xff, 0xff, 0x00),
            track_base: Color::from_rgb(0x22, 0x22, 0x22),
            start_marker: Color::from_rgb(0xff, 0xff, 0x00),
            font_families: DEFAULT_FONT_FAMILIES,
            font_size: 13.0,
            title_font_size: 17.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    /// Text style in this theme's font families.
    pub fn text(&self, color: Color, size: f32) -> TextStyle {
        TextStyle::new(color, size).with_families(self.font_families)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|name| find(&name))
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
