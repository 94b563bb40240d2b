// File: crates/lapviz-core/src/color.rs
// Summary: RGBA color type with CSS color-string parsing (hex, rgb(), rgba(), a few names).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Same color with a replaced alpha; mirrors appending `80`/`20` to a `#rrggbb` string.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse a CSS color string: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` with `a` in `0..=1`, or a basic name.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let invalid = || ColorParseError::Invalid(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower.strip_prefix("rgba(").or_else(|| lower.strip_prefix("rgb(")) {
            let body = body.strip_suffix(')').ok_or_else(invalid)?;
            return parse_functional(body).ok_or_else(invalid);
        }

        match lower.as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "red" => Ok(Self::from_rgb(255, 0, 0)),
            "green" => Ok(Self::from_rgb(0, 128, 0)),
            "blue" => Ok(Self::from_rgb(0, 0, 255)),
            "transparent" => Ok(Self::TRANSPARENT),
            _ => Err(invalid()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_argb(nibble(3)?, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |s: &str| -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    match parts.as_slice() {
        [r, g, b] => Some(Color::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let a: f64 = a.parse().ok()?;
            if !a.is_finite() {
                return None;
            }
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(Color::from_argb(a, channel(r)?, channel(g)?, channel(b)?))
        }
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
