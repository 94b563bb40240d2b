// File: crates/lapviz-core/tests/format.rs
// Purpose: Tick formatters, CSS color parsing and theme lookup.

use lapviz_core::format;
use lapviz_core::theme::{find, presets};
use lapviz_core::{Color, ColorParseError};

#[test]
fn formatters() {
    assert_eq!(format::integer(-0.2), "0");
    assert_eq!(format::decimal(12.345), "12.3");
    assert_eq!(format::percent(99.6), "100%");
    assert_eq!(format::speed_kmh(312.2), "312 km/h");
    assert_eq!(format::seconds(28.3456), "28.346s");
    assert_eq!(format::lap_time(92.4), "1:32.4");
    assert_eq!(format::lap_time(59.97), "1:00.0");
    assert_eq!(format::on_off(100.0), "ON");
    assert_eq!(format::on_off(0.0), "OFF");
}

#[test]
fn color_strings() {
    assert_eq!(Color::parse("#1a1a1a"), Ok(Color::from_rgb(0x1a, 0x1a, 0x1a)));
    assert_eq!(Color::parse("#ccc"), Ok(Color::from_rgb(0xcc, 0xcc, 0xcc)));
    assert_eq!(Color::parse("#ff453a40"), Ok(Color::from_argb(0x40, 0xff, 0x45, 0x3a)));
    assert_eq!(Color::parse("rgba(26, 26, 26, 0.5)"), Ok(Color::from_argb(128, 26, 26, 26)));
    assert_eq!(Color::parse("white"), Ok(Color::WHITE));
    assert_eq!(Color::parse("  "), Err(ColorParseError::Empty));
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("teamcolor").is_err());
}

#[test]
fn colors_print_as_hex() {
    assert_eq!(Color::from_rgb(0x00, 0xff, 0x88).to_string(), "#00ff88");
    assert_eq!(Color::from_argb(0x80, 0x00, 0x7a, 0xff).to_string(), "#007aff80");
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    assert_eq!(presets().len(), 3);
    assert_eq!(find("LIGHT").name, "light");
    assert_eq!(find("nope").name, "dark");
    assert_eq!(find("dark").background, Color::from_rgb(0x1a, 0x1a, 0x1a));
}
