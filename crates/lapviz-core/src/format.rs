// File: crates/lapviz-core/src/format.rs
// Summary: Pure tick/label formatters `fn(f64) -> String`, injected per axis.

/// Signature shared by every formatter.
pub type TickFormatter = fn(f64) -> String;

fn fixed(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    // `-0`, `-0.0` and friends read badly on an axis.
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Whole number, e.g. `"250"`.
pub fn integer(v: f64) -> String {
    fixed(v, 0)
}

/// One decimal, e.g. `"12.5"`.
pub fn decimal(v: f64) -> String {
    fixed(v, 1)
}

/// Track position, e.g. `"42%"`.
pub fn percent(v: f64) -> String {
    format!("{}%", fixed(v, 0))
}

/// `"312 km/h"`.
pub fn speed_kmh(v: f64) -> String {
    format!("{} km/h", fixed(v, 0))
}

/// Sector time, e.g. `"28.345s"`.
pub fn seconds(v: f64) -> String {
    format!("{}s", fixed(v, 3))
}

/// Lap time as `m:ss.s`, e.g. `92.4 -> "1:32.4"`.
pub fn lap_time(v: f64) -> String {
    if !v.is_finite() {
        return "-".to_string();
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let v = v.abs();
    let mut minutes = (v / 60.0).floor();
    let mut secs = ((v - minutes * 60.0) * 10.0).round() / 10.0;
    if secs >= 60.0 {
        minutes += 1.0;
        secs -= 60.0;
    }
    format!("{sign}{}:{:04.1}", minutes as i64, secs)
}

/// Brake channel: anything above zero is `"ON"`.
pub fn on_off(v: f64) -> String {
    if v > 0.0 { "ON".to_string() } else { "OFF".to_string() }
}
