// File: crates/lapviz-core/src/adapter.rs
// Summary: Dataset adapter: decodes the telemetry payload and builds the dashboard's chart and track inputs.
// Notes:
// - Driver maps are `BTreeMap`s, so datasets, legend rows and bar categories come out in
//   driver-code order on every render.
// - Every chart resolves colors through one `DriverPalette`, keeping a driver's color stable
//   across the whole dashboard.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::axis::{AxisConfig, YAxisId};
use crate::color::Color;
use crate::error::AdapterError;
use crate::format;
use crate::series::{BarChartInput, BarDataset, LineChartInput, LineDataset, Series};
use crate::track::{PathSegment, TrackInput};

/// Color used for drivers missing from `driver_colors` or carrying an unparsable color.
pub const FALLBACK_DRIVER_COLOR: Color = Color::from_rgb(0xdd, 0xdd, 0xdd);
pub const BRAKE_COLOR: Color = Color::from_rgb(0xff, 0x45, 0x3a);
pub const SECTOR_COLORS: [Color; 3] = [
    Color::from_rgb(0x00, 0xff, 0x88),
    Color::from_rgb(0x00, 0x7a, 0xff),
    Color::from_rgb(0xff, 0x95, 0x00),
];

const THROTTLE_FILL_ALPHA: u8 = 0x40;
const BRAKE_FILL_ALPHA: u8 = 0x40;
const SECTOR_FILL_ALPHA: u8 = 0x80;
const LAP_POINT_RADIUS: f32 = 4.0;
const LAP_LINE_WIDTH: f32 = 3.0;
const TRACK_POSITION: &str = "Track Position (%)";

// ---- payload ------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TelemetryPayload {
    pub telemetry: BTreeMap<String, DriverTelemetry>,
    pub driver_colors: BTreeMap<String, String>,
    /// Up to three `"12.345s"` strings per driver.
    pub sector_times: BTreeMap<String, Vec<Option<String>>>,
    /// Race sessions only.
    pub lap_by_lap_data: Option<BTreeMap<String, Vec<LapRecord>>>,
    pub fastest_minisectors: Option<Vec<MiniSector>>,
}

/// Per-driver channels sampled along the lap. `Distance` is normalized to `[0, 1]`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DriverTelemetry {
    pub distance: Vec<Option<f64>>,
    pub speed: Vec<Option<f64>>,
    pub throttle: Vec<Option<f64>>,
    pub brake: Vec<Option<BrakeSample>>,
    pub gear: Vec<Option<f64>>,
}

/// Brake arrives either as a flag or as a pressure-like number.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BrakeSample {
    Flag(bool),
    Level(f64),
}

impl BrakeSample {
    pub fn is_applied(&self) -> bool {
        match *self {
            BrakeSample::Flag(on) => on,
            BrakeSample::Level(v) => v != 0.0 && !v.is_nan(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LapRecord {
    pub lap_number: f64,
    /// Seconds; `None` for laps without a recorded time.
    #[serde(default)]
    pub lap_time: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MiniSectorCoords {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MiniSector {
    pub driver: Option<String>,
    pub color: Option<String>,
    pub coords: MiniSectorCoords,
    pub speed: Option<f64>,
}

impl TelemetryPayload {
    pub fn from_json(text: &str) -> Result<Self, AdapterError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AdapterError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Parse a sector time like `"28.345s"`. Missing entries count as zero; anything else that is
/// not a number (e.g. `"N/A"`) yields `None`.
pub fn parse_sector_time(raw: Option<&str>) -> Option<f64> {
    let Some(raw) = raw.map(str::trim) else {
        return Some(0.0);
    };
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.trim_end_matches('s').trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

// ---- palette ------------------------------------------------------------------

/// Driver → color resolution shared by every chart of a dashboard.
#[derive(Clone, Debug, Default)]
pub struct DriverPalette {
    colors: BTreeMap<String, Color>,
}

impl DriverPalette {
    pub fn new(raw: &BTreeMap<String, String>) -> Self {
        let mut colors = BTreeMap::new();
        for (driver, value) in raw {
            match Color::parse(value) {
                Ok(c) => {
                    colors.insert(driver.clone(), c);
                }
                Err(err) => warn!(driver = %driver, %err, "invalid driver color; using fallback"),
            }
        }
        Self { colors }
    }

    pub fn color(&self, driver: &str) -> Color {
        self.colors.get(driver).copied().unwrap_or(FALLBACK_DRIVER_COLOR)
    }
}

// ---- builders -----------------------------------------------------------------

/// Every chart the dashboard shows for one payload.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub speed: LineChartInput,
    pub throttle_brake: LineChartInput,
    pub gear: LineChartInput,
    pub sectors: BarChartInput,
    /// Present for race sessions that carry lap-by-lap data.
    pub lap_times: Option<LineChartInput>,
    pub track: TrackInput,
}

pub struct DatasetAdapter<'a> {
    payload: &'a TelemetryPayload,
    palette: DriverPalette,
}

impl<'a> DatasetAdapter<'a> {
    pub fn new(payload: &'a TelemetryPayload) -> Self {
        Self { payload, palette: DriverPalette::new(&payload.driver_colors) }
    }

    pub fn palette(&self) -> &DriverPalette {
        &self.palette
    }

    /// Telemetry channel against track position in percent (`Distance * 100`).
    fn along_track(telemetry: &DriverTelemetry, values: Vec<f64>) -> Series {
        let x = telemetry.distance.iter().map(|d| d.map_or(f64::NAN, |d| d * 100.0)).collect();
        Series::new(x, values)
    }

    fn position_axis() -> AxisConfig {
        AxisConfig::new(TRACK_POSITION).with_limits(0.0, 100.0).with_formatter(format::percent)
    }

    pub fn speed_chart(&self) -> LineChartInput {
        let datasets = self
            .payload
            .telemetry
            .iter()
            .map(|(driver, t)| LineDataset::new(driver.as_str(), Self::along_track(t, column(&t.speed)), self.palette.color(driver)))
            .collect();
        LineChartInput {
            title: Some("Speed".to_string()),
            datasets,
            x_axis: Self::position_axis(),
            y_axis: AxisConfig::new("Speed (km/h)").with_formatter(format::speed_kmh),
            ..LineChartInput::default()
        }
    }

    /// Throttle per driver on the left axis and the brake flag (0 or 100) on the right.
    pub fn throttle_brake_chart(&self) -> LineChartInput {
        let mut datasets = Vec::with_capacity(self.payload.telemetry.len() * 2);
        for (driver, t) in &self.payload.telemetry {
            let color = self.palette.color(driver);
            datasets.push(
                LineDataset::new(format!("{driver} Throttle"), Self::along_track(t, column(&t.throttle)), color)
                    .filled(color.with_alpha(THROTTLE_FILL_ALPHA)),
            );

            let brake = t
                .brake
                .iter()
                .map(|b| match b {
                    Some(b) if b.is_applied() => 100.0,
                    Some(_) => 0.0,
                    None => f64::NAN,
                })
                .collect();
            datasets.push(
                LineDataset::new(format!("{driver} Brake"), Self::along_track(t, brake), BRAKE_COLOR)
                    .filled(BRAKE_COLOR.with_alpha(BRAKE_FILL_ALPHA))
                    .stepped()
                    .with_width(1.0)
                    .on_axis(YAxisId::Secondary),
            );
        }
        LineChartInput {
            title: Some("Throttle & Brake".to_string()),
            datasets,
            x_axis: Self::position_axis(),
            y_axis: AxisConfig::new("Throttle (%)").with_limits(0.0, 100.0).with_formatter(format::integer),
            y2_axis: AxisConfig::new("Brake").with_limits(0.0, 100.0).with_formatter(format::on_off),
        }
    }

    pub fn gear_chart(&self) -> LineChartInput {
        let datasets = self
            .payload
            .telemetry
            .iter()
            .map(|(driver, t)| {
                LineDataset::new(driver.as_str(), Self::along_track(t, column(&t.gear)), self.palette.color(driver)).stepped()
            })
            .collect();
        LineChartInput {
            title: Some("Gear".to_string()),
            datasets,
            x_axis: Self::position_axis(),
            y_axis: AxisConfig::new("Gear").with_formatter(format::integer),
            ..LineChartInput::default()
        }
    }

    /// Drivers as categories, one dataset per sector.
    pub fn sector_chart(&self) -> BarChartInput {
        let drivers: Vec<String> = self.payload.sector_times.keys().cloned().collect();
        let datasets = SECTOR_COLORS
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let values = self
                    .payload
                    .sector_times
                    .iter()
                    .map(|(driver, times)| {
                        let raw = times.get(i).and_then(|t| t.as_deref());
                        parse_sector_time(raw).unwrap_or_else(|| {
                            warn!(driver = %driver, sector = i + 1, raw = raw.unwrap_or_default(), "unparsable sector time");
                            f64::NAN
                        })
                    })
                    .collect();
                let mut dataset = BarDataset::new(format!("Sector {}", i + 1), values, color);
                dataset.fill_color = Some(color.with_alpha(SECTOR_FILL_ALPHA));
                dataset
            })
            .collect();
        BarChartInput {
            title: Some("Sector Time Comparison".to_string()),
            labels: drivers,
            datasets,
            category_axis: AxisConfig::default(),
            value_axis: AxisConfig::new("Time (seconds)").with_formatter(format::seconds),
        }
    }

    /// Lap time per lap number, or `None` when the payload has no lap-by-lap data.
    pub fn lap_times_chart(&self) -> Option<LineChartInput> {
        let laps = self.payload.lap_by_lap_data.as_ref().filter(|laps| !laps.is_empty())?;
        let datasets = laps
            .iter()
            .map(|(driver, records)| {
                let series = Series::from_samples(
                    records.iter().map(|r| (r.lap_number, r.lap_time.unwrap_or(f64::NAN))),
                );
                LineDataset::new(driver.as_str(), series, self.palette.color(driver))
                    .with_width(LAP_LINE_WIDTH)
                    .with_points(LAP_POINT_RADIUS)
            })
            .collect();
        Some(LineChartInput {
            title: Some("Lap Time Progression".to_string()),
            datasets,
            x_axis: AxisConfig::new("Lap Number").with_formatter(format::integer),
            y_axis: AxisConfig::new("Lap Time").with_formatter(format::lap_time),
            ..LineChartInput::default()
        })
    }

    /// Fastest-minisector segments colored by the driver who owns them.
    pub fn track_input(&self) -> TrackInput {
        let Some(sectors) = self.payload.fastest_minisectors.as_deref() else {
            debug!("payload has no fastest minisectors");
            return TrackInput::default();
        };
        let segments = sectors
            .iter()
            .map(|s| {
                let color = match (s.color.as_deref(), s.driver.as_deref()) {
                    (Some(raw), _) => Color::parse(raw).unwrap_or_else(|err| {
                        warn!(%err, "invalid minisector color; using fallback");
                        s.driver.as_deref().map_or(FALLBACK_DRIVER_COLOR, |d| self.palette.color(d))
                    }),
                    (None, Some(driver)) => self.palette.color(driver),
                    (None, None) => FALLBACK_DRIVER_COLOR,
                };
                PathSegment {
                    x: s.coords.x.clone(),
                    y: s.coords.y.clone(),
                    color,
                    owner: s.driver.clone(),
                }
            })
            .collect();
        TrackInput::new(segments)
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            speed: self.speed_chart(),
            throttle_brake: self.throttle_brake_chart(),
            gear: self.gear_chart(),
            sectors: self.sector_chart(),
            lap_times: self.lap_times_chart(),
            track: self.track_input(),
        }
    }
}
