// File: crates/lapviz-core/tests/adapter.rs
// Purpose: Telemetry payload decoding and the dashboard chart builders.

use lapviz_core::adapter::{parse_sector_time, BrakeSample, FALLBACK_DRIVER_COLOR, SECTOR_COLORS};
use lapviz_core::{Color, DatasetAdapter, TelemetryPayload, YAxisId};

const PAYLOAD: &str = r##"{
  "telemetry": {
    "VER": {
      "Distance": [0.0, 0.5, 1.0],
      "Speed": [280.0, 320.5, 190.0],
      "Throttle": [100.0, 100.0, 20.0],
      "Brake": [false, false, true],
      "Gear": [7, 8, 3]
    },
    "HAM": {
      "Distance": [0.0, 0.5, 1.0],
      "Speed": [275.0, 318.0, 185.0],
      "Throttle": [98.0, 100.0, 10.0],
      "Brake": [0, 0, 1],
      "Gear": [7, 8, 2]
    }
  },
  "driver_colors": { "VER": "#3671C6", "HAM": "not-a-color" },
  "sector_times": { "VER": ["28.101s", "33.456s", "24.008s"], "HAM": ["N/A", "33.901s"] },
  "fastest_minisectors": [
    { "driver": "VER", "color": "#3671C6", "coords": { "x": [0, 100, 200], "y": [0, 50, 0] }, "speed": 301.2 },
    { "driver": "HAM", "coords": { "x": [200, 300], "y": [0, -40] }, "speed": 298.4 }
  ]
}"##;

fn payload() -> TelemetryPayload {
    TelemetryPayload::from_json(PAYLOAD).expect("payload")
}

#[test]
fn decodes_mixed_brake_encodings() {
    let p = payload();
    let ver = &p.telemetry["VER"];
    let ham = &p.telemetry["HAM"];
    assert_eq!(ver.brake[2], Some(BrakeSample::Flag(true)));
    assert_eq!(ham.brake[2], Some(BrakeSample::Level(1.0)));
    assert!(ham.brake[2].expect("sample").is_applied());
    assert!(!ham.brake[0].expect("sample").is_applied());
    assert!(p.lap_by_lap_data.is_none());
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(TelemetryPayload::from_json("{\"telemetry\": 5}").is_err());
    assert!(TelemetryPayload::from_json("{}").expect("empty payload").telemetry.is_empty());
}

#[test]
fn speed_chart_uses_track_percent_and_driver_colors() {
    let p = payload();
    let adapter = DatasetAdapter::new(&p);
    let chart = adapter.speed_chart();
    // BTreeMap order: HAM before VER.
    let labels: Vec<&str> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["HAM", "VER"]);
    let ver = &chart.datasets[1];
    assert_eq!(ver.series.x, vec![0.0, 50.0, 100.0]);
    assert_eq!(ver.style.color, Color::from_rgb(0x36, 0x71, 0xc6));
    // Invalid color string falls back.
    assert_eq!(chart.datasets[0].style.color, FALLBACK_DRIVER_COLOR);
    assert_eq!(chart.x_axis.format(42.0), "42%");
}

#[test]
fn throttle_brake_pairs_per_driver() {
    let p = payload();
    let chart = DatasetAdapter::new(&p).throttle_brake_chart();
    assert_eq!(chart.datasets.len(), 4);
    let throttle = &chart.datasets[2];
    let brake = &chart.datasets[3];
    assert_eq!(throttle.label, "VER Throttle");
    assert!(throttle.style.fill);
    assert_eq!(throttle.style.fill_color.map(|c| c.a), Some(0x40));
    assert_eq!(brake.label, "VER Brake");
    assert_eq!(brake.y_axis, YAxisId::Secondary);
    assert!(brake.style.stepped);
    assert_eq!(brake.series.y, vec![0.0, 0.0, 100.0]);
    assert_eq!((chart.y2_axis.min, chart.y2_axis.max), (Some(0.0), Some(100.0)));
    assert_eq!(chart.y2_axis.format(100.0), "ON");
    assert_eq!(chart.y2_axis.format(0.0), "OFF");
}

#[test]
fn sector_chart_groups_by_driver() {
    let p = payload();
    let chart = DatasetAdapter::new(&p).sector_chart();
    assert_eq!(chart.labels, ["HAM", "VER"]);
    assert_eq!(chart.datasets.len(), 3);
    assert_eq!(chart.datasets[0].label, "Sector 1");
    assert_eq!(chart.datasets[0].color, SECTOR_COLORS[0]);
    // "N/A" is not a number and is left out of the chart.
    assert!(chart.datasets[0].values[0].is_nan());
    assert_eq!(chart.datasets[0].values[1], 28.101);
    // Missing third sector counts as zero.
    assert_eq!(chart.datasets[2].values[0], 0.0);
    assert_eq!(chart.value_axis.format(28.1), "28.100s");
}

#[test]
fn sector_time_parsing() {
    assert_eq!(parse_sector_time(Some("28.345s")), Some(28.345));
    assert_eq!(parse_sector_time(Some(" 31.2 ")), Some(31.2));
    assert_eq!(parse_sector_time(None), Some(0.0));
    assert_eq!(parse_sector_time(Some("N/A")), None);
}

#[test]
fn lap_chart_only_with_lap_data() {
    let p = payload();
    assert!(DatasetAdapter::new(&p).lap_times_chart().is_none());

    let mut with_laps = payload();
    with_laps.lap_by_lap_data = Some(
        serde_json::from_str(r#"{"VER": [{"lap_number": 1, "lap_time": 92.4}, {"lap_number": 2, "lap_time": 91.8}]}"#)
            .expect("laps"),
    );
    let chart = DatasetAdapter::new(&with_laps).lap_times_chart().expect("lap chart");
    let ver = &chart.datasets[0];
    assert_eq!(ver.series.x, vec![1.0, 2.0]);
    assert_eq!(ver.style.point_radius, 4.0);
    assert_eq!(ver.style.width, 3.0);
    assert_eq!(chart.y_axis.format(92.4), "1:32.4");
}

#[test]
fn track_input_from_minisectors() {
    let p = payload();
    let adapter = DatasetAdapter::new(&p);
    let track = adapter.track_input();
    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[0].color, Color::from_rgb(0x36, 0x71, 0xc6));
    assert_eq!(track.segments[0].owner.as_deref(), Some("VER"));
    // No color on the segment: the driver palette decides (HAM falls back).
    assert_eq!(track.segments[1].color, FALLBACK_DRIVER_COLOR);
    assert_eq!(track.start_marker, Some((0.0, 0.0)));
}

#[test]
fn dashboard_builds_every_chart() {
    let p = payload();
    let dash = DatasetAdapter::new(&p).dashboard();
    assert_eq!(dash.speed.datasets.len(), 2);
    assert_eq!(dash.gear.datasets.len(), 2);
    assert!(dash.gear.datasets.iter().all(|d| d.style.stepped));
    assert_eq!(dash.sectors.labels.len(), 2);
    assert!(dash.lap_times.is_none());
    assert_eq!(dash.track.segments.len(), 2);
}

#[test]
fn no_minisectors_gives_an_empty_track() {
    let p = TelemetryPayload::from_json(r#"{"fastest_minisectors": []}"#).expect("payload");
    let track = DatasetAdapter::new(&p).track_input();
    assert!(track.segments.is_empty());
    assert_eq!(track.start_marker, None);
}
