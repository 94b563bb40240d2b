// File: crates/lapviz-demo/src/main.rs
// Summary: Demo loads a telemetry session payload and renders the dashboard charts and track map to PNGs.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lapviz_core::{render, ChartInput, DatasetAdapter, TelemetryPayload, TrackProjector};
use lapviz_render_skia::RasterSurface;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::{load_render_config, RenderConfig};

const SAMPLE_PAYLOAD: &str = "crates/lapviz-demo/data/sample_session.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = load_render_config().context("failed to load render settings")?;

    // Accept payload path from CLI or fall back to the bundled sample session
    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(SAMPLE_PAYLOAD));
    println!("Using payload: {}", path.display());

    let file = std::fs::File::open(&path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let payload = TelemetryPayload::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    info!(drivers = payload.telemetry.len(), "payload loaded");

    let dashboard = DatasetAdapter::new(&payload).dashboard();

    let mut charts: Vec<(&str, ChartInput)> = vec![
        ("speed", dashboard.speed.into()),
        ("throttle_brake", dashboard.throttle_brake.into()),
        ("gear", dashboard.gear.into()),
        ("sectors", dashboard.sectors.into()),
    ];
    if let Some(laps) = dashboard.lap_times {
        charts.push(("lap_times", laps.into()));
    }

    for (name, input) in charts {
        let out = render_chart(&cfg, name, input)?;
        println!("Wrote {}", out.display());
    }

    let mut surface = RasterSurface::new(cfg.track_size, cfg.track_size)?;
    let report = TrackProjector::new(cfg.track.clone()).render(&dashboard.track, &mut surface)?;
    let out = cfg.output_dir.join("track.png");
    surface.write_png(&out)?;
    info!(drawn = report.drawn_segments, skipped = report.skipped_segments, "track rendered");
    println!("Wrote {}", out.display());

    Ok(())
}

fn render_chart(cfg: &RenderConfig, name: &str, input: ChartInput) -> Result<PathBuf> {
    let mut surface = RasterSurface::new(cfg.chart_width, cfg.chart_height)?;
    let mut handle = render(input, &mut surface, cfg.chart.clone()).with_context(|| format!("failed to render {name}"))?;
    info!(chart = name, drawn = handle.report().drawn_datasets, skipped = handle.report().skipped_datasets, "chart rendered");
    let out = out_path(&cfg.output_dir, name);
    handle.surface_mut().write_png(&out).with_context(|| format!("failed to write '{}'", out.display()))?;
    Ok(out)
}

fn out_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}
