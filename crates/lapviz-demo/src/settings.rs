// File: crates/lapviz-demo/src/settings.rs
// Summary: Render settings layered from an optional `lapviz.toml` and `LAPVIZ_*` environment variables.

use std::path::PathBuf;

use lapviz_core::{ChartOptions, TrackOptions};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub chart: ChartOptions,
    pub track: TrackOptions,
    pub output_dir: PathBuf,
    /// Logical canvas size of every chart.
    pub chart_width: f32,
    pub chart_height: f32,
    /// Logical edge of the square track canvas.
    pub track_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            track: TrackOptions::default(),
            output_dir: PathBuf::from("target/out"),
            chart_width: lapviz_core::types::WIDTH,
            chart_height: lapviz_core::types::HEIGHT,
            track_size: 600.0,
        }
    }
}

/// `lapviz.toml` in the working directory is optional. Environment keys use `__` between
/// levels, e.g. `LAPVIZ_CHART__THEME=light` or `LAPVIZ_TRACK__MARKER_SIZE=20`.
pub fn load_render_config() -> anyhow::Result<RenderConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("lapviz").required(false))
        .add_source(config::Environment::with_prefix("LAPVIZ").separator("__").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}
