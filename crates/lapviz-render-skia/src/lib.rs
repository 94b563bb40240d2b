// File: crates/lapviz-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surface and text shaping for lapviz-core charts.

pub mod raster;
pub mod text;

pub use raster::RasterSurface;
pub use text::TextShaper;
