// File: crates/lapviz-core/src/grid.rs
// Summary: Tick layout helpers: evenly spaced pixel positions and their inverse-mapped values.

use crate::scale::{Range, Transform};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub pixel: f64,
    pub value: f64,
}

/// `count` equally spaced pixel positions across `pixels`, each paired with the data value
/// obtained by inverting `transform`.
pub fn ticks(transform: &Transform, pixels: Range, count: usize) -> Vec<Tick> {
    linspace(pixels.start, pixels.end, count)
        .into_iter()
        .map(|pixel| Tick { pixel, value: transform.invert(pixel) })
        .collect()
}
