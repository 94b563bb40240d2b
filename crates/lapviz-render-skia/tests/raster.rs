// File: crates/lapviz-render-skia/tests/raster.rs
// Purpose: Raster backend: high-DPI backing store, background pixels, repeatable renders, track strokes.

use lapviz_core::{
    render, ChartOptions, Color, LineChartInput, LineDataset, PathSegment, Series, Surface, TrackInput, TrackProjector,
};
use lapviz_render_skia::RasterSurface;

fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

fn speed_chart() -> LineChartInput {
    LineChartInput::new(vec![LineDataset::new(
        "VER",
        Series::new(vec![0.0, 50.0, 100.0], vec![200.0, 250.0, 200.0]),
        Color::from_rgb(0x36, 0x71, 0xc6),
    )])
}

fn no_labels() -> ChartOptions {
    ChartOptions { draw_labels: false, ..ChartOptions::default() }
}

#[test]
fn backing_store_is_scaled_by_device_ratio() {
    let mut surface = RasterSurface::new(800.0, 400.0).expect("surface");
    assert_eq!(surface.pixel_size(), (800, 400));
    let handle = render(speed_chart().into(), &mut surface, no_labels()).expect("render");
    assert_eq!(handle.surface().pixel_size(), (1600, 800));
    assert_eq!(handle.surface().logical_size().width, 800.0);

    let mut surface = RasterSurface::new(300.0, 200.0).expect("surface");
    let options = ChartOptions { device_pixel_ratio: 1.0, ..no_labels() };
    let handle = render(speed_chart().into(), &mut surface, options).expect("render");
    assert_eq!(handle.surface().pixel_size(), (300, 200));
}

#[test]
fn background_fills_the_canvas() {
    let mut surface = RasterSurface::new(400.0, 300.0).expect("surface");
    let mut handle = render(speed_chart().into(), &mut surface, no_labels()).expect("render");
    let (px, w, h) = handle.surface_mut().to_rgba8().expect("rgba");
    assert_eq!(px.len(), (w * h * 4) as usize);
    assert_eq!(pixel(&px, w, 0, 0), [0x1a, 0x1a, 0x1a, 0xff]);
    assert_eq!(pixel(&px, w, w - 1, h - 1), [0x1a, 0x1a, 0x1a, 0xff]);
}

#[test]
fn rerender_is_pixel_identical() {
    let mut surface = RasterSurface::new(400.0, 300.0).expect("surface");
    let mut handle = render(speed_chart().into(), &mut surface, no_labels()).expect("render");
    let (first, _, _) = handle.surface_mut().to_rgba8().expect("rgba");
    handle.update().expect("update");
    let (second, _, _) = handle.surface_mut().to_rgba8().expect("rgba");
    assert!(first == second, "update changed pixels");
}

#[test]
fn track_segment_is_stroked_in_its_color() {
    let orange = Color::from_rgb(0xff, 0x87, 0x00);
    let input = TrackInput::new(vec![PathSegment::new(vec![0.0, 10.0], vec![0.0, 0.0], orange)]);
    let mut surface = RasterSurface::new(400.0, 300.0).expect("surface");
    TrackProjector::default().render(&input, &mut surface).expect("render");

    let (px, w, _) = surface.to_rgba8().expect("rgba");
    // Logical (200, 150) is the middle of the projected segment.
    assert_eq!(pixel(&px, w, 400, 300), [0xff, 0x87, 0x00, 0xff]);
    assert_eq!(pixel(&px, w, 2, 2), [0x0a, 0x0a, 0x0a, 0xff]);
}

#[test]
fn marks_outside_axis_limits_are_clipped_to_the_plot() {
    let mut input = speed_chart();
    input.y_axis = input.y_axis.clone().with_limits(200.0, 220.0);
    let mut surface = RasterSurface::new(400.0, 300.0).expect("surface");
    let mut handle = render(input.into(), &mut surface, no_labels()).expect("render");
    let (px, w, _) = handle.surface_mut().to_rgba8().expect("rgba");
    // Unclipped, the rising leg would cross logical (125.3, 30) in the top margin.
    assert_eq!(pixel(&px, w, 250, 60), [0x1a, 0x1a, 0x1a, 0xff]);
    // Inside the plot the same leg is still stroked: it crosses logical (66.2, 220).
    assert_eq!(pixel(&px, w, 132, 440), [0x36, 0x71, 0xc6, 0xff]);
}

#[test]
fn png_export_has_png_signature() {
    let mut surface = RasterSurface::new(200.0, 100.0).expect("surface");
    let mut handle = render(speed_chart().into(), &mut surface, no_labels()).expect("render");
    let bytes = handle.surface_mut().to_png_bytes().expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (400, 200));
}

#[test]
fn empty_surface_cannot_be_created() {
    assert!(RasterSurface::new(0.0, 100.0).is_err());
}
