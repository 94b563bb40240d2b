// File: crates/lapviz-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts and a track to PNG bytes, labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// - Independent of goldens, each render is checked at a few hand-computed pixels
//   (2x backing store, so device = logical * 2).

use lapviz_core::{
    render, BarChartInput, BarDataset, ChartInput, ChartOptions, Color, LineChartInput, LineDataset, PathSegment,
    Series, TrackInput, TrackOptions, TrackProjector, YAxisId,
};
use lapviz_render_skia::RasterSurface;

fn chart_bytes(input: ChartInput) -> Vec<u8> {
    let mut surface = RasterSurface::new(400.0, 240.0).expect("surface");
    let options = ChartOptions { draw_labels: false, ..ChartOptions::default() };
    let mut handle = render(input, &mut surface, options).expect("render");
    handle.surface_mut().to_png_bytes().expect("png")
}

fn pixel_at(bytes: &[u8], x: u32, y: u32) -> [u8; 4] {
    image::load_from_memory(bytes).expect("decode").to_rgba8().get_pixel(x, y).0
}

fn check_snapshot(name: &str, bytes: Vec<u8>) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_throttle_brake_chart() {
    let red = Color::from_rgb(0xff, 0x45, 0x3a);
    let blue = Color::from_rgb(0x36, 0x71, 0xc6);
    let mut input = LineChartInput::new(vec![
        LineDataset::new("Throttle", Series::new(vec![0.0, 25.0, 50.0, 75.0, 100.0], vec![100.0, 80.0, 20.0, 60.0, 100.0]), blue)
            .filled(blue.with_alpha(0x40)),
        LineDataset::new("Brake", Series::new(vec![0.0, 25.0, 50.0, 75.0, 100.0], vec![0.0, 0.0, 100.0, 0.0, 0.0]), red)
            .stepped()
            .on_axis(YAxisId::Secondary),
    ]);
    input.y_axis = input.y_axis.clone().with_limits(0.0, 100.0);
    input.y2_axis = input.y2_axis.clone().with_limits(0.0, 100.0);
    let bytes = chart_bytes(input.into());
    // Plot is (60, 60)-(340, 180). Throttle leg (0, 100) -> (25, 80) passes logical (95, 72).
    assert_eq!(pixel_at(&bytes, 190, 144), [0x36, 0x71, 0xc6, 0xff]);
    // Brake steps up at x = 50, a vertical stroke at logical x = 200.
    assert_eq!(pixel_at(&bytes, 400, 240), [0xff, 0x45, 0x3a, 0xff]);
    assert_eq!(pixel_at(&bytes, 20, 20), [0x1a, 0x1a, 0x1a, 0xff]);
    check_snapshot("throttle_brake.png", bytes);
}

#[test]
fn golden_sector_bars() {
    let input = BarChartInput::new(
        vec!["S1".into(), "S2".into(), "S3".into()],
        vec![
            BarDataset::new("VER", vec![10.0, 20.0, 30.0], Color::from_rgb(0x00, 0xff, 0x88)),
            BarDataset::new("HAM", vec![15.0, 18.0, 25.0], Color::from_rgb(0x00, 0x7a, 0xff)),
        ],
    );
    let bytes = chart_bytes(input.into());
    // Slot 93.3, bar 37.3, values 0..30 over plot y 180..60.
    // VER S1 spans x 69.3..106.7, y 140..180; HAM S1 spans x 106.7..144, y 120..180.
    assert_eq!(pixel_at(&bytes, 176, 320), [0x00, 0xff, 0x88, 0xff]);
    assert_eq!(pixel_at(&bytes, 251, 300), [0x00, 0x7a, 0xff, 0xff]);
    // Above the VER S1 bar.
    assert_eq!(pixel_at(&bytes, 176, 260), [0x1a, 0x1a, 0x1a, 0xff]);
    check_snapshot("sector_bars.png", bytes);
}

#[test]
fn golden_track() {
    let segments = vec![
        PathSegment::new(vec![0.0, 100.0, 200.0], vec![0.0, 60.0, 0.0], Color::from_rgb(0x36, 0x71, 0xc6)),
        PathSegment::new(vec![200.0, 100.0, 0.0], vec![0.0, -60.0, 0.0], Color::from_rgb(0x27, 0xf4, 0xd2)),
    ];
    let mut surface = RasterSurface::new(300.0, 300.0).expect("surface");
    TrackProjector::new(TrackOptions::default()).render(&TrackInput::new(segments), &mut surface).expect("render");
    let bytes = surface.to_png_bytes().expect("png");
    // Scale 1, data (x, y) lands on logical (x + 50, y + 150).
    assert_eq!(pixel_at(&bytes, 200, 360), [0x36, 0x71, 0xc6, 0xff]);
    assert_eq!(pixel_at(&bytes, 400, 240), [0x27, 0xf4, 0xd2, 0xff]);
    assert_eq!(pixel_at(&bytes, 300, 300), [0x0a, 0x0a, 0x0a, 0xff]);
    check_snapshot("track.png", bytes);
}
