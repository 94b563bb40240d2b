use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapviz_core::{Color, PathSegment, Size, TrackInput, TrackProjector};

/// A closed oval split into `segments` minisectors of `per_segment` points each.
fn oval(segments: usize, per_segment: usize) -> TrackInput {
    let palette = [Color::from_rgb(0x36, 0x71, 0xc6), Color::from_rgb(0x27, 0xf4, 0xd2), Color::from_rgb(0xff, 0x87, 0x00)];
    let total = segments * per_segment;
    let segs = (0..segments)
        .map(|s| {
            let (x, y): (Vec<f64>, Vec<f64>) = (0..=per_segment)
                .map(|i| {
                    let t = (s * per_segment + i) as f64 / total as f64 * std::f64::consts::TAU;
                    (t.cos() * 4_000.0, t.sin() * 1_500.0)
                })
                .unzip();
            PathSegment::new(x, y, palette[s % palette.len()])
        })
        .collect();
    TrackInput::new(segs)
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("track_project");
    for &(segments, per_segment) in &[(25usize, 40usize), (200, 100)] {
        group.bench_function(format!("oval_{segments}x{per_segment}"), |b| {
            let input = oval(segments, per_segment);
            let projector = TrackProjector::default();
            b.iter(|| black_box(projector.project(&input, Size::new(600.0, 600.0)).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
