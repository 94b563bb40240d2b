use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapviz_core::{render, ChartOptions, Color, LineChartInput, LineDataset, RecordingSurface, Series};

fn build_input(n: usize) -> LineChartInput {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64 * 100.0).collect();
    let y: Vec<f64> = (0..n).map(|i| 250.0 + (i as f64 * 0.01).sin() * 60.0).collect();
    LineChartInput::new(vec![
        LineDataset::new("VER", Series::new(x.clone(), y.clone()), Color::from_rgb(0x36, 0x71, 0xc6)),
        LineDataset::new("HAM", Series::new(x, y.iter().map(|v| v - 3.0).collect()), Color::from_rgb(0x27, 0xf4, 0xd2))
            .filled(Color::from_argb(0x40, 0x27, 0xf4, 0xd2)),
    ])
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_chart_record");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("two_drivers_{n}"), |b| {
            let input = build_input(n);
            let opts = ChartOptions { draw_labels: false, ..ChartOptions::default() };
            let mut surface = RecordingSurface::new(800.0, 400.0);
            b.iter(|| {
                let handle = render(input.clone().into(), &mut surface, opts.clone()).expect("render");
                black_box(handle.report().drawn_datasets);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
