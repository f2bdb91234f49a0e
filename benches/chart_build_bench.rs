use criterion::{Criterion, criterion_group, criterion_main};
use simple_graph::api::{build_bar_chart, build_line_chart, build_scatter_plot};
use simple_graph::core::{DataWindow, Point, ScaleFactor, Viewport, segments, to_chart_space};
use simple_graph::render::render_svg;
use simple_graph::{GraphAttributes, GraphOption};
use std::hint::black_box;

fn wave(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Point::new(x, (x * 0.01).sin() * 100.0 + x * 0.02)
        })
        .collect()
}

fn bench_chart_space_projection_10k(c: &mut Criterion) {
    let points = wave(10_000);
    let window = DataWindow::from_points(&points);
    let scale = ScaleFactor::from_window(window, Viewport::new(1920, 1080));

    c.bench_function("chart_space_projection_10k", |b| {
        b.iter(|| {
            let projected = to_chart_space(black_box(&points), black_box(window), black_box(scale));
            let _ = segments(&projected);
        })
    });
}

fn bench_line_chart_build_10k(c: &mut Criterion) {
    let points = wave(10_000);
    let attributes = GraphAttributes::new(1600, 900)
        .with_option(GraphOption::XTickmarks(11))
        .with_option(GraphOption::YTickmarks(6));

    c.bench_function("line_chart_build_10k", |b| {
        b.iter(|| {
            let _ = build_line_chart(black_box(&attributes), black_box(&points));
        })
    });
}

fn bench_scatter_plot_build_10k(c: &mut Criterion) {
    let points = wave(10_000);
    let attributes = GraphAttributes::new(1600, 900).with_option(GraphOption::DotSize(3.0));

    c.bench_function("scatter_plot_build_10k", |b| {
        b.iter(|| {
            let _ = build_scatter_plot(black_box(&attributes), black_box(&points));
        })
    });
}

fn bench_bar_chart_svg_1k(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i % 37) * 1.5).collect();
    let attributes = GraphAttributes::new(1600, 400)
        .with_option(GraphOption::DeltaX(1.6))
        .with_option(GraphOption::YTickmarks(5));
    let frame = build_bar_chart(&attributes, &values);

    c.bench_function("bar_chart_svg_1k", |b| {
        b.iter(|| {
            let _ = render_svg(black_box(&frame)).expect("svg render");
        })
    });
}

criterion_group!(
    benches,
    bench_chart_space_projection_10k,
    bench_line_chart_build_10k,
    bench_scatter_plot_build_10k,
    bench_bar_chart_svg_1k
);
criterion_main!(benches);
