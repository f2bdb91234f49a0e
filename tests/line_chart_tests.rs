use approx::assert_abs_diff_eq;
use simple_graph::api::{AxisAnchor, build_line_chart, build_line_chart_with_config};
use simple_graph::core::{DataWindow, Point, Viewport};
use simple_graph::render::{
    Affine, Color, LayerKind, NullRenderer, Renderer, TextHAlign, render_svg,
};
use simple_graph::{GraphAttributes, GraphConfig, GraphOption};

fn peak() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(20.0, 0.0),
    ]
}

#[test]
fn plain_line_chart_has_series_and_axes_only() {
    let frame = build_line_chart(&GraphAttributes::new(100, 100), &peak());

    let series = frame.layer(LayerKind::Series).expect("series layer");
    assert_eq!(series.lines().count(), 2);
    let axis = frame.layer(LayerKind::Axis).expect("axis layer");
    assert_eq!(axis.lines().count(), 2);

    assert!(frame.layer(LayerKind::TickMarks).is_none());
    assert!(frame.layer(LayerKind::BoundingBox).is_none());
    assert!(frame.layer(LayerKind::Labels).is_none());

    let counts = frame.counts();
    assert_eq!(counts.lines, 4);
    assert_eq!(counts.rects, 0);
    assert_eq!(counts.texts, 0);
}

#[test]
fn series_is_scaled_into_the_plot_area() {
    let frame = build_line_chart(&GraphAttributes::new(100, 100), &peak());
    let lines: Vec<_> = frame
        .layer(LayerKind::Series)
        .expect("series layer")
        .lines()
        .copied()
        .collect();

    assert_eq!((lines[0].x1, lines[0].y1), (0.0, 0.0));
    assert_eq!((lines[0].x2, lines[0].y2), (50.0, 100.0));
    assert_eq!((lines[1].x1, lines[1].y1), (50.0, 100.0));
    assert_eq!((lines[1].x2, lines[1].y2), (100.0, 0.0));
    assert_eq!(lines[0].color, Color::STEEL_BLUE);
}

#[test]
fn axes_span_the_window_through_the_origin() {
    let frame = build_line_chart(&GraphAttributes::new(100, 100), &peak());
    let axis: Vec<_> = frame
        .layer(LayerKind::Axis)
        .expect("axis layer")
        .lines()
        .copied()
        .collect();

    assert_eq!((axis[0].x1, axis[0].y1, axis[0].x2, axis[0].y2), (0.0, 0.0, 100.0, 0.0));
    assert_eq!((axis[1].x1, axis[1].y1, axis[1].x2, axis[1].y2), (0.0, 0.0, 0.0, 100.0));
    assert_eq!(axis[0].color, Color::BLACK);
}

#[test]
fn origin_anchored_axes_cross_at_data_zero() {
    let points = [Point::new(-10.0, -5.0), Point::new(10.0, 15.0)];
    let frame = build_line_chart(&GraphAttributes::new(200, 200), &points);
    let axis: Vec<_> = frame
        .layer(LayerKind::Axis)
        .expect("axis layer")
        .lines()
        .copied()
        .collect();

    // y = 0 sits a quarter of the way up, x = 0 half way across.
    assert_abs_diff_eq!(axis[0].y1, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis[1].x1, 100.0, epsilon = 1e-9);

    let pinned = GraphAttributes::new(200, 200)
        .with_option(GraphOption::XAxisAt(AxisAnchor::WindowMin))
        .with_option(GraphOption::YAxisAt(AxisAnchor::WindowMin));
    let frame = build_line_chart(&pinned, &points);
    let axis: Vec<_> = frame
        .layer(LayerKind::Axis)
        .expect("axis layer")
        .lines()
        .copied()
        .collect();
    assert_eq!(axis[0].y1, 0.0);
    assert_eq!(axis[1].x1, 0.0);
}

#[test]
fn tick_options_add_bounding_box_ticks_and_labels() {
    let attributes = GraphAttributes::new(100, 100)
        .with_option(GraphOption::XTickmarks(3))
        .with_option(GraphOption::YTickmarks(2));
    let frame = build_line_chart(&attributes, &peak());

    let bbox = frame.layer(LayerKind::BoundingBox).expect("bounding box");
    let rect = bbox.rects().next().expect("bounding rect");
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 100.0, 100.0));
    assert!(rect.fill_color.is_none());

    let ticks = frame.layer(LayerKind::TickMarks).expect("tick marks");
    assert_eq!(ticks.lines().count(), 5);

    let labels: Vec<_> = frame
        .layer(LayerKind::Labels)
        .expect("labels")
        .texts()
        .map(|text| (text.text.as_str(), text.h_align))
        .collect();
    assert_eq!(
        labels,
        [
            ("0", TextHAlign::Center),
            ("10", TextHAlign::Center),
            ("20", TextHAlign::Center),
            ("0", TextHAlign::Right),
            ("10", TextHAlign::Right),
        ]
    );
}

#[test]
fn single_axis_ticks_still_draw_the_bounding_box() {
    let attributes = GraphAttributes::new(100, 100).with_option(GraphOption::YTickmarks(1));
    let frame = build_line_chart(&attributes, &peak());

    assert!(frame.layer(LayerKind::BoundingBox).is_some());
    let ticks = frame.layer(LayerKind::TickMarks).expect("tick marks");
    assert_eq!(ticks.lines().count(), 1);
}

#[test]
fn surface_group_flips_y_inside_the_margin() {
    let attributes = GraphAttributes::new(100, 100).with_option(GraphOption::Margin(10.0));
    let frame = build_line_chart(&attributes, &peak());

    assert_eq!(frame.viewport, Viewport::new(120, 120));
    assert_eq!(frame.root.kind, LayerKind::Surface);
    assert_eq!(
        frame.root.transform,
        Affine::scale(1.0, -1.0).then(Affine::translate(10.0, 110.0))
    );
}

#[test]
fn labels_stay_upright_under_a_mirrored_scale() {
    let attributes = GraphAttributes::new(100, 100)
        .with_option(GraphOption::Scale(-1.0, 2.0))
        .with_option(GraphOption::XTickmarks(2));
    let frame = build_line_chart(&attributes, &peak());

    assert_eq!(frame.viewport, Viewport::new(180, 280));
    let label = frame
        .layer(LayerKind::Labels)
        .and_then(|labels| labels.texts().next())
        .expect("label");
    assert_eq!(label.transform, Affine::scale(-1.0, -1.0));
    frame.validate().expect("mirrored frame validates");
}

#[test]
fn explicit_window_overrides_inferred_extent() {
    let attributes = GraphAttributes::new(100, 100)
        .with_option(GraphOption::Window(DataWindow::new(0.0, 40.0, 0.0, 20.0)));
    let frame = build_line_chart(&attributes, &peak());
    let peak_line = frame
        .layer(LayerKind::Series)
        .and_then(|series| series.lines().next())
        .copied()
        .expect("first segment");

    assert_eq!((peak_line.x2, peak_line.y2), (25.0, 50.0));
}

#[test]
fn empty_and_non_finite_data_degrade_to_axes() {
    let frame = build_line_chart(&GraphAttributes::new(100, 100), &[]);
    assert!(frame.layer(LayerKind::Series).is_none());
    assert_eq!(frame.counts().lines, 2);
    frame.validate().expect("empty chart validates");

    let noisy = [
        Point::new(0.0, 0.0),
        Point::new(f64::NAN, 3.0),
        Point::new(5.0, 5.0),
    ];
    let frame = build_line_chart(&GraphAttributes::new(100, 100), &noisy);
    assert_eq!(frame.layer(LayerKind::Series).expect("series").lines().count(), 1);
}

#[test]
fn vertical_data_stays_finite() {
    let points = [Point::new(3.0, 0.0), Point::new(3.0, 8.0)];
    let frame = build_line_chart(&GraphAttributes::new(50, 50), &points);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("finite geometry renders");
    assert_eq!(renderer.last_counts.lines, 3);
}

#[test]
fn building_is_deterministic() {
    let attributes = GraphAttributes::new(320, 200)
        .with_option(GraphOption::Color("#ff8800".to_owned()))
        .with_option(GraphOption::XTickmarks(5));
    assert_eq!(
        build_line_chart(&attributes, &peak()),
        build_line_chart(&attributes, &peak())
    );
}

#[test]
fn extreme_finite_data_projects_inside_the_plot() {
    let points = [Point::new(-1e308, 0.0), Point::new(1e308, 1.0)];
    let attributes = GraphAttributes::new(100, 100)
        .with_option(GraphOption::XTickmarks(3))
        .with_option(GraphOption::YTickmarks(2));
    let frame = build_line_chart(&attributes, &points);

    render_svg(&frame).expect("extreme data renders");
    let line = frame
        .layer(LayerKind::Series)
        .and_then(|series| series.lines().next())
        .copied()
        .expect("segment");
    assert_abs_diff_eq!(line.x1, 0.0);
    assert_abs_diff_eq!(line.x2, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line.y2, 100.0, epsilon = 1e-9);

    let ticks = frame.layer(LayerKind::TickMarks).expect("ticks");
    let middle = ticks.lines().nth(1).copied().expect("middle x tick");
    assert_abs_diff_eq!(middle.x1, 50.0, epsilon = 1e-9);
}

#[test]
fn host_config_with_reversed_window_is_normalized() {
    let mut config = GraphConfig::new(Viewport::new(100, 100));
    config.window = Some(DataWindow {
        x_min: 20.0,
        x_max: 0.0,
        y_min: 10.0,
        y_max: 0.0,
    });
    let frame = build_line_chart_with_config(&config, &peak());

    let lines: Vec<_> = frame
        .layer(LayerKind::Series)
        .expect("series")
        .lines()
        .copied()
        .collect();
    assert_eq!((lines[0].x1, lines[0].y1), (0.0, 0.0));
    assert_eq!((lines[1].x2, lines[1].y2), (100.0, 0.0));
    assert_eq!(frame, build_line_chart(&GraphAttributes::new(100, 100), &peak()));
}
