use tracing::debug;

use crate::core::{
    Axis, DataWindow, Point, ScaleFactor, axis_ticks, point_to_chart_space, segments,
    to_chart_space,
};
use crate::render::RenderFrame;

use super::chart_layers::ChartLayers;
use super::{GraphAttributes, GraphConfig};

/// Builds a line chart: data polyline, both axes, and, when any tick count
/// is non-zero, a bounding box with tick marks and labels.
#[must_use]
pub fn build_line_chart(attributes: &GraphAttributes, points: &[Point]) -> RenderFrame {
    build_line_chart_with_config(&attributes.config(), points)
}

#[must_use]
pub fn build_line_chart_with_config(config: &GraphConfig, points: &[Point]) -> RenderFrame {
    let config = &config.sanitized();
    let points = finite_points(points);
    let window = config
        .window
        .unwrap_or_else(|| DataWindow::from_points(&points));
    let scale = ScaleFactor::from_window(window, config.viewport);
    debug!(
        points = points.len(),
        ?window,
        kx = scale.kx,
        ky = scale.ky,
        "build line chart"
    );

    let mut layers = ChartLayers::new(config);
    for segment in segments(&to_chart_space(&points, window, scale)) {
        layers.push_series_segment(segment, config.color);
    }

    let axis_y = config.x_axis_at.resolve(window.y_min, window.y_max);
    let axis_x = config.y_axis_at.resolve(window.x_min, window.x_max);
    layers.push_axis(
        point_to_chart_space(Point::new(window.x_min, axis_y), window, scale),
        point_to_chart_space(Point::new(window.x_max, axis_y), window, scale),
    );
    layers.push_axis(
        point_to_chart_space(Point::new(axis_x, window.y_min), window, scale),
        point_to_chart_space(Point::new(axis_x, window.y_max), window, scale),
    );

    if config.has_tickmarks() {
        layers.push_bounding_box(
            0.0,
            0.0,
            config.viewport.width_px(),
            config.viewport.height_px(),
        );
    }

    let font_size = layers.font_size();
    let x_ticks = axis_ticks(Axis::X, config.x_tickmarks, window, scale, font_size);
    let y_ticks = axis_ticks(Axis::Y, config.y_tickmarks, window, scale, font_size);
    for tick in x_ticks.iter().chain(&y_ticks) {
        layers.push_tick(tick);
    }

    layers.into_frame()
}

/// Drops samples with a non-finite coordinate.
pub(crate) fn finite_points(points: &[Point]) -> Vec<Point> {
    let finite: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    if finite.len() != points.len() {
        debug!(
            dropped = points.len() - finite.len(),
            "dropping non-finite points"
        );
    }
    finite
}
