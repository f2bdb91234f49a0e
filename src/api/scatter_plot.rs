use tracing::debug;

use crate::core::{Axis, DataWindow, Point, ScaleFactor, axis_ticks, to_chart_space};
use crate::render::{RectPrimitive, RenderFrame};

use super::chart_layers::ChartLayers;
use super::line_chart::finite_points;
use super::{GraphAttributes, GraphConfig};

/// Builds a scatter plot: one square dot per point inside a bounding box
/// grown by the dot radius, so dots on the window edge are not clipped.
#[must_use]
pub fn build_scatter_plot(attributes: &GraphAttributes, points: &[Point]) -> RenderFrame {
    build_scatter_plot_with_config(&attributes.config(), points)
}

#[must_use]
pub fn build_scatter_plot_with_config(config: &GraphConfig, points: &[Point]) -> RenderFrame {
    let config = &config.sanitized();
    let points = finite_points(points);
    let window = config
        .window
        .unwrap_or_else(|| DataWindow::from_points(&points));
    let scale = ScaleFactor::from_window(window, config.viewport);
    let dot = config.dot_size;
    let radius = dot / 2.0;
    debug!(points = points.len(), ?window, dot, "build scatter plot");

    let mut layers = ChartLayers::new(config);
    for center in to_chart_space(&points, window, scale) {
        layers.push_series_rect(RectPrimitive::filled(
            center.x - radius,
            center.y - radius,
            dot,
            dot,
            config.color,
        ));
    }

    layers.push_bounding_box(
        -radius,
        -radius,
        config.viewport.width_px() + dot,
        config.viewport.height_px() + dot,
    );

    let font_size = layers.font_size();
    let x_ticks = axis_ticks(Axis::X, config.x_tickmarks, window, scale, font_size);
    let y_ticks = axis_ticks(Axis::Y, config.y_tickmarks, window, scale, font_size);
    for tick in x_ticks.into_iter().chain(y_ticks) {
        layers.push_tick(&tick.offset_outward(radius));
    }

    layers.into_frame()
}
