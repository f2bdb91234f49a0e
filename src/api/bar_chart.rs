use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{Axis, Point, TickMark, Viewport, format_label, tick_positions};
use crate::render::{RectPrimitive, RenderFrame};

use super::chart_layers::ChartLayers;
use super::{GraphAttributes, GraphConfig};

/// Bar width as a share of the configured bar spacing.
pub const BAR_WIDTH_RATIO: f64 = 0.8;

/// Builds a bar chart. Bars are normalized against the series maximum, so
/// the largest value spans the full plot height. The plot widens when the
/// bars need more than the configured width.
#[must_use]
pub fn build_bar_chart(attributes: &GraphAttributes, values: &[f64]) -> RenderFrame {
    build_bar_chart_with_config(&attributes.config(), values)
}

#[must_use]
pub fn build_bar_chart_with_config(config: &GraphConfig, values: &[f64]) -> RenderFrame {
    let config = &config.sanitized();
    let max = series_max(values);
    let height_px = config.viewport.height_px();
    let spacing = config.delta_x;
    let bar_width = BAR_WIDTH_RATIO * spacing;
    let x_extent = values.len() as f64 * spacing;
    let plot = bar_plot_area(config.viewport, x_extent);
    debug!(bars = values.len(), max, spacing, plot_width = plot.width, "build bar chart");

    let mut layers = ChartLayers::new(&GraphConfig {
        viewport: plot,
        ..*config
    });
    for (index, value) in values.iter().enumerate() {
        let bar_height = bar_fraction(*value, max) * height_px;
        layers.push_series_rect(RectPrimitive::filled(
            index as f64 * spacing,
            bar_height.min(0.0),
            bar_width,
            bar_height.abs(),
            config.color,
        ));
    }

    layers.push_axis(Point::new(0.0, 0.0), Point::new(x_extent, 0.0));
    layers.push_axis(Point::new(0.0, 0.0), Point::new(0.0, height_px));

    // Without a positive maximum every label would land on the baseline.
    let font_size = layers.font_size();
    if config.y_tickmarks > 0 {
        let tick_values = if max > 0.0 {
            tick_positions(0.0, max, config.y_tickmarks)
        } else {
            vec![0.0]
        };
        for value in tick_values {
            let offset = bar_fraction(value, max) * height_px;
            layers.push_tick(&TickMark::at(
                Axis::Y,
                value,
                offset,
                format_label(value),
                font_size,
            ));
        }
    } else {
        let label_values = if max > 0.0 {
            vec![0.0, max / 2.0, max]
        } else {
            vec![0.0]
        };
        for value in label_values {
            let offset = bar_fraction(value, max) * height_px;
            let anchor = TickMark::at(Axis::Y, value, offset, String::new(), font_size).label_anchor;
            layers.push_label(Axis::Y, anchor, &format_label(value));
        }
    }

    if config.x_tickmarks > 0 {
        for index in (0..values.len()).step_by(config.x_tickmarks) {
            let offset = index as f64 * spacing + bar_width / 2.0;
            layers.push_tick(&TickMark::at(
                Axis::X,
                index as f64,
                offset,
                index.to_string(),
                font_size,
            ));
        }
    }

    layers.into_frame()
}

/// Plot area wide enough for every bar: the configured width, or the bar
/// extent when the series is longer.
fn bar_plot_area(viewport: Viewport, x_extent: f64) -> Viewport {
    let needed = if x_extent.is_finite() {
        x_extent.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        u32::MAX
    };
    Viewport::new(viewport.width.max(needed), viewport.height)
}

/// Largest finite value of the series, or 0 for an empty series.
#[must_use]
pub fn series_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0)
}

/// `value / max`; 0 when the maximum is not positive or the value is not finite.
#[must_use]
pub fn bar_fraction(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        value / max
    } else {
        0.0
    }
}
