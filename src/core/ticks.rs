use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::geometry::axis_offset;
use crate::core::{DataWindow, Point, ScaleFactor, Segment};

/// Length of a tick mark, perpendicular to its axis.
pub const TICK_LENGTH_PX: f64 = 5.0;
/// Gap between the outer end of a tick mark and its label.
pub const LABEL_GAP_PX: f64 = 3.0;
/// Decimal places shown on tick labels.
pub const LABEL_DECIMAL_PLACES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One tick mark in chart space together with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub axis: Axis,
    /// Data-space value the tick denotes.
    pub value: f64,
    pub segment: Segment,
    pub label_anchor: Point,
    pub label: String,
}

impl TickMark {
    /// Places a tick at `offset_px` along `axis`, just outside the plot edge.
    ///
    /// X ticks hang below the bottom edge (chart y = 0), Y ticks stick out to
    /// the left of the left edge (chart x = 0). Labels are anchored past the
    /// tick's outer end.
    #[must_use]
    pub fn at(axis: Axis, value: f64, offset_px: f64, label: String, font_size_px: f64) -> Self {
        match axis {
            Axis::X => Self {
                axis,
                value,
                segment: Segment::new(
                    Point::new(offset_px, 0.0),
                    Point::new(offset_px, -TICK_LENGTH_PX),
                ),
                label_anchor: Point::new(
                    offset_px,
                    -(TICK_LENGTH_PX + LABEL_GAP_PX + font_size_px),
                ),
                label,
            },
            Axis::Y => Self {
                axis,
                value,
                segment: Segment::new(
                    Point::new(0.0, offset_px),
                    Point::new(-TICK_LENGTH_PX, offset_px),
                ),
                label_anchor: Point::new(
                    -(TICK_LENGTH_PX + LABEL_GAP_PX),
                    offset_px - font_size_px / 3.0,
                ),
                label,
            },
        }
    }

    /// Moves the tick and its label `distance` pixels further from the plot.
    #[must_use]
    pub fn offset_outward(mut self, distance: f64) -> Self {
        let (dx, dy) = match self.axis {
            Axis::X => (0.0, -distance),
            Axis::Y => (-distance, 0.0),
        };
        let shift = |point: Point| Point::new(point.x + dx, point.y + dy);
        self.segment = Segment::new(shift(self.segment.start), shift(self.segment.end));
        self.label_anchor = shift(self.label_anchor);
        self
    }
}

/// Evenly spaced positions from `min` to `max` inclusive.
///
/// `count == 0` disables ticks. `count == 1` places a single tick on the
/// `min` boundary instead of dividing by `count - 1`.
#[must_use]
pub fn tick_positions(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let intervals = (count - 1) as f64;
            let step = (max - min) / intervals;
            (0..count)
                .map(|k| {
                    if k == count - 1 {
                        max
                    } else if step.is_finite() {
                        min + step * k as f64
                    } else {
                        // Span overflows f64; interpolate instead.
                        let t = k as f64 / intervals;
                        min * (1.0 - t) + max * t
                    }
                })
                .collect()
        }
    }
}

/// Rounds half away from zero at `places` decimals, in decimal arithmetic.
///
/// `round_to(1, 2.25) == 2.3`, `round_to(1, -2.25) == -2.3`. Values outside
/// the decimal range are returned unchanged.
#[must_use]
pub fn round_to(places: u32, value: f64) -> f64 {
    round_decimal(places, value)
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Tick label text: the value rounded to one decimal, without a trailing `.0`.
#[must_use]
pub fn format_label(value: f64) -> String {
    match round_decimal(LABEL_DECIMAL_PLACES, value) {
        Some(rounded) if rounded.is_zero() => "0".to_owned(),
        Some(rounded) => rounded.normalize().to_string(),
        None => format!("{value}"),
    }
}

fn round_decimal(places: u32, value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Tick marks for `count` evenly spaced data values along one axis of `window`.
#[must_use]
pub fn axis_ticks(
    axis: Axis,
    count: usize,
    window: DataWindow,
    scale: ScaleFactor,
    font_size_px: f64,
) -> Vec<TickMark> {
    let (min, max, k) = match axis {
        Axis::X => (window.x_min, window.x_max, scale.kx),
        Axis::Y => (window.y_min, window.y_max, scale.ky),
    };

    tick_positions(min, max, count)
        .into_iter()
        .map(|value| {
            TickMark::at(
                axis,
                value,
                axis_offset(value, min, k),
                format_label(value),
                font_size_px,
            )
        })
        .collect()
}
