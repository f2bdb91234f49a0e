use crate::core::{DataWindow, Point, ScaleFactor, Segment};

/// Shifts every point by a fixed `(dx, dy)` offset.
#[must_use]
pub fn translate(dx: f64, dy: f64, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .map(|point| Point::new(point.x + dx, point.y + dy))
        .collect()
}

/// Multiplies every coordinate by its axis scale factor.
#[must_use]
pub fn rescale(kx: f64, ky: f64, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .map(|point| Point::new(point.x * kx, point.y * ky))
        .collect()
}

/// Converts an ordered point sequence into consecutive `(p[i], p[i + 1])` pairs.
///
/// Empty and single-point input yields no segments.
#[must_use]
pub fn segments(points: &[Point]) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        segments.push(Segment::new(pair[0], pair[1]));
    }
    segments
}

/// Maps data-space points into chart space (pixels, y-up, origin at the
/// window's lower-left corner).
///
/// Translation happens in data space before scaling; reversing the order
/// would distort the offset by the scale factor. Windows too wide for `f64`
/// subtraction are projected point by point on halved coordinates.
#[must_use]
pub fn to_chart_space(points: &[Point], window: DataWindow, scale: ScaleFactor) -> Vec<Point> {
    if !window.width().is_finite() || !window.height().is_finite() {
        return points
            .iter()
            .map(|point| point_to_chart_space(*point, window, scale))
            .collect();
    }

    let origin = window.origin();
    let translated = translate(-origin.x, -origin.y, points);
    rescale(scale.kx, scale.ky, &translated)
}

/// Maps a single data-space point into chart space.
#[must_use]
pub fn point_to_chart_space(point: Point, window: DataWindow, scale: ScaleFactor) -> Point {
    Point::new(
        axis_offset(point.x, window.x_min, scale.kx),
        axis_offset(point.y, window.y_min, scale.ky),
    )
}

/// `(value - min) * k`, falling back to halved operands when the difference
/// overflows.
pub(crate) fn axis_offset(value: f64, min: f64, k: f64) -> f64 {
    let offset = value - min;
    if offset.is_finite() {
        offset * k
    } else {
        (value * 0.5 - min * 0.5) * (k * 2.0)
    }
}
