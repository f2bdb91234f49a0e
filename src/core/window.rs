use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Data-space rectangle bounding what a chart displays.
///
/// Either inferred from the data (`from_points`) or supplied by the caller to
/// pan/zoom independently of the data's own extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataWindow {
    /// Builds a window, swapping bounds that were given in reverse order.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        let (x_min, x_max) = if x_min <= x_max {
            (x_min, x_max)
        } else {
            (x_max, x_min)
        };
        let (y_min, y_max) = if y_min <= y_max {
            (y_min, y_max)
        } else {
            (y_max, y_min)
        };
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Min/max scan over the finite points.
    ///
    /// Empty input (or input without a single finite point) yields the zero
    /// rectangle.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut finite = points.iter().filter(|point| point.is_finite());
        let Some(first) = finite.next() else {
            return Self::default();
        };

        let mut window = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for point in finite {
            window.x_min = window.x_min.min(point.x);
            window.x_max = window.x_max.max(point.x);
            window.y_min = window.y_min.min(point.y);
            window.y_max = window.y_max.max(point.y);
        }
        window
    }

    /// Window for a scalar series plotted against its index.
    ///
    /// The y range always includes zero so bars grow from the baseline.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let mut window = Self::default();
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            window.x_max = window.x_max.max(index as f64);
            window.y_min = window.y_min.min(*value);
            window.y_max = window.y_max.max(*value);
        }
        window
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.x_min, self.y_min)
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Grows the window by `dx` on the left and right and `dy` on the bottom and top.
    #[must_use]
    pub fn expanded(self, dx: f64, dy: f64) -> Self {
        Self {
            x_min: self.x_min - dx,
            x_max: self.x_max + dx,
            y_min: self.y_min - dy,
            y_max: self.y_max + dy,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }
}
