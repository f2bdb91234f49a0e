use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::Viewport;
use crate::core::DataWindow;

/// Span substituted for a zero-width or non-finite axis so scale factors stay finite.
pub const DEGENERATE_SPAN_FALLBACK: f64 = 1.0;

/// Pixel-per-data-unit ratio on each axis.
///
/// Derived per render from the data window and the viewport; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    pub kx: f64,
    pub ky: f64,
}

impl ScaleFactor {
    #[must_use]
    pub const fn new(kx: f64, ky: f64) -> Self {
        Self { kx, ky }
    }

    /// `(width / data_width, height / data_height)`.
    ///
    /// An axis whose data span is zero (all samples share one coordinate) or
    /// non-finite is scaled as if it spanned `DEGENERATE_SPAN_FALLBACK` units.
    /// Finite bounds whose difference overflows are measured on halved bounds.
    #[must_use]
    pub fn from_window(window: DataWindow, viewport: Viewport) -> Self {
        Self {
            kx: axis_factor(viewport.width_px(), window.x_min, window.x_max, "x"),
            ky: axis_factor(viewport.height_px(), window.y_min, window.y_max, "y"),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.kx.is_finite() && self.ky.is_finite()
    }
}

fn axis_factor(pixels: f64, min: f64, max: f64, axis: &'static str) -> f64 {
    let span = max - min;
    if span.is_finite() && span > 0.0 {
        return pixels / span;
    }

    let half_span = max * 0.5 - min * 0.5;
    if half_span.is_finite() && half_span > 0.0 {
        debug!(axis, min, max, "data span overflows, scaling on halved bounds");
        return (pixels * 0.5) / half_span;
    }

    debug!(axis, span, "degenerate data span, using fallback");
    pixels / DEGENERATE_SPAN_FALLBACK
}
