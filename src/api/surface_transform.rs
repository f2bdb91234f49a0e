use crate::core::{Point, Viewport};
use crate::render::{Affine, TextHAlign};

/// Maps y-up chart space onto a y-down rendering surface.
///
/// Applies the caller's `(kx, ky)` scale (negative factors mirror the chart)
/// and translates so the scaled plot area lands inside the positive canvas,
/// `margin` pixels from every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub plot: Viewport,
    pub kx: f64,
    pub ky: f64,
    pub margin: f64,
}

impl SurfaceTransform {
    #[must_use]
    pub fn new(plot: Viewport, (kx, ky): (f64, f64), margin: f64) -> Self {
        Self {
            plot,
            kx,
            ky,
            margin,
        }
    }

    /// Full canvas: scaled plot area plus margins on every side.
    #[must_use]
    pub fn canvas(&self) -> Viewport {
        let width = self.kx.abs() * self.plot.width_px() + 2.0 * self.margin;
        let height = self.ky.abs() * self.plot.height_px() + 2.0 * self.margin;
        Viewport::new(to_canvas_px(width), to_canvas_px(height))
    }

    #[must_use]
    pub fn affine(&self) -> Affine {
        let tx = if self.kx < 0.0 {
            self.margin - self.kx * self.plot.width_px()
        } else {
            self.margin
        };
        let ty = if self.ky > 0.0 {
            self.margin + self.ky * self.plot.height_px()
        } else {
            self.margin
        };
        Affine::scale(self.kx, -self.ky).then(Affine::translate(tx, ty))
    }

    #[must_use]
    pub fn to_surface(&self, point: Point) -> Point {
        self.affine().apply(point)
    }

    /// Local text transform cancelling the surface's mirroring, so labels
    /// read upright whatever the sign of `kx` and `ky`.
    #[must_use]
    pub fn text_upright(&self) -> Affine {
        Affine::scale(self.kx.signum(), -self.ky.signum())
    }

    /// Text alignment as seen on the surface: a horizontally mirrored chart
    /// swaps left and right.
    #[must_use]
    pub fn align(&self, h_align: TextHAlign) -> TextHAlign {
        if self.kx >= 0.0 {
            return h_align;
        }
        match h_align {
            TextHAlign::Left => TextHAlign::Right,
            TextHAlign::Center => TextHAlign::Center,
            TextHAlign::Right => TextHAlign::Left,
        }
    }
}

fn to_canvas_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.ceil().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
