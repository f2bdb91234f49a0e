use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{DataWindow, Viewport};
use crate::render::Color;

/// Largest tick count a config keeps; larger requests are capped.
pub const MAX_TICKMARKS: usize = 1_000;

/// Where an axis line crosses the perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisAnchor {
    /// Through data zero; falls back to the window minimum when zero lies
    /// outside the window.
    Origin,
    /// Along the window minimum.
    WindowMin,
}

impl AxisAnchor {
    /// Data-space coordinate of the axis line within `[min, max]`.
    #[must_use]
    pub fn resolve(self, min: f64, max: f64) -> f64 {
        match self {
            Self::Origin if (min..=max).contains(&0.0) => 0.0,
            Self::Origin | Self::WindowMin => min,
        }
    }
}

/// One display option. Options form an unordered list; see
/// [`GraphAttributes::config`] for lookup rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphOption {
    /// Series color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic CSS name.
    Color(String),
    /// Tick count, capped at [`MAX_TICKMARKS`]. For bar charts, the bar stride.
    XTickmarks(usize),
    /// Tick count, capped at [`MAX_TICKMARKS`].
    YTickmarks(usize),
    /// Bar spacing in pixels.
    DeltaX(f64),
    /// Surface scale `(kx, ky)`; negative factors mirror the chart.
    Scale(f64, f64),
    /// Explicit data window instead of the data's own extent.
    Window(DataWindow),
    /// Scatter dot edge length in pixels.
    DotSize(f64),
    StrokeWidth(f64),
    FontSize(f64),
    /// Space around the plot area, in pixels.
    Margin(f64),
    XAxisAt(AxisAnchor),
    YAxisAt(AxisAnchor),
}

/// Per-call chart configuration: plot size in pixels plus display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAttributes {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub options: Vec<GraphOption>,
}

impl GraphAttributes {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, option: GraphOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Resolves the option list into a typed config.
    ///
    /// The list is scanned front to back and the first option of each kind
    /// wins. Missing options, and invalid values of the first matching
    /// option, fall back to the `GraphConfig` defaults.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        let defaults = GraphConfig::new(self.viewport());

        let color = self
            .first(|option| match option {
                GraphOption::Color(value) => Some(value.as_str()),
                _ => None,
            })
            .map_or(defaults.color, |value| match Color::parse(value) {
                Ok(color) => color,
                Err(err) => {
                    warn!(error = %err, "ignoring color option");
                    defaults.color
                }
            });

        GraphConfig {
            viewport: defaults.viewport,
            color,
            x_tickmarks: self
                .first(|option| match option {
                    GraphOption::XTickmarks(count) => Some(*count),
                    _ => None,
                })
                .unwrap_or(defaults.x_tickmarks),
            y_tickmarks: self
                .first(|option| match option {
                    GraphOption::YTickmarks(count) => Some(*count),
                    _ => None,
                })
                .unwrap_or(defaults.y_tickmarks),
            delta_x: self
                .first(|option| match option {
                    GraphOption::DeltaX(value) => Some(*value),
                    _ => None,
                })
                .unwrap_or(defaults.delta_x),
            scale: self
                .first(|option| match option {
                    GraphOption::Scale(kx, ky) => Some((*kx, *ky)),
                    _ => None,
                })
                .unwrap_or(defaults.scale),
            window: self.first(|option| match option {
                GraphOption::Window(window) => Some(*window),
                _ => None,
            }),
            dot_size: self
                .first(|option| match option {
                    GraphOption::DotSize(value) => Some(*value),
                    _ => None,
                })
                .unwrap_or(defaults.dot_size),
            stroke_width: self
                .first(|option| match option {
                    GraphOption::StrokeWidth(value) => Some(*value),
                    _ => None,
                })
                .unwrap_or(defaults.stroke_width),
            font_size: self
                .first(|option| match option {
                    GraphOption::FontSize(value) => Some(*value),
                    _ => None,
                })
                .unwrap_or(defaults.font_size),
            margin: self
                .first(|option| match option {
                    GraphOption::Margin(value) => Some(*value),
                    _ => None,
                })
                .unwrap_or(defaults.margin),
            x_axis_at: self
                .first(|option| match option {
                    GraphOption::XAxisAt(anchor) => Some(*anchor),
                    _ => None,
                })
                .unwrap_or(defaults.x_axis_at),
            y_axis_at: self
                .first(|option| match option {
                    GraphOption::YAxisAt(anchor) => Some(*anchor),
                    _ => None,
                })
                .unwrap_or(defaults.y_axis_at),
        }
        .sanitized()
    }

    fn first<'a, T>(&'a self, pick: impl Fn(&'a GraphOption) -> Option<T>) -> Option<T> {
        self.options.iter().find_map(pick)
    }
}

fn positive_or(name: &'static str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(option = name, value, "ignoring non-positive option");
        default
    }
}

fn capped_tickmarks(name: &'static str, count: usize) -> usize {
    if count > MAX_TICKMARKS {
        warn!(option = name, count, max = MAX_TICKMARKS, "capping tick count");
        MAX_TICKMARKS
    } else {
        count
    }
}

/// Typed, fully resolved chart configuration.
///
/// Hosts may also build or persist this directly; every field but the
/// viewport has a serde default. Builders pass it through
/// [`GraphConfig::sanitized`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub viewport: Viewport,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub x_tickmarks: usize,
    #[serde(default)]
    pub y_tickmarks: usize,
    #[serde(default = "default_delta_x")]
    pub delta_x: f64,
    #[serde(default = "default_scale")]
    pub scale: (f64, f64),
    #[serde(default)]
    pub window: Option<DataWindow>,
    #[serde(default = "default_dot_size")]
    pub dot_size: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_axis_anchor")]
    pub x_axis_at: AxisAnchor,
    #[serde(default = "default_axis_anchor")]
    pub y_axis_at: AxisAnchor,
}

impl GraphConfig {
    /// Config with every option at its default.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            color: default_color(),
            x_tickmarks: 0,
            y_tickmarks: 0,
            delta_x: default_delta_x(),
            scale: default_scale(),
            window: None,
            dot_size: default_dot_size(),
            stroke_width: default_stroke_width(),
            font_size: default_font_size(),
            margin: default_margin(),
            x_axis_at: default_axis_anchor(),
            y_axis_at: default_axis_anchor(),
        }
    }

    /// Replaces every out-of-range field with its default and normalizes the
    /// window, so a host-built or deserialized config is safe to render.
    ///
    /// Tick counts are capped at [`MAX_TICKMARKS`].
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::new(self.viewport);

        let color = match self.color.validate() {
            Ok(()) => self.color,
            Err(err) => {
                warn!(error = %err, "ignoring color");
                defaults.color
            }
        };

        let (kx, ky) = self.scale;
        let scale = if kx.is_finite() && ky.is_finite() && kx != 0.0 && ky != 0.0 {
            self.scale
        } else {
            warn!(kx, ky, "ignoring degenerate scale");
            defaults.scale
        };

        let window = match self.window {
            Some(window) if window.is_finite() => Some(DataWindow::new(
                window.x_min,
                window.x_max,
                window.y_min,
                window.y_max,
            )),
            Some(window) => {
                warn!(?window, "ignoring non-finite window");
                None
            }
            None => None,
        };

        let margin = if self.margin.is_finite() && self.margin >= 0.0 {
            self.margin
        } else {
            warn!(margin = self.margin, "ignoring negative or non-finite margin");
            defaults.margin
        };

        Self {
            viewport: self.viewport,
            color,
            x_tickmarks: capped_tickmarks("x_tickmarks", self.x_tickmarks),
            y_tickmarks: capped_tickmarks("y_tickmarks", self.y_tickmarks),
            delta_x: positive_or("delta_x", self.delta_x, defaults.delta_x),
            scale,
            window,
            dot_size: positive_or("dot_size", self.dot_size, defaults.dot_size),
            stroke_width: positive_or("stroke_width", self.stroke_width, defaults.stroke_width),
            font_size: positive_or("font_size", self.font_size, defaults.font_size),
            margin,
            x_axis_at: self.x_axis_at,
            y_axis_at: self.y_axis_at,
        }
    }

    #[must_use]
    pub fn has_tickmarks(&self) -> bool {
        self.x_tickmarks > 0 || self.y_tickmarks > 0
    }
}

fn default_color() -> Color {
    Color::STEEL_BLUE
}

fn default_delta_x() -> f64 {
    15.0
}

fn default_scale() -> (f64, f64) {
    (1.0, 1.0)
}

fn default_dot_size() -> f64 {
    4.0
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    10.0
}

fn default_margin() -> f64 {
    40.0
}

fn default_axis_anchor() -> AxisAnchor {
    AxisAnchor::Origin
}
