use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const STEEL_BLUE: Self = Self::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic CSS color name.
    pub fn parse(input: &str) -> GraphResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| GraphError::InvalidColor(input.to_owned()));
        }

        let named = match trimmed.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::from_rgb8(255, 0, 0),
            "green" => Self::from_rgb8(0, 128, 0),
            "blue" => Self::from_rgb8(0, 0, 255),
            "gray" | "grey" => Self::from_rgb8(128, 128, 128),
            "orange" => Self::from_rgb8(255, 165, 0),
            "purple" => Self::from_rgb8(128, 0, 128),
            "yellow" => Self::from_rgb8(255, 255, 0),
            "steelblue" => Self::STEEL_BLUE,
            _ => return Err(GraphError::InvalidColor(input.to_owned())),
        };
        Ok(named)
    }

    /// 8-bit channels, rounded.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.red), channel(self.green), channel(self.blue))
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |pair: &str| u8::from_str_radix(pair, 16).ok();
    let nibble = |digit: &str| u8::from_str_radix(digit, 16).ok().map(|v| v * 17);

    match hex.len() {
        3 => Some(Color::from_rgb8(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
        )),
        6 | 8 => {
            let rgb = Color::from_rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?);
            let alpha = if hex.len() == 8 {
                f64::from(byte(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Color { alpha, ..rgb })
        }
        _ => None,
    }
}

/// 2D affine transform, stored like a Cairo matrix.
///
/// Maps `(x, y)` to `(xx·x + xy·y + x0, yx·x + yy·y + y0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    #[must_use]
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self {
            x0: tx,
            y0: ty,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            xx: sx,
            yy: sy,
            ..Self::IDENTITY
        }
    }

    /// Transform applying `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            xx: next.xx * self.xx + next.xy * self.yx,
            yx: next.yx * self.xx + next.yy * self.yx,
            xy: next.xx * self.xy + next.xy * self.yy,
            yy: next.yx * self.xy + next.yy * self.yy,
            x0: next.xx * self.x0 + next.xy * self.y0 + next.x0,
            y0: next.yx * self.x0 + next.yy * self.y0 + next.y0,
        }
    }

    /// The same linear map, pivoting around `(x, y)` instead of the origin.
    #[must_use]
    pub fn about(self, x: f64, y: f64) -> Self {
        Self::translate(-x, -y).then(self).then(Self::translate(x, y))
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.xx * point.x + self.xy * point.y + self.x0,
            self.yx * point.x + self.yy * point.y + self.y0,
        )
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        [self.xx, self.yx, self.xy, self.yy, self.x0, self.y0]
            .iter()
            .all(|value| value.is_finite())
    }
}

/// Draw command for one line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn from_points(start: Point, end: Point, stroke_width: f64, color: Color) -> Self {
        Self::new(start.x, start.y, end.x, end.y, stroke_width, color)
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GraphError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for an axis-aligned rectangle.
///
/// `fill_color == None` draws the outline only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Option<Color>,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: Some(fill_color),
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub const fn outlined(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        border_width: f64,
        border_color: Color,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: None,
            border_width,
            border_color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GraphError::InvalidData(
                "rect size must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GraphError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(GraphError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label.
///
/// `transform` is applied around the anchor `(x, y)`; it keeps labels upright
/// inside mirrored groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    #[serde(default)]
    pub transform: Affine,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            transform: Affine::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.transform.is_finite() {
            return Err(GraphError::InvalidData(
                "text transform must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
