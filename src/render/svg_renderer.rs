use std::fmt::{self, Write};

use crate::error::GraphResult;
use crate::render::{
    Affine, Color, DrawNode, GroupNode, LinePrimitive, PrimitiveCounts, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes frames to SVG 1.1 markup.
///
/// Each `render` call replaces the previous markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
    last_counts: PrimitiveCounts,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }

    #[must_use]
    pub fn last_counts(&self) -> PrimitiveCounts {
        self.last_counts
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        writeln!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        write_group(&mut out, &frame.root, 1)?;
        writeln!(out, "</svg>")?;

        self.markup = out;
        self.last_counts = frame.counts();
        Ok(())
    }
}

/// Renders `frame` to an SVG document string.
pub fn render_svg(frame: &RenderFrame) -> GraphResult<String> {
    let mut renderer = SvgRenderer::new();
    renderer.render(frame)?;
    Ok(renderer.into_markup())
}

fn write_group(out: &mut String, group: &GroupNode, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    write!(out, r#"<g class="{}""#, group.kind.as_str())?;
    if !group.transform.is_identity() {
        write!(out, r#" transform="{}""#, Matrix(group.transform))?;
    }
    writeln!(out, ">")?;

    for child in &group.children {
        match child {
            DrawNode::Line(line) => write_line(out, line, depth + 1)?,
            DrawNode::Rect(rect) => write_rect(out, rect, depth + 1)?,
            DrawNode::Text(text) => write_text(out, text, depth + 1)?,
            DrawNode::Group(nested) => write_group(out, nested, depth + 1)?,
        }
    }

    indent(out, depth)?;
    writeln!(out, "</g>")
}

fn write_line(out: &mut String, line: &LinePrimitive, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{} vector-effect="non-scaling-stroke"/>"#,
        Num(line.x1),
        Num(line.y1),
        Num(line.x2),
        Num(line.y2),
        Rgb(line.color),
        Num(line.stroke_width),
        Opacity("stroke-opacity", line.color),
    )
}

fn write_rect(out: &mut String, rect: &RectPrimitive, depth: usize) -> fmt::Result {
    indent(out, depth)?;
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        Num(rect.x),
        Num(rect.y),
        Num(rect.width),
        Num(rect.height),
    )?;
    match rect.fill_color {
        Some(fill) => write!(out, r#" fill="{}"{}"#, Rgb(fill), Opacity("fill-opacity", fill))?,
        None => write!(out, r#" fill="none""#)?,
    }
    if rect.border_width > 0.0 {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}"{} vector-effect="non-scaling-stroke""#,
            Rgb(rect.border_color),
            Num(rect.border_width),
            Opacity("stroke-opacity", rect.border_color),
        )?;
    }
    writeln!(out, "/>")
}

fn write_text(out: &mut String, text: &TextPrimitive, depth: usize) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };

    indent(out, depth)?;
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" fill="{}"{}"#,
        Num(text.x),
        Num(text.y),
        Num(text.font_size_px),
        Rgb(text.color),
        Opacity("fill-opacity", text.color),
    )?;
    if !text.transform.is_identity() {
        let pivoted = text.transform.about(text.x, text.y);
        write!(out, r#" transform="{}""#, Matrix(pivoted))?;
    }
    writeln!(out, ">{}</text>", escape_xml(&text.text))
}

fn indent(out: &mut String, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Compact decimal: at most three fractional digits, no trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = format!("{:.3}", self.0);
        let trimmed = if rounded.contains('.') {
            rounded.trim_end_matches('0').trim_end_matches('.')
        } else {
            rounded.as_str()
        };
        match trimmed {
            "-0" => f.write_str("0"),
            other => f.write_str(other),
        }
    }
}

struct Rgb(Color);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.0.to_rgb8();
        write!(f, "rgb({red},{green},{blue})")
    }
}

/// Opacity attribute, omitted for fully opaque colors.
struct Opacity(&'static str, Color);

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1.alpha >= 1.0 {
            return Ok(());
        }
        write!(f, r#" {}="{}""#, self.0, Num(self.1.alpha))
    }
}

struct Matrix(Affine);

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        write!(
            f,
            "matrix({} {} {} {} {} {})",
            Num(m.xx),
            Num(m.yx),
            Num(m.xy),
            Num(m.yy),
            Num(m.x0),
            Num(m.y0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Num, escape_xml};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(Num(10.0).to_string(), "10");
        assert_eq!(Num(2.5).to_string(), "2.5");
        assert_eq!(Num(1.0 / 3.0).to_string(), "0.333");
        assert_eq!(Num(-0.0001).to_string(), "0");
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
