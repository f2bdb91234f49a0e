use cairo::{Context, Format, ImageSurface, Matrix};
use pango::FontDescription;

use crate::error::{GraphError, GraphResult};
use crate::render::{
    Affine, Color, DrawNode, GroupNode, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()>;
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// Renders offscreen into its own image surface through `Renderer::render`, or
/// in place on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GraphError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Surface sized to the frame's canvas.
    pub fn for_frame(frame: &RenderFrame) -> GraphResult<Self> {
        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| GraphError::InvalidData("viewport width overflows i32".to_owned()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| GraphError::InvalidData("viewport height overflows i32".to_owned()))?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> GraphResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| GraphError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        draw_group(context, &frame.root, &mut stats)?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_group(
    context: &Context,
    group: &GroupNode,
    stats: &mut CairoRenderStats,
) -> GraphResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.transform(to_matrix(group.transform));

    for child in &group.children {
        match child {
            DrawNode::Line(line) => {
                draw_line(context, line)?;
                stats.lines_drawn += 1;
            }
            DrawNode::Rect(rect) => {
                draw_rect(context, rect)?;
                stats.rects_drawn += 1;
            }
            DrawNode::Text(text) => {
                draw_text(context, text)?;
                stats.texts_drawn += 1;
            }
            DrawNode::Group(nested) => draw_group(context, nested, stats)?,
        }
    }

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn draw_line(context: &Context, line: &LinePrimitive) -> GraphResult<()> {
    apply_color(context, line.color);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    stroke_in_device_space(context, line.stroke_width)
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> GraphResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    if let Some(fill) = rect.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    }
    if rect.border_width > 0.0 {
        apply_color(context, rect.border_color);
        stroke_in_device_space(context, rect.border_width)
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
    } else {
        context.new_path();
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) -> GraphResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    context.transform(to_matrix(text.transform));
    apply_color(context, text.color);
    context.move_to(dx, -baseline);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

/// Strokes the current path with a width measured in surface pixels, so the
/// caller's scale transform does not thicken or thin lines.
fn stroke_in_device_space(context: &Context, width: f64) -> Result<(), cairo::Error> {
    context.save()?;
    context.identity_matrix();
    context.set_line_width(width);
    let result = context.stroke();
    context.restore()?;
    result
}

fn to_matrix(transform: Affine) -> Matrix {
    Matrix::new(
        transform.xx,
        transform.yx,
        transform.xy,
        transform.yy,
        transform.x0,
        transform.y0,
    )
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GraphError {
    GraphError::InvalidData(format!("{prefix}: {err}"))
}
