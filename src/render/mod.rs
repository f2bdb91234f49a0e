mod frame;
mod frame_json;
mod layer;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{DrawNode, GroupNode, PrimitiveCounts, RenderFrame};
pub use frame_json::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use layer::LayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Affine, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderer, render_svg};

use crate::error::GraphResult;

/// Contract implemented by any rendering collaborator.
///
/// Backends receive a fully built, deterministic `RenderFrame`, so drawing
/// code stays isolated from chart layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
