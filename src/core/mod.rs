pub mod geometry;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod window;

pub use geometry::{point_to_chart_space, rescale, segments, to_chart_space, translate};
pub use scale::{DEGENERATE_SPAN_FALLBACK, ScaleFactor};
pub use ticks::{
    Axis, LABEL_DECIMAL_PLACES, LABEL_GAP_PX, TICK_LENGTH_PX, TickMark, axis_ticks, format_label,
    round_to, tick_positions,
};
pub use types::{Point, Segment, Viewport};
pub use window::DataWindow;
