//! Chart assemblers: `(attributes, data) → RenderFrame`.
//!
//! Every builder is a pure function. Invalid or missing inputs degrade to
//! documented defaults instead of failing.

mod bar_chart;
mod chart_layers;
mod graph_attributes;
mod graph_job;
mod line_chart;
mod scatter_plot;
mod surface_transform;

pub use bar_chart::{
    BAR_WIDTH_RATIO, bar_fraction, build_bar_chart, build_bar_chart_with_config, series_max,
};
pub use graph_attributes::{AxisAnchor, GraphAttributes, GraphConfig, GraphOption, MAX_TICKMARKS};
pub use graph_job::GraphJob;
pub use line_chart::{build_line_chart, build_line_chart_with_config};
pub use scatter_plot::{build_scatter_plot, build_scatter_plot_with_config};
pub use surface_transform::SurfaceTransform;
