use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{GraphError, GraphResult};
use crate::render::RenderFrame;

use super::{GraphAttributes, build_bar_chart, build_line_chart, build_scatter_plot};

/// Self-contained chart request, as read from JSON by hosts and the CLI.
///
/// ```json
/// {"kind": "bar", "attributes": {"width": 200, "height": 100,
///   "options": [{"DeltaX": 20.0}, {"YTickmarks": 3}]}, "values": [1, 2, 3]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphJob {
    Line {
        attributes: GraphAttributes,
        points: Vec<Point>,
    },
    Bar {
        attributes: GraphAttributes,
        values: Vec<f64>,
    },
    Scatter {
        attributes: GraphAttributes,
        points: Vec<Point>,
    },
}

impl GraphJob {
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::Serialization(format!("failed to parse graph job: {e}")))
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::Serialization(format!("failed to serialize graph job: {e}")))
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Bar { .. } => "bar",
            Self::Scatter { .. } => "scatter",
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &GraphAttributes {
        match self {
            Self::Line { attributes, .. }
            | Self::Bar { attributes, .. }
            | Self::Scatter { attributes, .. } => attributes,
        }
    }

    #[must_use]
    pub fn build(&self) -> RenderFrame {
        match self {
            Self::Line { attributes, points } => build_line_chart(attributes, points),
            Self::Bar { attributes, values } => build_bar_chart(attributes, values),
            Self::Scatter { attributes, points } => build_scatter_plot(attributes, points),
        }
    }
}
