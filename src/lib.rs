//! simple-graph: stateless line, bar and scatter chart geometry.
//!
//! Builders in [`api`] turn data points and display attributes into a
//! [`render::RenderFrame`], a tree of line, rect, text and group primitives.
//! Frames are handed to a [`render::Renderer`]: the SVG serializer, the
//! optional Cairo backend, or a host's own.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphAttributes, GraphConfig, GraphJob, GraphOption};
pub use error::{GraphError, GraphResult};
