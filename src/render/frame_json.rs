use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::RenderFrame;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for frames handed to hosts as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::Serialization(format!("failed to serialize render frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::Serialization(format!("failed to parse render frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(GraphError::Serialization(format!(
                "unsupported render frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
