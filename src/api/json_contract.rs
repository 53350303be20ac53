use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

pub const VIEWPORT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportJsonContractV1 {
    pub schema_version: u32,
    pub viewport: Viewport,
}

impl Viewport {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ViewportJsonContractV1 {
            schema_version: VIEWPORT_JSON_SCHEMA_V1,
            viewport: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize viewport contract v1: {e}"))
        })
    }

    /// Parses either a bare viewport or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse viewport json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse viewport json payload: {e}"))
            });
        }

        let payload: ViewportJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse viewport json payload: {e}"))
        })?;
        if payload.schema_version != VIEWPORT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported viewport schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.viewport)
    }
}
