use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::{AxisSpec, ResolvedAxis, ScaleSpec};

pub const RESOLVED_AXIS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxisJsonContractV1 {
    pub schema_version: u32,
    pub axis: ResolvedAxis,
}

impl ResolvedAxis {
    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxisError::invalid(format!("failed to serialize resolved axis: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = ResolvedAxisJsonContractV1 {
            schema_version: RESOLVED_AXIS_JSON_SCHEMA_V1,
            axis: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::invalid(format!("failed to serialize resolved axis contract v1: {e}"))
        })
    }

    /// Accepts either a bare resolved axis or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(axis) = serde_json::from_str::<ResolvedAxis>(input) {
            return Ok(axis);
        }
        let payload: ResolvedAxisJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::invalid(format!("failed to parse resolved axis json payload: {e}"))
        })?;
        if payload.schema_version != RESOLVED_AXIS_JSON_SCHEMA_V1 {
            return Err(AxisError::invalid(format!(
                "unsupported resolved axis schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.axis)
    }
}

impl AxisSpec {
    /// Parses axis options; the tick formatter cannot be expressed in JSON and
    /// stays unset.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::invalid(format!("failed to parse axis spec json: {e}")))
    }
}

impl ScaleSpec {
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::invalid(format!("failed to parse scale spec json: {e}")))
    }
}
