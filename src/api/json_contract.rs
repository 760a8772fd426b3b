use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

use super::{ViewportEngine, ViewportSnapshot, WindowResult};

pub const WINDOW_RESULT_JSON_SCHEMA_V1: u32 = 1;
pub const VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResultJsonContractV1 {
    pub schema_version: u32,
    pub result: WindowResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewportSnapshot,
}

impl WindowResult {
    pub fn to_json_pretty(&self) -> ViewportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ViewportError::InvalidConfig(format!("failed to serialize window result: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ViewportResult<String> {
        let payload = WindowResultJsonContractV1 {
            schema_version: WINDOW_RESULT_JSON_SCHEMA_V1,
            result: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewportError::InvalidConfig(format!(
                "failed to serialize window result contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare result or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ViewportResult<Self> {
        if let Ok(result) = serde_json::from_str::<WindowResult>(input) {
            return Ok(result);
        }
        let payload: WindowResultJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidConfig(format!("failed to parse window result json payload: {e}"))
        })?;
        if payload.schema_version != WINDOW_RESULT_JSON_SCHEMA_V1 {
            return Err(ViewportError::InvalidConfig(format!(
                "unsupported window result schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.result)
    }
}

impl ViewportSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ViewportResult<String> {
        let payload = ViewportSnapshotJsonContractV1 {
            schema_version: VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewportError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ViewportResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewportSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewportSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewportError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ViewportEngine {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ViewportResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }

    pub fn window_for_json_contract_v1_pretty(&self, chart: &str) -> ViewportResult<String> {
        self.window_for(chart)?.to_json_contract_v1_pretty()
    }
}
