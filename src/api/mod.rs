mod dataset_registry;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod window_access;
mod window_result;

pub use dataset_registry::DatasetRegistry;
pub use engine::ViewportEngine;
pub use engine_config::ViewportEngineConfig;
pub use engine_snapshot::ViewportSnapshot;
pub use json_contract::{
    VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportSnapshotJsonContractV1,
    WINDOW_RESULT_JSON_SCHEMA_V1, WindowResultJsonContractV1,
};
pub use window_result::{WindowResult, WindowSlice, WindowSliceData};
