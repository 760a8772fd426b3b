//! signal-viewport: time-window viewport engine for signal dashboards.
//!
//! Datasets are registered once as sorted multi-channel time series. A
//! [`ViewportEngine`] tracks the window size, active chart and last click, and
//! turns them into index ranges over any registered dataset by bisection.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{DatasetRegistry, ViewportEngine, ViewportEngineConfig, WindowResult};
pub use error::{ViewportError, ViewportResult};
