use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{DEFAULT_CHART, DEFAULT_WINDOW_SIZE, validate_window_size};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load viewport
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportEngineConfig {
    /// Chart selected at startup and after every reset.
    #[serde(default = "default_chart")]
    pub default_chart: String,
    /// Window size in seconds before the first resize.
    #[serde(default = "default_window_size")]
    pub initial_window_size: f64,
}

impl Default for ViewportEngineConfig {
    fn default() -> Self {
        Self {
            default_chart: default_chart(),
            initial_window_size: default_window_size(),
        }
    }
}

impl ViewportEngineConfig {
    #[must_use]
    pub fn new(default_chart: impl Into<String>) -> Self {
        Self {
            default_chart: default_chart.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_window_size(mut self, window_size: f64) -> Self {
        self.initial_window_size = window_size;
        self
    }

    pub fn validate(&self) -> ViewportResult<()> {
        if self.default_chart.is_empty() {
            return Err(ViewportError::InvalidConfig(
                "default chart name must not be empty".to_owned(),
            ));
        }
        validate_window_size(self.initial_window_size)?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ViewportResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ViewportError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ViewportResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewportError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}

fn default_chart() -> String {
    DEFAULT_CHART.to_owned()
}

fn default_window_size() -> f64 {
    DEFAULT_WINDOW_SIZE
}
