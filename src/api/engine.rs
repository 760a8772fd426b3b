use std::sync::Arc;

use tracing::debug;

use crate::error::{ViewportError, ViewportResult};
use crate::interaction::ViewportState;

use super::{DatasetRegistry, ViewportEngineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ViewportEngine` owns one [`ViewportState`] and reads datasets from a shared
/// [`DatasetRegistry`]. Engines are plain values: several can window the same
/// registry independently (one per tab or session).
#[derive(Debug, Clone)]
pub struct ViewportEngine {
    pub(super) registry: Arc<DatasetRegistry>,
    pub(super) config: ViewportEngineConfig,
    pub(super) state: ViewportState,
}

impl ViewportEngine {
    /// Fails when the configured default chart is not registered or the
    /// initial window size is invalid.
    pub fn new(
        registry: impl Into<Arc<DatasetRegistry>>,
        config: ViewportEngineConfig,
    ) -> ViewportResult<Self> {
        let registry = registry.into();
        config.validate()?;
        if !registry.contains(&config.default_chart) {
            return Err(ViewportError::unknown_chart(&config.default_chart));
        }

        let state = ViewportState::new(config.default_chart.clone(), config.initial_window_size)?;
        debug!(
            default_chart = %config.default_chart,
            window_size = config.initial_window_size,
            datasets = registry.len(),
            "viewport engine initialized"
        );

        Ok(Self {
            registry,
            config,
            state,
        })
    }

    /// Engine with [`ViewportEngineConfig::default`].
    pub fn with_default_config(registry: impl Into<Arc<DatasetRegistry>>) -> ViewportResult<Self> {
        Self::new(registry, ViewportEngineConfig::default())
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ViewportEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<DatasetRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn window_size(&self) -> f64 {
        self.state.window_size()
    }

    #[must_use]
    pub fn active_chart(&self) -> &str {
        self.state.active_chart()
    }

    #[must_use]
    pub fn clicked_time(&self) -> Option<f64> {
        self.state.clicked_time()
    }
}
