use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{ViewportState, validate_window_size};

use super::{ViewportEngine, WindowResult};

/// Serializable viewport state plus the window it produces, used to persist a
/// session and by regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub state: ViewportState,
    pub default_chart: String,
    pub active_window: WindowResult,
}

impl ViewportEngine {
    pub fn snapshot(&self) -> ViewportResult<ViewportSnapshot> {
        Ok(ViewportSnapshot {
            state: self.state.clone(),
            default_chart: self.config.default_chart.clone(),
            active_window: self.active_window()?,
        })
    }

    /// Restores state from a snapshot taken on an engine over the same
    /// datasets and default chart. The recorded window is not trusted; it is
    /// recomputed.
    pub fn restore(&mut self, snapshot: &ViewportSnapshot) -> ViewportResult<WindowResult> {
        if snapshot.default_chart != self.config.default_chart {
            return Err(ViewportError::InvalidConfig(format!(
                "snapshot default chart `{}` does not match engine default chart `{}`",
                snapshot.default_chart, self.config.default_chart
            )));
        }
        let state = &snapshot.state;
        validate_window_size(state.window_size())?;
        if !self.registry.contains(state.active_chart()) {
            return Err(ViewportError::unknown_chart(state.active_chart()));
        }

        self.state = state.clone();
        debug!(
            active_chart = self.state.active_chart(),
            window_size = self.state.window_size(),
            clicked_time = ?self.state.clicked_time(),
            "viewport state restored"
        );
        self.active_window()
    }
}
