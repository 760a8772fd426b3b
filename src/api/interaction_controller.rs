use tracing::{debug, warn};

use crate::error::{ViewportError, ViewportResult};
use crate::interaction::ViewportEvent;

use super::{ViewportEngine, WindowResult};

impl ViewportEngine {
    /// Selects `chart` and centers the window on `time`.
    ///
    /// `time` is not range-checked: clicks past the data simply produce a
    /// smaller or empty window. Unknown charts are rejected before any state
    /// changes.
    pub fn click(&mut self, chart: &str, time: f64) -> ViewportResult<WindowResult> {
        if !self.registry.contains(chart) {
            warn!(chart, time, "click on unknown chart rejected");
            return Err(ViewportError::unknown_chart(chart));
        }

        self.state.on_click(chart, time);
        debug!(chart, clicked_time = time, "viewport click");
        self.window_for(chart)
    }

    /// Changes the window size, keeping the active chart and click.
    pub fn resize(&mut self, window_size: f64) -> ViewportResult<WindowResult> {
        if let Err(err) = self.state.on_resize(window_size) {
            warn!(window_size, error = %err, "resize rejected");
            return Err(err);
        }

        debug!(
            window_size,
            active_chart = self.state.active_chart(),
            "viewport resize"
        );
        self.active_window()
    }

    /// Returns to the default chart with no click. The window size is kept.
    pub fn reset(&mut self) -> ViewportResult<WindowResult> {
        self.state.on_reset(&self.config.default_chart);
        debug!(
            default_chart = %self.config.default_chart,
            window_size = self.state.window_size(),
            "viewport reset"
        );
        self.window_for(&self.config.default_chart)
    }

    /// Dispatches an event to [`click`](Self::click), [`resize`](Self::resize)
    /// or [`reset`](Self::reset).
    pub fn apply(&mut self, event: &ViewportEvent) -> ViewportResult<WindowResult> {
        match event {
            ViewportEvent::Click { chart, time } => self.click(chart, *time),
            ViewportEvent::Resize { window_size } => self.resize(*window_size),
            ViewportEvent::Reset => self.reset(),
        }
    }

    /// Applies events in order, stopping at the first error.
    pub fn apply_all<'e>(
        &mut self,
        events: impl IntoIterator<Item = &'e ViewportEvent>,
    ) -> ViewportResult<Vec<WindowResult>> {
        events.into_iter().map(|event| self.apply(event)).collect()
    }
}
