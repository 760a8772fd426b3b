use tracing::trace;

use crate::core::resolve_window;
use crate::error::ViewportResult;

use super::{ViewportEngine, WindowResult, WindowSlice};

impl ViewportEngine {
    /// Visible window of `chart` under the current state. Does not mutate.
    ///
    /// Works for any registered chart, active or not, so hosts can preview a
    /// chart without selecting it.
    pub fn window_for(&self, chart: &str) -> ViewportResult<WindowResult> {
        let series = self.registry.get(chart)?;
        let range = resolve_window(series, self.state.window_size(), self.state.clicked_time());
        trace!(
            chart,
            min_time = range.bounds.min_time,
            max_time = range.bounds.max_time,
            start_idx = range.start_idx,
            end_idx = range.end_idx,
            "window query"
        );
        Ok(WindowResult::from_range(chart, range))
    }

    /// Window of the currently active chart.
    pub fn active_window(&self) -> ViewportResult<WindowResult> {
        self.window_for(self.state.active_chart())
    }

    /// Visible samples of `chart`, borrowed from the registry.
    pub fn slice_for(&self, chart: &str) -> ViewportResult<WindowSlice<'_>> {
        let result = self.window_for(chart)?;
        self.slice(&result)
    }

    /// Borrows the samples covered by a previously computed `result`.
    pub fn slice<'a>(&'a self, result: &WindowResult) -> ViewportResult<WindowSlice<'a>> {
        let (chart, series) = self.registry.get_key_value(&result.chart)?;
        WindowSlice::new(chart, series, result)
    }
}
