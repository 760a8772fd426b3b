use serde::{Deserialize, Serialize};

use crate::core::json_float;
use crate::error::{ViewportError, ViewportResult};

pub const DEFAULT_WINDOW_SIZE: f64 = 2.0;
pub const DEFAULT_CHART: &str = "accelerometer";

/// User interaction driving the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewportEvent {
    /// A point on `chart` was clicked at `time`.
    Click {
        chart: String,
        #[serde(with = "json_float")]
        time: f64,
    },
    /// The window-size control moved.
    Resize {
        #[serde(with = "json_float")]
        window_size: f64,
    },
    /// Back to the default chart, with no click.
    Reset,
}

/// Mutable viewport state.
///
/// `window_size` and `clicked_time` survive chart switches; only a reset
/// clears the click, and nothing but a resize touches the window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    #[serde(with = "json_float")]
    window_size: f64,
    active_chart: String,
    #[serde(default, with = "json_float::option")]
    clicked_time: Option<f64>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            active_chart: DEFAULT_CHART.to_owned(),
            clicked_time: None,
        }
    }
}

impl ViewportState {
    pub fn new(active_chart: impl Into<String>, window_size: f64) -> ViewportResult<Self> {
        Ok(Self {
            window_size: validate_window_size(window_size)?,
            active_chart: active_chart.into(),
            clicked_time: None,
        })
    }

    #[must_use]
    pub fn window_size(&self) -> f64 {
        self.window_size
    }

    #[must_use]
    pub fn active_chart(&self) -> &str {
        &self.active_chart
    }

    #[must_use]
    pub fn clicked_time(&self) -> Option<f64> {
        self.clicked_time
    }

    pub fn on_click(&mut self, chart: &str, time: f64) {
        if self.active_chart != chart {
            self.active_chart = chart.to_owned();
        }
        self.clicked_time = Some(time);
    }

    /// Leaves the state untouched when `window_size` is rejected.
    pub fn on_resize(&mut self, window_size: f64) -> ViewportResult<()> {
        self.window_size = validate_window_size(window_size)?;
        Ok(())
    }

    pub fn on_reset(&mut self, default_chart: &str) {
        self.active_chart = default_chart.to_owned();
        self.clicked_time = None;
    }

    /// Applies one event in place.
    pub fn apply(&mut self, event: &ViewportEvent, default_chart: &str) -> ViewportResult<()> {
        match event {
            ViewportEvent::Click { chart, time } => self.on_click(chart, *time),
            ViewportEvent::Resize { window_size } => self.on_resize(*window_size)?,
            ViewportEvent::Reset => self.on_reset(default_chart),
        }
        Ok(())
    }

    /// Reducer form of [`ViewportState::apply`].
    pub fn reduce(mut self, event: &ViewportEvent, default_chart: &str) -> ViewportResult<Self> {
        self.apply(event, default_chart)?;
        Ok(self)
    }
}

/// Window sizes must be `>= 0`. NaN is rejected too; `+inf` is accepted and
/// simply covers every sample from the lower edge on.
pub(crate) fn validate_window_size(value: f64) -> ViewportResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(ViewportError::InvalidWindowSize { value });
    }
    Ok(value)
}
