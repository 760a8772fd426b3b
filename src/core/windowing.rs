use serde::{Deserialize, Serialize};

use crate::core::{TimeSeries, UnclickedWindowPolicy};

/// First index `i` with `sorted[i] >= value`.
#[must_use]
pub fn bisect_left(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|t| *t < value)
}

/// First index `i` with `sorted[i] > value`.
#[must_use]
pub fn bisect_right(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|t| *t <= value)
}

/// Requested time bounds of a window, before any index lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub min_time: f64,
    pub max_time: f64,
}

/// Resolved window: requested bounds plus the half-open index range they cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRange {
    pub bounds: WindowBounds,
    pub start_idx: usize,
    pub end_idx: usize,
}

impl WindowRange {
    #[must_use]
    pub fn num_points(self) -> usize {
        self.end_idx - self.start_idx
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start_idx == self.end_idx
    }
}

/// Window bounds for the origin-anchored rule.
///
/// A click centers the window on `clicked_time` with the lower edge clamped at
/// zero. The upper edge is never clamped, so windows may run past the data.
/// Without a click the window is `[0, window_size]`.
#[must_use]
pub fn window_bounds(window_size: f64, clicked_time: Option<f64>) -> WindowBounds {
    match clicked_time {
        Some(clicked) => {
            let half = window_size / 2.0;
            WindowBounds {
                min_time: (clicked - half).max(0.0),
                max_time: clicked + half,
            }
        }
        None => WindowBounds {
            min_time: 0.0,
            max_time: window_size,
        },
    }
}

/// Converts bounds into a `[start, end)` index range over a sorted axis.
///
/// `end` is raised to `start` when the bounds are inverted (clicks before the
/// origin), so `start <= end <= time.len()` always holds.
#[must_use]
pub fn index_range(time: &[f64], bounds: WindowBounds) -> (usize, usize) {
    let start = bisect_left(time, bounds.min_time);
    let end = bisect_right(time, bounds.max_time).max(start);
    (start, end)
}

/// Resolves the visible window of `series` for the given viewport state.
#[must_use]
pub fn resolve_window(
    series: &TimeSeries,
    window_size: f64,
    clicked_time: Option<f64>,
) -> WindowRange {
    let bounds = match (clicked_time, series.unclicked_window()) {
        (None, UnclickedWindowPolicy::FullSpan) => {
            let (first, last) = series.time_span();
            WindowBounds {
                min_time: first,
                max_time: last,
            }
        }
        _ => window_bounds(window_size, clicked_time),
    };

    let (start_idx, end_idx) = index_range(series.time(), bounds);
    WindowRange {
        bounds,
        start_idx,
        end_idx,
    }
}
