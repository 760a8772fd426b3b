use std::ops::Range;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::core::{TimeSeries, WindowRange, json_float};
use crate::error::{ViewportError, ViewportResult};

/// Visible window of one chart under the current viewport state.
///
/// `min_time`/`max_time` are the requested bounds (lower edge clamped at the
/// origin, upper edge never clamped). `[start_idx, end_idx)` indexes the
/// dataset's arrays. Results are derived on demand and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResult {
    pub chart: String,
    #[serde(with = "json_float")]
    pub min_time: f64,
    #[serde(with = "json_float")]
    pub max_time: f64,
    pub num_points: usize,
    pub start_idx: usize,
    pub end_idx: usize,
}

impl WindowResult {
    pub(crate) fn from_range(chart: &str, range: WindowRange) -> Self {
        Self {
            chart: chart.to_owned(),
            min_time: range.bounds.min_time,
            max_time: range.bounds.max_time,
            num_points: range.num_points(),
            start_idx: range.start_idx,
            end_idx: range.end_idx,
        }
    }

    #[must_use]
    pub fn index_range(&self) -> Range<usize> {
        self.start_idx..self.end_idx
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Requested width of the window, `max_time - min_time`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max_time - self.min_time
    }
}

/// Borrowed view of the samples inside a [`WindowResult`].
///
/// Serializes to the dashboard's windowed payload:
/// `{chart, minTime, maxTime, numPoints, data: {time, <channel>...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSlice<'a> {
    pub chart: &'a str,
    #[serde(serialize_with = "json_float::serialize")]
    pub min_time: f64,
    #[serde(serialize_with = "json_float::serialize")]
    pub max_time: f64,
    pub num_points: usize,
    pub data: WindowSliceData<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSliceData<'a> {
    time: &'a [f64],
    channels: Vec<(&'a str, &'a [f64])>,
}

impl Serialize for WindowSliceData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.channels.len() + 1))?;
        map.serialize_entry("time", self.time)?;
        for (name, values) in &self.channels {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'a> WindowSlice<'a> {
    /// Slices `series` with `result`'s index range.
    pub fn new(
        chart: &'a str,
        series: &'a TimeSeries,
        result: &WindowResult,
    ) -> ViewportResult<Self> {
        let range = result.index_range();
        if range.start > range.end || range.end > series.len() {
            return Err(ViewportError::InvalidDataset(format!(
                "window {}..{} is out of bounds for `{chart}` ({} points)",
                range.start,
                range.end,
                series.len()
            )));
        }

        let channels = series
            .channels()
            .map(|(name, values)| (name, &values[range.clone()]))
            .collect();

        Ok(Self {
            chart,
            min_time: result.min_time,
            max_time: result.max_time,
            num_points: range.len(),
            data: WindowSliceData {
                time: &series.time()[range],
                channels,
            },
        })
    }

    #[must_use]
    pub fn time(&self) -> &'a [f64] {
        self.data.time
    }

    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&'a [f64]> {
        self.data
            .channels
            .iter()
            .find(|(channel, _)| *channel == name)
            .map(|(_, values)| *values)
    }

    pub fn channels(&self) -> impl Iterator<Item = (&'a str, &'a [f64])> + '_ {
        self.data.channels.iter().copied()
    }

    pub fn to_json_pretty(&self) -> ViewportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ViewportError::InvalidConfig(format!("failed to serialize window slice: {e}"))
        })
    }
}
