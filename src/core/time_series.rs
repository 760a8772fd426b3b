use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

/// How a dataset is windowed while no click is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclickedWindowPolicy {
    /// `[0, window_size]`, anchored at the time origin.
    #[default]
    Origin,
    /// The dataset's own `[first, last]` span, ignoring `window_size`.
    FullSpan,
}

/// Immutable multi-channel time series.
///
/// `time` is finite and non-decreasing; every channel has the same length as
/// `time`. Both are checked on construction, so a `TimeSeries` that exists is
/// always safe to bisect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeSeriesRecord", into = "TimeSeriesRecord")]
pub struct TimeSeries {
    time: Vec<f64>,
    channels: IndexMap<String, Vec<f64>>,
    unclicked_window: UnclickedWindowPolicy,
}

/// Wire shape used for (de)serialization before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimeSeriesRecord {
    time: Vec<f64>,
    channels: IndexMap<String, Vec<f64>>,
    #[serde(default)]
    unclicked_window: UnclickedWindowPolicy,
}

impl TryFrom<TimeSeriesRecord> for TimeSeries {
    type Error = ViewportError;

    fn try_from(record: TimeSeriesRecord) -> ViewportResult<Self> {
        Ok(Self::new(record.time, record.channels)?.with_unclicked_window(record.unclicked_window))
    }
}

impl From<TimeSeries> for TimeSeriesRecord {
    fn from(series: TimeSeries) -> Self {
        Self {
            time: series.time,
            channels: series.channels,
            unclicked_window: series.unclicked_window,
        }
    }
}

impl TimeSeries {
    pub fn new(time: Vec<f64>, channels: IndexMap<String, Vec<f64>>) -> ViewportResult<Self> {
        validate_time_axis(&time)?;

        if channels.is_empty() {
            return Err(ViewportError::InvalidDataset(
                "time series needs at least one value channel".to_owned(),
            ));
        }

        for (name, values) in &channels {
            if values.len() != time.len() {
                return Err(ViewportError::InvalidDataset(format!(
                    "channel `{name}` has {} values but time axis has {}",
                    values.len(),
                    time.len()
                )));
            }
        }

        Ok(Self {
            time,
            channels,
            unclicked_window: UnclickedWindowPolicy::default(),
        })
    }

    /// Builds a series from `(channel name, values)` pairs, keeping their order.
    pub fn from_channels<I, K>(time: Vec<f64>, channels: I) -> ViewportResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<f64>)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, values) in channels {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(ViewportError::InvalidDataset(format!(
                    "duplicate channel `{name}`"
                )));
            }
            map.insert(name, values);
        }
        Self::new(time, map)
    }

    #[must_use]
    pub fn with_unclicked_window(mut self, policy: UnclickedWindowPolicy) -> Self {
        self.unclicked_window = policy;
        self
    }

    #[must_use]
    pub fn unclicked_window(&self) -> UnclickedWindowPolicy {
        self.unclicked_window
    }

    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(Vec::as_slice)
    }

    /// Iterates channels in insertion order.
    pub fn channels(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.channels
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always `false` for a constructed series; kept for slice-like ergonomics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(first, last)` timestamps.
    #[must_use]
    pub fn time_span(&self) -> (f64, f64) {
        // Non-empty by construction.
        let first = self.time[0];
        let last = self.time[self.time.len() - 1];
        (first, last)
    }
}

fn validate_time_axis(time: &[f64]) -> ViewportResult<()> {
    if time.is_empty() {
        return Err(ViewportError::InvalidDataset(
            "time axis must not be empty".to_owned(),
        ));
    }

    if let Some(index) = time.iter().position(|t| !t.is_finite()) {
        return Err(ViewportError::InvalidDataset(format!(
            "time value at index {index} is not finite"
        )));
    }

    if let Some(index) = time.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(ViewportError::InvalidDataset(format!(
            "time axis decreases at index {}",
            index + 1
        )));
    }

    Ok(())
}
