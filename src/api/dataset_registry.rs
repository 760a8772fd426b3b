use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::core::TimeSeries;
use crate::error::{ViewportError, ViewportResult};

/// Write-once store of the named datasets an engine can window over.
///
/// Registries are filled at startup and then shared read-only (usually behind
/// an `Arc`) by every engine that needs them.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: IndexMap<String, TimeSeries>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    datasets: Vec<NamedDataset>,
}

#[derive(Debug, Deserialize)]
struct NamedDataset {
    name: String,
    #[serde(flatten)]
    series: TimeSeries,
}

impl DatasetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `series` under `name`. Names can be registered only once.
    pub fn register(&mut self, name: impl Into<String>, series: TimeSeries) -> ViewportResult<()> {
        let name = name.into();
        if self.datasets.contains_key(&name) {
            return Err(ViewportError::InvalidDataset(format!(
                "dataset `{name}` is already registered"
            )));
        }

        debug!(
            dataset = %name,
            points = series.len(),
            channels = series.channel_count(),
            "register dataset"
        );
        self.datasets.insert(name, series);
        Ok(())
    }

    /// Builder-style [`DatasetRegistry::register`].
    pub fn with_dataset(
        mut self,
        name: impl Into<String>,
        series: TimeSeries,
    ) -> ViewportResult<Self> {
        self.register(name, series)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> ViewportResult<&TimeSeries> {
        self.datasets
            .get(name)
            .ok_or_else(|| ViewportError::unknown_chart(name))
    }

    /// Like [`DatasetRegistry::get`], also borrowing the stored name.
    pub fn get_key_value(&self, name: &str) -> ViewportResult<(&str, &TimeSeries)> {
        self.datasets
            .get_key_value(name)
            .map(|(key, series)| (key.as_str(), series))
            .ok_or_else(|| ViewportError::unknown_chart(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    /// Dataset names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Loads `{"datasets": [{"name", "time", "channels", "unclicked_window"?}]}`.
    ///
    /// Every dataset goes through the same validation as [`TimeSeries::new`]
    /// and [`DatasetRegistry::register`].
    pub fn from_json_str(input: &str) -> ViewportResult<Self> {
        let file: RegistryFile = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidDataset(format!("failed to parse dataset json: {e}"))
        })?;

        let mut registry = Self::new();
        for dataset in file.datasets {
            registry.register(dataset.name, dataset.series)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(len: usize) -> TimeSeries {
        let time = (0..len).map(|i| i as f64).collect::<Vec<_>>();
        TimeSeries::from_channels(time, [("x", vec![0.0; len])]).expect("valid series")
    }

    #[test]
    fn get_unknown_chart_fails() {
        let registry = DatasetRegistry::new();
        let err = registry.get("missing").expect_err("not registered");
        assert_eq!(
            err,
            ViewportError::UnknownChart {
                name: "missing".to_owned()
            }
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = DatasetRegistry::new();
        registry.register("signal", series(3)).expect("first");
        let err = registry.register("signal", series(5)).expect_err("second");
        assert!(matches!(err, ViewportError::InvalidDataset(_)));
        assert_eq!(registry.get("signal").expect("kept").len(), 3);
    }

    #[test]
    fn names_follow_registration_order() {
        let registry = DatasetRegistry::new()
            .with_dataset("signal", series(2))
            .and_then(|r| r.with_dataset("accelerometer", series(2)))
            .expect("valid registry");
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["signal", "accelerometer"]);
    }

    #[test]
    fn json_loading_validates_each_dataset() {
        let raw = r#"{"datasets":[
            {"name":"accelerometer","time":[0.0,0.5,1.0],"channels":{"x":[1,2,3],"y":[1,2,3]}},
            {"name":"signal","time":[0.0,0.5],"channels":{"ch1":[1.0]}}
        ]}"#;
        let err = DatasetRegistry::from_json_str(raw).expect_err("signal is malformed");
        assert!(matches!(err, ViewportError::InvalidDataset(_)));

        let raw = r#"{"datasets":[
            {"name":"accelerometer","time":[0.0,0.5,1.0],"channels":{"x":[1,2,3]}}
        ]}"#;
        let registry = DatasetRegistry::from_json_str(raw).expect("valid registry");
        assert_eq!(registry.get("accelerometer").expect("present").len(), 3);
    }
}
