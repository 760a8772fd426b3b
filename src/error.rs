use thiserror::Error;

pub type ViewportResult<T> = Result<T, ViewportError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("unknown chart: `{name}`")]
    UnknownChart { name: String },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid window size: {value} (must be >= 0)")]
    InvalidWindowSize { value: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ViewportError {
    pub(crate) fn unknown_chart(name: &str) -> Self {
        Self::UnknownChart {
            name: name.to_owned(),
        }
    }
}
