use thiserror::Error;

/// Rejected launch configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("mass must be a positive number of kilograms, got {0}")]
    NonPositiveMass(f64),

    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("unknown launch mode `{0}` (expected gun, cannon, kick or throw)")]
    UnknownMode(String),
}

/// Failure reported by a [`Narrator`](crate::narrative::Narrator).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("narrative service returned an empty response")]
    EmptyResponse,
}

/// Reading or writing parameter and result files.
#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
