use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the model artifact at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(
        "Model file '{}' was not found. Make sure the file exists at that path or point FARE_MODEL_PATH at it.",
        .0.display()
    )]
    MissingArtifact(PathBuf),
    #[error("could not read model file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model file '{}' is not a valid pipeline: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model file '{}' is inconsistent: {reason}", path.display())]
    InvalidArtifact { path: PathBuf, reason: String },
}

/// Anything that goes wrong between reading the form and getting a fare back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("{field} must be {expected}, got {value}")]
    InvalidInput {
        field: &'static str,
        expected: String,
        value: String,
    },
    #[error("model expects features {expected:?} but the trip record provides {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<&'static str>,
    },
    #[error("{0}")]
    Inference(String),
    #[error("model returned a non-finite fare ({0})")]
    NonFiniteOutput(f64),
}
