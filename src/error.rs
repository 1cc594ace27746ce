use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error(
        "Model file '{}' not found. Please make sure to train and save your model first.",
        .0.display()
    )]
    ModelNotFound(PathBuf),

    #[error("failed to load model {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("invalid model metadata: {0}")]
    Meta(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("feature length mismatch: got {got}, expected {expected}")]
    FeatureLength { got: usize, expected: usize },

    #[error("invalid input: {0}")]
    Input(String),

    #[error("model forward failed: {0}")]
    Forward(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
