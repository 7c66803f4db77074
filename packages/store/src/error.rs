use thiserror::Error;

/// Errors raised by the persistence and configuration layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed for key `{0}`")]
    Write(String),
    #[error("invalid session blob: {0}")]
    Session(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
