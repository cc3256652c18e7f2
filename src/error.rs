use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to read snapshot stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
