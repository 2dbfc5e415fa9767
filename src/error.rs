//! ColorFlash Error Types
//!
//! Errors never reach the user as failures; they are logged and the app degrades.

use thiserror::Error;

/// Central error type for ColorFlash
#[derive(Error, Debug)]
pub enum FlashError {
    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ColorFlash operations
pub type FlashResult<T> = Result<T, FlashError>;
