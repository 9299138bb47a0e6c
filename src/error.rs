//! Error handling for sonara
//!
//! The DSP core itself is infallible for well-formed numeric input; these
//! errors come from the WAV layer and the CLI around it.

use thiserror::Error;

/// Result type alias for sonara operations
pub type Result<T> = std::result::Result<T, EqError>;

/// Main error type for sonara operations
#[derive(Error, Debug)]
pub enum EqError {
    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Invalid band gains: {reason}")]
    InvalidBands { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
