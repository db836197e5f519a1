//! Error types for the card renderer
//!
//! This module defines custom error types for the rendering pipeline,
//! providing clear error messages and proper error propagation.

use thiserror::Error;

/// Custom error type for renderer operations
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid value for field '{0}': {1}")]
    InvalidValue(String, String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("PNG encoding error: {0}")]
    PngError(#[from] png::EncodingError),
}

impl RendererError {
    /// Whether this failure was caused by the caller's input.
    ///
    /// Hosts map client errors to a 4xx-style response and everything
    /// else to a 5xx-style response.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RendererError::InvalidGeometry(_)
                | RendererError::InvalidValue(_, _)
                | RendererError::JsonError(_)
        )
    }
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for RendererError {
    fn from(err: serde_json::Error) -> Self {
        RendererError::JsonError(err.to_string())
    }
}
