use crate::errors::LoupeError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window position queries are not supported in this build")]
    Unsupported,

    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("No windows found")]
    NoWindows,
}

impl LoupeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::Unsupported => "WINDOW_QUERY_UNSUPPORTED",
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::NoWindows => "WINDOW_NOT_FOUND",
        }
    }
}
