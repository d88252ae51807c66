use crate::controller::ControllerError;
use crate::errors::LoupeError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

impl LoupeError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Controller(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Controller(e) => e.is_user_error(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseCommandError {
    #[error("Unknown control message '{input}'")]
    Unknown { input: String },
}

impl LoupeError for ParseCommandError {
    fn error_code(&self) -> &'static str {
        match self {
            ParseCommandError::Unknown { .. } => "UNKNOWN_CONTROL_MESSAGE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
