use crate::errors::LoupeError;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Magnifier helper '{program}' is not installed")]
    HelperUnavailable { program: String },
}

impl LoupeError for ControllerError {
    fn error_code(&self) -> &'static str {
        match self {
            ControllerError::HelperUnavailable { .. } => "HELPER_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ControllerError::HelperUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_unavailable_display() {
        let error = ControllerError::HelperUnavailable {
            program: "/usr/bin/mage".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Magnifier helper '/usr/bin/mage' is not installed"
        );
        assert_eq!(error.error_code(), "HELPER_UNAVAILABLE");
        assert!(error.is_user_error());
    }
}
