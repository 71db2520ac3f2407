//! Error types for the meme CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Unknown templates and unmatched contexts are not errors; only configuration
//! and output problems surface here.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for meme operations.
#[derive(Error, Debug)]
pub enum MemeError {
    /// User provided an unreadable or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// Rendering command output failed.
    #[error("Output failed: {0}")]
    Output(String),
}

impl MemeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MemeError::UserError(_) => exit_codes::USER_ERROR,
            MemeError::Output(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for meme operations.
pub type Result<T> = std::result::Result<T, MemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MemeError::UserError("bad config".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn output_error_has_correct_exit_code() {
        let err = MemeError::Output("broken pipe".to_string());
        assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MemeError::UserError("failed to parse config YAML".to_string());
        assert_eq!(err.to_string(), "failed to parse config YAML");

        let err = MemeError::Output("json".to_string());
        assert_eq!(err.to_string(), "Output failed: json");
    }
}
