// Error types module

use thiserror::Error;

/// Errors raised while building a URL or loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RezizerError {
    /// A geometry argument failed the numeric check; nothing was stored
    #[error("Invalid argument for '{operation}': {message}")]
    InvalidArgument { operation: String, message: String },

    /// Operation name outside the known vocabulary (strict dispatch only)
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Configuration errors (invalid YAML, missing env vars, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RezizerError {
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RezizerError::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn unknown_operation(name: impl Into<String>) -> Self {
        RezizerError::UnknownOperation { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RezizerError::Config(message.into())
    }
}
