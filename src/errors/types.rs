//! Custom error types for pumpdash

use std::fmt;

/// Message shown to the user for any failure that is not reported by the backend itself
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed, unknown error";

/// Message shown when the backend flags an error but does not say what went wrong
pub const MISSING_ERROR_MESSAGE: &str = "Server reported an error";

/// Main error type for pumpdash operations
#[derive(Debug)]
pub enum PumpError {
    /// Backend answered with `error: true`; carries the server-supplied message
    Api(String),
    /// Request could not be completed (connection, timeout, HTTP status, decoding)
    Transport(String),
    /// Configuration related errors
    Config(String),
    /// TUI related errors
    Tui(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl PumpError {
    /// Whether the failure was reported by the backend rather than by the transport
    pub fn is_application_error(&self) -> bool {
        matches!(self, PumpError::Api(_))
    }

    /// Text safe to show to the user.
    ///
    /// Application errors surface the backend's own message, everything else
    /// collapses into [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            PumpError::Api(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PumpError::Api(msg) => write!(f, "Backend error: {}", msg),
            PumpError::Transport(msg) => write!(f, "Transport error: {}", msg),
            PumpError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PumpError::Tui(msg) => write!(f, "TUI error: {}", msg),
            PumpError::Io(err) => write!(f, "I/O error: {}", err),
            PumpError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PumpError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PumpError {
    fn from(err: std::io::Error) -> Self {
        PumpError::Io(err)
    }
}

impl From<serde_json::Error> for PumpError {
    fn from(err: serde_json::Error) -> Self {
        PumpError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PumpError {
    fn from(err: toml::de::Error) -> Self {
        PumpError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PumpError {
    fn from(err: toml::ser::Error) -> Self {
        PumpError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for PumpError {
    fn from(err: reqwest::Error) -> Self {
        PumpError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for PumpError {
    fn from(err: url::ParseError) -> Self {
        PumpError::Config(format!("invalid URL: {}", err))
    }
}

/// Result type alias for pumpdash operations
pub type Result<T> = std::result::Result<T, PumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_surfaces_server_message() {
        let err = PumpError::Api("Not supported for HA mode".to_string());
        assert!(err.is_application_error());
        assert_eq!(err.user_message(), "Not supported for HA mode");
    }

    #[test]
    fn test_non_application_errors_collapse_to_generic_message() {
        let errors = vec![
            PumpError::Transport("connection refused".to_string()),
            PumpError::Serialization("expected value at line 1".to_string()),
            PumpError::Io(std::io::Error::other("broken pipe")),
        ];

        for err in errors {
            assert!(!err.is_application_error());
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_display_keeps_underlying_detail() {
        let err = PumpError::Transport("operation timed out".to_string());
        assert_eq!(err.to_string(), "Transport error: operation timed out");
    }
}
