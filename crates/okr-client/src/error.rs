// error.rs — Client error types.

use thiserror::Error;

use crate::retry::Retryable;

/// Errors from the API client and its configuration.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad TLS...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// A well-formed response whose success flag was false.
    #[error("API error: {message}")]
    Api { message: String },

    /// Configuration problem (bad base URL, unreadable config file...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a TOML config file.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse a JSON body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Retryable for ClientError {
    /// Transport failures, server-side statuses, and success-flag-false
    /// envelopes are transient; everything else is terminal and retrying
    /// would only repeat the same local mistake.
    fn is_retryable(&self) -> bool {
        match self {
            ClientError::Http(_) => true,
            ClientError::Api { .. } => true,
            ClientError::Status { status, .. } => *status >= 500 || *status == 429,
            ClientError::Config(_)
            | ClientError::Io { .. }
            | ClientError::Toml(_)
            | ClientError::Json(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        assert!(ClientError::Status {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(ClientError::Status {
            status: 429,
            message: String::new()
        }
        .is_retryable());
        assert!(ClientError::Api {
            message: "model overloaded".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn client_side_errors_are_terminal() {
        assert!(!ClientError::Status {
            status: 400,
            message: String::new()
        }
        .is_retryable());
        assert!(!ClientError::Config("missing base_url".to_string()).is_retryable());
    }
}
