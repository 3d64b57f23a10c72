//! Error types for the camchat core library.
//!
//! Every failure a chat turn can hit ends up as a [`CamchatError`]. None of
//! them are fatal to the client: the session controller turns each one into
//! a bot message through [`CamchatError::user_message`].
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Transport | Network failures, HTTP status errors, malformed replies |
//! | E2001-E2099 | Config | Configuration file, environment and validation errors |
//! | E9001-E9099 | General | IO and serialization errors |

use std::fmt;

use thiserror::Error;
use tracing::{error, warn};

/// Shown in the conversation when the assistant could not be reached at all.
pub const NETWORK_FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't reach the assistant. Please try again.";

/// The main error type for camchat.
#[derive(Debug, Error)]
pub enum CamchatError {
    // ========================================================================
    // Transport Errors (E1001-E1099)
    // ========================================================================
    /// The request never produced an HTTP response
    #[error("[E1001] Network error: {0}")]
    Network(String),

    /// Non-2xx status without a usable `detail` body
    #[error("[E1002] HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// Non-2xx status carrying a server-provided `detail` message
    #[error("[E1003] {detail}")]
    ApiError { status: u16, detail: String },

    /// A 2xx reply whose body is not the expected JSON shape
    #[error("[E1004] Invalid response from assistant: {0}")]
    InvalidResponse(String),

    // ========================================================================
    // Configuration Errors (E2001-E2099)
    // ========================================================================
    #[error("[E2001] Failed to parse configuration: {0}")]
    ConfigParseError(String),

    #[error("[E2002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    #[error("[E9001] IO error: {0}")]
    IoError(String),

    #[error("[E9002] Serialization error: {0}")]
    SerializationError(String),
}

pub type CamchatResult<T> = Result<T, CamchatError>;

// ============================================================================
// From trait implementations for seamless error propagation
// ============================================================================

impl From<reqwest::Error> for CamchatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CamchatError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            CamchatError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            CamchatError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CamchatError {
    fn from(err: serde_json::Error) -> Self {
        CamchatError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for CamchatError {
    fn from(err: std::io::Error) -> Self {
        CamchatError::IoError(err.to_string())
    }
}

impl From<config::ConfigError> for CamchatError {
    fn from(err: config::ConfigError) -> Self {
        CamchatError::ConfigParseError(err.to_string())
    }
}

// ============================================================================
// Error categorization helpers
// ============================================================================

impl CamchatError {
    /// Returns true if this error came from talking to the assistant endpoint.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            CamchatError::Network(_)
                | CamchatError::HttpStatus { .. }
                | CamchatError::ApiError { .. }
                | CamchatError::InvalidResponse(_)
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CamchatError::ConfigParseError(_) | CamchatError::InvalidConfigValue { .. }
        )
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CamchatError::HttpStatus { status } | CamchatError::ApiError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CamchatError::Network(_) => "E1001",
            CamchatError::HttpStatus { .. } => "E1002",
            CamchatError::ApiError { .. } => "E1003",
            CamchatError::InvalidResponse(_) => "E1004",
            CamchatError::ConfigParseError(_) => "E2001",
            CamchatError::InvalidConfigValue { .. } => "E2002",
            CamchatError::IoError(_) => "E9001",
            CamchatError::SerializationError(_) => "E9002",
        }
    }

    /// Text shown in the conversation in place of the assistant's reply.
    ///
    /// Network failures get a fixed fallback, HTTP failures surface the
    /// server's `detail` when there was one and a generic status line
    /// otherwise.
    pub fn user_message(&self) -> String {
        match self {
            CamchatError::Network(_) => NETWORK_FALLBACK_MESSAGE.to_string(),
            CamchatError::ApiError { detail, .. } => detail.clone(),
            CamchatError::HttpStatus { status } => format!("HTTP error! status: {}", status),
            CamchatError::InvalidResponse(_) => {
                "Sorry, the assistant sent a reply I couldn't read.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn log(&self) {
        let code = self.error_code();
        if self.is_transport_error() {
            warn!(error_code = %code, "Request failed: {}", self);
        } else {
            error!(error_code = %code, "Error occurred: {}", self);
        }
    }
}

// ============================================================================
// User-friendly error formatting for CLI
// ============================================================================

/// Formats an error for terminal output with a short hint where one helps.
pub struct CliErrorDisplay<'a> {
    error: &'a CamchatError,
    show_hint: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a CamchatError) -> Self {
        Self {
            error,
            show_hint: true,
        }
    }

    pub fn without_hint(mut self) -> Self {
        self.show_hint = false;
        self
    }

    fn hint(&self) -> Option<&'static str> {
        match self.error {
            CamchatError::Network(_) => {
                Some("Check that the assistant is running and CAMCHAT_API_URL points at it.")
            }
            CamchatError::HttpStatus { status } if *status == 404 => {
                Some("The endpoint was not found. Is the base URL correct?")
            }
            CamchatError::InvalidConfigValue { .. } | CamchatError::ConfigParseError(_) => {
                Some("Run 'camchat config' to inspect the effective configuration.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for CliErrorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if self.show_hint {
            if let Some(hint) = self.hint() {
                writeln!(f)?;
                write!(f, "  Hint: {}", hint)?;
            }
        }
        Ok(())
    }
}
