//! Error types used throughout the client

use thiserror::Error;

/// Main error type for QingLong API calls
///
/// Only [`QlError::Request`] and [`QlError::Unsupported`] originate in this
/// library. The remaining variants carry the native message of the transport,
/// the JSON decoder or the config loader without reinterpreting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QlError {
    /// The panel answered with a status other than 200.
    #[error("Request failed: {body}")]
    Request { status: u16, body: String },

    /// A recognized value that the client does not implement yet.
    #[error("Unsupported input: {0}")]
    Unsupported(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QlError {
    /// HTTP status of a request failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for request failures the panel rejected as unauthenticated.
    ///
    /// The client never re-authenticates on its own; callers use this to
    /// decide when to call `login` again.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for QingLong operations
pub type Result<T> = std::result::Result<T, QlError>;
