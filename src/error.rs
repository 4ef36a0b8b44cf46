// src/error.rs

use thiserror::Error;

/// Shown when a failed request carries no usable message at all.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Why a request to the humanise service did not produce a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        server_message: Option<String>,
    },
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Decode(String),
}

impl TransportError {
    /// The `error` field the server put in its response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                server_message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text to show the user: server message first, then our own description,
    /// then the generic fallback.
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }

        let own = self.to_string();
        if own.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            own
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}
