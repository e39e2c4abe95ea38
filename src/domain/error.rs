//! # Service Errors
//!
//! Errors raised by the remote service clients. Command handlers turn these into
//! fixed chat replies; they never reach the room verbatim.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    /// The service answered, but reported an application level failure
    /// (unknown group, unknown package, ...).
    #[error("{service} error {name}: {message}")]
    App {
        service: &'static str,
        name: String,
        message: String,
    },
}

impl ServiceError {
    pub fn app(service: &'static str, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::App {
            service,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn is_app_error(&self) -> bool {
        matches!(self, Self::App { .. })
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
