// src/error.rs
//! Error taxonomy for the submission client

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while handling one user action.
///
/// `Validation` is raised before any request is built. The other variants
/// make up the transport family: the user only ever sees a fixed failure
/// message for them, the detail goes to the logs and [`Diagnostics`].
///
/// [`Diagnostics`]: crate::web::Diagnostics
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        ClientError::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    pub fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        ClientError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// True for failures that happened at or after the network boundary.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Validation(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
