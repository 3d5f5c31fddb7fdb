// src/web/handlers/mod.rs
//! One handler per user action

pub mod match_handlers;
pub mod upload_handlers;

pub use match_handlers::{match_handler, MatchResult, MATCH_FAILED_MESSAGE};
pub use upload_handlers::{upload_handler, UPLOAD_FAILED_MESSAGE};

use tracing::debug;
use uuid::Uuid;

use super::diagnostics::ActionKind;
use super::SubmissionClient;
use crate::error::ClientError;

/// What became of one user action.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The service answered and the page shows the result.
    Delivered(T),
    /// Local validation refused the input; nothing was sent.
    Rejected(String),
    /// The request failed; the fixed failure message is on the page.
    Failed { diagnostic: Uuid },
    /// A newer request of the same kind was issued before this one returned.
    Superseded,
}

impl<T> Outcome<T> {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered(_))
    }
}

pub(crate) fn validation_message(error: ClientError) -> String {
    match error {
        ClientError::Validation(message) => message,
        other => other.to_string(),
    }
}

/// Report a late response and drop it.
pub(crate) fn superseded<T>(kind: ActionKind, seq: u64) -> Outcome<T> {
    debug!(
        "Discarding stale {} response (request #{})",
        kind.as_str(),
        seq
    );
    Outcome::Superseded
}

pub(crate) fn record_failure(
    client: &SubmissionClient,
    kind: ActionKind,
    error: &ClientError,
) -> Uuid {
    client.with_diagnostics(|diagnostics| diagnostics.record(kind, error))
}
