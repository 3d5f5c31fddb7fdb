// src/web/mod.rs
//! Submission client: binds the two form actions to the ranking service
//!
//! Every event goes through [`SubmissionClient::dispatch`], which routes it
//! to exactly one handler. A handler issues at most one request.

pub mod diagnostics;
pub mod handlers;
pub mod page;
pub mod render;
pub mod sequence;

pub use diagnostics::{ActionKind, DiagnosticRecord, Diagnostics, MAX_RECORDS};
pub use handlers::{MatchResult, Outcome, MATCH_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE};
pub use page::{Page, ResultsArea};
pub use render::{export_csv, render, RenderedList, NO_MATCHES_MESSAGE};
pub use sequence::RequestSequences;

use anyhow::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::{ClientConfig, ServiceClient};
use crate::types::{SelectedFile, UploadResponse};

/// A user-triggered event on the page.
#[derive(Debug, Clone)]
pub enum FormEvent {
    UploadSubmitted(Option<SelectedFile>),
    MatchRequested(String),
}

#[derive(Debug)]
pub enum EventOutcome {
    Upload(Outcome<UploadResponse>),
    Match(Outcome<MatchResult>),
}

pub struct SubmissionClient {
    service: ServiceClient,
    page: Mutex<Page>,
    diagnostics: Mutex<Diagnostics>,
    sequences: RequestSequences,
}

impl SubmissionClient {
    pub fn new(service: ServiceClient) -> Self {
        Self {
            service,
            page: Mutex::new(Page::default()),
            diagnostics: Mutex::new(Diagnostics::default()),
            sequences: RequestSequences::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(ServiceClient::new(config)?))
    }

    /// Route one event to its single handler.
    pub async fn dispatch(&self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::UploadSubmitted(file) => {
                EventOutcome::Upload(self.submit_upload(file).await)
            }
            FormEvent::MatchRequested(text) => {
                EventOutcome::Match(self.submit_match(&text).await)
            }
        }
    }

    pub async fn submit_upload(&self, file: Option<SelectedFile>) -> Outcome<UploadResponse> {
        handlers::upload_handler(self, file).await
    }

    pub async fn submit_match(&self, job_description: &str) -> Outcome<MatchResult> {
        handlers::match_handler(self, job_description).await
    }

    /// Snapshot of the page regions.
    pub fn page(&self) -> Page {
        lock(&self.page).clone()
    }

    pub fn diagnostics(&self) -> Vec<DiagnosticRecord> {
        lock(&self.diagnostics).records()
    }

    /// Take every retained diagnostic, leaving the log empty.
    pub fn drain_diagnostics(&self) -> Vec<DiagnosticRecord> {
        lock(&self.diagnostics).drain()
    }

    pub fn diagnostics_json(&self) -> serde_json::Result<String> {
        lock(&self.diagnostics).to_json()
    }

    /// Acknowledge pending alerts, returning them oldest first.
    pub fn dismiss_alerts(&self) -> Vec<String> {
        lock(&self.page).take_alerts()
    }

    pub(crate) fn service(&self) -> &ServiceClient {
        &self.service
    }

    pub(crate) fn sequences(&self) -> &RequestSequences {
        &self.sequences
    }

    pub(crate) fn with_page<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        f(&mut lock(&self.page))
    }

    pub(crate) fn with_diagnostics<R>(&self, f: impl FnOnce(&mut Diagnostics) -> R) -> R {
        f(&mut lock(&self.diagnostics))
    }
}

// Guards never live across an await point.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
