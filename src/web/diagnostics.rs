// src/web/diagnostics.rs
//! In-memory record of failed actions, kept for troubleshooting only

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

use crate::error::ClientError;

/// Oldest records are evicted past this many.
pub const MAX_RECORDS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Upload,
    Match,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Upload => "upload",
            ActionKind::Match => "match",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub action: ActionKind,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    records: VecDeque<DiagnosticRecord>,
}

impl Diagnostics {
    pub fn record(&mut self, action: ActionKind, error: &ClientError) -> Uuid {
        let record = DiagnosticRecord {
            id: Uuid::new_v4(),
            at: Utc::now(),
            action,
            detail: error.to_string(),
        };
        let id = record.id;
        if self.records.len() == MAX_RECORDS {
            self.records.pop_front();
        }
        self.records.push_back(record);
        id
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.iter().cloned().collect()
    }

    /// Hand over every retained record and start empty.
    pub fn drain(&mut self) -> Vec<DiagnosticRecord> {
        self.records.drain(..).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
