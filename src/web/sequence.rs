// src/web/sequence.rs
//! Per-action request counters so a late response cannot overwrite a newer one

use std::sync::atomic::{AtomicU64, Ordering};

use super::diagnostics::ActionKind;

#[derive(Debug, Default)]
pub struct RequestSequences {
    upload: AtomicU64,
    matching: AtomicU64,
}

impl RequestSequences {
    fn counter(&self, kind: ActionKind) -> &AtomicU64 {
        match kind {
            ActionKind::Upload => &self.upload,
            ActionKind::Match => &self.matching,
        }
    }

    /// Number the next request of this kind.
    pub fn issue(&self, kind: ActionKind) -> u64 {
        self.counter(kind).fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, kind: ActionKind, seq: u64) -> bool {
        self.counter(kind).load(Ordering::SeqCst) == seq
    }
}
