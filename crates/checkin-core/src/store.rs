//! In-memory submission store.
//!
//! The store is the single owner of all submissions for the lifetime of the
//! process. Every operation goes through one mutex, so an append can never
//! interleave with a snapshot-then-purge and data is neither lost nor
//! reported twice. Callers only ever receive owned copies.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::Submission;

#[derive(Debug, Default)]
pub struct SubmissionStore {
    records: Mutex<Vec<Submission>>,
}

impl SubmissionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single push/replace, so a poisoned guard still
    // holds a consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one validated submission.
    pub fn append(&self, submission: Submission) {
        self.lock().push(submission);
    }

    /// An owned copy of every stored submission, in insertion order.
    pub fn snapshot(&self) -> Vec<Submission> {
        self.lock().clone()
    }

    /// Drop every submission. Returns how many were removed.
    pub fn purge(&self) -> usize {
        std::mem::take(&mut *self.lock()).len()
    }

    /// Take a snapshot and, when `purge` is set, empty the store.
    ///
    /// Both steps happen under one lock acquisition: the snapshot is taken
    /// first and the purge happens after it, with no other store operation
    /// in between. The returned records always describe the pre-purge state.
    pub fn snapshot_then_purge(&self, purge: bool) -> Vec<Submission> {
        let mut records = self.lock();
        if purge {
            std::mem::take(&mut *records)
        } else {
            records.clone()
        }
    }

    /// Number of stored submissions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no submissions.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
