//! Shared handler state.

use std::sync::Arc;

use checkin_core::store::SubmissionStore;

/// State injected into every handler: the store and the admin secret.
///
/// Cloning is cheap; all clones share one store.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<SubmissionStore>,
    admin_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<SubmissionStore>, admin_token: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            admin_token: admin_token.into(),
        }
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    /// Constant for the process lifetime.
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }
}
