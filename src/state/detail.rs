//! Detail Fetch Controller
//!
//! Owns the single id -> record lookup behind the detail view.

use leptos::prelude::*;

use super::FetchStatus;
use crate::models::CustomerDetail;

/// Shown when a detail fetch fails without a message of its own.
const DETAIL_FETCH_ERROR: &str = "failed to load customer details";

/// State machine for the customer shown on the detail route.
///
/// The record only ever corresponds to the current id: an id change
/// drops it immediately, and responses resolving after the id moved
/// on are discarded.
#[derive(Clone, Copy)]
pub struct DetailFetchController {
    id: RwSignal<Option<String>>,
    record: RwSignal<Option<CustomerDetail>>,
    status: RwSignal<FetchStatus>,
    error: RwSignal<Option<String>>,
}

impl DetailFetchController {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            record: RwSignal::new(None),
            status: RwSignal::new(FetchStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    pub fn record(&self) -> ReadSignal<Option<CustomerDetail>> {
        self.record.read_only()
    }

    pub fn status(&self) -> ReadSignal<FetchStatus> {
        self.status.read_only()
    }

    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Intent: the detail route now shows `id`. Changing the id drops
    /// the previous record right away so the view never pairs an old
    /// record with the new id; re-setting the same id re-fetches
    /// without blanking what is already on screen.
    pub fn set_id(&self, id: String) {
        if self.id.get_untracked().as_deref() != Some(id.as_str()) {
            self.record.set(None);
        }
        self.id.set(Some(id));
        self.status.set(FetchStatus::Loading);
    }

    /// Applies a resolved lookup, unless `id` is no longer the one
    /// the view is looking at.
    pub fn resolve(&self, id: String, outcome: Result<CustomerDetail, String>) {
        if self.id.get_untracked().as_deref() != Some(id.as_str()) {
            return;
        }
        match outcome {
            Ok(record) => {
                self.record.set(Some(record));
                self.error.set(None);
                self.status.set(FetchStatus::Ready);
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    DETAIL_FETCH_ERROR.to_string()
                } else {
                    message
                };
                self.error.set(Some(message));
                self.status.set(FetchStatus::Error);
            }
        }
    }
}
