//! List Query Controller
//!
//! Owns the search/page/size inputs of the customer list and the
//! results of the most recent fetch that still matches them.

use leptos::prelude::*;

use super::FetchStatus;
use crate::models::{CustomerPage, CustomerSummary};

/// Shown when a list fetch fails without a message of its own.
const LIST_FETCH_ERROR: &str = "failed to load customers";

/// Page size requested when the user has not picked one.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Input tuple snapshot for one fetch pass. Compared against the
/// live inputs when the response resolves; a mismatch means the
/// response is stale and must not touch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub name: String,
    /// 1-based; translated to the 0-based wire format by the client.
    pub page: u32,
    pub size: u32,
}

/// State machine behind the customer list view.
///
/// Views dispatch intents through the setters and read state through
/// the read-only signal accessors; they never write fields directly.
/// Responses resolving after the inputs moved on are dropped, so
/// `results` and `total_pages` always belong to the inputs currently
/// on screen.
#[derive(Clone, Copy)]
pub struct ListQueryController {
    search_text: RwSignal<String>,
    page: RwSignal<u32>,
    page_size: RwSignal<u32>,
    total_pages: RwSignal<u32>,
    results: RwSignal<Vec<CustomerSummary>>,
    status: RwSignal<FetchStatus>,
    error: RwSignal<Option<String>>,
}

impl ListQueryController {
    pub fn new() -> Self {
        Self {
            search_text: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            total_pages: RwSignal::new(0),
            results: RwSignal::new(Vec::new()),
            status: RwSignal::new(FetchStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    pub fn search_text(&self) -> ReadSignal<String> {
        self.search_text.read_only()
    }

    pub fn page(&self) -> ReadSignal<u32> {
        self.page.read_only()
    }

    pub fn page_size(&self) -> ReadSignal<u32> {
        self.page_size.read_only()
    }

    pub fn total_pages(&self) -> ReadSignal<u32> {
        self.total_pages.read_only()
    }

    pub fn results(&self) -> ReadSignal<Vec<CustomerSummary>> {
        self.results.read_only()
    }

    pub fn status(&self) -> ReadSignal<FetchStatus> {
        self.status.read_only()
    }

    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Intent: the search text changed. A new search always restarts
    /// from the first page; keeping the old page would point past the
    /// end of most filtered result sets.
    pub fn set_search_text(&self, text: String) {
        self.search_text.set(text);
        self.page.set(1);
    }

    /// Intent: navigate to `page` (1-based, clamped to at least 1).
    pub fn set_page(&self, page: u32) {
        self.page.set(page.max(1));
    }

    /// Intent: show `size` customers per page (clamped to at least 1).
    pub fn set_page_size(&self, size: u32) {
        self.page_size.set(size.max(1));
    }

    /// Starts a fetch pass: flips to Loading and snapshots the query
    /// the response must still match when it resolves. Reads are
    /// tracked, so an `Effect` wrapping this re-runs once per change
    /// of the input tuple.
    pub fn begin_fetch(&self) -> ListQuery {
        self.status.set(FetchStatus::Loading);
        ListQuery {
            name: self.search_text.get(),
            page: self.page.get(),
            size: self.page_size.get(),
        }
    }

    /// Applies a resolved fetch pass. Stale responses (inputs changed
    /// while the request was in flight) are dropped without touching
    /// state. Failures keep the previous results on screen.
    pub fn resolve(&self, query: ListQuery, outcome: Result<CustomerPage, String>) {
        if query != self.current_query() {
            return;
        }
        match outcome {
            Ok(page) => {
                self.total_pages
                    .set(parse_total_pages(page.total_pages.as_deref()));
                self.results.set(page.items);
                self.error.set(None);
                self.status.set(FetchStatus::Ready);
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    LIST_FETCH_ERROR.to_string()
                } else {
                    message
                };
                self.error.set(Some(message));
                self.status.set(FetchStatus::Error);
            }
        }
    }

    fn current_query(&self) -> ListQuery {
        ListQuery {
            name: self.search_text.get_untracked(),
            page: self.page.get_untracked(),
            size: self.page_size.get_untracked(),
        }
    }
}

/// The backend reports the page count in a response header. Anything
/// missing or non-numeric counts as zero pages.
fn parse_total_pages(header: Option<&str>) -> u32 {
    header
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerPage;

    fn test_owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    fn page_of(customers: &[(u64, &str)], total_pages: &str) -> CustomerPage {
        CustomerPage {
            items: customers
                .iter()
                .map(|(id, name)| CustomerSummary {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            total_pages: Some(total_pages.to_string()),
        }
    }

    #[test]
    fn search_resets_to_first_page() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        ctrl.set_page(5);
        assert_eq!(ctrl.page().get(), 5);

        ctrl.set_search_text("ana".to_string());
        assert_eq!(ctrl.search_text().get(), "ana");
        assert_eq!(ctrl.page().get(), 1);
    }

    #[test]
    fn fetch_pass_resolves_into_results() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let query = ctrl.begin_fetch();
        assert_eq!(ctrl.status().get(), FetchStatus::Loading);

        ctrl.resolve(query, Ok(page_of(&[(1, "Ana"), (2, "Bruno")], "3")));
        assert_eq!(ctrl.status().get(), FetchStatus::Ready);
        assert_eq!(ctrl.total_pages().get(), 3);
        assert_eq!(ctrl.results().get().len(), 2);
        assert_eq!(ctrl.results().get()[0].name, "Ana");
    }

    #[test]
    fn out_of_order_resolution_keeps_the_latest_page() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let slow = ctrl.begin_fetch(); // page 1
        ctrl.set_page(2);
        let fast = ctrl.begin_fetch(); // page 2

        ctrl.resolve(fast, Ok(page_of(&[(20, "Page two")], "2")));
        // The page 1 response arrives late and must be dropped.
        ctrl.resolve(slow, Ok(page_of(&[(10, "Page one")], "2")));

        assert_eq!(ctrl.status().get(), FetchStatus::Ready);
        assert_eq!(ctrl.results().get().len(), 1);
        assert_eq!(ctrl.results().get()[0].name, "Page two");
    }

    #[test]
    fn page_size_is_part_of_the_staleness_guard() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let stale = ctrl.begin_fetch();
        ctrl.set_page_size(25);

        ctrl.resolve(stale, Ok(page_of(&[(1, "Ana")], "4")));
        // Still waiting on the size-25 fetch.
        assert_eq!(ctrl.status().get(), FetchStatus::Loading);
        assert!(ctrl.results().get().is_empty());
        assert_eq!(ctrl.total_pages().get(), 0);
    }

    #[test]
    fn failed_refresh_keeps_previous_results() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let first = ctrl.begin_fetch();
        ctrl.resolve(first, Ok(page_of(&[(1, "Ana")], "1")));

        let retry = ctrl.begin_fetch();
        ctrl.resolve(retry, Err("connection refused".to_string()));

        assert_eq!(ctrl.status().get(), FetchStatus::Error);
        assert_eq!(ctrl.error().get().as_deref(), Some("connection refused"));
        assert_eq!(ctrl.results().get().len(), 1);
        assert_eq!(ctrl.results().get()[0].name, "Ana");
    }

    #[test]
    fn stale_failure_is_discarded() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let stale = ctrl.begin_fetch();
        ctrl.set_page(3);
        let current = ctrl.begin_fetch();

        ctrl.resolve(stale, Err("timed out".to_string()));
        assert_eq!(ctrl.status().get(), FetchStatus::Loading);
        assert_eq!(ctrl.error().get(), None);

        ctrl.resolve(current, Ok(page_of(&[(30, "Page three")], "3")));
        assert_eq!(ctrl.status().get(), FetchStatus::Ready);
    }

    #[test]
    fn empty_failure_message_falls_back_to_generic() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let query = ctrl.begin_fetch();
        ctrl.resolve(query, Err(String::new()));

        assert_eq!(ctrl.error().get().as_deref(), Some(LIST_FETCH_ERROR));
    }

    #[test]
    fn malformed_or_missing_header_counts_as_zero_pages() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        let query = ctrl.begin_fetch();
        ctrl.resolve(query, Ok(page_of(&[(1, "Ana")], "not-a-number")));
        assert_eq!(ctrl.total_pages().get(), 0);

        let query = ctrl.begin_fetch();
        ctrl.resolve(
            query,
            Ok(CustomerPage {
                items: vec![],
                total_pages: None,
            }),
        );
        assert_eq!(ctrl.total_pages().get(), 0);
    }

    #[test]
    fn page_intent_is_clamped_to_one() {
        let _owner = test_owner();
        let ctrl = ListQueryController::new();

        ctrl.set_page(0);
        assert_eq!(ctrl.page().get(), 1);

        ctrl.set_page_size(0);
        assert_eq!(ctrl.page_size().get(), 1);
    }
}
