//! Controller State
//!
//! State machines keeping the views in sync with the customer API.

mod detail;
mod list_query;
mod pagination;

pub use detail::DetailFetchController;
pub use list_query::{ListQuery, ListQueryController};
pub use pagination::{page_markers, PageMarker};

/// Lifecycle of one fetchable piece of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch started yet.
    #[default]
    Idle,
    /// A request for the current inputs is in flight.
    Loading,
    /// The last resolved fetch matched the current inputs.
    Ready,
    /// The last fetch for the current inputs failed.
    Error,
}
