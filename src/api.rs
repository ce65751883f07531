//! Customer API Client
//!
//! Typed bindings to the customer service REST endpoints.

use reqwest::Client;

use crate::models::{CustomerDetail, CustomerPage, CustomerSummary};
use crate::state::ListQuery;

/// Header carrying the page count on list responses.
const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Shared HTTP client for the two read endpoints. Cheap to clone;
/// clones reuse the same underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(origin())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `GET /api/customers?name=..&page=..&size=..`
    ///
    /// The query carries a 1-based page; the wire format is 0-based.
    pub async fn list_customers(&self, query: &ListQuery) -> Result<CustomerPage, String> {
        let response = self
            .http
            .get(format!("{}/api/customers", self.base_url))
            .query(&[
                ("name", query.name.clone()),
                ("page", query.page.saturating_sub(1).to_string()),
                ("size", query.size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("server responded with {}", response.status()));
        }

        let total_pages = response
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let items: Vec<CustomerSummary> = response.json().await.map_err(|e| e.to_string())?;

        Ok(CustomerPage { items, total_pages })
    }

    /// `GET /api/customers/{id}`
    pub async fn get_customer(&self, id: &str) -> Result<CustomerDetail, String> {
        let response = self
            .http
            .get(format!("{}/api/customers/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("server responded with {}", response.status()));
        }

        response.json().await.map_err(|e| e.to_string())
    }
}

/// Origin of the page hosting the app; the API lives on the same host.
fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
