//! Customer Models
//!
//! Data structures matching the customer service payloads.

use serde::{Deserialize, Serialize};

/// One row of the customer list. The list endpoint returns full
/// customer objects; everything beyond id and name is ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: u64,
    pub name: String,
}

/// Full customer record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetail {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
}

/// One resolved page of the customer list, plus the raw
/// `x-total-pages` header it arrived with (None when the backend
/// sent no header).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPage {
    pub items: Vec<CustomerSummary>,
    pub total_pages: Option<String>,
}
