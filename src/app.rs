//! Customer Frontend App
//!
//! Route table wiring the list and detail views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{CustomerDetails, CustomerList, CustomerProvider};

#[component]
pub fn App() -> impl IntoView {
    // One HTTP client for the whole app, shared via context.
    provide_context(ApiClient::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=CustomerList/>
                <Route path=path!("/customer/:id") view=|| view! {
                    <CustomerProvider>
                        <CustomerDetails/>
                    </CustomerProvider>
                }/>
            </Routes>
        </Router>
    }
}
