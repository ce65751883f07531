//! Customer List Component
//!
//! Searchable, paginated customer list backed by the list endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::Pagination;
use crate::context::use_api;
use crate::state::{FetchStatus, ListQueryController};

/// Page size choices offered in the toolbar.
const PAGE_SIZES: &[u32] = &[10, 25, 50];

#[component]
pub fn CustomerList() -> impl IntoView {
    let api = use_api();
    let ctrl = ListQueryController::new();

    // One fetch pass per change of the (search, page, size) tuple.
    // begin_fetch tracks all three inputs, so this effect re-runs
    // whenever any of them moves.
    Effect::new(move |_| {
        let query = ctrl.begin_fetch();
        web_sys::console::log_1(
            &format!(
                "[CustomerList] Fetching page {} (search={:?}, size={})",
                query.page, query.name, query.size
            )
            .into(),
        );
        let api = api.clone();
        spawn_local(async move {
            let outcome = api.list_customers(&query).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("[CustomerList] Fetch failed: {}", e).into());
            }
            ctrl.resolve(query, outcome);
        });
    });

    let results = ctrl.results();
    let status = ctrl.status();
    let error = ctrl.error();

    view! {
        <div class="customer-list">
            <h2>"Customers"</h2>

            <div class="list-toolbar">
                <input
                    type="text"
                    placeholder="Search by name"
                    prop:value=move || ctrl.search_text().get()
                    on:input=move |ev| ctrl.set_search_text(event_target_value(&ev))
                />
                <select
                    prop:value=move || ctrl.page_size().get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            ctrl.set_page_size(size);
                        }
                    }
                >
                    {PAGE_SIZES.iter().map(|size| view! {
                        <option value=size.to_string()>{size.to_string()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || status.get() == FetchStatus::Loading>
                <p class="loading">"Loading..."</p>
            </Show>
            {move || (status.get() == FetchStatus::Error).then(|| view! {
                <p class="error">{error.get().unwrap_or_default()}</p>
            })}

            <ul class="customer-rows">
                <For
                    each=move || results.get()
                    key=|customer| customer.id
                    children=move |customer| view! {
                        <li>
                            <A href=format!("/customer/{}", customer.id)>{customer.name.clone()}</A>
                        </li>
                    }
                />
            </ul>

            <Pagination ctrl=ctrl/>
        </div>
    }
}
