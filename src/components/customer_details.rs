//! Customer Details Component
//!
//! Detail view plus the provider that owns its fetch state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::use_api;
use crate::state::{DetailFetchController, FetchStatus};

/// Provides a [`DetailFetchController`] to the detail route subtree.
#[component]
pub fn CustomerProvider(children: Children) -> impl IntoView {
    provide_context(DetailFetchController::new());
    children()
}

/// Handle to the controller provisioned by [`CustomerProvider`].
///
/// Panics when no provider is present in the ancestry; that is a
/// wiring mistake, not a runtime condition.
pub fn use_customer_detail() -> DetailFetchController {
    use_context::<DetailFetchController>()
        .expect("DetailFetchController must be used within a CustomerProvider")
}

#[component]
pub fn CustomerDetails() -> impl IntoView {
    let api = use_api();
    let ctrl = use_customer_detail();
    let params = use_params_map();

    // Re-fetch whenever the route id changes, initial mount included.
    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        web_sys::console::log_1(&format!("[CustomerDetails] Fetching customer {}", id).into());
        ctrl.set_id(id.clone());
        let api = api.clone();
        spawn_local(async move {
            let outcome = api.get_customer(&id).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(
                    &format!("[CustomerDetails] Fetch failed for {}: {}", id, e).into(),
                );
            }
            ctrl.resolve(id, outcome);
        });
    });

    let record = ctrl.record();
    let status = ctrl.status();
    let error = ctrl.error();

    view! {
        <div class="customer-details">
            <h2>"Customer Details"</h2>

            <Show when=move || status.get() == FetchStatus::Loading>
                <p class="loading">"Loading..."</p>
            </Show>
            {move || (status.get() == FetchStatus::Error).then(|| view! {
                <p class="error">{error.get().unwrap_or_default()}</p>
            })}

            {move || record.get().map(|customer| view! {
                <div class="customer-fields">
                    <p>"Name: " {customer.name.clone()}</p>
                    <p>"Email: " {customer.email.clone()}</p>
                    {customer.gender.clone().map(|gender| view! { <p>"Gender: " {gender}</p> })}
                </div>
            })}

            <A href="/">"Back to list"</A>
        </div>
    }
}
