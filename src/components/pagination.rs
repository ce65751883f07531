//! Pagination Component
//!
//! Page buttons below the customer list.

use leptos::prelude::*;

use crate::state::{page_markers, ListQueryController};

/// One button per page, with the current page highlighted. Clicking
/// a button only dispatches the `set_page` intent; the controller
/// does the rest.
#[component]
pub fn Pagination(ctrl: ListQueryController) -> impl IntoView {
    let total_pages = ctrl.total_pages();
    let page = ctrl.page();

    view! {
        <div class="pagination">
            <For
                each=move || page_markers(total_pages.get(), page.get())
                key=|marker| (marker.page_number, marker.is_current)
                children=move |marker| {
                    let page_number = marker.page_number;
                    let class = if marker.is_current { "page-btn active" } else { "page-btn" };
                    view! {
                        <button class=class on:click=move |_| ctrl.set_page(page_number)>
                            {page_number}
                        </button>
                    }
                }
            />
        </div>
    }
}
