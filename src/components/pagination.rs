//! Pagination Component

use dog_api::{next_page, previous_page};
use leptos::prelude::*;

use crate::store::{use_search_store, SearchStateStoreFields};

/// Previous / current page / Next row
#[component]
pub fn Pagination() -> impl IntoView {
    let store = use_search_store();

    view! {
        <div class="pagination">
            <button
                disabled=move || store.page().get() == 0
                on:click=move |_| store.page().update(|p| *p = previous_page(*p))
            >
                "Previous"
            </button>
            <button class="page-indicator" disabled=true>
                {move || format!("Page {}", store.page().get() + 1)}
            </button>
            <button on:click=move |_| store.page().update(|p| *p = next_page(*p))>
                "Next"
            </button>
        </div>
    }
}
