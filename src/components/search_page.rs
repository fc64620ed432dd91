//! Dog Search Page Component
//!
//! Authenticated view: filter, sort and page through the catalog, then ask
//! for a match among the favorites.

use dog_api::{load_page_if_current, DogService, RequestSequence};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{card_element_id, DogCard, Pagination, SearchControls};
use crate::context::use_app_context;
use crate::store::{store_query, SearchState, SearchStateStoreFields};

/// Smoothly center the card of dog `id` if it is rendered
fn scroll_to_card(id: &str) {
    let Some(element) = document().get_element_by_id(&card_element_id(id)) else {
        log::debug!("Matched dog {} is not on this page", id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn DogSearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(SearchState::default());
    provide_context(store);

    // Breed list, once per mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match client.breeds().await {
                Ok(breeds) => {
                    log::debug!("Loaded {} breeds", breeds.len());
                    store.breeds().set(breeds);
                }
                Err(e) => log::error!("Failed to load breeds: {}", e),
            }
        });
    });

    // Search + hydrate whenever breed, sort or page changes.
    // Only the newest request may publish its page.
    let sequence = RequestSequence::new();
    Effect::new(move |_| {
        let query = store_query(&store);
        let ticket = sequence.next();
        let sequence = sequence.clone();
        let client = ctx.client();
        spawn_local(async move {
            match load_page_if_current(&client, &query, &sequence, ticket).await {
                Some(Ok(dogs)) => store.dogs().set(dogs),
                Some(Err(e)) => log::error!("Failed to load page {}: {}", query.page, e),
                None => {}
            }
        });
    });

    // Bring the matched card into view, also when it shows up later
    Effect::new(move |_| {
        let Some(id) = store.match_id().get() else {
            return;
        };
        store.dogs().track();
        spawn_local(async move {
            // Let the card list render first
            TimeoutFuture::new(0).await;
            scroll_to_card(&id);
        });
    });

    view! {
        <div class="search-page">
            <header class="search-header">
                <h1>"Browse Dogs"</h1>
                <button class="logout-btn" on:click=move |_| ctx.logout()>"Logout"</button>
            </header>

            <SearchControls />

            <div class="dog-grid">
                <For
                    each=move || store.dogs().get()
                    key=|dog| dog.id.clone()
                    children=|dog| view! { <DogCard dog=dog /> }
                />
            </div>

            <Pagination />
        </div>
    }
}
