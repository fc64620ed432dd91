//! Search Controls Component
//!
//! Breed filter, sort order and the match request button.

use dog_api::{DogService, SortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{can_request_match, use_search_store, SearchStateStoreFields};

#[component]
pub fn SearchControls() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_search_store();

    let request_match = move |_: web_sys::MouseEvent| {
        let favorites = store.favorites().get_untracked();
        if !can_request_match(&favorites) {
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            match client.find_match(&favorites).await {
                Ok(id) => {
                    log::info!("Matched with {} out of {} favorites", id, favorites.len());
                    store.match_id().set(Some(id));
                }
                Err(e) => log::error!("Match request failed: {}", e),
            }
        });
    };

    let on_sort_change = move |ev: web_sys::Event| match event_target_value(&ev).parse::<SortKey>() {
        Ok(key) => store.sort().set(key),
        Err(e) => log::warn!("{}", e),
    };

    view! {
        <div class="search-controls">
            <select
                class="breed-select"
                on:change=move |ev| store.selected_breed().set(event_target_value(&ev))
            >
                <option value="" prop:selected=move || store.selected_breed().with(|b| b.is_empty())>
                    "All Breeds"
                </option>
                <For
                    each=move || store.breeds().get()
                    key=|breed| breed.clone()
                    children=move |breed| {
                        let value = breed.clone();
                        let attr_value = breed.clone();
                        let is_selected = move || store.selected_breed().with(|b| *b == value);
                        view! {
                            <option value=attr_value prop:selected=is_selected>{breed}</option>
                        }
                    }
                />
            </select>

            <select class="sort-select" on:change=on_sort_change>
                {SortKey::ALL.into_iter().map(|key| view! {
                    <option value=key.as_str() prop:selected=move || store.sort().get() == key>
                        {key.label()}
                    </option>
                }).collect_view()}
            </select>

            <button
                class="match-btn"
                disabled=move || !store.favorites().with(|favs| can_request_match(favs))
                on:click=request_match
            >
                "Find My Match!"
            </button>
        </div>
    }
}
