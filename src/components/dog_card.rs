//! Dog Card Component
//!
//! One search result with its favorite toggle and match highlight.

use dog_api::Dog;
use leptos::prelude::*;

use crate::store::{store_is_favorite, store_toggle_favorite, use_search_store, SearchStateStoreFields};

/// DOM id of the card rendering dog `id`
pub fn card_element_id(id: &str) -> String {
    format!("dog-card-{}", id)
}

#[component]
pub fn DogCard(dog: Dog) -> impl IntoView {
    let store = use_search_store();

    let id = dog.id.clone();
    let is_match = move || store.match_id().with(|m| m.as_deref() == Some(id.as_str()));
    let id = dog.id.clone();
    let is_favorite = move || store_is_favorite(&store, &id);
    let is_favorite_star = is_favorite.clone();
    let toggle_id = dog.id.clone();

    view! {
        <div id=card_element_id(&dog.id) class="dog-card" class:matched=is_match.clone()>
            <img class="dog-photo" src=dog.img alt=dog.name.clone() />
            <div class="dog-body">
                <h3 class="dog-name">{dog.name.clone()}</h3>
                <span class="breed-chip">{dog.breed}</span>
                <p class="dog-meta">
                    <b>"Age:"</b> " " {dog.age} <br />
                    <b>"Zip:"</b> " " {dog.zip_code}
                </p>
                <button
                    class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                    on:click=move |_| store_toggle_favorite(&store, &toggle_id)
                >
                    {move || if is_favorite_star() { "★" } else { "☆" }}
                </button>
            </div>
            <Show when=is_match.clone()>
                <span class="match-badge">"MATCHED!"</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_element_id() {
        assert_eq!(card_element_id("VXGFTIcBOvEgQ5OCx40W"), "dog-card-VXGFTIcBOvEgQ5OCx40W");
    }
}
