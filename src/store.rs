//! Search Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use dog_api::{Dog, DogId, SearchQuery, SortKey};
use leptos::prelude::*;
use reactive_stores::Store;

/// Search view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SearchState {
    /// Breed names for the filter dropdown
    pub breeds: Vec<String>,
    /// Selected breed, empty for all breeds
    pub selected_breed: String,
    pub sort: SortKey,
    /// Zero-based page index
    pub page: u32,
    /// Records of the page currently displayed
    pub dogs: Vec<Dog>,
    /// Favorited ids in the order they were starred
    pub favorites: Vec<DogId>,
    /// Id returned by the last successful match request
    pub match_id: Option<DogId>,
}

/// Type alias for the store
pub type SearchStore = Store<SearchState>;

/// Get the search store from context
pub fn use_search_store() -> SearchStore {
    expect_context::<SearchStore>()
}

// ========================
// State Helpers
// ========================

/// Add `id` if absent, remove it if present
pub fn toggle_favorite(favorites: &mut Vec<DogId>, id: &str) {
    if let Some(pos) = favorites.iter().position(|f| f == id) {
        favorites.remove(pos);
    } else {
        favorites.push(id.to_string());
    }
}

/// The match button only makes sense with at least one favorite
pub fn can_request_match(favorites: &[DogId]) -> bool {
    !favorites.is_empty()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a favorite in the store
pub fn store_toggle_favorite(store: &SearchStore, id: &str) {
    toggle_favorite(&mut store.favorites().write(), id);
}

/// Whether `id` is currently a favorite (tracked)
pub fn store_is_favorite(store: &SearchStore, id: &str) -> bool {
    store.favorites().with(|favs| favs.iter().any(|f| f == id))
}

/// Snapshot of the query inputs (tracked)
pub fn store_query(store: &SearchStore) -> SearchQuery {
    SearchQuery::from_filter(&store.selected_breed().get(), store.sort().get(), store.page().get())
}
