//! UI Components
//!
//! Reusable Leptos components.

mod dog_card;
mod login_page;
mod pagination;
mod search_controls;
mod search_page;

pub use dog_card::{card_element_id, DogCard};
pub use login_page::LoginPage;
pub use pagination::Pagination;
pub use search_controls::SearchControls;
pub use search_page::DogSearchPage;
