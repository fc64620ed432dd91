//! Dog API Client
//!
//! Typed access to the remote dog catalog service: session login/logout,
//! breed listing, paginated search, bulk record hydration and matching.
//!
//! The crate has no UI dependencies so the query and loading logic can be
//! exercised on the host as well as in the browser.

mod client;
mod config;
mod error;
mod loader;
mod models;
mod query;
mod sequence;

pub use client::{DogClient, DogService};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::ApiError;
pub use loader::{load_page, load_page_if_current};
pub use models::{Dog, DogId, LoginRequest, MatchResponse, SearchResponse};
pub use query::{next_page, previous_page, SearchQuery, SortKey};
pub use sequence::{RequestSequence, Ticket};
