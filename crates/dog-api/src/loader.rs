//! Page Loading
//!
//! Two-stage fetch behind the search view: search for a page of ids, then
//! hydrate those ids into full records.

use crate::client::DogService;
use crate::error::ApiError;
use crate::models::Dog;
use crate::query::SearchQuery;
use crate::sequence::{RequestSequence, Ticket};

/// Load the dogs shown for `query`.
///
/// An empty id page short-circuits to an empty result without a hydrate
/// request.
pub async fn load_page<S: DogService>(service: &S, query: &SearchQuery) -> Result<Vec<Dog>, ApiError> {
    let ids = service.search(query).await?;
    if ids.is_empty() {
        log::debug!("Search page {} is empty", query.page);
        return Ok(Vec::new());
    }
    let dogs = service.fetch_dogs(&ids).await?;
    log::debug!("Loaded {} dogs for page {}", dogs.len(), query.page);
    Ok(dogs)
}

/// Load the page for `query`, returning `None` when a newer request was
/// issued while this one was in flight.
pub async fn load_page_if_current<S: DogService>(
    service: &S,
    query: &SearchQuery,
    sequence: &RequestSequence,
    ticket: Ticket,
) -> Option<Result<Vec<Dog>, ApiError>> {
    let result = load_page(service, query).await;
    if !sequence.is_current(ticket) {
        log::debug!("Dropping stale results of request {}", ticket.id());
        return None;
    }
    Some(result)
}
