//! Search Query
//!
//! Breed filter, sort order and page index, and their mapping onto the
//! `/dogs/search` query string.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in query values; unreserved marks stay literal
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Result ordering supported by the search endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    BreedAsc,
    BreedDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::BreedAsc, SortKey::BreedDesc];

    /// Value sent as the `sort` parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::BreedAsc => "breed:asc",
            SortKey::BreedDesc => "breed:desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::BreedAsc => "Breed (A-Z)",
            SortKey::BreedDesc => "Breed (Z-A)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

/// One page request against the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// None means all breeds
    pub breed: Option<String>,
    pub sort: SortKey,
    /// Zero-based page index
    pub page: u32,
}

impl SearchQuery {
    /// Build from the form values; an empty breed selects all breeds
    pub fn from_filter(breed: &str, sort: SortKey, page: u32) -> Self {
        Self {
            breed: (!breed.is_empty()).then(|| breed.to_string()),
            sort,
            page,
        }
    }

    pub fn offset(&self, page_size: u32) -> u32 {
        self.page.saturating_mul(page_size)
    }

    /// Query string for `/dogs/search`, without the leading `?`
    pub fn to_query_string(&self, page_size: u32) -> String {
        let mut params = Vec::with_capacity(4);
        if let Some(breed) = &self.breed {
            params.push(format!("breeds={}", utf8_percent_encode(breed, QUERY_VALUE)));
        }
        params.push(format!("size={}", page_size));
        params.push(format!("from={}", self.offset(page_size)));
        params.push(format!("sort={}", self.sort));
        params.join("&")
    }
}

/// Page index after pressing "Next"
pub fn next_page(page: u32) -> u32 {
    page.saturating_add(1)
}

/// Page index after pressing "Previous", never below zero
pub fn previous_page(page: u32) -> u32 {
    page.saturating_sub(1)
}
