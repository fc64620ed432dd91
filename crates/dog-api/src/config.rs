//! Client configuration.

/// Public endpoint of the dog catalog service
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Number of dogs requested per search page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Where the service lives and how results are paged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Absolute URL for an endpoint path such as `/dogs/search`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
