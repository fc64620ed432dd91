//! HTTP Client
//!
//! Session-cookie authenticated calls to the dog service. In the browser
//! every request is sent with `credentials: include` so the session cookie
//! set by `/auth/login` travels with later calls.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Dog, DogId, LoginRequest, MatchResponse, SearchResponse};
use crate::query::SearchQuery;

/// Catalog operations needed to browse and match dogs
#[allow(async_fn_in_trait)]
pub trait DogService {
    /// All known breed names
    async fn breeds(&self) -> Result<Vec<String>, ApiError>;

    /// Identifiers of one result page, in service order
    async fn search(&self, query: &SearchQuery) -> Result<Vec<DogId>, ApiError>;

    /// Full records for the given identifiers
    async fn fetch_dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>, ApiError>;

    /// The single dog the service picks from `favorites`
    async fn find_match(&self, favorites: &[DogId]) -> Result<DogId, ApiError>;
}

/// reqwest-backed client for the dog service
#[derive(Debug, Clone)]
pub struct DogClient {
    http: Client,
    config: ApiConfig,
}

impl DogClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Start a session; any 2xx status counts as success
    pub async fn login(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.config.endpoint("/auth/login"))
            .json(&LoginRequest { name, email });
        self.send(request).await?;
        log::debug!("Session started");
        Ok(())
    }

    /// End the session. The response body is never inspected.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.http.post(self.config.endpoint("/auth/logout"));
        with_credentials(request).send().await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = with_credentials(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned {}", response.url().path(), status);
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl DogService for DogClient {
    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        let request = self.http.get(self.config.endpoint("/dogs/breeds"));
        self.fetch_json(request).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<DogId>, ApiError> {
        let url = format!(
            "{}?{}",
            self.config.endpoint("/dogs/search"),
            query.to_query_string(self.config.page_size)
        );
        log::debug!("Searching {}", url);
        let response: SearchResponse = self.fetch_json(self.http.get(url)).await?;
        Ok(response.result_ids)
    }

    async fn fetch_dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>, ApiError> {
        let request = self.http.post(self.config.endpoint("/dogs")).json(ids);
        self.fetch_json(request).await
    }

    async fn find_match(&self, favorites: &[DogId]) -> Result<DogId, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint("/dogs/match"))
            .json(favorites);
        let response: MatchResponse = self.fetch_json(request).await?;
        Ok(response.dog_id)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> DogClient {
        DogClient::new(ApiConfig::new(server.url()))
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"name": "Ada", "email": "ada@example.com"})))
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let client = client_for(&server);
        client.login("Ada", "ada@example.com").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejected_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server).login("Ada", "bad").await.unwrap_err();
        assert!(matches!(err, ApiError::Status(401)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let client = DogClient::new(ApiConfig::new("http://127.0.0.1:1"));
        let err = client.login("Ada", "ada@example.com").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_logout_ignores_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/logout")
            .with_status(500)
            .create_async()
            .await;

        assert!(client_for(&server).logout().await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_breeds() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dogs/breeds")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["Affenpinscher","Beagle","Pug"]"#)
            .create_async()
            .await;

        let breeds = client_for(&server).breeds().await.unwrap();
        assert_eq!(breeds, vec!["Affenpinscher", "Beagle", "Pug"]);
    }

    #[tokio::test]
    async fn test_search_sends_paging_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("breeds".into(), "Golden Retriever".into()),
                Matcher::UrlEncoded("size".into(), "12".into()),
                Matcher::UrlEncoded("from".into(), "36".into()),
                Matcher::UrlEncoded("sort".into(), "breed:desc".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"resultIds":["b","a"],"total":2}"#)
            .create_async()
            .await;

        let query = SearchQuery::from_filter("Golden Retriever", SortKey::BreedDesc, 3);
        let ids = client_for(&server).search(&query).await.unwrap();
        assert_eq!(ids, vec!["b", "a"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server)
            .search(&SearchQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_dogs_posts_ids() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dogs")
            .match_body(Matcher::Json(json!(["x1"])))
            .with_status(200)
            .with_body(
                r#"[{"id":"x1","img":"https://img/x1.jpg","name":"Rex","age":3,"zip_code":"10001","breed":"Boxer"}]"#,
            )
            .create_async()
            .await;

        let dogs = client_for(&server)
            .fetch_dogs(&["x1".to_string()])
            .await
            .unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].breed, "Boxer");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_match() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dogs/match")
            .match_body(Matcher::Json(json!(["a", "b"])))
            .with_status(200)
            .with_body(r#"{"match":"b"}"#)
            .create_async()
            .await;

        let favorites = vec!["a".to_string(), "b".to_string()];
        let matched = client_for(&server).find_match(&favorites).await.unwrap();
        assert_eq!(matched, "b");
        mock.assert_async().await;
    }
}
