//! Google Books volumes API provider
//!
//! API Flow:
//! 1. Volume search: GET /books/v1/volumes?q={query}&maxResults={n} → volume list
//! 2. Each volume's `volumeInfo` is normalised into a `BookCandidate`

use crate::{
    error::{AppError, AppResult},
    models::{BookCandidate, VolumesResponse},
    services::providers::BookProvider,
    PROJECT_NAME,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    max_results: usize,
}

impl GoogleBooksProvider {
    pub fn new(api_key: Option<String>, api_url: String, max_results: usize) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            max_results,
        }
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

#[async_trait::async_trait]
impl BookProvider for GoogleBooksProvider {
    async fn search(&self, query: &str) -> AppResult<Vec<BookCandidate>> {
        tracing::debug!(provider = self.name(), query = %query, "Searching volumes");

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Google Books API request failed");
            return Err(AppError::ExternalApi(format!(
                "{}: Failed to fetch book data.",
                PROJECT_NAME
            )));
        }

        let volumes: VolumesResponse = response.json().await?;

        let candidates: Vec<BookCandidate> = volumes
            .items
            .into_iter()
            .take(self.max_results)
            .map(BookCandidate::from)
            .collect();

        tracing::info!(
            provider = self.name(),
            candidate_count = candidates.len(),
            "Fetched volumes"
        );

        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(api_key: Option<&str>) -> GoogleBooksProvider {
        GoogleBooksProvider::new(
            api_key.map(str::to_string),
            "http://test.local/books/v1/volumes".to_string(),
            20,
        )
    }

    #[test]
    fn test_query_params_without_key() {
        let provider = create_test_provider(None);
        let params = provider.query_params("dune subject:Fiction");
        assert_eq!(
            params,
            vec![
                ("q", "dune subject:Fiction".to_string()),
                ("maxResults", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_with_key() {
        let provider = create_test_provider(Some("abc"));
        let params = provider.query_params("dune");
        assert_eq!(params.last(), Some(&("key", "abc".to_string())));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_http_client_error() {
        let provider = GoogleBooksProvider::new(None, "http://127.0.0.1:1/volumes".to_string(), 20);
        let result = provider.search("dune").await;
        assert!(matches!(result, Err(AppError::HttpClient(_))));
    }
}
