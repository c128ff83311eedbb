//! Client side of `POST /recommend`.

use reqwest::Client as HttpClient;

use crate::models::{RecommendationRequest, RecommendationResponse};

/// Failures while fetching recommendations
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a recommendation request
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError>;
}

/// Talks to a BookHive server over HTTP
#[derive(Clone)]
pub struct HttpRecommendationClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/recommend", self.base_url)
    }
}

#[async_trait::async_trait]
impl RecommendationApi for HttpRecommendationClient {
    /// The status code is not inspected: any JSON body is a response, so error
    /// bodies from the server read as "no recommendations".
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Received recommendation response");

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
