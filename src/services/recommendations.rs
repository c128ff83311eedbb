use std::{cmp::Ordering, sync::Arc};

use crate::{
    client::{ClientError, RecommendationApi},
    error::{AppError, AppResult},
    models::{Book, RecommendationRequest, RecommendationResponse},
    services::{providers::BookProvider, relevance},
    PROJECT_NAME,
};

/// Ranks provider candidates against the user's query
///
/// Genres narrow the upstream search through `subject:` filters; relevance is
/// scored on the bare query so the filters do not skew the ranking.
pub struct Recommender {
    provider: Arc<dyn BookProvider>,
    num_output: usize,
}

impl Recommender {
    pub fn new(provider: Arc<dyn BookProvider>, num_output: usize) -> Self {
        Self {
            provider,
            num_output,
        }
    }

    pub async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Book>> {
        if request.query.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{}: No query provided.",
                PROJECT_NAME
            )));
        }

        let search_query = build_search_query(&request.query, &request.genres);
        tracing::info!(
            provider = self.provider.name(),
            search_query = %search_query,
            "Fetching candidates"
        );

        let candidates = self.provider.search(&search_query).await?;
        if candidates.is_empty() {
            return Err(AppError::NotFound(format!(
                "{}: No books found for your search.",
                PROJECT_NAME
            )));
        }

        let mut scoring_query = relevance::preprocess(&request.query);
        if scoring_query.is_empty() {
            scoring_query = request.query.to_lowercase();
        }

        let documents: Vec<String> = candidates
            .iter()
            .map(|candidate| relevance::preprocess(&candidate.combined_text()))
            .collect();
        let scores = relevance::score_documents(&scoring_query, &documents);

        let mut scored: Vec<_> = candidates.into_iter().zip(scores).collect();
        // Stable sort keeps upstream order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let books: Vec<Book> = scored
            .into_iter()
            .take(self.num_output)
            .map(|(candidate, score)| candidate.into_book(round_score(score)))
            .collect();

        tracing::info!(recommendation_count = books.len(), "Recommendations ranked");

        Ok(books)
    }
}

/// Appends a `subject:` filter for every non-blank genre
pub fn build_search_query(query: &str, genres: &[String]) -> String {
    let subjects: Vec<String> = genres
        .iter()
        .map(|genre| genre.trim())
        .filter(|genre| !genre.is_empty())
        .map(|genre| format!("subject:{}", genre))
        .collect();

    if subjects.is_empty() {
        query.to_string()
    } else {
        format!("{} {}", query, subjects.join(" "))
    }
}

/// Two decimals, exact halves to even
fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}

/// In-process client: server errors surface as an `error` body, as they would over HTTP
#[async_trait::async_trait]
impl RecommendationApi for Recommender {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError> {
        match Recommender::recommend(self, request).await {
            Ok(books) => Ok(RecommendationResponse::with_books(books)),
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                Ok(RecommendationResponse::with_error(e.to_string()))
            }
        }
    }
}
