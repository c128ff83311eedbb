use axum::{extract::State, Extension, Json};

use crate::{
    error::AppResult,
    extractor::AppJson,
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    routes::AppState,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        query = %request.query,
        genre_count = request.genres.len(),
        "Processing recommendation request"
    );

    let books = state.recommender.recommend(&request).await?;

    tracing::info!(
        request_id = %request_id,
        recommendation_count = books.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse::with_books(books)))
}
