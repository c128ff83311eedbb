use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{providers::GoogleBooksProvider, Recommender},
    ui::SearchController,
};

pub mod pages;
pub mod recommendations;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    /// Drives the search page through the same flow as remote clients
    pub search: SearchController,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        let recommender = Arc::new(recommender);
        Self {
            search: SearchController::new(recommender.clone()),
            recommender,
        }
    }

    /// Wires the Google Books provider from configuration
    pub fn from_config(config: &Config) -> Self {
        let provider = GoogleBooksProvider::new(
            config.google_books_api_key.clone(),
            config.google_books_api_url.clone(),
            config.max_results,
        );
        Self::new(Recommender::new(Arc::new(provider), config.num_output))
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(health_check))
        .route("/recommend", post(recommendations::recommend))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
