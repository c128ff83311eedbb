//! Book data provider abstraction
//!
//! A provider turns a free-text query (already carrying any `subject:` filters)
//! into unscored candidates. Ranking happens in the recommender, so providers
//! only fetch and normalise upstream records.

use crate::{error::AppResult, models::BookCandidate};

pub mod google_books;

pub use google_books::GoogleBooksProvider;

/// Trait for book data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookProvider: Send + Sync {
    /// Search for books matching the query, in upstream order
    async fn search(&self, query: &str) -> AppResult<Vec<BookCandidate>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
