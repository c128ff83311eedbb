use std::sync::Arc;

use crate::client::RecommendationApi;

use super::{input, render, ResultsView, SearchForm};

pub const NO_RECOMMENDATIONS_NOTICE: &str = "No recommendations found!";

/// Blocking, user-visible notice channel
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that records notices for later display
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<String>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn last(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing was requested
    Skipped,
    /// The view now holds this many cards
    Rendered(usize),
    /// The response carried no recommendations and the notice was raised
    NoResults,
    /// The request or its decoding failed; logged only
    Failed,
}

/// Runs one search: form → request → cards or notice
#[derive(Clone)]
pub struct SearchController {
    api: Arc<dyn RecommendationApi>,
}

impl SearchController {
    pub fn new(api: Arc<dyn RecommendationApi>) -> Self {
        Self { api }
    }

    /// Never fails: transport and decoding errors are logged and reported as
    /// `SearchOutcome::Failed` without touching the view or the notifier.
    pub async fn search<F, V, N>(&self, form: &F, view: &mut V, notifier: &mut N) -> SearchOutcome
    where
        F: SearchForm + ?Sized,
        V: ResultsView + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(request) = input::collect(form) else {
            return SearchOutcome::Skipped;
        };

        tracing::debug!(
            query = %request.query,
            genre_count = request.genres.len(),
            "Requesting recommendations"
        );

        match self.api.recommend(&request).await {
            Ok(response) => match response.recommendations {
                Some(books) => {
                    render::render_books(view, &books);
                    SearchOutcome::Rendered(books.len())
                }
                None => {
                    notifier.notify(NO_RECOMMENDATIONS_NOTICE);
                    SearchOutcome::NoResults
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Error fetching recommendations");
                SearchOutcome::Failed
            }
        }
    }
}
