use serde::Deserialize;

use crate::models::RecommendationRequest;

/// Source of the two search fields
pub trait SearchForm {
    /// Raw value of the `search` field
    fn search_text(&self) -> String;

    /// Raw value of the `genre-input` field
    fn genre_text(&self) -> String;
}

/// Field values captured from a submitted form or the command line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormInputs {
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "genre-input")]
    pub genre_input: String,
}

impl FormInputs {
    pub fn new(search: impl Into<String>, genre_input: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            genre_input: genre_input.into(),
        }
    }
}

impl SearchForm for FormInputs {
    fn search_text(&self) -> String {
        self.search.clone()
    }

    fn genre_text(&self) -> String {
        self.genre_input.clone()
    }
}

/// Splits comma-separated genres, trimming each and dropping blanks.
///
/// Order is preserved and duplicates are kept.
pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the form into a request, or `None` when the query is blank.
pub fn collect<F: SearchForm + ?Sized>(form: &F) -> Option<RecommendationRequest> {
    let query = form.search_text().trim().to_string();
    if query.is_empty() {
        return None;
    }

    Some(RecommendationRequest {
        query,
        genres: parse_genres(&form.genre_text()),
    })
}
