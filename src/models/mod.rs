use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

const NO_RATING: &str = "No rating";

/// Search submitted to `POST /recommend`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
}

/// Body returned by `POST /recommend`
///
/// A body without `recommendations` means "no results", whatever else it carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Book>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            recommendations: Some(books),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            recommendations: None,
            error: Some(message.into()),
        }
    }
}

/// A recommended book as displayed in a card
///
/// Fields are display values only: missing or `null` fields fall back to
/// their defaults so one incomplete record never rejects a whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(default = "default_info_link", deserialize_with = "null_as_info_link")]
    pub info_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: Rating,
}

fn default_info_link() -> String {
    "#".to_string()
}

/// Reads `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_info_link<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_info_link))
}

/// Average rating as reported upstream, or a label when there is none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Score(f64),
    Label(String),
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Label(NO_RATING.to_string())
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::Label(label) => write!(f, "{}", label),
        }
    }
}

/// An unscored book returned by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct BookCandidate {
    pub title: String,
    pub author: String,
    pub cover: String,
    pub description: String,
    pub info_link: String,
    pub rating: Rating,
}

impl BookCandidate {
    /// Text the relevance scorer sees for this candidate
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn into_book(self, score: f64) -> Book {
        Book {
            title: self.title,
            author: self.author,
            cover: self.cover,
            info_link: self.info_link,
            score,
            description: self.description,
            rating: self.rating,
        }
    }
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// Raw API response from GET /books/v1/volumes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub info_link: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl From<Volume> for BookCandidate {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        let title = info.title.unwrap_or_else(|| "Unknown Title".to_string());
        let author = info
            .authors
            .into_iter()
            .next()
            .unwrap_or_else(|| "Unknown Author".to_string());

        // Books without a blurb are described by their title
        let description = match info.description {
            Some(description) if !description.is_empty() => description,
            _ => title.clone(),
        };

        BookCandidate {
            author,
            cover: info
                .image_links
                .and_then(|links| links.thumbnail)
                .unwrap_or_default(),
            description,
            info_link: info.info_link.unwrap_or_else(default_info_link),
            rating: info.average_rating.map(Rating::Score).unwrap_or_default(),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_with_all_fields() {
        let volume: Volume = serde_json::from_value(json!({
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert", "Someone Else"],
                "imageLinks": { "thumbnail": "http://covers/dune.jpg" },
                "description": "Desert planet",
                "infoLink": "http://books/dune",
                "averageRating": 4.5
            }
        }))
        .unwrap();

        let candidate = BookCandidate::from(volume);
        assert_eq!(candidate.title, "Dune");
        assert_eq!(candidate.author, "Frank Herbert");
        assert_eq!(candidate.cover, "http://covers/dune.jpg");
        assert_eq!(candidate.description, "Desert planet");
        assert_eq!(candidate.info_link, "http://books/dune");
        assert_eq!(candidate.rating, Rating::Score(4.5));
    }

    #[test]
    fn test_volume_defaults() {
        let volume: Volume = serde_json::from_value(json!({ "volumeInfo": {} })).unwrap();

        let candidate = BookCandidate::from(volume);
        assert_eq!(candidate.title, "Unknown Title");
        assert_eq!(candidate.author, "Unknown Author");
        assert_eq!(candidate.cover, "");
        assert_eq!(candidate.description, "Unknown Title");
        assert_eq!(candidate.info_link, "#");
        assert_eq!(candidate.rating.to_string(), "No rating");
    }

    #[test]
    fn test_empty_description_falls_back_to_title() {
        let volume: Volume = serde_json::from_value(json!({
            "volumeInfo": { "title": "Emma", "description": "" }
        }))
        .unwrap();

        assert_eq!(BookCandidate::from(volume).description, "Emma");
    }

    #[test]
    fn test_book_accepts_numeric_and_label_ratings() {
        let numeric: Book = serde_json::from_value(json!({
            "title": "Dune", "author": "Herbert", "score": 0.9, "rating": 4.5
        }))
        .unwrap();
        assert_eq!(numeric.rating, Rating::Score(4.5));
        assert_eq!(numeric.info_link, "#");
        assert_eq!(numeric.cover, "");

        let label: Book = serde_json::from_value(json!({
            "title": "Dune", "author": "Herbert", "score": 0.9, "rating": "No rating"
        }))
        .unwrap();
        assert_eq!(label.rating, Rating::Label("No rating".to_string()));
    }

    #[test]
    fn test_book_missing_and_null_fields_use_defaults() {
        let response: RecommendationResponse = serde_json::from_str(
            r#"{"recommendations":[
                {"title":"Dune","author":"Herbert"},
                {"title":null,"author":"Austen","cover":null,"info_link":null,
                 "score":null,"description":null,"rating":null}
            ]}"#,
        )
        .unwrap();

        let books = response.recommendations.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].score, 0.0);
        assert_eq!(books[0].info_link, "#");
        assert_eq!(books[1].title, "");
        assert_eq!(books[1].cover, "");
        assert_eq!(books[1].info_link, "#");
        assert_eq!(books[1].rating, Rating::default());
    }

    #[test]
    fn test_request_null_fields_use_defaults() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"query": "dune", "genres": null}"#).unwrap();
        assert_eq!(request.query, "dune");
        assert!(request.genres.is_empty());

        let request: RecommendationRequest =
            serde_json::from_str(r#"{"query": null}"#).unwrap();
        assert_eq!(request.query, "");
    }

    #[test]
    fn test_response_without_recommendations() {
        let response: RecommendationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.recommendations, None);

        let response: RecommendationResponse =
            serde_json::from_str(r#"{"error": "BookHive: No books found for your search."}"#)
                .unwrap();
        assert_eq!(response.recommendations, None);
        assert!(response.error.is_some());
    }

    #[test]
    fn test_request_fields_default_when_missing() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, RecommendationRequest::default());
    }
}
