use axum::extract::{Query, State};
use maud::Markup;
use serde::Deserialize;

use crate::{
    routes::AppState,
    ui::{page, BookList, FormInputs, NoticeLog},
};

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    search: Option<String>,
    #[serde(rename = "genre-input")]
    genre_input: Option<String>,
}

/// Search page; runs the search when the form was submitted
pub async fn home(State(state): State<AppState>, Query(params): Query<HomeParams>) -> Markup {
    let mut book_list = BookList::new();
    let mut notices = NoticeLog::new();

    let form = FormInputs::new(
        params.search.clone().unwrap_or_default(),
        params.genre_input.unwrap_or_default(),
    );

    if params.search.is_some() {
        let outcome = state.search.search(&form, &mut book_list, &mut notices).await;
        tracing::debug!(?outcome, "Search page rendered");
    }

    page::search_page(&form, notices.last(), &book_list)
}
