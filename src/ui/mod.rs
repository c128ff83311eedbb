//! Search flow shared by the web page and the command-line client: collect the
//! form input, ask for recommendations, render them as cards.

pub mod controller;
pub mod input;
pub mod page;
pub mod render;

pub use controller::{NoticeLog, Notifier, SearchController, SearchOutcome, NO_RECOMMENDATIONS_NOTICE};
pub use input::{collect, parse_genres, FormInputs, SearchForm};
pub use render::{book_card, render_books, BookList, ResultsView};

/// Element ids the search page exposes
pub mod ids {
    pub const SEARCH: &str = "search";
    pub const GENRE_INPUT: &str = "genre-input";
    pub const SEARCH_BUTTON: &str = "search-button";
    pub const BOOK_LIST: &str = "book-list";
}
