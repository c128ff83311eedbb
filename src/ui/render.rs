use maud::{html, Markup};

use crate::models::Book;

use super::ids;

/// Container the cards are rendered into
pub trait ResultsView {
    /// Removes every card currently shown
    fn clear(&mut self);

    fn append(&mut self, card: Markup);
}

/// In-memory `#book-list` container
#[derive(Debug, Clone, Default)]
pub struct BookList {
    cards: Vec<Markup>,
}

impl BookList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Markup] {
        &self.cards
    }

    pub fn render(&self) -> Markup {
        html! {
            div #(ids::BOOK_LIST) {
                @for card in &self.cards {
                    (card)
                }
            }
        }
    }
}

impl ResultsView for BookList {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: Markup) {
        self.cards.push(card);
    }
}

/// Card for one book; the whole card links to the book's info page in a new tab
pub fn book_card(book: &Book) -> Markup {
    html! {
        div.book-card {
            a.book-link href=(book.info_link) target="_blank" {
                img src=(book.cover) alt=(book.title) style="width:100%; border-radius:10px;";
                h3 { (book.title) }
                p { strong { (book.author) } }
                p { "Relevance: " (book.score.to_string()) }
                p.summary { (book.description) }
                p.rating { "Rating: " (book.rating.to_string()) }
            }
        }
    }
}

/// Replaces the view's contents with one card per book, in the given order
pub fn render_books<V: ResultsView + ?Sized>(view: &mut V, books: &[Book]) {
    view.clear();
    for book in books {
        view.append(book_card(book));
    }
}
