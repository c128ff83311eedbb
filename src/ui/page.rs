use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::PROJECT_NAME;

use super::{ids, BookList, FormInputs};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }
form { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
input { flex: 1; padding: 0.5rem; }
.notice { background: #fff3cd; border-radius: 6px; padding: 0.75rem; }
#book-list { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); }
.book-card { border: 1px solid #ddd; border-radius: 10px; padding: 0.75rem; }
.book-link { color: inherit; text-decoration: none; }
.summary { display: -webkit-box; -webkit-line-clamp: 4; -webkit-box-orient: vertical; overflow: hidden; }
"#;

/// The search page. Submitting the form (button or Enter in either field)
/// reloads the page with the search applied.
pub fn search_page(form: &FormInputs, notice: Option<&str>, book_list: &BookList) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-us" {
            head {
                meta charset="utf-8";
                title { (PROJECT_NAME) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (PROJECT_NAME) }
                form method="get" action="/" {
                    input #(ids::SEARCH) name=(ids::SEARCH) type="text"
                        placeholder="Search for books" value=(form.search);
                    input #(ids::GENRE_INPUT) name=(ids::GENRE_INPUT) type="text"
                        placeholder="Genres, comma separated" value=(form.genre_input);
                    button #(ids::SEARCH_BUTTON) type="submit" { "Search" }
                }
                @if let Some(notice) = notice {
                    p.notice role="alert" { (notice) }
                }
                (book_list.render())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_container() {
        let html = search_page(&FormInputs::default(), None, &BookList::new()).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="search" name="search""#));
        assert!(html.contains(r#"id="genre-input" name="genre-input""#));
        assert!(html.contains(r#"id="search-button" type="submit""#));
        assert!(html.contains(r#"<div id="book-list"></div>"#));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_page_keeps_submitted_values_and_notice() {
        let form = FormInputs::new("dune", "Fiction");
        let html = search_page(&form, Some("No recommendations found!"), &BookList::new())
            .into_string();

        assert!(html.contains(r#"value="dune""#));
        assert!(html.contains(r#"value="Fiction""#));
        assert!(html.contains(r#"<p class="notice" role="alert">No recommendations found!</p>"#));
    }
}
