use std::fmt::Write;

use bookfind::BookSummary;

use crate::app::SearchState;

/// Renders the search view as text.
///
/// The branches form an ordered priority list and only the first match is
/// shown: loading, then error, then results, then no-results, then the
/// welcome panel.
pub fn render(state: &SearchState) -> String {
    if state.is_loading {
        "Searching for books...".to_owned()
    } else if let Some(message) = &state.error_message {
        format!("Error: {message}")
    } else if !state.results.is_empty() {
        render_results(&state.results)
    } else if !state.query.is_empty() {
        format!(
            "No books found for '{}'.\nTry searching with different keywords.",
            state.query
        )
    } else {
        "Book Finder - discover your next great read.\n\
         Enter a book title, author name, or keyword to begin searching."
            .to_owned()
    }
}

fn render_results(books: &[BookSummary]) -> String {
    let mut out = format!("Found {} books\n", books.len());

    for book in books {
        out.push('\n');
        render_card(&mut out, book);
    }

    out
}

// Writing to a String cannot fail, so the write! results are discarded.
fn render_card(out: &mut String, book: &BookSummary) {
    let year = book
        .publish_year
        .map_or_else(|| "Unknown".to_owned(), |year| year.to_string());

    let _ = writeln!(out, "{} ({year})", book.title);
    let _ = writeln!(out, "  Author: {}", book.author);

    if let Some(pages) = book.pages {
        let _ = writeln!(out, "  Pages: {pages}");
    }

    match &book.cover_url {
        Some(url) => {
            let _ = writeln!(out, "  Cover: {url}");
        }
        None => {
            let _ = writeln!(out, "  Cover: (none)");
        }
    }

    if let Some(url) = book.details_url() {
        let _ = writeln!(out, "  Details: {url}");
    }
}
