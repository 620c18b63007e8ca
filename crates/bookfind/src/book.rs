/// Author shown when a catalog record does not name one.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

const DETAILS_URL: &str = "https://openlibrary.org/isbn";

/// Read-only projection of a single Open Library catalog record.
///
/// Fields the catalog omits are defaulted at mapping time: a missing author
/// becomes [`UNKNOWN_AUTHOR`] while year, cover, ISBN, and page count stay
/// `None` so the caller can decide how to present the gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookSummary {
    /// Catalog key identifying the record, e.g. `/works/OL893415W`.
    pub id: String,
    /// Title of the book, empty when the record omits it.
    pub title: String,
    /// First listed author, or [`UNKNOWN_AUTHOR`].
    pub author: String,
    /// Year of first publication.
    pub publish_year: Option<i32>,
    /// URL of a medium-sized cover image, when the record has a cover.
    pub cover_url: Option<String>,
    /// First listed ISBN, when the record has any.
    pub isbn: Option<String>,
    /// Median page count across the record's editions.
    pub pages: Option<u64>,
}

impl BookSummary {
    /// Open Library details page for this book, when an ISBN is known.
    #[must_use]
    pub fn details_url(&self) -> Option<String> {
        self.isbn
            .as_ref()
            .map(|isbn| format!("{DETAILS_URL}/{isbn}"))
    }
}

#[cfg(test)]
mod tests {
    use super::BookSummary;

    fn summary(isbn: Option<&str>) -> BookSummary {
        BookSummary {
            id: "/works/OL1".to_owned(),
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            publish_year: Some(1965),
            cover_url: None,
            isbn: isbn.map(str::to_owned),
            pages: Some(412),
        }
    }

    #[test]
    fn details_url_uses_first_isbn() {
        let book = summary(Some("9780441013593"));
        assert_eq!(
            Some("https://openlibrary.org/isbn/9780441013593".to_owned()),
            book.details_url()
        );
    }

    #[test]
    fn no_isbn_means_no_details_url() {
        assert_eq!(None, summary(None).details_url());
    }
}
