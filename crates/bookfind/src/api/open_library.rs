use log::{info, trace};
use serde::Deserialize;

use crate::{
    book::{BookSummary, UNKNOWN_AUTHOR},
    Error, ErrorKind, RESULT_LIMIT,
};

use super::Client;

const SEARCH_URL: &str = "https://openlibrary.org/search.json";
const COVER_URL: &str = "https://covers.openlibrary.org/b/id";

pub(crate) fn search_books<C: Client>(query: &str) -> Result<Vec<BookSummary>, Error> {
    info!("Searching Open Library for '{query}'");
    let url = search_url(query)?;

    let client = C::default();
    let SearchModel { docs } = client.get_json(&url)?;

    trace!("Request was successful - mapping {} docs", docs.len());

    // An empty docs array is a valid "no results" outcome, not an error.
    Ok(docs
        .into_iter()
        .take(RESULT_LIMIT)
        .map(Doc::into_summary)
        .collect())
}

fn search_url(query: &str) -> Result<String, Error> {
    let limit = RESULT_LIMIT.to_string();
    // parse_with_params percent-encodes the query value.
    reqwest::Url::parse_with_params(SEARCH_URL, [("q", query), ("limit", limit.as_str())])
        .map(String::from)
        .map_err(|e| Error::wrap(ErrorKind::IO, e))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    docs: Vec<Doc>,
}

/// One record of the `docs` array in a search response.
///
/// Every field other than `key` and `title` is routinely missing from the
/// catalog, so all of them deserialize leniently.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Doc {
    #[serde(default)]
    key: String,
    #[serde(default)]
    title: String,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<i32>,
    cover_i: Option<u64>,
    isbn: Option<Vec<String>>,
    number_of_pages_median: Option<u64>,
}

impl Doc {
    fn into_summary(self) -> BookSummary {
        // Deconstruct to take ownership of fields (avoids cloning).
        let Doc {
            key,
            title,
            author_name,
            first_publish_year,
            cover_i,
            isbn,
            number_of_pages_median,
        } = self;

        let author = author_name
            .and_then(first_element)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned());

        BookSummary {
            id: key,
            title,
            author,
            publish_year: first_publish_year,
            cover_url: cover_i.map(|cover| format!("{COVER_URL}/{cover}-M.jpg")),
            isbn: isbn.and_then(first_element),
            pages: number_of_pages_median,
        }
    }
}

fn first_element(mut values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.remove(0))
    }
}
