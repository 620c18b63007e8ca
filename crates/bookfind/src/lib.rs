#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod book;
mod error;

pub use book::{BookSummary, UNKNOWN_AUTHOR};
pub use error::{Error, ErrorKind};

use log::trace;

type Client = reqwest::blocking::Client;

/// Number of results requested from the catalog, and the cap applied to the
/// list a search returns.
pub const RESULT_LIMIT: usize = 12;

/// Search the Open Library catalog for books matching the free-text `query`.
///
/// Results keep the order of the catalog response and are capped at
/// [`RESULT_LIMIT`]. A search that matches nothing returns an empty `Vec`,
/// not an error.
///
/// # Errors
///
/// An `Err` is returned when the request fails at the transport level.
/// An `Err` is returned when the response cannot be parsed as the expected
/// JSON shape.
#[inline]
pub fn search_books(query: &str) -> Result<Vec<BookSummary>, Error> {
    trace!("Search books with query '{query}'");
    api::open_library::search_books::<Client>(query)
}
