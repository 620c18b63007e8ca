use bookfind::{BookSummary, Error};
use log::error;

/// The one user-facing message shown for any failed search, transport and
/// parse failures alike.
pub const SEARCH_FAILED_MSG: &str = "Failed to fetch books. Please try again.";

/// A state transition, one per user action or completed request.
pub enum Event {
    /// A non-empty query was submitted and a request is about to be made.
    Submitted,
    /// A request finished and produced a (possibly empty) result list.
    Completed(Vec<BookSummary>),
    /// A request failed.
    Failed,
}

/// All state owned by the search view.
///
/// The display is a pure function of these four fields (see
/// [`render`](crate::render::render)); the fields only change by applying
/// an [`Event`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<BookSummary>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl SearchState {
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Submitted => {
                self.is_loading = true;
                self.error_message = None;
            }
            Event::Completed(books) => {
                // Replaced wholesale, never appended - even when empty.
                self.results = books;
                self.is_loading = false;
            }
            Event::Failed => {
                // Previous results are left untouched.
                self.error_message = Some(SEARCH_FAILED_MSG.to_owned());
                self.is_loading = false;
            }
        }
    }

    /// Starts a search for `raw`, trimmed.
    ///
    /// Returns the query to request results for, with the state marked as
    /// loading. An empty or whitespace-only `raw` is a no-op: the state is
    /// unchanged and `None` signals that no request should be made.
    pub fn begin(&mut self, raw: &str) -> Option<String> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }

        self.query = query.to_owned();
        self.apply(Event::Submitted);
        Some(query.to_owned())
    }

    /// Applies the outcome of the request started by [`begin`](Self::begin).
    ///
    /// Failures collapse to the fixed [`SEARCH_FAILED_MSG`]; the underlying
    /// error is logged rather than shown.
    pub fn finish(&mut self, outcome: Result<Vec<BookSummary>, Error>) {
        match outcome {
            Ok(books) => self.apply(Event::Completed(books)),
            Err(err) => {
                error!("search failed: {err}");
                self.apply(Event::Failed);
            }
        }
    }
}
