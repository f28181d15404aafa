//! Search types
//!
//! Query text, pagination cursors and the per-request page shape used by the
//! issue search loop.

use serde::{Deserialize, Serialize};

use super::Issue;

/// Represents a search predicate string.
///
/// Passed to GitHub verbatim after the repository qualifier. An empty query
/// matches every issue in the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCursor(pub String);

impl SearchCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPager {
    pub next_page_cursor: Option<SearchCursor>,
    pub has_next_page: bool,
}

/// Outcome of a single search request.
///
/// GitHub may answer with no search object at all; that is the end of the
/// results, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueSearchPage {
    Page {
        issues: Vec<Issue>,
        pager: SearchResultPager,
    },
    EndOfResults,
}
