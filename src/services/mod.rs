pub mod search;

pub use search::{IssueSearchService, search_issues};
