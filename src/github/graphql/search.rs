use serde::Serialize;

use crate::types::{RepositoryId, SearchQuery};

/// Issues requested per search page. GitHub caps `first` at 100.
pub const ISSUE_SEARCH_PAGE_SIZE: u32 = 100;

const DEFAULT_LABEL_LIMIT: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueSearchLimitSize {
    label_limit: u8,
}

impl Default for IssueSearchLimitSize {
    fn default() -> Self {
        Self {
            label_limit: DEFAULT_LABEL_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueSearchVariable {
    pub query: String,
    pub per_page: u32,
    pub cursor: Option<String>,
}

pub fn issue_search_query(limit_size: IssueSearchLimitSize) -> String {
    let IssueSearchLimitSize { label_limit } = limit_size;

    format!(
        r#"
        query($query: String!, $per_page: Int!, $cursor: String) {{
            search(query: $query, type: ISSUE, first: $per_page, after: $cursor) {{
                nodes {{
                    __typename
                    ... on Issue {{
                        title
                        url
                        labels(first: {}) {{
                            nodes {{
                                name
                            }}
                        }}
                    }}
                }}
                pageInfo {{
                    hasNextPage
                    endCursor
                }}
            }}
        }}"#,
        label_limit
    )
}

/// Prefixes the predicate with the `repo:owner/name` qualifier.
///
/// The predicate itself is passed through untouched.
pub fn scope_to_repository(query: &SearchQuery, repository_id: &RepositoryId) -> SearchQuery {
    let predicate = query.as_str().trim();

    if predicate.is_empty() {
        SearchQuery(format!("repo:{}", repository_id.full_name()))
    } else {
        SearchQuery(format!("repo:{} {}", repository_id.full_name(), predicate))
    }
}
