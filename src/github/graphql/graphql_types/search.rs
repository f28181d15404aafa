use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::{IssueNode, PageInfo};
use crate::types::{Issue, IssueSearchPage};

/// GraphQL response structures for Search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSearchResponse {
    pub search: Option<IssueSearchConnection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSearchConnection {
    pub nodes: Vec<SearchResult>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchResult {
    #[serde(rename = "Issue")]
    Issue(IssueNode),
    #[serde(other)]
    Other,
}

impl From<IssueSearchConnection> for IssueSearchPage {
    fn from(connection: IssueSearchConnection) -> Self {
        let issues: Vec<Issue> = connection
            .nodes
            .into_iter()
            .filter_map(|node| match node {
                SearchResult::Issue(issue_node) => Some(Issue::from(issue_node)),
                SearchResult::Other => {
                    tracing::debug!("Skipping non-issue search result node");
                    None
                }
            })
            .collect();

        IssueSearchPage::Page {
            issues,
            pager: connection.page_info.into(),
        }
    }
}
