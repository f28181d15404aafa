use anyhow::Result;
use tracing::{debug, info};

use crate::github::graphql::graphql_types::{
    GraphQLPayload, GraphQLQuery, GraphQLResponse, IssueSearchResponse,
};
use crate::github::graphql::search::{
    ISSUE_SEARCH_PAGE_SIZE, IssueSearchLimitSize, IssueSearchVariable, issue_search_query,
    scope_to_repository,
};
use crate::github::{GitHubClient, GraphQLExecutor};
use crate::types::{Issue, IssueSearchPage, RepositoryId, SearchCursor, SearchQuery};

/// Service collecting every issue that matches a search predicate.
///
/// Pages are requested one at a time; the next request is only issued once
/// the previous page has been appended.
pub struct IssueSearchService<E = GitHubClient> {
    executor: E,
}

impl<E: GraphQLExecutor> IssueSearchService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Fetches a single page of issues for an already scoped query.
    ///
    /// A response without a `search` object is reported as
    /// [`IssueSearchPage::EndOfResults`].
    pub async fn fetch_issue_page(
        &self,
        query: &SearchQuery,
        cursor: Option<&SearchCursor>,
    ) -> Result<IssueSearchPage> {
        let variables = IssueSearchVariable {
            query: query.as_str().to_string(),
            per_page: ISSUE_SEARCH_PAGE_SIZE,
            cursor: cursor.map(|c| c.0.clone()),
        };

        let payload = GraphQLPayload {
            query: GraphQLQuery(issue_search_query(IssueSearchLimitSize::default())),
            variables: Some(variables),
        };

        let response: GraphQLResponse<IssueSearchResponse> =
            self.executor.execute_graphql("issue_search", payload).await?;

        Ok(match response.data.and_then(|data| data.search) {
            Some(connection) => connection.into(),
            None => IssueSearchPage::EndOfResults,
        })
    }

    /// Searches the repository and follows the cursor until GitHub reports
    /// no further pages.
    ///
    /// Issues are returned in arrival order without deduplication. Any
    /// failure aborts the whole search and nothing accumulated so far is
    /// returned.
    pub async fn search_all_issues(
        &self,
        repository_id: &RepositoryId,
        query: &SearchQuery,
    ) -> Result<Vec<Issue>> {
        let start_time = std::time::Instant::now();
        let scoped_query = scope_to_repository(query, repository_id);

        let mut all_issues = Vec::new();
        let mut current_cursor: Option<SearchCursor> = None;
        let mut has_next_page = true;

        while has_next_page {
            match self
                .fetch_issue_page(&scoped_query, current_cursor.as_ref())
                .await?
            {
                IssueSearchPage::Page { issues, pager } => {
                    debug!(
                        "Fetched {} issues for '{}', has next page: {}",
                        issues.len(),
                        scoped_query.as_str(),
                        pager.has_next_page
                    );
                    all_issues.extend(issues);
                    current_cursor = pager.next_page_cursor;
                    has_next_page = pager.has_next_page;
                }
                IssueSearchPage::EndOfResults => {
                    debug!("Empty search response for '{}'", scoped_query.as_str());
                    has_next_page = false;
                }
            }
        }

        info!(
            "Issue search in {} took {:?}, fetched {} issues",
            repository_id,
            start_time.elapsed(),
            all_issues.len()
        );

        Ok(all_issues)
    }
}

/// Searches `repository_id` for every issue matching `query`, authenticating
/// with `token`.
pub async fn search_issues(
    token: String,
    repository_id: &RepositoryId,
    query: &SearchQuery,
) -> Result<Vec<Issue>> {
    if token.trim().is_empty() {
        anyhow::bail!("GitHub token must not be empty");
    }

    let client = GitHubClient::new(Some(token), None)?;
    IssueSearchService::new(client)
        .search_all_issues(repository_id, query)
        .await
}
