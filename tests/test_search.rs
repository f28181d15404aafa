//! Integration tests for the paginated issue search
//!
//! The mock-server tests drive the real octocrab-backed client against a local
//! HTTP server that answers `POST /graphql` with canned search pages.
//!
//! Live tests require GitHub authentication as they use the GraphQL API.
//! Run with: cargo test --features integration-tests

use mockito::Matcher;
use serde_json::json;
#[cfg(feature = "integration-tests")]
use serial_test::serial;

use issue_search::github::error::GraphQLQueryError;
use issue_search::services::IssueSearchService;
use issue_search::types::{Issue, Label, RepositoryId, SearchQuery};
use test_util::create_mock_github_client;
#[cfg(feature = "integration-tests")]
use test_util::create_test_github_client;

fn search_page(nodes: serde_json::Value, has_next_page: bool, end_cursor: Option<&str>) -> String {
    json!({
        "data": {
            "search": {
                "nodes": nodes,
                "pageInfo": { "hasNextPage": has_next_page, "endCursor": end_cursor }
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_search_follows_cursor_across_pages() {
    let mut server = mockito::Server::new_async().await;

    let first_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "query": "repo:org/repo", "per_page": 100, "cursor": null }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_page(
            json!([{ "__typename": "Issue", "title": "A", "url": "u1", "labels": { "nodes": [] } }]),
            true,
            Some("c1"),
        ))
        .expect(1)
        .create_async()
        .await;

    let second_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "query": "repo:org/repo", "cursor": "c1" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_page(
            json!([
                { "__typename": "Issue", "title": "B", "url": "u2", "labels": { "nodes": [{ "name": "bug" }] } },
                { "__typename": "PullRequest" }
            ]),
            false,
            None,
        ))
        .expect(1)
        .create_async()
        .await;

    let service = IssueSearchService::new(create_mock_github_client(server.url()));
    let issues = service
        .search_all_issues(&RepositoryId::new("org", "repo"), &SearchQuery::new(""))
        .await
        .expect("search should succeed");

    assert_eq!(
        issues,
        vec![
            Issue::new("A", "u1", vec![]),
            Issue::new("B", "u2", vec![Label::from("bug")]),
        ]
    );

    first_page.assert_async().await;
    second_page.assert_async().await;
}

#[tokio::test]
async fn test_search_null_data_returns_empty() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": null }).to_string())
        .expect(1)
        .create_async()
        .await;

    let service = IssueSearchService::new(create_mock_github_client(server.url()));
    let issues = service
        .search_all_issues(
            &RepositoryId::new("acme", "widgets"),
            &SearchQuery::new("is:open label:bug"),
        )
        .await
        .expect("null data is the end of the results");

    assert!(issues.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_graphql_errors_fail_the_search() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": null,
                "errors": [{ "message": "Invalid search query" }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let service = IssueSearchService::new(create_mock_github_client(server.url()));
    let error = service
        .search_all_issues(&RepositoryId::new("acme", "widgets"), &SearchQuery::new("is:"))
        .await
        .expect_err("GraphQL errors must abort the search");

    let query_error = error
        .downcast_ref::<GraphQLQueryError>()
        .expect("error should be a GraphQLQueryError");
    assert!(query_error.to_string().contains("Invalid search query"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_http_failure_on_second_page_returns_error() {
    let mut server = mockito::Server::new_async().await;

    let first_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "cursor": null } })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_page(
            json!([{ "__typename": "Issue", "title": "A", "url": "u1", "labels": { "nodes": [] } }]),
            true,
            Some("c1"),
        ))
        .expect(1)
        .create_async()
        .await;

    let second_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "cursor": "c1" } })))
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/graphql"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let service = IssueSearchService::new(create_mock_github_client(server.url()));
    let result = service
        .search_all_issues(&RepositoryId::new("acme", "widgets"), &SearchQuery::new(""))
        .await;

    let error = result.expect_err("transport failure must propagate");
    assert!(error.downcast_ref::<octocrab::Error>().is_some());

    first_page.assert_async().await;
    second_page.assert_async().await;
}

/// Search a small public test repository end to end
#[tokio::test]
#[serial]
#[cfg(feature = "integration-tests")]
async fn test_search_all_issues_live() {
    let client = create_test_github_client();
    let repository_id = RepositoryId::new("tacogips", "gitcodes-mcp-test-1");

    let issues = IssueSearchService::new(client)
        .search_all_issues(&repository_id, &SearchQuery::new("is:issue"))
        .await
        .expect("Search should be successful");

    assert!(
        !issues.is_empty(),
        "Search should return at least one issue in the test repository"
    );

    for issue in &issues {
        assert!(!issue.title.is_empty(), "Issue title should not be empty");
        assert!(
            issue
                .url
                .starts_with("https://github.com/tacogips/gitcodes-mcp-test-1/issues/"),
            "Issue URL should point into the searched repository: {}",
            issue.url
        );
    }
}
