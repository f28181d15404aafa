use crate::github::error::GraphQLQueryError;
use crate::github::graphql::graphql_types::{GraphQLPayload, GraphQLResponse};

use anyhow::{Context, Result};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::{debug, info};

/// Executes a GraphQL document against GitHub.
///
/// `GitHubClient` is the production implementation; the search service is
/// generic over this trait so pagination can be driven by any executor.
pub trait GraphQLExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>>;
}

#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::with_base_uri(token, timeout, None)
    }

    /// Builds a client against a non-default API root, such as a GitHub
    /// Enterprise Server instance.
    pub fn with_base_uri(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: Option<String>,
    ) -> Result<Self> {
        // Failed requests surface to the caller as-is
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        if let Some(base_uri) = base_uri {
            builder = builder
                .base_uri(base_uri.as_str())
                .with_context(|| format!("Invalid GitHub API base URI: {}", base_uri))?;
        }

        let timeout_duration = timeout.unwrap_or_else(|| Duration::from_secs(10));
        let connection_timeout = if timeout_duration < Duration::from_secs(10) {
            std::cmp::max(timeout_duration, Duration::from_secs(1))
        } else {
            Duration::from_secs(30)
        };

        let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

        builder = builder
            .set_connect_timeout(Some(connection_timeout))
            .set_read_timeout(Some(read_write_timeout))
            .set_write_timeout(Some(read_write_timeout));

        let client = builder.build().context("Failed to build GitHub client")?;

        Ok(Self { client })
    }
}

impl GraphQLExecutor for GitHubClient {
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>> {
        debug!(
            "Starting GraphQL request {} with variables: {}",
            query_name,
            serde_json::to_string(&payload.variables).unwrap_or_else(|_| "Invalid JSON".to_string())
        );

        let start_time = std::time::Instant::now();

        let response: GraphQLResponse<R> = self.client.graphql(&payload).await?;

        info!(
            "GraphQL request {} completed in {:?}",
            query_name,
            start_time.elapsed()
        );

        if let Some(errors) = &response.errors {
            if !errors.is_empty() {
                return Err(GraphQLQueryError::from_errors(query_name, errors).into());
            }
        }

        Ok(response)
    }
}
