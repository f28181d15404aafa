use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use issue_search::formatter::{issue_list_markdown, issues_json};
use issue_search::github::GitHubClient;
use issue_search::services::IssueSearchService;
use issue_search::types::{RepositoryId, SearchQuery};

#[derive(Parser)]
#[command(name = "issue-search-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Fetch every issue in a GitHub repository that matches a search query, following pagination to the end"
)]
struct Cli {
    /// Search predicate in GitHub search syntax (e.g. "is:open label:bug"). The repository qualifier is added automatically; an empty query matches every issue
    #[arg(default_value = "")]
    query: String,
    /// Repository to search in owner/repo form or as a GitHub URL (defaults to the GITHUB_REPOSITORY environment variable)
    #[arg(short, long)]
    repository: Option<String>,
    /// GitHub token for API access (can also be set via GITHUB_TOKEN or ISSUE_SEARCH_GITHUB_TOKEN environment variables)
    #[arg(long)]
    github_token: Option<String>,
    /// Output format for results - markdown provides formatted display, json for programmatic use
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Request timeout in seconds for GitHub API calls (default: 10 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
    /// GitHub API base URL, for GitHub Enterprise Server (defaults to GITHUB_API_URL when set)
    #[arg(long)]
    api_url: Option<String>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("issue_search=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let github_token = cli
        .github_token
        .or_else(|| env::var("GITHUB_TOKEN").ok())
        .or_else(|| env::var("ISSUE_SEARCH_GITHUB_TOKEN").ok())
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "GitHub token is required: pass --github-token or set GITHUB_TOKEN"
            )
        })?;

    let repository = cli
        .repository
        .or_else(|| env::var("GITHUB_REPOSITORY").ok())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Repository is required: pass --repository or set GITHUB_REPOSITORY"
            )
        })?;
    let repository_id = RepositoryId::parse(&repository).map_err(|e| anyhow::anyhow!(e))?;

    let api_url = cli
        .api_url
        .or_else(|| env::var("GITHUB_API_URL").ok())
        .filter(|url| !url.trim().is_empty());

    let client = GitHubClient::with_base_uri(
        Some(github_token),
        cli.request_timeout.map(Duration::from_secs),
        api_url,
    )?;

    let issues = IssueSearchService::new(client)
        .search_all_issues(&repository_id, &SearchQuery::new(cli.query))
        .await?;

    match cli.format {
        OutputFormat::Json => println!("{}", issues_json(&issues)?),
        OutputFormat::Markdown => print!("{}", issue_list_markdown(&issues)),
    }

    Ok(())
}
