/// Output formatting utilities for JSON and Markdown representations
pub mod formatter;

/// GitHub GraphQL client and query documents
pub mod github;

/// Issue search service driving the paginated search to exhaustion
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
