use crate::github::graphql::graphql_types::GraphQLError;

/// Errors reported by GitHub inside an otherwise successful GraphQL response
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQLQueryError {
    /// The `errors` array of the response was non-empty
    Rejected {
        query_name: String,
        messages: Vec<String>,
    },
}

impl GraphQLQueryError {
    pub fn from_errors(query_name: &str, errors: &[GraphQLError]) -> Self {
        Self::Rejected {
            query_name: query_name.to_string(),
            messages: errors.iter().map(|e| e.message.clone()).collect(),
        }
    }
}

impl std::fmt::Display for GraphQLQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected {
                query_name,
                messages,
            } => write!(
                f,
                "GraphQL query {} failed: {}",
                query_name,
                messages.join(", ")
            ),
        }
    }
}

impl std::error::Error for GraphQLQueryError {}
