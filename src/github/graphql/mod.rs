pub mod graphql_types;
pub mod search;
