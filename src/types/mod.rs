//! Core type system and domain definitions
//!
//! Strongly typed wrappers for the repository scope, the search predicate and
//! the issues returned by GitHub.

pub mod issue;
pub mod label;
pub mod repository;
pub mod search;

pub use issue::*;
pub use label::Label;
pub use repository::*;
pub use search::*;
