//! Issue domain type
//!
//! Issues are built only from search responses and carry the three fields the
//! search query selects: title, URL and label names.

use serde::{Deserialize, Serialize};

use super::label::Label;

/// A GitHub issue as returned by the search connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub url: String,
    /// Label names in the order GitHub returned them
    pub labels: Vec<Label>,
}

impl Issue {
    pub fn new<T: Into<String>, U: Into<String>>(title: T, url: U, labels: Vec<Label>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            labels,
        }
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(Label::name).collect()
    }
}
