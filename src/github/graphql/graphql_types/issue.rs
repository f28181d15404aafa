use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::LabelsConnection;
use crate::types::{Issue, Label};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueNode {
    pub title: String,
    pub url: String,
    pub labels: Option<LabelsConnection>,
}

impl From<IssueNode> for Issue {
    fn from(issue_node: IssueNode) -> Self {
        let labels = issue_node
            .labels
            .map(|labels| {
                labels
                    .nodes
                    .into_iter()
                    .map(|label| Label::new(label.name))
                    .collect()
            })
            .unwrap_or_default();

        Issue {
            title: issue_node.title,
            url: issue_node.url,
            labels,
        }
    }
}
