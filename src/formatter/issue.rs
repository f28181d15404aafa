use anyhow::{Context, Result};

use crate::types::Issue;

use super::MarkdownContent;

/// Format a single issue as a markdown list item
pub fn issue_markdown_line(issue: &Issue) -> String {
    let mut line = format!("- [{}]({})", issue.title, issue.url);

    if !issue.labels.is_empty() {
        line.push_str(&format!(" labels: {}", issue.label_names().join(", ")));
    }

    line
}

/// Format the search results as a markdown list, one line per issue
pub fn issue_list_markdown(issues: &[Issue]) -> MarkdownContent {
    if issues.is_empty() {
        return MarkdownContent("No issues found\n".to_string());
    }

    let mut content = String::new();
    content.push_str(&format!("# ISSUES: {}\n", issues.len()));
    for issue in issues {
        content.push_str(&issue_markdown_line(issue));
        content.push('\n');
    }

    MarkdownContent(content)
}

pub fn issues_json(issues: &[Issue]) -> Result<String> {
    serde_json::to_string_pretty(issues).context("Failed to serialize issues to JSON")
}
