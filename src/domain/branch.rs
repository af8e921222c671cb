use std::fmt;

use crate::error::{AppError, AppResult};

/// Namespace every suggested branch is placed under.
pub const BRANCH_NAMESPACE: &str = "hotfix";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub display_name: String,
    pub value: String,
}

impl BranchCandidate {
    pub fn new(ticket_key: &str, suggestion: &str) -> Self {
        let cleaned = strip_newlines(suggestion);
        let name = format!(
            "{BRANCH_NAMESPACE}/{}/{}",
            ticket_key.trim(),
            cleaned.trim_start()
        );
        Self {
            display_name: name.clone(),
            value: name,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for BranchCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Splits a comma separated completion into selectable branch names.
///
/// Suggestions are not deduplicated or checked against git ref rules.
pub fn candidates_from_completion(
    ticket_key: &str,
    completion: &str,
) -> AppResult<Vec<BranchCandidate>> {
    if completion.trim().is_empty() {
        return Err(AppError::EmptySuggestions);
    }

    Ok(completion
        .split(',')
        .map(|suggestion| BranchCandidate::new(ticket_key, suggestion))
        .collect())
}

fn strip_newlines(input: &str) -> String {
    input.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
