const SUMMARY_PLACEHOLDER: &str = "__ISSUE_SUMMARY__";

const PROMPT_TEMPLATE: [&str; 9] = [
    "Please suggest 5 possible English branch names on github for the following Jira ticket name.",
    "Branch names must be output as comma-separated text.",
    "Do not output any text other than the branch name.",
    "Branch names do not need to be prefixed with feature, bugfix, etc.",
    "Branch names are all lowercase.",
    "branch names are in English.",
    SUMMARY_PLACEHOLDER,
    "",
    "#Output",
];

/// Fills the branch suggestion template with a ticket summary, quoted.
pub fn suggestion_prompt(summary: &str) -> String {
    PROMPT_TEMPLATE
        .iter()
        .map(|line| {
            if *line == SUMMARY_PLACEHOLDER {
                format!("'{summary}'")
            } else {
                (*line).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
