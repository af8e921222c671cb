pub mod jira;
pub mod openai;
