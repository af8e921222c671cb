pub mod console;
pub mod issue_tracker;
pub mod language_model;

pub use console::{Console, Progress};
pub use issue_tracker::IssueTrackerService;
pub use language_model::LanguageModelService;
