use std::sync::Arc;

use crate::services::{Console, IssueTrackerService, LanguageModelService};

#[derive(Clone)]
pub struct AppContext {
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub console: Arc<dyn Console>,
}

impl AppContext {
    pub fn new(
        issue_tracker: Arc<dyn IssueTrackerService>,
        language_model: Arc<dyn LanguageModelService>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            issue_tracker,
            language_model,
            console,
        }
    }
}
