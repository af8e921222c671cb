use colored::Colorize;

use crate::context::AppContext;
use crate::domain::branch::{BranchCandidate, candidates_from_completion};
use crate::domain::prompt::suggestion_prompt;
use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};

/// Ticket key offered when the user is asked for one.
pub const SAMPLE_TICKET_KEY: &str = "MJ-1";

#[derive(Debug)]
pub struct SuggestionOutcome {
    pub ticket: Ticket,
    pub branch: BranchCandidate,
}

pub async fn suggest_branch_name(
    ctx: &AppContext,
    ticket_override: Option<String>,
) -> AppResult<SuggestionOutcome> {
    let key = match ticket_override {
        Some(key) => key.trim().to_string(),
        None => ctx.console.ask_ticket_key(SAMPLE_TICKET_KEY)?,
    };
    if key.is_empty() {
        return Err(AppError::InvalidInput(
            "ticket key must not be empty".to_string(),
        ));
    }

    let spinner = ctx.console.progress("Fetching Jira ticket…");
    let ticket = match ctx.issue_tracker.fetch_ticket(&key).await {
        Ok(ticket) => ticket,
        Err(err) => {
            spinner.fail("Failed to fetch Jira ticket");
            return Err(err);
        }
    };
    spinner.succeed(&format!(
        "Fetched Jira ticket {}",
        format!("{} {}", key, ticket.summary).green().italic()
    ));

    let prompt = suggestion_prompt(&ticket.summary);

    let spinner = ctx.console.progress("Asking for branch name suggestions…");
    let completion = match ctx.language_model.complete(&prompt).await {
        Ok(text) => text,
        Err(err) => {
            spinner.fail("Failed to get branch name suggestions");
            return Err(err);
        }
    };
    spinner.succeed("Received candidate branch names");

    let candidates = candidates_from_completion(&key, &completion)?;
    tracing::debug!(
        candidates = ?candidates.iter().map(BranchCandidate::as_str).collect::<Vec<_>>(),
        "parsed branch name suggestions"
    );

    let branch = ctx.console.choose_branch(candidates)?;
    tracing::debug!(branch = %branch, "branch name selected");

    Ok(SuggestionOutcome { ticket, branch })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::services::{Console, IssueTrackerService, LanguageModelService, Progress};

    struct FakeTracker {
        summary: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl IssueTrackerService for FakeTracker {
        async fn fetch_ticket(&self, key: &str) -> AppResult<Ticket> {
            self.requested.lock().unwrap().push(key.to_string());
            match &self.summary {
                Some(summary) => Ok(Ticket {
                    key: key.to_string(),
                    summary: summary.clone(),
                }),
                None => Err(AppError::Upstream("Jira responded with 404".to_string())),
            }
        }
    }

    struct FakeModel {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LanguageModelService for FakeModel {
        async fn complete(&self, prompt: &str) -> AppResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| AppError::EmptySuggestions)
        }
    }

    #[derive(Default)]
    struct ScriptedConsole {
        entered_key: String,
        pick: usize,
        events: Arc<Mutex<Vec<String>>>,
        offered: Mutex<Vec<String>>,
    }

    struct RecordedProgress {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Progress for RecordedProgress {
        fn succeed(self: Box<Self>, _message: &str) {
            self.events.lock().unwrap().push("succeed".to_string());
        }

        fn fail(self: Box<Self>, _message: &str) {
            self.events.lock().unwrap().push("fail".to_string());
        }
    }

    impl Console for ScriptedConsole {
        fn ask_ticket_key(&self, default: &str) -> AppResult<String> {
            self.events.lock().unwrap().push(format!("ask:{default}"));
            Ok(self.entered_key.clone())
        }

        fn choose_branch(&self, candidates: Vec<BranchCandidate>) -> AppResult<BranchCandidate> {
            self.events.lock().unwrap().push("choose".to_string());
            *self.offered.lock().unwrap() =
                candidates.iter().map(|c| c.value.clone()).collect();
            candidates
                .into_iter()
                .nth(self.pick)
                .ok_or(AppError::Cancelled)
        }

        fn progress(&self, message: &str) -> Box<dyn Progress> {
            self.events.lock().unwrap().push(format!("start:{message}"));
            Box::new(RecordedProgress {
                events: self.events.clone(),
            })
        }
    }

    struct Harness {
        tracker: Arc<FakeTracker>,
        model: Arc<FakeModel>,
        console: Arc<ScriptedConsole>,
    }

    impl Harness {
        fn new(summary: Option<&str>, reply: Result<&str, ()>) -> Self {
            Self {
                tracker: Arc::new(FakeTracker {
                    summary: summary.map(str::to_string),
                    requested: Mutex::new(Vec::new()),
                }),
                model: Arc::new(FakeModel {
                    reply: reply.map(str::to_string),
                    prompts: Mutex::new(Vec::new()),
                }),
                console: Arc::new(ScriptedConsole {
                    entered_key: "MJ-1".to_string(),
                    pick: 1,
                    ..ScriptedConsole::default()
                }),
            }
        }

        fn context(&self) -> AppContext {
            AppContext::new(
                self.tracker.clone(),
                self.model.clone(),
                self.console.clone(),
            )
        }

        fn events(&self) -> Vec<String> {
            self.console.events.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn walks_the_full_session() {
        let harness = Harness::new(
            Some("Fetch issue details via the Jira REST API"),
            Ok("fetch-jira-issue, get-issue-details,\nadd-jira-client"),
        );

        let outcome = suggest_branch_name(&harness.context(), None).await.unwrap();

        assert_eq!(outcome.ticket.key, "MJ-1");
        assert_eq!(outcome.branch.as_str(), "hotfix/MJ-1/get-issue-details");
        assert_eq!(
            *harness.console.offered.lock().unwrap(),
            vec![
                "hotfix/MJ-1/fetch-jira-issue",
                "hotfix/MJ-1/get-issue-details",
                "hotfix/MJ-1/add-jira-client",
            ]
        );
        assert_eq!(*harness.tracker.requested.lock().unwrap(), vec!["MJ-1"]);
        assert_eq!(
            harness.model.prompts.lock().unwrap()[0],
            suggestion_prompt("Fetch issue details via the Jira REST API")
        );
        assert_eq!(
            harness.events(),
            vec![
                "ask:MJ-1",
                "start:Fetching Jira ticket…",
                "succeed",
                "start:Asking for branch name suggestions…",
                "succeed",
                "choose",
            ]
        );
    }

    #[tokio::test]
    async fn ticket_override_skips_the_prompt() {
        let harness = Harness::new(Some("Fix login"), Ok("fix-login,login-fix"));

        let outcome = suggest_branch_name(&harness.context(), Some(" ABC-42 ".to_string()))
            .await
            .unwrap();

        assert_eq!(outcome.branch.as_str(), "hotfix/ABC-42/login-fix");
        assert_eq!(*harness.tracker.requested.lock().unwrap(), vec!["ABC-42"]);
        assert!(!harness.events().iter().any(|e| e.starts_with("ask:")));
    }

    #[tokio::test]
    async fn blank_ticket_override_fails_before_any_request() {
        let harness = Harness::new(Some("Fix login"), Ok("fix-login"));

        let err = suggest_branch_name(&harness.context(), Some("   ".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(harness.tracker.requested.lock().unwrap().is_empty());
        assert!(harness.events().is_empty());
    }

    #[tokio::test]
    async fn ticket_failure_stops_before_the_model() {
        let harness = Harness::new(None, Ok("unused"));

        let err = suggest_branch_name(&harness.context(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        assert!(harness.model.prompts.lock().unwrap().is_empty());
        assert_eq!(
            harness.events(),
            vec!["ask:MJ-1", "start:Fetching Jira ticket…", "fail"]
        );
    }

    #[tokio::test]
    async fn empty_completion_never_shows_the_selection() {
        let harness = Harness::new(Some("Fix login"), Ok("  "));

        let err = suggest_branch_name(&harness.context(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmptySuggestions));
        assert!(!harness.events().contains(&"choose".to_string()));
    }

    #[tokio::test]
    async fn missing_choices_never_shows_the_selection() {
        let harness = Harness::new(Some("Fix login"), Err(()));

        let err = suggest_branch_name(&harness.context(), None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to get choices");
        assert_eq!(harness.events().last().map(String::as_str), Some("fail"));
    }
}
