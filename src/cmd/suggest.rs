use std::sync::Arc;

use clap::Args;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;
use crate::infra::openai::{DEFAULT_MODEL, OpenAiClient};
use crate::ui::{TerminalConsole, init_render_config};
use crate::workflow::suggest::{SuggestionOutcome, suggest_branch_name};

#[derive(Args, Debug, Clone, Default)]
pub struct SuggestArgs {
    /// Jira ticket key; prompts for one when omitted.
    pub ticket: Option<String>,
    /// Chat completion model used for suggestions.
    #[arg(long)]
    pub model: Option<String>,
}

pub async fn run(args: SuggestArgs) -> AppResult<SuggestionOutcome> {
    let config = AppConfig::load()?;

    let issue_tracker = Arc::new(JiraClient::new(
        config.jira_base_url(),
        config.jira_username.clone(),
        config.jira_password.clone(),
    )?);
    let language_model = Arc::new(OpenAiClient::new(
        config.openai_api_key.clone(),
        args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    ));
    init_render_config();
    let console = Arc::new(TerminalConsole);

    let context = AppContext::new(issue_tracker, language_model, console);
    suggest_branch_name(&context, args.ticket).await
}
