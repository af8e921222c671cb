use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text, set_global_render_config};

use crate::domain::branch::BranchCandidate;
use crate::error::AppResult;
use crate::services::{Console, Progress};

/// Initialize the global render configuration for inquire prompts
pub fn init_render_config() {
    let mut style = RenderConfig::default_colored();
    style.prompt_prefix = Styled::new(">").with_fg(Color::LightGreen);
    set_global_render_config(style);
}

/// Console backed by inquire prompts and indicatif spinners.
#[derive(Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn ask_ticket_key(&self, default: &str) -> AppResult<String> {
        let key = Text::new("Jira ticket key:")
            .with_default(default)
            .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                if input.trim().is_empty() {
                    return Ok(Validation::Invalid("Ticket key is required".into()));
                }
                Ok(Validation::Valid)
            })
            .prompt()?;
        Ok(key.trim().to_string())
    }

    fn choose_branch(&self, candidates: Vec<BranchCandidate>) -> AppResult<BranchCandidate> {
        Ok(Select::new("Branch name:", candidates).prompt()?)
    }

    fn progress(&self, message: &str) -> Box<dyn Progress> {
        Box::new(Spinner::start(message))
    }
}

struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }
}

impl Progress for Spinner {
    fn succeed(self: Box<Self>, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {message}", "✔".green());
    }

    fn fail(self: Box<Self>, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {message}", "✖".red());
    }
}
