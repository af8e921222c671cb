use std::env;

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::{
    JIRA_PASSWORD, OPENAI_API_KEY, REQUIRED_VARIABLES, load_dotenv, missing_variables,
};
use crate::error::{AppError, AppResult};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Check the required environment variables (secrets masked).
    Check,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Check => run_check(),
    }
}

fn run_check() -> AppResult<()> {
    load_dotenv();

    let lookup = |key: &str| env::var(key).ok();
    for key in REQUIRED_VARIABLES {
        println!("{key}: {}", display_variable(key, lookup(key)));
    }

    let missing = missing_variables(lookup);
    match missing.first() {
        None => {
            println!("\n{}", "All required variables are set.".green());
            Ok(())
        }
        Some(first) => {
            println!("\nMissing: {}", missing.join(", ").red());
            Err(AppError::MissingVariable(*first))
        }
    }
}

fn display_variable(key: &str, value: Option<String>) -> String {
    match key {
        JIRA_PASSWORD | OPENAI_API_KEY => mask_secret(&value),
        _ => display_value(&value),
    }
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars = token.chars().collect::<Vec<_>>();
            let prefix = chars[..3].iter().collect::<String>();
            let suffix = chars[chars.len() - 3..].iter().collect::<String>();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
