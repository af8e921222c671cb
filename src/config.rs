use std::env;

use crate::error::{AppError, AppResult};

pub const JIRA_USERNAME: &str = "JIRA_USERNAME";
pub const JIRA_PASSWORD: &str = "JIRA_PASSWORD";
pub const JIRA_HOST: &str = "JIRA_HOST";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Required variables, in the order they are checked.
pub const REQUIRED_VARIABLES: [&str; 4] = [JIRA_USERNAME, JIRA_PASSWORD, JIRA_HOST, OPENAI_API_KEY];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_host: String,
    pub jira_username: String,
    pub jira_password: String,
    pub openai_api_key: String,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        load_dotenv();
        Self::from_env()
    }

    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| -> AppResult<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(AppError::MissingVariable(key))
        };

        let jira_username = read(JIRA_USERNAME)?;
        let jira_password = read(JIRA_PASSWORD)?;
        let jira_host = read(JIRA_HOST)?;
        let openai_api_key = read(OPENAI_API_KEY)?;

        Ok(Self {
            jira_host,
            jira_username,
            jira_password,
            openai_api_key,
        })
    }

    /// Base URL for the Jira REST API. Always https, whatever scheme the host was given with.
    pub fn jira_base_url(&self) -> String {
        let host = self.jira_host.trim();
        let host = host
            .strip_prefix("https://")
            .or_else(|| host.strip_prefix("http://"))
            .unwrap_or(host)
            .trim_end_matches('/');
        format!("https://{host}")
    }
}

/// Loads `.env` from the working directory into the process environment when present.
/// Variables already set are not overridden.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("ignoring unreadable .env file: {err}"),
    }
}

/// Every required variable that is unset or empty, in check order.
pub fn missing_variables<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARIABLES
        .iter()
        .copied()
        .filter(|&key| lookup(key).is_none_or(|value| value.is_empty()))
        .collect()
}
