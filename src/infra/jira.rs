use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, Url,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl JiraClient {
    /// Client that refuses any request not made over https.
    pub fn new(base_url: String, username: String, password: String) -> AppResult<Self> {
        let http = Client::builder()
            .https_only(true)
            .build()
            .map_err(|err| AppError::Upstream(format!("failed to build Jira client: {err}")))?;
        Ok(Self {
            http,
            base_url,
            username,
            password,
        })
    }

    /// Plain http client for mock servers.
    #[cfg(test)]
    pub(crate) fn from_host_root(base_url: String, username: String, password: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            username,
            password,
        }
    }

    fn auth_header(username: &str, password: &str) -> String {
        let credentials = format!("{username}:{password}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    /// The key is appended as a single percent-encoded path segment.
    fn issue_endpoint(base_url: &str, key: &str) -> AppResult<Url> {
        let mut url = Url::parse(base_url)
            .map_err(|err| AppError::Upstream(format!("invalid Jira URL {base_url}: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Upstream(format!("invalid Jira URL {base_url}")))?
            .pop_if_empty()
            .extend(["rest", "api", "3", "issue", key]);
        Ok(url)
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_ticket(&self, key: &str) -> AppResult<Ticket> {
        let key = key.trim();
        if key.is_empty() || key == "." || key == ".." {
            return Err(AppError::InvalidInput(
                format!("invalid ticket key '{key}'"),
            ));
        }

        let url = Self::issue_endpoint(&self.base_url, key)?;
        tracing::debug!(%url, "fetching Jira issue");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, Self::auth_header(&self.username, &self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Upstream(format!(
                "Jira responded with {status}: {body}"
            )));
        }

        let payload: JiraIssueResponse = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("failed to parse Jira response: {err}")))?;

        Ok(Ticket {
            key: payload.key.unwrap_or_else(|| key.to_string()),
            summary: payload.fields.summary,
        })
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    key: Option<String>,
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    summary: String,
}
