use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Sends `prompt` as a single user message and returns the first choice's text.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
