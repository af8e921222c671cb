use async_trait::async_trait;

use crate::domain::ticket::Ticket;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_ticket(&self, key: &str) -> AppResult<Ticket>;
}
