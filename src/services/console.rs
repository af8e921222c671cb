use crate::domain::branch::BranchCandidate;
use crate::error::AppResult;

/// Blocking terminal interaction used by the suggestion session.
pub trait Console: Send + Sync {
    fn ask_ticket_key(&self, default: &str) -> AppResult<String>;
    fn choose_branch(&self, candidates: Vec<BranchCandidate>) -> AppResult<BranchCandidate>;
    fn progress(&self, message: &str) -> Box<dyn Progress>;
}

/// A running progress indicator.
pub trait Progress {
    fn succeed(self: Box<Self>, message: &str);
    fn fail(self: Box<Self>, message: &str);
}
