use serde::Serialize;

/// Target branch every pull request merges into.
pub const BASE_BRANCH: &str = "master";

/// Everything needed to open one pull request, built fresh per invocation.
#[derive(Debug, Clone)]
pub struct PullRequestRequest {
    /// Path fragment joined onto the API base (e.g., "owner/repo/pulls")
    pub repo_path: String,
    /// PR title
    pub title: String,
    /// Branch to merge from
    pub head: String,
    /// Credential sent as the basic-auth username
    pub token: String,
}

impl PullRequestRequest {
    pub fn payload(&self) -> NewPullRequest<'_> {
        NewPullRequest {
            title: &self.title,
            base: BASE_BRANCH,
            head: &self.head,
        }
    }
}

/// JSON body of the create call. Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct NewPullRequest<'a> {
    pub title: &'a str,
    pub base: &'a str,
    pub head: &'a str,
}

/// What the API answered, minus hard failures.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Response body of the created pull request, unvalidated.
    Created(serde_json::Value),
    /// The API rejected the request with 422, usually an existing PR for
    /// the same head and base.
    Duplicate,
}
