pub mod types;

pub use types::{CreateOutcome, PullRequestRequest};

use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum PrError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("GitHub token not found: pass it as the 4th argument or set GITHUB_TOKEN")]
    MissingToken,
}

/// Resolve the create endpoint by joining `repo_path` onto `api_base`.
///
/// Uses URL reference resolution, so `owner/repo/pulls` lands under the
/// base path while a fragment with a leading `/` replaces it.
pub fn endpoint_url(api_base: &str, repo_path: &str) -> Result<Url, PrError> {
    let base = Url::parse(api_base).map_err(|_| PrError::InvalidUrl(api_base.to_string()))?;
    base.join(repo_path)
        .map_err(|_| PrError::InvalidUrl(format!("{}{}", api_base, repo_path)))
}

/// Open a pull request from `request.head` into master with a single POST.
///
/// A 422 answer comes back as `CreateOutcome::Duplicate` without looking at
/// the body. The API also uses 422 for other validation failures (unknown
/// branch, nothing to merge), which are reported the same way.
#[instrument(skip(request, config), fields(repo_path = %request.repo_path, head = %request.head))]
pub async fn create_pull_request(
    request: &PullRequestRequest,
    config: &Config,
) -> Result<CreateOutcome, PrError> {
    let url = endpoint_url(config.api_url(), &request.repo_path)?;
    debug!(%url, "resolved endpoint");

    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .header("User-Agent", config.user_agent())
        .header("Accept", "application/vnd.github+json")
        .basic_auth(&request.token, Some(""))
        .json(&request.payload())
        .send()
        .await?;

    let status = response.status();
    debug!(status = status.as_u16(), "received response");

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        warn!("API answered 422, treating as duplicate pull request");
        return Ok(CreateOutcome::Duplicate);
    }

    let body = response
        .error_for_status()?
        .json::<serde_json::Value>()
        .await?;
    Ok(CreateOutcome::Created(body))
}

#[cfg(test)]
#[path = "../../tests/common/mod.rs"]
mod test_server;
