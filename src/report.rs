use crate::pr::CreateOutcome;
use tracing::{debug, instrument};

/// Exact line printed when the API reports the pull request as a duplicate.
pub const DUPLICATE_NOTICE: &str = "duplicate pull request";

/// Render an outcome the way it is shown on stdout.
///
/// `serde_json`'s pretty printer indents with two spaces.
pub fn render(outcome: &CreateOutcome) -> Result<String, serde_json::Error> {
    match outcome {
        CreateOutcome::Created(body) => serde_json::to_string_pretty(body),
        CreateOutcome::Duplicate => Ok(DUPLICATE_NOTICE.to_string()),
    }
}

#[instrument(skip(outcome))]
pub fn print(outcome: &CreateOutcome) -> Result<(), serde_json::Error> {
    let text = render(outcome)?;
    debug!(bytes = text.len(), "writing outcome to stdout");
    println!("{}", text);
    Ok(())
}
