use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::error;

use crate::alexa::response::SpokenResponse;
use crate::core::models::FetchResult;
use crate::errors::SkillError;

/// Rendered in place of the count when the fetch had nothing to offer.
pub const MISSING_COUNT_PLACEHOLDER: &str = "undefined";

/// The count answer, with [`MISSING_COUNT_PLACEHOLDER`] standing in for a
/// count that never arrived.
///
/// ```
/// use space_control::core::models::FetchResult;
/// use space_control::progressive::composer::count_sentence;
///
/// let sentence = count_sentence(FetchResult { count: None });
/// assert_eq!(sentence, "There are currently undefined astronauts in space.");
/// ```
#[must_use]
pub fn count_sentence(result: FetchResult) -> String {
    let value = result
        .count
        .map_or_else(|| MISSING_COUNT_PLACEHOLDER.to_string(), |n| n.to_string());
    format!("There are currently {value} astronauts in space.")
}

/// # Errors
///
/// Returns `SkillError::Composition` if the rendered speech is rejected.
pub fn compose_answer(result: FetchResult) -> Result<SpokenResponse, SkillError> {
    SpokenResponse::speak(count_sentence(result))
}

/// Run a composition stage and turn any error or panic into the generic
/// spoken error.
pub async fn compose_or_fallback<F>(request_id: &str, stage: F) -> SpokenResponse
where
    F: Future<Output = Result<SpokenResponse, SkillError>>,
{
    let outcome = AssertUnwindSafe(stage)
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(panic_error(&*payload).into()));

    match outcome {
        Ok(response) => response,
        Err(e) => {
            error!(request_id = %request_id, "Error processing astronaut count request: {}", e);
            SpokenResponse::generic_error()
        }
    }
}

fn panic_error(payload: &(dyn std::any::Any + Send)) -> anyhow::Error {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    anyhow::anyhow!("composition panicked: {message}")
}
