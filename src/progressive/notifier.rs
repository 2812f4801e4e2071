use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

use crate::clients::DirectiveSender;
use crate::clients::directive_client::FILLER_SPEECH;
use crate::core::models::{FillerNotification, Request};

/// Outcome of handing the filler speech to the side channel.
///
/// Informational only; the flow continues the same way in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillerOutcome {
    Sent,
    Failed,
    /// Still in flight when the hand-off window closed.
    Detached,
    Skipped,
}

/// Build the filler notification from the request's platform context.
///
/// Returns `None` when the platform did not supply a usable endpoint and
/// token.
#[must_use]
pub fn build_filler(request: &Request) -> Option<FillerNotification> {
    let endpoint = request.context.api_endpoint.as_deref()?;
    let token = request.context.api_access_token.as_deref()?;
    if token.is_empty() {
        return None;
    }
    let endpoint = Url::parse(endpoint).ok()?;

    Some(FillerNotification {
        request_id: request.request_id.clone(),
        speech: FILLER_SPEECH.to_string(),
        endpoint,
        access_token: token.to_string(),
    })
}

/// Submit the filler speech, waiting at most `hand_off` for the call.
///
/// The send runs on its own task so a slow side channel keeps going in the
/// background once the window closes. Failures are logged, never returned.
pub async fn send_filler(
    sender: Arc<dyn DirectiveSender>,
    request: &Request,
    hand_off: Duration,
) -> FillerOutcome {
    let Some(notification) = build_filler(request) else {
        warn!(
            request_id = %request.request_id,
            "No API endpoint/token on request, skipping progressive response"
        );
        return FillerOutcome::Skipped;
    };

    let handle = tokio::spawn(async move {
        match sender.enqueue(&notification).await {
            Ok(()) => {
                info!(request_id = %notification.request_id, "Progressive response sent");
                true
            }
            Err(e) => {
                error!(
                    request_id = %notification.request_id,
                    "Progressive response failed: {}", e
                );
                false
            }
        }
    });

    match tokio::time::timeout(hand_off, handle).await {
        Ok(Ok(true)) => FillerOutcome::Sent,
        Ok(Ok(false)) => FillerOutcome::Failed,
        Ok(Err(e)) => {
            error!(request_id = %request.request_id, "Progressive response task aborted: {}", e);
            FillerOutcome::Failed
        }
        Err(_) => {
            warn!(
                request_id = %request.request_id,
                "Progressive response still pending after {}ms, continuing",
                hand_off.as_millis()
            );
            FillerOutcome::Detached
        }
    }
}
