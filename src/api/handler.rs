//! Lambda handler - thin adapter between the platform envelope and the skill.
//!
//! This module handles:
//! - Config loading (the only failure surfaced as a Lambda error)
//! - Envelope parsing, with unparsable payloads answered as misunderstood
//! - Dispatch to [`Skill`] and rendering of the reply

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::alexa::envelope::RequestEnvelope;
use crate::alexa::response::SpokenResponse;
use crate::core::config::AppConfig;
use crate::router::Skill;

pub use self::function_handler as handler;

/// Lambda handler for the skill endpoint.
///
/// # Errors
///
/// Returns an error only when the function's configuration is invalid;
/// every request-level problem is answered with a spoken reply.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let skill = Skill::from_config(&config);
    Ok(handle_payload(&skill, &event.payload).await)
}

/// Parse, dispatch and render a single envelope.
pub async fn handle_payload(skill: &Skill, payload: &Value) -> Value {
    let envelope = match RequestEnvelope::from_value(payload) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Error handled: {}", e);
            // Only the request block; the context carries the access token.
            let original = payload
                .get("request")
                .and_then(|r| serde_json::to_string_pretty(r).ok())
                .unwrap_or_else(|| "<missing>".to_string());
            error!("Original Request was: {}", original);
            return SpokenResponse::misunderstood().to_envelope();
        }
    };

    // A missing or malformed timestamp only drops the age from the log line.
    let age_ms = envelope
        .request
        .timestamp
        .map(|ts| (chrono::Utc::now() - ts).num_milliseconds());
    info!(
        request_id = %envelope.request.request_id,
        request_type = %envelope.request.request_type,
        age_ms = ?age_ms,
        "Skill received request"
    );

    let request = envelope.into_request();
    skill.handle(&request).await.to_envelope()
}
