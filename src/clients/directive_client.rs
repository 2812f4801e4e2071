//! Progressive response (directive service) client
//!
//! Pushes a single `VoicePlayer.Speak` directive to the platform while the
//! real answer is still being prepared.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use super::HTTP_CLIENT;
use crate::core::models::FillerNotification;
use crate::errors::SkillError;

pub const DIRECTIVES_PATH: &str = "v1/directives";
pub const SPEAK_DIRECTIVE_TYPE: &str = "VoicePlayer.Speak";
pub const FILLER_SPEECH: &str =
    "Space is a bit far way. Wait till I get back the information from ISS.";

/// Side channel able to deliver a filler notification.
#[async_trait]
pub trait DirectiveSender: Send + Sync {
    async fn enqueue(&self, notification: &FillerNotification) -> Result<(), SkillError>;
}

pub struct DirectiveClient {
    http: Client,
}

impl Default for DirectiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveClient {
    pub fn new() -> Self {
        Self {
            http: HTTP_CLIENT.clone(),
        }
    }

    pub fn with_http_client(http: Client) -> Self {
        Self { http }
    }
}

/// Resolve the directives URL under the platform-supplied API endpoint.
///
/// # Errors
///
/// Returns an error if the endpoint is not an absolute URL.
pub fn directives_url(api_endpoint: &str) -> Result<Url, SkillError> {
    let mut base = Url::parse(api_endpoint)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(DIRECTIVES_PATH)?)
}

#[must_use]
pub fn directive_body(notification: &FillerNotification) -> Value {
    json!({
        "header": { "requestId": notification.request_id },
        "directive": {
            "type": SPEAK_DIRECTIVE_TYPE,
            "speech": notification.speech
        }
    })
}

#[async_trait]
impl DirectiveSender for DirectiveClient {
    async fn enqueue(&self, notification: &FillerNotification) -> Result<(), SkillError> {
        let url = directives_url(notification.endpoint.as_str())?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", notification.access_token))
            .map_err(|e| SkillError::Directive(format!("invalid access token: {e}")))?;

        let resp = self
            .http
            .post(url)
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&directive_body(notification))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(SkillError::Directive(format!(
                "status={status} body={body_text}"
            )));
        }

        debug!(request_id = %notification.request_id, %status, "Directive accepted");
        Ok(())
    }
}
