//! Inbound request envelope sent by the voice platform.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! payload is ignored by `serde`. Optional fields are read leniently: a value
//! of the wrong shape becomes `None` instead of rejecting the request.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::models::{PlatformContext, Request, RequestKind};
use crate::errors::SkillError;

pub const GET_ASTRONAUT_COUNT_INTENT: &str = "getAstronautCountIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub session: Option<Session>,
    #[serde(default, deserialize_with = "lenient")]
    pub context: Option<Context>,
    pub request: RequestBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default, deserialize_with = "lenient")]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(default, deserialize_with = "lenient")]
    pub api_endpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub intent: Option<Intent>,
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<PlatformError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformError {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}

impl RequestEnvelope {
    /// # Errors
    ///
    /// Returns `SkillError::Envelope` if the payload lacks the `request`
    /// block or its `type`/`requestId`.
    pub fn from_value(payload: &Value) -> Result<Self, SkillError> {
        Ok(Self::deserialize(payload)?)
    }

    #[must_use]
    pub fn kind(&self) -> RequestKind {
        let body = &self.request;
        match body.request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => match body.intent.as_ref().map(|i| i.name.as_str()) {
                Some(GET_ASTRONAUT_COUNT_INTENT) => RequestKind::GetCount,
                Some(HELP_INTENT) => RequestKind::Help,
                Some(CANCEL_INTENT | STOP_INTENT) => RequestKind::CancelStop,
                _ => RequestKind::Unrecognized,
            },
            "SessionEndedRequest" => RequestKind::SessionEnded {
                reason: body.reason.clone(),
                error: body.error.as_ref().map(PlatformError::describe),
            },
            _ => RequestKind::Unrecognized,
        }
    }

    #[must_use]
    pub fn platform_context(&self) -> PlatformContext {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .map(|system| PlatformContext {
                api_endpoint: system.api_endpoint.clone(),
                api_access_token: system.api_access_token.clone(),
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_request(self) -> Request {
        let kind = self.kind();
        let context = self.platform_context();
        Request::new(kind, self.request.request_id, context)
    }
}

impl PlatformError {
    fn describe(&self) -> String {
        match (&self.error_type, &self.message) {
            (Some(t), Some(m)) => format!("{t}: {m}"),
            (Some(t), None) => t.clone(),
            (None, Some(m)) => m.clone(),
            (None, None) => "unspecified".to_string(),
        }
    }
}

/// Deserialize an optional field, mapping a malformed value to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
