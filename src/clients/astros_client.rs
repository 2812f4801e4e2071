use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::HTTP_CLIENT;
use crate::errors::SkillError;

/// Source of the live count of people in space.
#[async_trait]
pub trait CountSource: Send + Sync {
    async fn fetch_count(&self) -> Result<u32, SkillError>;
}

#[derive(Debug, Deserialize)]
struct AstrosResponse {
    number: Option<serde_json::Value>,
}

pub struct AstrosClient {
    http: Client,
    url: String,
    timeout: Duration,
}

impl AstrosClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_http_client(HTTP_CLIENT.clone(), url, timeout)
    }

    pub fn with_http_client(http: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http,
            url: url.into(),
            timeout,
        }
    }
}

/// Pull the `number` field out of an astros payload.
///
/// # Errors
///
/// Returns `SkillError::Fetch` if the body is not JSON or `number` is
/// missing, negative, or not an integer.
pub fn parse_count(body: &str) -> Result<u32, SkillError> {
    let parsed: AstrosResponse = serde_json::from_str(body)
        .map_err(|e| SkillError::Fetch(format!("malformed payload: {e}")))?;

    let number = parsed
        .number
        .ok_or_else(|| SkillError::Fetch("payload has no `number` field".to_string()))?;

    number
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SkillError::Fetch(format!("`number` is not a count: {number}")))
}

#[async_trait]
impl CountSource for AstrosClient {
    async fn fetch_count(&self) -> Result<u32, SkillError> {
        let resp = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SkillError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SkillError::Fetch(format!("status={status}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SkillError::Fetch(e.to_string()))?;
        parse_count(&body)
    }
}
