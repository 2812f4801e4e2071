#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use space_control::SkillError;
use space_control::clients::{CountSource, DirectiveSender};
use space_control::core::config::AppConfig;
use space_control::core::models::{FillerNotification, PlatformContext, Request, RequestKind};

pub const ENDPOINT: &str = "https://api.amazonalexa.com";
pub const TOKEN: &str = "test-access-token";

/// Records every filler hand-off; optionally slow or failing.
pub struct RecordingSender {
    pub sent: Mutex<Vec<FillerNotification>>,
    latency: Duration,
    fail: bool,
}

impl RecordingSender {
    pub fn ok() -> Self {
        Self::new(Duration::from_millis(50), false)
    }

    pub fn failing() -> Self {
        Self::new(Duration::from_millis(50), true)
    }

    pub fn hanging() -> Self {
        Self::new(Duration::from_secs(60), false)
    }

    pub fn new(latency: Duration, fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            latency,
            fail,
        }
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DirectiveSender for RecordingSender {
    async fn enqueue(&self, notification: &FillerNotification) -> Result<(), SkillError> {
        self.sent.lock().unwrap().push(notification.clone());
        tokio::time::sleep(self.latency).await;
        if self.fail {
            return Err(SkillError::Http("connection reset by peer".to_string()));
        }
        Ok(())
    }
}

/// Serves scripted counts, one per call; `None` means the call fails.
pub struct ScriptedCounts {
    script: Mutex<VecDeque<(Duration, Option<u32>)>>,
    calls: AtomicUsize,
}

impl ScriptedCounts {
    pub fn new(script: Vec<(Duration, Option<u32>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fast(count: u32) -> Self {
        Self::new(vec![(Duration::from_millis(100), Some(count))])
    }

    pub fn slow(count: u32) -> Self {
        Self::new(vec![(Duration::from_secs(10), Some(count))])
    }

    pub fn failing() -> Self {
        Self::new(vec![(Duration::from_millis(100), None)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountSource for ScriptedCounts {
    async fn fetch_count(&self) -> Result<u32, SkillError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.lock().unwrap().pop_front();
        let (latency, outcome) = step.unwrap_or((Duration::ZERO, None));
        tokio::time::sleep(latency).await;
        outcome.ok_or_else(|| SkillError::Fetch("service unavailable".to_string()))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::default()
}

pub fn platform_context() -> PlatformContext {
    PlatformContext {
        api_endpoint: Some(ENDPOINT.to_string()),
        api_access_token: Some(TOKEN.to_string()),
    }
}

pub fn request(kind: RequestKind) -> Request {
    Request::new(
        kind,
        format!("amzn1.echo-api.request.{}", uuid::Uuid::new_v4()),
        platform_context(),
    )
}

pub fn launch_envelope() -> Value {
    envelope(json!({
        "type": "LaunchRequest",
        "requestId": "amzn1.echo-api.request.launch",
        "timestamp": "2026-10-17T10:00:00Z",
        "locale": "en-US"
    }))
}

pub fn intent_envelope(intent: &str) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.intent",
        "timestamp": "2026-10-17T10:00:00Z",
        "locale": "en-US",
        "intent": { "name": intent, "confirmationStatus": "NONE" }
    }))
}

pub fn envelope(request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": "amzn1.ask.skill.1" }
        },
        "context": {
            "System": {
                "apiEndpoint": ENDPOINT,
                "apiAccessToken": TOKEN,
                "device": { "deviceId": "device-1" }
            }
        },
        "request": request
    })
}
