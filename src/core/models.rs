use url::Url;

/// What the caller asked for, reduced from the platform envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Launch,
    GetCount,
    Help,
    CancelStop,
    SessionEnded {
        reason: Option<String>,
        error: Option<String>,
    },
    Unrecognized,
}

impl RequestKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::Launch => "launch",
            RequestKind::GetCount => "get_count",
            RequestKind::Help => "help",
            RequestKind::CancelStop => "cancel_stop",
            RequestKind::SessionEnded { .. } => "session_ended",
            RequestKind::Unrecognized => "unrecognized",
        }
    }
}

/// Credentials for the per-request side channel, as supplied by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformContext {
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: RequestKind,
    pub request_id: String,
    pub context: PlatformContext,
}

impl Request {
    pub fn new(kind: RequestKind, request_id: impl Into<String>, context: PlatformContext) -> Self {
        Self {
            kind,
            request_id: request_id.into(),
            context,
        }
    }
}

/// One-shot filler speech pushed through the side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerNotification {
    pub request_id: String,
    pub speech: String,
    pub endpoint: Url,
    pub access_token: String,
}

/// What the detached fetch managed to deliver before the delay gate elapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchResult {
    pub count: Option<u32>,
}
