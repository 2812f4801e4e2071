//! Request dispatch: one arm per request kind.

use std::sync::Arc;
use tracing::{info, warn};

use crate::alexa::response::SpokenResponse;
use crate::clients::{AstrosClient, CountSource, DirectiveClient, DirectiveSender};
use crate::core::config::AppConfig;
use crate::core::models::{Request, RequestKind};
use crate::progressive::ProgressiveResponder;

#[derive(Clone)]
pub struct Skill {
    responder: ProgressiveResponder,
}

impl Skill {
    pub fn new(
        config: &AppConfig,
        directives: Arc<dyn DirectiveSender>,
        counts: Arc<dyn CountSource>,
    ) -> Self {
        Self {
            responder: ProgressiveResponder::new(directives, counts, config),
        }
    }

    /// Wire the skill to the live side channel and astros API.
    pub fn from_config(config: &AppConfig) -> Self {
        let counts = AstrosClient::new(config.astros_api_url.clone(), config.fetch_timeout);
        Self::new(config, Arc::new(DirectiveClient::new()), Arc::new(counts))
    }

    pub async fn handle(&self, request: &Request) -> SpokenResponse {
        info!(
            request_id = %request.request_id,
            kind = request.kind.label(),
            "Dispatching request"
        );

        match &request.kind {
            RequestKind::Launch | RequestKind::GetCount => self.responder.respond(request).await,
            RequestKind::Help => SpokenResponse::help(),
            RequestKind::CancelStop => SpokenResponse::goodbye(),
            RequestKind::SessionEnded { reason, error } => {
                info!(
                    request_id = %request.request_id,
                    "Session ended with reason: {}",
                    reason.as_deref().unwrap_or("unknown")
                );
                if let Some(error) = error {
                    warn!(request_id = %request.request_id, "Session ended with error: {}", error);
                }
                SpokenResponse::silent()
            }
            RequestKind::Unrecognized => {
                warn!(request_id = %request.request_id, "Unrecognized request, asking again");
                SpokenResponse::misunderstood()
            }
        }
    }
}
