//! Progressive response flow for the astronaut count.
//!
//! The live count comes from a public API that can be slower than the voice
//! platform allows, so the flow:
//!
//! 1. starts the count fetch as a detached task writing into a [`slot`],
//! 2. hands a filler utterance to the side channel (bounded wait),
//! 3. sleeps a fixed delay,
//! 4. composes the answer from whatever the slot holds at that moment.
//!
//! The delay is a blind wait, not a join: a fetch that finishes late is
//! simply dropped. Racing the fetch against the timer and answering as soon
//! as it resolves would be a reasonable tightening, but answers must not go
//! out before the delay today.

pub mod composer;
pub mod fetcher;
pub mod notifier;
pub mod slot;

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::alexa::response::SpokenResponse;
use crate::clients::{CountSource, DirectiveSender};
use crate::core::config::AppConfig;
use crate::core::models::Request;

pub use notifier::FillerOutcome;
pub use slot::FetchSlot;

/// Runs the filler, fetch and delay gate for one launch or count request.
///
/// Cheap to clone; the side channel and the data source are shared behind
/// `Arc`s. The delay and hand-off bound are fixed when the responder is built.
#[derive(Clone)]
pub struct ProgressiveResponder {
    directives: Arc<dyn DirectiveSender>,
    counts: Arc<dyn CountSource>,
    delay: Duration,
    hand_off: Duration,
}

impl ProgressiveResponder {
    pub fn new(
        directives: Arc<dyn DirectiveSender>,
        counts: Arc<dyn CountSource>,
        config: &AppConfig,
    ) -> Self {
        Self {
            directives,
            counts,
            delay: config.progressive_delay,
            hand_off: config.directive_timeout,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Answer a count request. Always yields a reply, never before the delay.
    #[tracing::instrument(level = "info", skip(self, request), fields(request_id = %request.request_id))]
    pub async fn respond(&self, request: &Request) -> SpokenResponse {
        let (writer, reader) = FetchSlot::open();
        fetcher::spawn_fetch(
            Arc::clone(&self.counts),
            writer,
            request.request_id.clone(),
        );

        let filler = notifier::send_filler(Arc::clone(&self.directives), request, self.hand_off).await;
        info!(?filler, "Filler speech hand-off finished");

        composer::compose_or_fallback(&request.request_id, async {
            tokio::time::sleep(self.delay).await;
            let result = reader.take();
            info!(count = ?result.count, "Composing astronaut count response");
            composer::compose_answer(result)
        })
        .await
    }
}
