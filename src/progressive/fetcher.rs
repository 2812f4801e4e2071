use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::slot::SlotWriter;
use crate::clients::CountSource;

/// Start the count fetch as a detached task.
///
/// On success the count lands in `slot`; on failure the slot stays empty.
/// The handle is only returned for tests; the flow never joins it.
pub fn spawn_fetch(
    source: Arc<dyn CountSource>,
    slot: SlotWriter,
    request_id: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match source.fetch_count().await {
            Ok(count) => {
                if slot.fill(count) {
                    info!(request_id = %request_id, count, "Astronaut count fetched");
                } else {
                    warn!(
                        request_id = %request_id,
                        count,
                        "Astronaut count arrived after the response was composed"
                    );
                }
            }
            Err(e) => {
                warn!(request_id = %request_id, "Astronaut count unavailable: {}", e);
            }
        }
    })
}
