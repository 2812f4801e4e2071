//! Single-writer, single-reader cell bridging the detached fetch and the
//! delayed composition.
//!
//! Both halves are consumed on use, so a slot is filled at most once and
//! read at most once. Reading never waits: whatever is there when the delay
//! gate fires is what the composer gets.

use tokio::sync::oneshot;

use crate::core::models::FetchResult;

pub struct FetchSlot;

impl FetchSlot {
    #[must_use]
    pub fn open() -> (SlotWriter, SlotReader) {
        let (tx, rx) = oneshot::channel();
        (SlotWriter { tx }, SlotReader { rx })
    }
}

#[derive(Debug)]
pub struct SlotWriter {
    tx: oneshot::Sender<u32>,
}

impl SlotWriter {
    /// Returns `false` if the reader already gave up on the value.
    pub fn fill(self, count: u32) -> bool {
        self.tx.send(count).is_ok()
    }
}

#[derive(Debug)]
pub struct SlotReader {
    rx: oneshot::Receiver<u32>,
}

impl SlotReader {
    #[must_use]
    pub fn take(mut self) -> FetchResult {
        FetchResult {
            count: self.rx.try_recv().ok(),
        }
    }
}
