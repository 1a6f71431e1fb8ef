//! Fire-and-forget photo uploads.
//!
//! Each image gets its own detached worker thread: uploads never block or
//! reorder one another, and there is no retry. The outcome (URL or error)
//! is delivered over a channel into the caller-visible slot it was started
//! from; the shell drains the channel once per frame.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use super::{BlobStore, StorageError};

/// Visible state of one memories-page photo slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemorySlot {
    #[default]
    Empty,
    Uploading,
    Uploaded {
        url: String,
    },
    Failed {
        message: String,
    },
}

/// Terminal outcome of one upload, tagged with the slot it belongs to and
/// the page generation it was started from. Consumers use the generation
/// to drop outcomes that finish after their page has been replaced.
#[derive(Debug)]
pub struct UploadOutcome {
    pub generation: u64,
    pub slot: usize,
    pub result: Result<String, StorageError>,
}

pub struct Uploader {
    store: Arc<dyn BlobStore>,
    outcomes: Sender<UploadOutcome>,
}

impl Uploader {
    pub fn new(store: Arc<dyn BlobStore>, outcomes: Sender<UploadOutcome>) -> Self {
        Self { store, outcomes }
    }

    /// Start one independent upload for `slot` of page `generation`.
    pub fn upload(&self, generation: u64, slot: usize, key: String, bytes: Vec<u8>) {
        let store = Arc::clone(&self.store);
        let outcomes = self.outcomes.clone();

        thread::spawn(move || {
            log::debug!("Uploading {} ({} bytes)", key, bytes.len());
            let result = store.put_blob(&key, &bytes);
            if let Err(err) = &result {
                log::warn!("Upload of {} failed: {}", key, err);
            }
            // The receiver disappears on shutdown; late outcomes are dropped.
            let _ = outcomes.send(UploadOutcome {
                generation,
                slot,
                result,
            });
        });
    }
}
