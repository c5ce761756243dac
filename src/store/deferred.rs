use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;

use super::{BlobStore, StoreError};

/// Saves queued ahead of the writer before `save` starts blocking.
const WRITE_QUEUE_SIZE: usize = 256;

enum WriteCommand {
    Save {
        key: String,
        blob: String,
        version: u64,
    },
    Flush(SyncSender<Result<(), StoreError>>),
}

/// Latest submitted blob per key that the writer has not persisted yet.
type PendingMap = HashMap<String, (u64, String)>;

/// Moves writes of a wrapped store onto a dedicated writer thread.
///
/// Every `save` is stamped with a version from a monotonically increasing
/// counter. The writer drains its queue in batches, keeps only the newest
/// version per key and never writes a version older than one it already
/// wrote, so the store always ends up holding the last submitted blob.
/// `load` sees submitted-but-unwritten blobs. A blob whose write fails is
/// dropped from the pending set, so `load` falls back to what the wrapped
/// store actually holds, and the failure is reported by the next `flush`.
pub struct DeferredBlobStore {
    inner: Arc<dyn BlobStore>,
    next_version: AtomicU64,
    pending: Arc<Mutex<PendingMap>>,
    last_error: Arc<Mutex<Option<String>>>,
    sender: Mutex<Option<SyncSender<WriteCommand>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DeferredBlobStore {
    pub fn new(inner: Arc<dyn BlobStore>) -> Self {
        let pending = Arc::new(Mutex::new(PendingMap::new()));
        let last_error = Arc::new(Mutex::new(None));
        let (sender, receiver) = sync_channel(WRITE_QUEUE_SIZE);

        let writer_inner = Arc::clone(&inner);
        let writer_pending = Arc::clone(&pending);
        let writer_error = Arc::clone(&last_error);
        let handle = std::thread::Builder::new()
            .name("blob-writer".to_string())
            .spawn(move || writer_loop(receiver, writer_inner, writer_pending, writer_error));

        let (sender, handle) = match handle {
            Ok(handle) => (Some(sender), Some(handle)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to spawn blob writer, writing synchronously");
                (None, None)
            }
        };

        Self {
            inner,
            next_version: AtomicU64::new(0),
            pending,
            last_error,
            sender: Mutex::new(sender),
            handle: Mutex::new(handle),
        }
    }

    /// Message of the most recent failed background write.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    /// Stop accepting writes, drain the queue and join the writer thread.
    pub fn shutdown(&self) {
        drop(self.sender.lock().take());
        if let Some(handle) = self.handle.lock().take() {
            if handle.join().is_err() {
                tracing::warn!("Blob writer thread panicked");
            }
        }
    }
}

impl BlobStore for DeferredBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some((_, blob)) = self.pending.lock().get(key) {
            return Ok(Some(blob.clone()));
        }
        self.inner.load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let sender = self.sender.lock().clone();
        let Some(sender) = sender else {
            self.pending.lock().remove(key);
            return self.inner.save(key, blob);
        };

        let version = self.next_version.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut pending = self.pending.lock();
            let newer_queued = pending.get(key).is_some_and(|(v, _)| *v > version);
            if !newer_queued {
                pending.insert(key.to_string(), (version, blob.to_string()));
            }
        }

        sender
            .send(WriteCommand::Save {
                key: key.to_string(),
                blob: blob.to_string(),
                version,
            })
            .map_err(|_| StoreError::WriterClosed)
    }

    /// Block until every save submitted before this call has been attempted.
    ///
    /// Fails if a key's latest attempted write failed since the previous
    /// flush and no newer write of that key has succeeded.
    fn flush(&self) -> Result<(), StoreError> {
        let Some(sender) = self.sender.lock().clone() else {
            return Ok(());
        };
        let (ack, done) = sync_channel(1);
        sender
            .send(WriteCommand::Flush(ack))
            .map_err(|_| StoreError::WriterClosed)?;
        done.recv().map_err(|_| StoreError::WriterClosed)?
    }
}

impl Drop for DeferredBlobStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn writer_loop(
    receiver: Receiver<WriteCommand>,
    inner: Arc<dyn BlobStore>,
    pending: Arc<Mutex<PendingMap>>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    let mut written: HashMap<String, u64> = HashMap::new();
    // Keys whose latest attempted write failed, with the failure message.
    let mut failed: HashMap<String, String> = HashMap::new();

    while let Ok(first) = receiver.recv() {
        let mut saves: HashMap<String, (u64, String)> = HashMap::new();
        let mut acks = Vec::new();

        for command in std::iter::once(first).chain(receiver.try_iter()) {
            match command {
                WriteCommand::Save { key, blob, version } => {
                    let newer = saves.get(&key).is_some_and(|(v, _)| *v > version);
                    if !newer {
                        saves.insert(key, (version, blob));
                    }
                }
                WriteCommand::Flush(ack) => acks.push(ack),
            }
        }

        for (key, (version, blob)) in saves {
            if written.get(&key).is_some_and(|w| *w >= version) {
                tracing::debug!(key = %key, version, "Skipping superseded blob");
                continue;
            }

            let result = inner.save(&key, &blob);
            {
                let mut pending = pending.lock();
                if pending.get(&key).is_some_and(|(v, _)| *v <= version) {
                    pending.remove(&key);
                }
            }

            match result {
                Ok(()) => {
                    written.insert(key.clone(), version);
                    failed.remove(&key);
                }
                Err(e) => {
                    tracing::warn!(key = %key, version, error = %e, "Deferred blob write failed");
                    let message = e.to_string();
                    *last_error.lock() = Some(message.clone());
                    failed.insert(key, message);
                }
            }
        }

        if acks.is_empty() {
            continue;
        }
        let first_failure = failed
            .iter()
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(key, message)| (key.clone(), message.clone()));
        for ack in acks {
            let result = match &first_failure {
                Some((key, message)) => Err(StoreError::DeferredWriteFailed {
                    key: key.clone(),
                    message: message.clone(),
                }),
                None => Ok(()),
            };
            let _ = ack.send(result);
        }
        failed.clear();
    }
}
