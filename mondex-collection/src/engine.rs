use mondex_api::Pokemon;
use tokio::sync::{mpsc, oneshot};

use crate::store::CollectionStore;

/// Work items for the persistence writer task.
enum WriteOp {
    Snapshot(Vec<Pokemon>),
    Flush(oneshot::Sender<()>),
}

/// Ordered sequence of unique items, mirrored into the store after every
/// mutation.
///
/// Order is user-controlled and meaningful (curation priority). Mutations
/// are synchronous; each one hands the full post-mutation snapshot to a
/// detached writer task (spawned on the ambient tokio runtime at open),
/// which applies writes in mutation order and logs failures instead of
/// surfacing them to the caller.
pub struct Collection {
    items: Vec<Pokemon>,
    writer: mpsc::UnboundedSender<WriteOp>,
}

impl Collection {
    /// Open the collection backed by `store`, loading any persisted
    /// snapshot. A corrupt or missing snapshot opens as empty.
    pub fn open(store: CollectionStore) -> Self {
        let items = store.load();

        // Single writer, so snapshots land in mutation order. The task
        // exits when the collection (and with it the sender) is dropped.
        let (writer, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(op) = rx.recv().await {
                match op {
                    WriteOp::Snapshot(snapshot) => {
                        if let Err(e) = store.save(&snapshot) {
                            log::warn!("failed to persist collection: {e}");
                        }
                    }
                    WriteOp::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self { items, writer }
    }

    pub fn items(&self) -> &[Pokemon] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Append `item` unless an entry with the same id already exists.
    /// Re-adding a present id is a defined no-op, not a failure; returns
    /// whether the item was appended.
    pub fn add(&mut self, item: Pokemon) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        self.persist();
        true
    }

    /// Relocate the entry at `from` to `to`, shifting intervening entries.
    /// `from == to` and out-of-bounds indices are no-ops (a drag gesture may
    /// deliver stale indices if the list changed mid-gesture); returns
    /// whether anything moved.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.persist();
        true
    }

    /// Remove and return the entry at `index`; out of bounds is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Pokemon> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.persist();
        Some(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.persist();
    }

    /// Queue the current sequence for the writer task.
    fn persist(&self) {
        let _ = self.writer.send(WriteOp::Snapshot(self.items.clone()));
    }

    /// Wait until every queued write has been applied. Mutations never
    /// depend on this; it exists for shutdown paths and tests.
    pub async fn sync(&self) {
        let (tx, rx) = oneshot::channel();
        if self.writer.send(WriteOp::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }
}
