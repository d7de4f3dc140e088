//! Observable holder of the current search results.
//!
//! The store keeps exactly one [`Snapshot`] and publishes every replacement
//! through a [`tokio::sync::watch`] channel. Replacements are whole-value
//! swaps, so a reader sees either the previous list or the new one in full.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::client::RecipeSummary;

/// The committed state of the store at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Recipes in server response order
    pub recipes: Arc<[RecipeSummary]>,
    /// Sequence number of the search that produced this list; 0 before the first commit
    pub sequence: u64,
    /// When this list was committed
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            recipes: Arc::from(Vec::new()),
            sequence: 0,
            updated_at: None,
        }
    }
}

/// Single-writer, multi-reader holder of the current results.
#[derive(Debug)]
pub struct ResultStore {
    tx: watch::Sender<Snapshot>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self { tx }
    }

    /// Latest committed recipe list.
    pub fn current(&self) -> Arc<[RecipeSummary]> {
        self.tx.borrow().recipes.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every commit.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Unconditionally swaps in `recipes`.
    pub fn replace_all(&self, recipes: Vec<RecipeSummary>) {
        self.tx.send_modify(|snapshot| {
            *snapshot = Snapshot {
                recipes: recipes.into(),
                sequence: snapshot.sequence,
                updated_at: Some(Utc::now()),
            };
        });
    }

    /// Swaps in `recipes` only if `sequence` is newer than the last commit.
    ///
    /// The check and the swap happen under the channel lock. Returns whether
    /// the list was applied.
    pub fn commit(&self, sequence: u64, recipes: Vec<RecipeSummary>) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if sequence <= snapshot.sequence {
                tracing::debug!(
                    "Discarding results of search #{} (store already at #{})",
                    sequence,
                    snapshot.sequence
                );
                return false;
            }
            *snapshot = Snapshot {
                recipes: recipes.into(),
                sequence,
                updated_at: Some(Utc::now()),
            };
            true
        })
    }
}
