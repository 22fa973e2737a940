//! Live queries over the journal store.
//!
//! Every committed write bumps a revision number on a `tokio::sync::watch`
//! channel. A live query waits for the revision to move and then recomputes its
//! full result from the latest snapshot, so a slow consumer that misses
//! intermediate revisions only ever skips states it could no longer fetch.
//!
//! Live queries hold a weak reference to the store: once every
//! [`JournalStore`](crate::JournalStore) handle is dropped, `next()` returns
//! `None`. Dropping a live query unsubscribes it.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Weak;

use tokio::sync::watch;
use tracing::trace;

use crate::error::Result;
use crate::storage::types::{Entry, EntryId};

pub(crate) type Predicate = Box<dyn Fn(&Entry) -> bool + Send + Sync>;
pub(crate) type Comparator = Box<dyn Fn(&Entry, &Entry) -> Ordering + Send + Sync>;

/// Read access a live query needs from the store.
pub(crate) trait SnapshotSource: Send + Sync {
    fn snapshot(&self) -> Result<Vec<Entry>>;
    fn lookup(&self, id: EntryId) -> Result<Option<Entry>>;
}

/// Handle for opening new subscriptions without keeping the store alive.
#[derive(Clone)]
pub(crate) struct ChangeFeed {
    source: Weak<dyn SnapshotSource>,
    changes: watch::Receiver<u64>,
}

impl ChangeFeed {
    pub(crate) fn new(source: Weak<dyn SnapshotSource>, changes: watch::Receiver<u64>) -> Self {
        Self { source, changes }
    }

    pub(crate) fn query(&self, predicate: Predicate, order: Comparator) -> LiveQuery {
        LiveQuery {
            feed: self.clone(),
            predicate,
            order,
            primed: false,
        }
    }

    pub(crate) fn entry(&self, id: EntryId) -> EntryWatch {
        EntryWatch {
            feed: self.clone(),
            id,
            last: None,
        }
    }

    /// Wait for the next revision unless this is the first read.
    ///
    /// Returns `false` once the store is gone.
    async fn wait(&mut self, primed: &mut bool) -> bool {
        if !*primed {
            *primed = true;
            self.changes.borrow_and_update();
            return true;
        }
        self.changes.changed().await.is_ok()
    }

    fn revision(&self) -> u64 {
        *self.changes.borrow()
    }
}

/// Live stream of an ordered, filtered entry list.
///
/// The first call to [`next`](LiveQuery::next) yields the current result
/// immediately; every later call waits for the store to change and yields the
/// freshly recomputed result.
pub struct LiveQuery {
    feed: ChangeFeed,
    predicate: Predicate,
    order: Comparator,
    primed: bool,
}

impl LiveQuery {
    /// Next emission, or `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<Result<Vec<Entry>>> {
        if !self.feed.wait(&mut self.primed).await {
            return None;
        }
        let source = self.feed.source.upgrade()?;
        trace!(revision = self.feed.revision(), "Re-evaluating live query");
        Some(self.evaluate(source.as_ref()))
    }

    /// Compute the current result without waiting or consuming a change.
    pub fn current(&self) -> Result<Vec<Entry>> {
        match self.feed.source.upgrade() {
            Some(source) => self.evaluate(source.as_ref()),
            None => Ok(Vec::new()),
        }
    }

    fn evaluate(&self, source: &dyn SnapshotSource) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = source
            .snapshot()?
            .into_iter()
            .filter(|entry| (self.predicate)(entry))
            .collect();
        entries.sort_by(|a, b| (self.order)(a, b));
        Ok(entries)
    }
}

impl fmt::Debug for LiveQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveQuery")
            .field("revision", &self.feed.revision())
            .field("primed", &self.primed)
            .finish()
    }
}

/// Live stream of a single entry.
///
/// Yields the current value first, then a new value each time that entry is
/// updated, and `None` (inside `Some(Ok(..))`) once it is deleted.
pub struct EntryWatch {
    feed: ChangeFeed,
    id: EntryId,
    last: Option<Option<Entry>>,
}

impl EntryWatch {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Next emission, or `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<Result<Option<Entry>>> {
        let mut primed = self.last.is_some();
        loop {
            if !self.feed.wait(&mut primed).await {
                return None;
            }
            let source = self.feed.source.upgrade()?;
            let current = match source.lookup(self.id) {
                Ok(current) => current,
                Err(err) => return Some(Err(err)),
            };
            // Writes to other entries also bump the revision; only changes to
            // this entry are emitted.
            if self.last.as_ref() == Some(&current) {
                continue;
            }
            self.last = Some(current.clone());
            return Some(Ok(current));
        }
    }
}

impl fmt::Debug for EntryWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryWatch")
            .field("id", &self.id)
            .field("revision", &self.feed.revision())
            .finish()
    }
}
