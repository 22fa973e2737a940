//! Query router: follows the filter composer and keeps exactly one live
//! query bound to whatever the selections resolve to.

use tokio::sync::watch;
use tracing::debug;

use crate::error::Result;
use crate::filter::{FilterComposer, FilterState};
use crate::live::{ChangeFeed, LiveQuery};
use crate::query::{newest_first, EntryQuery};
use crate::storage::traits::EntryBackend;
use crate::storage::types::Entry;
use crate::store::JournalStore;

/// Connects a store to a filter composer.
#[derive(Clone)]
pub struct QueryRouter {
    feed: ChangeFeed,
    filters: watch::Receiver<FilterState>,
}

impl QueryRouter {
    pub fn new<B: EntryBackend + 'static>(
        store: &JournalStore<B>,
        composer: &FilterComposer,
    ) -> Self {
        Self {
            feed: store.feed(),
            filters: composer.watch(),
        }
    }

    /// Open the filtered entry stream.
    pub fn entries(&self) -> FilteredEntries {
        let mut filters = self.filters.clone();
        let active = filters.borrow_and_update().query();
        let live = bind(&self.feed, &active);
        FilteredEntries {
            feed: self.feed.clone(),
            filters,
            filters_open: true,
            active,
            live,
        }
    }
}

/// Stream of the entry list for the current filter selections.
///
/// The first call to [`next`](FilteredEntries::next) yields the current
/// result. Afterwards it yields whenever the store changes or the selections
/// resolve to a different query. Results of a superseded query are never
/// yielded once the switch has been observed.
pub struct FilteredEntries {
    feed: ChangeFeed,
    filters: watch::Receiver<FilterState>,
    filters_open: bool,
    active: EntryQuery,
    live: LiveQuery,
}

impl FilteredEntries {
    /// The query currently bound.
    pub fn query(&self) -> &EntryQuery {
        &self.active
    }

    /// Next emission, or `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<Result<Vec<Entry>>> {
        loop {
            let filters_open = self.filters_open;
            tokio::select! {
                biased;

                changed = self.filters.changed(), if filters_open => match changed {
                    Ok(()) => {
                        let query = self.filters.borrow_and_update().query();
                        if query != self.active {
                            self.rebind(query);
                        }
                    }
                    // composer dropped: keep serving the last query
                    Err(_) => self.filters_open = false,
                },
                emission = self.live.next() => return emission,
            }
        }
    }

    fn rebind(&mut self, query: EntryQuery) {
        debug!(from = %self.active.describe(), to = %query.describe(), "Switching active query");
        self.live = bind(&self.feed, &query);
        self.active = query;
    }
}

fn bind(feed: &ChangeFeed, query: &EntryQuery) -> LiveQuery {
    let query = query.clone();
    feed.query(
        Box::new(move |entry| query.matches(entry)),
        Box::new(newest_first),
    )
}
