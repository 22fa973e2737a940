//! Filter composer: the user's current search and tag selections.
//!
//! Selections live in a `tokio::sync::watch` channel so the query router can
//! follow them. Mood and category are mutually exclusive; search text is
//! independent of both and takes precedence when it is not blank.

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::query::EntryQuery;
use crate::storage::types::{Category, Mood};

/// Current filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search: String,
    pub mood: Option<Mood>,
    pub category: Option<Category>,
}

/// Which query the selections resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Search,
    Mood,
    Category,
    All,
}

impl FilterState {
    /// Priority: non-blank search, then mood, then category, then all.
    pub fn kind(&self) -> QueryKind {
        if !self.search.trim().is_empty() {
            QueryKind::Search
        } else if self.mood.is_some() {
            QueryKind::Mood
        } else if self.category.is_some() {
            QueryKind::Category
        } else {
            QueryKind::All
        }
    }

    /// The concrete query for the selections.
    pub fn query(&self) -> EntryQuery {
        match (self.kind(), self.mood, self.category) {
            (QueryKind::Search, _, _) => EntryQuery::search(&self.search),
            (QueryKind::Mood, Some(mood), _) => EntryQuery::Mood(mood),
            (QueryKind::Category, _, Some(category)) => EntryQuery::Category(category),
            _ => EntryQuery::All,
        }
    }
}

/// Owner of the filter state. Setters only notify followers when the state
/// actually changes.
#[derive(Debug)]
pub struct FilterComposer {
    state: watch::Sender<FilterState>,
}

impl Default for FilterComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterComposer {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FilterState::default());
        Self { state }
    }

    /// Replace the search text. Whitespace-only text behaves as no search.
    pub fn set_search(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| {
            if state.search == text {
                return false;
            }
            state.search = text;
            true
        });
    }

    /// Select a mood, clearing any category. `None` clears only the mood.
    pub fn set_mood(&self, mood: Option<Mood>) {
        self.update(|state| {
            let before = (state.mood, state.category);
            state.mood = mood;
            if mood.is_some() {
                state.category = None;
            }
            before != (state.mood, state.category)
        });
    }

    /// Select a category, clearing any mood. `None` clears only the category.
    pub fn set_category(&self, category: Option<Category>) {
        self.update(|state| {
            let before = (state.mood, state.category);
            state.category = category;
            if category.is_some() {
                state.mood = None;
            }
            before != (state.mood, state.category)
        });
    }

    /// Reset search, mood and category.
    pub fn clear(&self) {
        self.update(|state| {
            if *state == FilterState::default() {
                return false;
            }
            *state = FilterState::default();
            true
        });
    }

    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    pub fn current_query_kind(&self) -> QueryKind {
        self.state.borrow().kind()
    }

    pub fn current_query(&self) -> EntryQuery {
        self.state.borrow().query()
    }

    /// Follow state changes. The receiver sees the current state as already
    /// observed.
    pub fn watch(&self) -> watch::Receiver<FilterState> {
        self.state.subscribe()
    }

    fn update(&self, modify: impl FnOnce(&mut FilterState) -> bool) {
        let changed = self.state.send_if_modified(modify);
        if changed {
            debug!(kind = ?self.current_query_kind(), "Filter selections changed");
        }
    }
}
