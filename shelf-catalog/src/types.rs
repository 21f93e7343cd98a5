//! Data model types for the game catalog.
//!
//! These types mirror what a frontend's game list exposes per record: title,
//! sort key, favorite flag, play statistics, and collection memberships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Identity ────────────────────────────────────────────────────────────────

/// Stable arena index of a record inside a [`Catalog`](crate::Catalog).
///
/// Assigned once when the record is inserted and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub usize);

impl GameId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Natural identity of a record: its `(title, sort_key)` pair.
///
/// UI layers that hold a detached copy of a record use this to find the
/// canonical instance again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameKey {
    pub title: String,
    pub sort_key: String,
}

impl GameKey {
    pub fn new(title: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sort_key: sort_key.into(),
        }
    }
}

// ── Collection ──────────────────────────────────────────────────────────────

/// A named group of games (typically a platform or a user-made list).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub name: String,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ── Game ────────────────────────────────────────────────────────────────────

/// One game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    #[serde(default)]
    pub sort_key: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub play_count: u32,
    /// Total play time in seconds.
    #[serde(default)]
    pub play_time: u64,
    /// Last launch time. `None` and the Unix epoch both mean "never played".
    #[serde(default)]
    pub last_played: Option<DateTime<Utc>>,
    /// Collection memberships; only the first is used for grouping.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl GameRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sort_key: String::new(),
            favorite: false,
            play_count: 0,
            play_time: 0,
            last_played: None,
            collections: Vec::new(),
        }
    }

    pub fn with_sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.sort_key = sort_key.into();
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_play_count(mut self, count: u32) -> Self {
        self.play_count = count;
        self
    }

    pub fn with_play_time(mut self, seconds: u64) -> Self {
        self.play_time = seconds;
        self
    }

    pub fn with_last_played(mut self, at: DateTime<Utc>) -> Self {
        self.last_played = Some(at);
        self
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collections.push(Collection::new(name));
        self
    }

    pub fn key(&self) -> GameKey {
        GameKey::new(self.title.clone(), self.sort_key.clone())
    }

    /// Whether this record's identity matches `key`.
    pub fn matches_key(&self, key: &GameKey) -> bool {
        self.title == key.title && self.sort_key == key.sort_key
    }

    pub fn has_been_played(&self) -> bool {
        self.play_count > 0
    }

    /// Last launch time, or `None` if unset or not strictly after the epoch.
    pub fn last_played_at(&self) -> Option<DateTime<Utc>> {
        self.last_played.filter(|t| t.timestamp_millis() > 0)
    }

    pub fn first_collection(&self) -> Option<&Collection> {
        self.collections.first()
    }
}
