//! In-memory catalog: an arena of [`GameRecord`]s with an identity index.

use std::collections::HashMap;

use crate::types::{Collection, GameId, GameKey, GameRecord};

/// The full, unfiltered set of game records.
///
/// Records are stored in load order and addressed by [`GameId`]. The
/// `(title, sort_key)` index is built on insert so detached references can be
/// resolved without a scan. Titles and sort keys are never mutated after
/// insertion, which keeps the index valid; the favorite flag is the only
/// field that can change.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
    collections: Vec<Collection>,
    by_key: HashMap<GameKey, GameId>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in order.
    pub fn from_records(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.push(record);
        }
        catalog
    }

    /// Register a collection name. Duplicates are ignored.
    pub fn add_collection(&mut self, collection: Collection) {
        if !self.collections.contains(&collection) {
            self.collections.push(collection);
        }
    }

    /// Insert a record and return its id.
    ///
    /// If another record already has the same `(title, sort_key)`, the first
    /// one keeps the identity slot and the new record is only reachable by id.
    pub fn push(&mut self, record: GameRecord) -> GameId {
        let id = GameId(self.games.len());
        for collection in &record.collections {
            self.add_collection(collection.clone());
        }
        let key = record.key();
        if self.by_key.contains_key(&key) {
            log::warn!(
                "Duplicate game identity '{}' / '{}'; keeping the first record",
                key.title,
                key.sort_key
            );
        } else {
            self.by_key.insert(key, id);
        }
        self.games.push(record);
        id
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: GameId) -> Option<&GameRecord> {
        self.games.get(id.0)
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[GameRecord] {
        &self.games
    }

    /// Iterate `(id, record)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (GameId, &GameRecord)> {
        self.games.iter().enumerate().map(|(i, g)| (GameId(i), g))
    }

    /// All ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = GameId> + '_ {
        (0..self.games.len()).map(GameId)
    }

    /// Find the canonical record for a possibly-detached reference.
    pub fn resolve(&self, key: &GameKey) -> Option<GameId> {
        self.by_key.get(key).copied()
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Number of records currently marked as favorite.
    pub fn favorite_count(&self) -> usize {
        self.games.iter().filter(|g| g.favorite).count()
    }

    /// Set the favorite flag of a record. Returns `false` if `id` is unknown.
    pub fn set_favorite(&mut self, id: GameId, favorite: bool) -> bool {
        match self.games.get_mut(id.0) {
            Some(game) => {
                game.favorite = favorite;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_registers_collections_in_first_seen_order() {
        let catalog = Catalog::from_records([
            GameRecord::new("A").with_collection("SNES"),
            GameRecord::new("B")
                .with_collection("Genesis")
                .with_collection("SNES"),
        ]);
        let names: Vec<_> = catalog.collections().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["SNES", "Genesis"]);
        assert_eq!(catalog.collection_count(), 2);
    }

    #[test]
    fn resolve_by_title_and_sort_key() {
        let catalog = Catalog::from_records([
            GameRecord::new("Tetris").with_sort_key("tetris gb"),
            GameRecord::new("Tetris").with_sort_key("tetris nes"),
        ]);
        assert_eq!(
            catalog.resolve(&GameKey::new("Tetris", "tetris nes")),
            Some(GameId(1))
        );
        assert_eq!(catalog.resolve(&GameKey::new("Tetris", "")), None);
    }

    #[test]
    fn duplicate_identity_keeps_first() {
        let catalog = Catalog::from_records([
            GameRecord::new("Dup").with_play_count(1),
            GameRecord::new("Dup").with_play_count(2),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve(&GameKey::new("Dup", "")), Some(GameId(0)));
    }

    #[test]
    fn set_favorite_unknown_id() {
        let mut catalog = Catalog::from_records([GameRecord::new("A")]);
        assert!(!catalog.set_favorite(GameId(5), true));
        assert!(catalog.set_favorite(GameId(0), true));
        assert_eq!(catalog.favorite_count(), 1);
    }
}
