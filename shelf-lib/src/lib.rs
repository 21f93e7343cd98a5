//! Filter selection, favorites, and the browsing controller for a game shelf.
//!
//! The pieces here sit between a loaded [`Catalog`] and whatever renders it:
//! - [`filter`] maps filter indices to views and skips empty filters while
//!   cycling,
//! - [`favorites`] flips favorite flags on canonical records,
//! - [`shelf::Shelf`] keeps the current selection and runs deferred
//!   [`message::ShelfMessage`]s after each input event,
//! - [`settings`] persists the last selection between sessions.

pub mod favorites;
pub mod filter;
pub mod message;
pub mod settings;
pub mod shelf;

pub use favorites::{is_favorite, toggle_favorite, toggle_favorite_by_id};
pub use filter::{
    CollectionGroup, Direction, FilterKind, FilterParseError, RecordFilter, SortOrder,
    ViewDescriptor, collection_groups, filter_has_matches, next_non_empty_filter,
    view_for_filter,
};
pub use message::ShelfMessage;
pub use shelf::{InputEvent, Shelf};

// Re-export the catalog crate so frontends only need one dependency.
pub use shelf_catalog::{self, Catalog, GameId, GameKey, GameRecord, clean};
