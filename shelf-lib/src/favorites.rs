//! Favorite toggling on canonical catalog records.

use std::sync::mpsc::Sender;

use shelf_catalog::{Catalog, GameId, GameKey};

use crate::filter::FilterKind;
use crate::message::{ShelfMessage, post};

/// Whether the catalog record identified by `game` is a favorite.
///
/// Unknown games are never favorites.
pub fn is_favorite(catalog: &Catalog, game: &GameKey) -> bool {
    catalog
        .resolve(game)
        .and_then(|id| catalog.get(id))
        .is_some_and(|g| g.favorite)
}

/// Flip the favorite flag of the catalog record identified by `game`.
///
/// `game` may come from a detached copy; it is resolved to the canonical
/// record by `(title, sort_key)`. Returns the new flag, or `false` without
/// touching the catalog if the game is unknown.
///
/// When `viewing` is [`FilterKind::Favorites`] and this removes the last
/// favorite, a [`ShelfMessage::ResetToAll`] is posted to `events` so the
/// controller leaves the now-empty view once the current event is done.
pub fn toggle_favorite(
    catalog: &mut Catalog,
    game: &GameKey,
    viewing: FilterKind,
    events: &Sender<ShelfMessage>,
) -> bool {
    match catalog.resolve(game) {
        Some(id) => toggle_favorite_by_id(catalog, id, viewing, events),
        None => {
            log::debug!("Toggle favorite: '{}' is not in the catalog", game.title);
            false
        }
    }
}

/// [`toggle_favorite`] for a caller that already holds the record's id.
pub fn toggle_favorite_by_id(
    catalog: &mut Catalog,
    id: GameId,
    viewing: FilterKind,
    events: &Sender<ShelfMessage>,
) -> bool {
    let Some(was_favorite) = catalog.get(id).map(|g| g.favorite) else {
        return false;
    };

    // Assumes the Favorites view shows exactly the favorited records.
    let was_sole_favorite =
        viewing == FilterKind::Favorites && was_favorite && catalog.favorite_count() == 1;

    let favorite = !was_favorite;
    catalog.set_favorite(id, favorite);
    log::debug!("Game {} favorite: {was_favorite} -> {favorite}", id.index());
    post(events, ShelfMessage::FavoriteChanged { id, favorite });

    if was_sole_favorite && !favorite {
        post(events, ShelfMessage::ResetToAll);
    }

    favorite
}

#[cfg(test)]
#[path = "tests/favorites_tests.rs"]
mod tests;
