//! Deferred work posted to the browsing controller.

use std::sync::mpsc;

use shelf_catalog::GameId;

/// Messages queued for the [`Shelf`](crate::Shelf) to handle after the
/// current input event has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfMessage {
    /// The last favorite was removed while the Favorites view was shown:
    /// switch back to All and reset the filter selector to its first entry.
    ResetToAll,
    /// A game's favorite flag changed.
    FavoriteChanged { id: GameId, favorite: bool },
}

/// Post a message, ignoring a controller that has already gone away.
pub(crate) fn post(tx: &mpsc::Sender<ShelfMessage>, msg: ShelfMessage) {
    if let Err(mpsc::SendError(msg)) = tx.send(msg) {
        log::debug!("Dropping {msg:?}: controller is gone");
    }
}
