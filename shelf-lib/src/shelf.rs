//! The browsing controller: current filter, current view and selection.
//!
//! `Shelf` is driven from a single thread. Each call to [`Shelf::dispatch`]
//! handles one input event and then drains the message queue, so deferred
//! work (like leaving an emptied Favorites view) runs after the event that
//! caused it and before the next one.

use std::sync::mpsc;

use shelf_catalog::{Catalog, GameId, GameKey, GameRecord};

use crate::favorites;
use crate::filter::{self, Direction, FilterKind};
use crate::message::ShelfMessage;
use crate::settings::MemorySettings;

/// User input the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Cycle to the next non-empty filter.
    Navigate(Direction),
    /// Jump straight to a filter (empty or not).
    SelectFilter(FilterKind),
    /// Select the game at a position in the current view.
    SelectGame(usize),
    /// Toggle the favorite flag of the current game.
    ToggleFavorite,
}

pub struct Shelf {
    catalog: Catalog,

    /// Active filter.
    filter: FilterKind,

    /// Whether the collection-grouped display is shown instead of a flat view.
    showing_collections: bool,

    /// Ids of the current flat view in display order. Keeps the previous view
    /// while collections are shown.
    view: Vec<GameId>,

    /// Currently selected game.
    current_game: Option<GameId>,

    /// Position of the secondary filter selector in the UI.
    selector_position: usize,

    message_rx: mpsc::Receiver<ShelfMessage>,
    message_tx: mpsc::Sender<ShelfMessage>,
}

impl Shelf {
    /// Create a controller showing the All view with its first game selected.
    pub fn new(catalog: Catalog) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut shelf = Self {
            catalog,
            filter: FilterKind::All,
            showing_collections: false,
            view: Vec::new(),
            current_game: None,
            selector_position: 0,
            message_rx: rx,
            message_tx: tx,
        };
        shelf.select_filter(FilterKind::All);
        shelf
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn showing_collections(&self) -> bool {
        self.showing_collections
    }

    pub fn view(&self) -> &[GameId] {
        &self.view
    }

    /// Records of the current view in display order.
    pub fn view_records(&self) -> impl Iterator<Item = &GameRecord> {
        self.view.iter().filter_map(|&id| self.catalog.get(id))
    }

    pub fn current_game(&self) -> Option<GameId> {
        self.current_game
    }

    pub fn current_record(&self) -> Option<&GameRecord> {
        self.current_game.and_then(|id| self.catalog.get(id))
    }

    pub fn selector_position(&self) -> usize {
        self.selector_position
    }

    pub fn set_selector_position(&mut self, position: usize) {
        self.selector_position = position;
    }

    /// A sender for posting messages from outside the controller.
    pub fn sender(&self) -> mpsc::Sender<ShelfMessage> {
        self.message_tx.clone()
    }

    /// Handle one input event, then run any messages it queued.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Navigate(direction) => {
                self.navigate(direction);
            }
            InputEvent::SelectFilter(kind) => self.select_filter(kind),
            InputEvent::SelectGame(position) => {
                self.select_game(position);
            }
            InputEvent::ToggleFavorite => {
                self.toggle_favorite_current();
            }
        }
        self.process_messages();
    }

    /// Switch to `kind` and rebuild the current view.
    ///
    /// A non-empty flat view selects its first game. Selecting Collections
    /// only switches the display mode.
    pub fn select_filter(&mut self, kind: FilterKind) {
        self.filter = kind;
        match filter::view_for_filter(kind).apply(&self.catalog) {
            Some(ids) => {
                self.view = ids;
                self.showing_collections = false;
            }
            None => self.showing_collections = true,
        }

        if !self.showing_collections {
            if let Some(&first) = self.view.first() {
                self.current_game = Some(first);
            }
        }
        log::debug!(
            "Filter set to {} ({} games)",
            kind.slug(),
            self.view.len()
        );
    }

    /// Move to the next non-empty filter in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> FilterKind {
        let index = filter::next_non_empty_filter(self.filter.index(), direction, &self.catalog);
        let kind = FilterKind::from_index(index).unwrap_or_default();
        if kind != self.filter {
            self.select_filter(kind);
        }
        kind
    }

    /// Select the game at `position` in the current view.
    pub fn select_game(&mut self, position: usize) -> Option<GameId> {
        let id = self.view.get(position).copied()?;
        self.current_game = Some(id);
        Some(id)
    }

    /// Toggle the favorite flag of the current game. Returns the new flag,
    /// or `false` if nothing is selected.
    pub fn toggle_favorite_current(&mut self) -> bool {
        match self.current_game {
            Some(id) => {
                favorites::toggle_favorite_by_id(&mut self.catalog, id, self.filter, &self.message_tx)
            }
            None => false,
        }
    }

    /// Toggle the favorite flag of the game identified by `game`.
    pub fn toggle_favorite(&mut self, game: &GameKey) -> bool {
        favorites::toggle_favorite(&mut self.catalog, game, self.filter, &self.message_tx)
    }

    pub fn is_favorite(&self, game: &GameKey) -> bool {
        favorites::is_favorite(&self.catalog, game)
    }

    /// Drain and handle every queued message.
    pub fn process_messages(&mut self) {
        while let Ok(msg) = self.message_rx.try_recv() {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, msg: ShelfMessage) {
        match msg {
            ShelfMessage::ResetToAll => {
                log::debug!("Favorites emptied; returning to All");
                self.select_filter(FilterKind::All);
                self.selector_position = 0;
            }
            ShelfMessage::FavoriteChanged { id, favorite } => {
                // Keep the Favorites view in step with the catalog. The
                // current game stays selected even when it leaves the view.
                if self.filter == FilterKind::Favorites && !self.showing_collections {
                    if favorite {
                        self.view = filter::view_for_filter(self.filter)
                            .apply(&self.catalog)
                            .unwrap_or_default();
                    } else {
                        self.view.retain(|&v| v != id);
                    }
                }
            }
        }
    }

    /// Record the current filter and game so the next session can resume.
    pub fn remember(&self, memory: &mut MemorySettings) {
        memory.last_filter = Some(self.filter.slug().to_string());
        memory.last_game_index = self.current_game.map(GameId::index);
    }

    /// Resume from a remembered position.
    ///
    /// Unknown or now-empty filters and out-of-range games are ignored.
    pub fn restore(&mut self, memory: &MemorySettings) {
        if let Some(kind) = memory
            .last_filter
            .as_deref()
            .and_then(|s| s.parse::<FilterKind>().ok())
        {
            if filter::filter_has_matches(kind.index(), &self.catalog) {
                self.select_filter(kind);
            } else {
                log::debug!("Remembered filter {} is empty", kind.slug());
            }
        }

        if let Some(id) = memory
            .last_game_index
            .map(GameId)
            .filter(|&id| self.catalog.get(id).is_some())
        {
            self.current_game = Some(id);
        }
    }
}

#[cfg(test)]
#[path = "tests/shelf_tests.rs"]
mod tests;
