//! Named filters over the catalog and skip-empty filter navigation.
//!
//! Filters are addressed by index (`0..FilterKind::COUNT`) because that is how
//! a frontend's filter selector reports them. Every function here reads the
//! catalog and never mutates it.

use shelf_catalog::{Catalog, GameId, GameRecord};

/// The five named views of the catalog, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    All,
    Favorites,
    MostPlayed,
    RecentlyPlayed,
    Collections,
}

const ALL_FILTERS: &[FilterKind] = &[
    FilterKind::All,
    FilterKind::Favorites,
    FilterKind::MostPlayed,
    FilterKind::RecentlyPlayed,
    FilterKind::Collections,
];

impl FilterKind {
    /// Number of filters in the selector.
    pub const COUNT: usize = 5;

    /// All filters in selector order.
    pub fn all() -> &'static [FilterKind] {
        ALL_FILTERS
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_FILTERS.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Favorites => 1,
            Self::MostPlayed => 2,
            Self::RecentlyPlayed => 3,
            Self::Collections => 4,
        }
    }

    /// Lowercase identifier used in settings and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favorites => "favorites",
            Self::MostPlayed => "mostplayed",
            Self::RecentlyPlayed => "recent",
            Self::Collections => "collections",
        }
    }

    /// Label shown in the filter selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Favorites => "Favorites",
            Self::MostPlayed => "Most Played",
            Self::RecentlyPlayed => "Recently Played",
            Self::Collections => "Collections",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::All => &["everything"],
            Self::Favorites => &["favorite", "favs", "fav"],
            Self::MostPlayed => &["most-played", "most_played", "mostplayed"],
            Self::RecentlyPlayed => &["recently-played", "recently_played", "recentlyplayed"],
            Self::Collections => &["collection"],
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string cannot be parsed into a `FilterKind`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter: '{0}'")]
pub struct FilterParseError(pub String);

impl std::str::FromStr for FilterKind {
    type Err = FilterParseError;

    /// Parse a filter from its slug, label, an alias, or its selector index
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(index) = lower.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| FilterParseError(s.to_string()));
        }
        ALL_FILTERS
            .iter()
            .copied()
            .find(|kind| {
                kind.slug() == lower
                    || kind.label().to_lowercase() == lower
                    || kind.aliases().contains(&lower.as_str())
            })
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// Navigation direction in the filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Step `index` one position in this direction, wrapping at both ends.
    fn step(self, index: usize) -> usize {
        match self {
            Self::Next => (index + 1) % FilterKind::COUNT,
            Self::Previous => (index + FilterKind::COUNT - 1) % FilterKind::COUNT,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" | "right" | "forward" | "+" => Ok(Self::Next),
            "prev" | "previous" | "left" | "back" | "-" => Ok(Self::Previous),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}

// ── Views ───────────────────────────────────────────────────────────────────

/// Which records a flat view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    Everything,
    Favorite,
    Played,
    RecentlyPlayed,
}

impl RecordFilter {
    pub fn matches(self, game: &GameRecord) -> bool {
        match self {
            Self::Everything => true,
            Self::Favorite => game.favorite,
            Self::Played => game.has_been_played(),
            Self::RecentlyPlayed => game.last_played_at().is_some(),
        }
    }
}

/// Ordering applied after filtering. Ties keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PlayCountDescending,
    LastPlayedDescending,
}

/// Declarative description of what a filter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDescriptor {
    /// A filtered, optionally sorted projection of the catalog.
    Flat {
        keep: RecordFilter,
        sort: Option<SortOrder>,
    },
    /// Switch to the collection-grouped display.
    Collections,
}

impl ViewDescriptor {
    /// Materialize the view as ids in display order.
    ///
    /// Returns `None` for [`ViewDescriptor::Collections`], which has no flat
    /// form; see [`collection_groups`].
    pub fn apply(&self, catalog: &Catalog) -> Option<Vec<GameId>> {
        let ViewDescriptor::Flat { keep, sort } = *self else {
            return None;
        };

        let mut ids: Vec<GameId> = catalog
            .iter()
            .filter(|(_, game)| keep.matches(game))
            .map(|(id, _)| id)
            .collect();

        // `sort_by_key` is stable, so equal keys keep catalog order.
        match sort {
            Some(SortOrder::PlayCountDescending) => {
                ids.sort_by_key(|&id| {
                    std::cmp::Reverse(catalog.get(id).map_or(0, |g| g.play_count))
                });
            }
            Some(SortOrder::LastPlayedDescending) => {
                ids.sort_by_key(|&id| {
                    std::cmp::Reverse(catalog.get(id).and_then(|g| g.last_played_at()))
                });
            }
            None => {}
        }

        Some(ids)
    }
}

/// Map a filter to its view.
pub fn view_for_filter(kind: FilterKind) -> ViewDescriptor {
    match kind {
        FilterKind::All => ViewDescriptor::Flat {
            keep: RecordFilter::Everything,
            sort: None,
        },
        FilterKind::Favorites => ViewDescriptor::Flat {
            keep: RecordFilter::Favorite,
            sort: None,
        },
        FilterKind::MostPlayed => ViewDescriptor::Flat {
            keep: RecordFilter::Played,
            sort: Some(SortOrder::PlayCountDescending),
        },
        FilterKind::RecentlyPlayed => ViewDescriptor::Flat {
            keep: RecordFilter::RecentlyPlayed,
            sort: Some(SortOrder::LastPlayedDescending),
        },
        FilterKind::Collections => ViewDescriptor::Collections,
    }
}

/// Whether the filter at `index` would show at least one game.
///
/// Indices outside `0..FilterKind::COUNT` have no matches.
pub fn filter_has_matches(index: usize, catalog: &Catalog) -> bool {
    let Some(kind) = FilterKind::from_index(index) else {
        return false;
    };
    match view_for_filter(kind) {
        ViewDescriptor::Flat { keep, .. } => catalog.records().iter().any(|g| keep.matches(g)),
        ViewDescriptor::Collections => catalog.collection_count() > 0,
    }
}

/// Find the next filter in `direction` that has matches.
///
/// Steps at most one full cycle. The starting filter is tested last, so when
/// it is the only non-empty one the result is the same index. If no filter
/// has matches, the starting index is returned. An out-of-range `current` is
/// reduced modulo [`FilterKind::COUNT`] first.
pub fn next_non_empty_filter(current: usize, direction: Direction, catalog: &Catalog) -> usize {
    let start = current % FilterKind::COUNT;
    let mut index = start;
    for _ in 0..FilterKind::COUNT {
        index = direction.step(index);
        if filter_has_matches(index, catalog) {
            log::debug!("Filter {start} -> {index} ({direction:?})");
            return index;
        }
    }
    log::debug!("No filter has matches; staying on {start}");
    start
}

// ── Collections ─────────────────────────────────────────────────────────────

/// Games sharing the same first collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionGroup {
    pub name: String,
    pub games: Vec<GameId>,
}

/// Group games by their first collection.
///
/// Groups follow the catalog's collection order and omit empty collections.
/// Games with no collection are gathered under `"Unknown"` at the end.
pub fn collection_groups(catalog: &Catalog) -> Vec<CollectionGroup> {
    let mut groups: Vec<CollectionGroup> = catalog
        .collections()
        .iter()
        .map(|c| CollectionGroup {
            name: c.name.clone(),
            games: Vec::new(),
        })
        .collect();
    let mut unknown = Vec::new();

    for (id, game) in catalog.iter() {
        match game.first_collection() {
            Some(first) => match groups.iter_mut().find(|g| g.name == first.name) {
                Some(group) => group.games.push(id),
                None => unknown.push(id),
            },
            None => unknown.push(id),
        }
    }

    groups.retain(|g| !g.games.is_empty());
    if !unknown.is_empty() {
        groups.push(CollectionGroup {
            name: "Unknown".to_string(),
            games: unknown,
        });
    }
    groups
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
