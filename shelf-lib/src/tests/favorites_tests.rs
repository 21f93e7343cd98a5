use super::*;
use std::sync::mpsc;

use shelf_catalog::GameRecord;

fn resets(rx: &mpsc::Receiver<ShelfMessage>) -> usize {
    rx.try_iter()
        .filter(|m| *m == ShelfMessage::ResetToAll)
        .count()
}

#[test]
fn unfavoriting_the_last_favorite_in_favorites_view_resets() {
    let mut catalog = Catalog::from_records([GameRecord::new("A").with_favorite(true)]);
    let (tx, rx) = mpsc::channel();

    let result = toggle_favorite(&mut catalog, &GameKey::new("A", ""), FilterKind::Favorites, &tx);

    assert!(!result);
    assert!(!catalog.get(GameId(0)).unwrap().favorite);
    assert_eq!(resets(&rx), 1);
}

#[test]
fn unfavoriting_one_of_several_does_not_reset() {
    let mut catalog = Catalog::from_records([
        GameRecord::new("A").with_favorite(true),
        GameRecord::new("B").with_favorite(true),
    ]);
    let (tx, rx) = mpsc::channel();

    assert!(!toggle_favorite(&mut catalog, &GameKey::new("A", ""), FilterKind::Favorites, &tx));
    assert_eq!(resets(&rx), 0);

    // B is now the sole favorite
    assert!(!toggle_favorite(&mut catalog, &GameKey::new("B", ""), FilterKind::Favorites, &tx));
    assert_eq!(resets(&rx), 1);
}

#[test]
fn other_filters_never_reset() {
    for &viewing in FilterKind::all() {
        if viewing == FilterKind::Favorites {
            continue;
        }
        let mut catalog = Catalog::from_records([GameRecord::new("A").with_favorite(true)]);
        let (tx, rx) = mpsc::channel();
        assert!(!toggle_favorite(&mut catalog, &GameKey::new("A", ""), viewing, &tx));
        assert_eq!(resets(&rx), 0, "viewing {viewing:?}");
    }
}

#[test]
fn favoriting_returns_true_and_never_resets() {
    let mut catalog = Catalog::from_records([GameRecord::new("A")]);
    let (tx, rx) = mpsc::channel();

    assert!(toggle_favorite(&mut catalog, &GameKey::new("A", ""), FilterKind::Favorites, &tx));
    assert!(is_favorite(&catalog, &GameKey::new("A", "")));
    let messages: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        messages,
        vec![ShelfMessage::FavoriteChanged {
            id: GameId(0),
            favorite: true
        }]
    );
}

#[test]
fn resolves_detached_copy_by_title_and_sort_key() {
    let mut catalog = Catalog::from_records([
        GameRecord::new("Tetris").with_sort_key("gb"),
        GameRecord::new("Tetris").with_sort_key("nes"),
    ]);
    let (tx, _rx) = mpsc::channel();

    let copy = catalog.get(GameId(1)).unwrap().clone();
    assert!(toggle_favorite(&mut catalog, &copy.key(), FilterKind::All, &tx));
    assert!(!catalog.get(GameId(0)).unwrap().favorite);
    assert!(catalog.get(GameId(1)).unwrap().favorite);
    // The copy itself is untouched
    assert!(!copy.favorite);
}

#[test]
fn unknown_game_is_a_no_op() {
    let mut catalog = Catalog::from_records([GameRecord::new("A").with_favorite(true)]);
    let before = catalog.records().to_vec();
    let (tx, rx) = mpsc::channel();

    let missing = GameKey::new("Missing", "");
    assert!(!toggle_favorite(&mut catalog, &missing, FilterKind::Favorites, &tx));
    assert!(!is_favorite(&catalog, &missing));
    assert!(!toggle_favorite_by_id(&mut catalog, GameId(9), FilterKind::Favorites, &tx));
    assert_eq!(catalog.records(), before.as_slice());
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn closed_channel_is_harmless() {
    let mut catalog = Catalog::from_records([GameRecord::new("A").with_favorite(true)]);
    let (tx, rx) = mpsc::channel();
    drop(rx);

    assert!(!toggle_favorite(&mut catalog, &GameKey::new("A", ""), FilterKind::Favorites, &tx));
    assert_eq!(catalog.favorite_count(), 0);
}
