use shelf_catalog::title::{clean, clean_opt};

/// Noisy titles seen in real catalogs, plus a few degenerate inputs.
const CORPUS: &[&str] = &[
    "Super Game (USA) (Rev 1) [!]",
    "ZZZ(notgame): Test Cart (Demo)",
    "ZZZ(notgame):#Menu",
    "Legend of Zelda, The - Ocarina of Time (USA) (Rev B) (En,Fr) [!]",
    "Final Fantasy VII (USA) (Disc 1 of 3)",
    "Maniac Mansion (Disk 1 of 2) (Side A)",
    "Action 52 (52 in 1)",
    "Frogger II - ThreeeDeep! (USA) (Beta) (1984-06-15)",
    "Energy Quiz (Canada) (En,Fr-CA) (1983.06.06) (Proto)",
    "Game - USA (Track 1)",
    "Game - USA - EUR",
    "Game..",
    "Title (USA) ,",
    "Zelda [Rev 2] [T+Eng1.0] [b1]",
    "Street Fighter II (Arcade) (World)",
    "Game (Part 1) (USA)",
    "Spider-Man (USA)",
    "(USA)",
    "(USA) (Japan)",
    "  [!]  ",
    "-",
    "..",
    "A.E. (USA) (Proto)",
    "  Spaced    Out   Title  ",
];

#[test]
fn strips_region_revision_and_verified_marker() {
    assert_eq!(clean("Super Game (USA) (Rev 1) [!]"), "Super Game");
}

#[test]
fn strips_notgame_prefix_and_demo_tag() {
    assert_eq!(clean("ZZZ(notgame): Test Cart (Demo)"), "Test Cart");
}

#[test]
fn notgame_prefix_variants() {
    assert_eq!(clean("ZZZ(notgame):#Menu"), "Menu");
    assert_eq!(clean("zzz(NotGame): Diagnostics"), "Diagnostics");
}

#[test]
fn multi_region_and_language_lists() {
    assert_eq!(clean("Tetris (USA, Europe)"), "Tetris");
    assert_eq!(clean("Game Title (Europe) (En,Fr,De)"), "Game Title");
    assert_eq!(clean("Game (usa)"), "Game");
}

#[test]
fn version_and_release_stage_tags() {
    assert_eq!(clean("Donkey Kong (USA, Europe) (v1.1)"), "Donkey Kong");
    assert_eq!(clean("Game (Japan) (Beta 2)"), "Game");
    assert_eq!(clean("Game (Update 3)"), "Game");
    assert_eq!(clean("Tengen Tetris (USA) (Unl)"), "Tengen Tetris");
    assert_eq!(clean("Demo Disc Game (Trial)"), "Demo Disc Game");
}

#[test]
fn platform_tags() {
    assert_eq!(clean("Street Fighter II (Arcade)"), "Street Fighter II");
    assert_eq!(clean("Mega Man (Game Boy Color)"), "Mega Man");
    assert_eq!(clean("Super Metroid (Virtual Console)"), "Super Metroid");
}

#[test]
fn trailing_region_code_suffix() {
    assert_eq!(clean("Sonic the Hedgehog - EUR"), "Sonic the Hedgehog");
    assert_eq!(clean("Game - USA - EUR"), "Game");
    // Only known codes are treated as suffixes
    assert_eq!(clean("Mega Man - ABC"), "Mega Man - ABC");
}

#[test]
fn bracketed_dump_tags() {
    assert_eq!(clean("Zelda [Rev 2] [T+Eng1.0] [b1]"), "Zelda");
    assert_eq!(clean("Game [Hack] [?]"), "Game");
    assert_eq!(clean("Game [Redump] [Verified]"), "Game");
}

#[test]
fn disk_side_and_track_markers() {
    assert_eq!(clean("Maniac Mansion (Disk 1 of 2) (Side A)"), "Maniac Mansion");
    assert_eq!(clean("Soundtrack (Track 03)"), "Soundtrack");
}

#[test]
fn compilation_and_date_markers() {
    assert_eq!(clean("Action 52 (52 in 1)"), "Action 52");
    assert_eq!(clean("Some Game (1995)"), "Some Game");
    assert_eq!(
        clean("Frogger II - ThreeeDeep! (USA) (Beta) (1984-06-15)"),
        "Frogger II - ThreeeDeep!"
    );
}

#[test]
fn keeps_parentheses_that_are_part_of_the_title() {
    assert_eq!(clean("Game (Part 1) (USA)"), "Game (Part 1)");
    assert_eq!(clean("Spider-Man (USA)"), "Spider-Man");
}

#[test]
fn whitespace_dashes_and_trailing_punctuation() {
    assert_eq!(clean("  Spaced    Out   Title  "), "Spaced Out Title");
    assert_eq!(clean("- Game -"), "Game");
    assert_eq!(clean("Title, "), "Title");
    assert_eq!(clean("Super Mario Bros. (USA)"), "Super Mario Bros");
}

#[test]
fn falls_back_to_original_when_everything_is_stripped() {
    assert_eq!(clean("(USA)"), "(USA)");
    assert_eq!(clean("  [!]  "), "[!]");
    assert_eq!(clean("-"), "-");
}

#[test]
fn empty_and_missing_input() {
    assert_eq!(clean(""), "");
    assert_eq!(clean("   "), "");
    assert_eq!(clean_opt(None), "");
    assert_eq!(clean_opt(Some("Game (USA)")), "Game");
}

#[test]
fn clean_is_idempotent() {
    for &raw in CORPUS {
        let once = clean(raw);
        assert_eq!(clean(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn never_empty_for_non_blank_input() {
    for &raw in CORPUS {
        let cleaned = clean(raw);
        assert!(
            !cleaned.trim().is_empty(),
            "{raw:?} cleaned to an empty title"
        );
    }
}
