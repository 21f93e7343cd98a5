//! Tag vocabularies found in No-Intro, Redump and GoodTools style names.
//!
//! Each list is matched case-insensitively as a whole parenthesized or
//! bracketed tag by [`crate::title`]. Entries are regex fragments, so literal
//! metacharacters must be escaped.

/// Region, country and locale names, plus a few catalog markers that share
/// their parenthesized position (`Rev` without a number, `Bootleg`).
pub const REGIONS: &[&str] = &[
    "USA",
    "Japan",
    "Europe",
    "World",
    "Australia",
    "Korea",
    "China",
    "Taiwan",
    "Brazil",
    "France",
    "Germany",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Portugal",
    "Russia",
    "Hong Kong",
    "Asia",
    "Canada",
    "Mexico",
    "Argentina",
    "Chile",
    "Colombia",
    "India",
    "South Africa",
    "United Kingdom",
    "UK",
    "New Zealand",
    "Poland",
    "Czech Republic",
    "Hungary",
    "Greece",
    "Turkey",
    "Israel",
    "Saudi Arabia",
    "UAE",
    "Scandinavia",
    "Latin America",
    "US",
    "EU",
    "JP",
    "NTSC",
    "NTSC-U",
    "NTSC-J",
    "PAL",
    "Unknown",
    "Rev",
    "Bootleg",
    "Pirate",
];

/// Language codes and names as they appear in `(En,Fr,De)` lists.
pub const LANGUAGES: &[&str] = &[
    "En", "Fr", "De", "Es", "It", "Nl", "Pt", "Sv", "No", "Da", "Fi", "Ja", "Zh", "Ko", "Ru",
    "Pl", "Cs", "Hu", "El", "Tr", "Ar", "He", "Ca", "Pt-BR", "Fr-CA", "En-GB", "Zh-Hant",
    "Zh-Hans", "English", "French", "German", "Spanish", "Italian", "Japanese", "Chinese",
    "Korean", "Russian", "Dutch", "Swedish", "Portuguese", "Multi\\d*",
];

/// Version, build and release-stage markers.
pub const VERSIONS: &[&str] = &[
    r"Rev\s*[\w.]+",
    r"Version\s*[\w.]+",
    r"v\d+(?:\.\w+)*",
    r"Update\s*[\w.]+",
    r"Beta(?:\s*\d+)?",
    r"Alpha(?:\s*\d+)?",
    r"Demo",
    r"Prototype",
    r"Proto",
    r"Unlicensed",
    r"Unl",
    r"Sample",
    r"Preview",
    r"Trial",
    r"Kiosk",
    r"Promo",
    r"Debug",
];

/// Console, handheld and arcade-board names.
pub const PLATFORMS: &[&str] = &[
    "NES",
    "Famicom",
    "SNES",
    "Super Famicom",
    "N64",
    "Nintendo 64",
    "GameCube",
    "GC",
    "Wii",
    "Wii U",
    "Game Boy",
    "Game Boy Color",
    "Game Boy Advance",
    "GB",
    "GBC",
    "GBA",
    "DS",
    "NDS",
    "3DS",
    "Switch",
    "SG-1000",
    "Master System",
    "SMS",
    "Genesis",
    "Mega Drive",
    "Sega CD",
    "Mega-CD",
    "32X",
    "Saturn",
    "Dreamcast",
    "Game Gear",
    "GG",
    "PlayStation",
    "PlayStation \\d",
    "PS1",
    "PSX",
    "PS2",
    "PS3",
    "PSP",
    "PS Vita",
    "Vita",
    "Xbox",
    "Xbox 360",
    "PC Engine",
    "TurboGrafx-16",
    "Neo Geo",
    "NeoGeo",
    "Neo Geo Pocket",
    "Arcade",
    "MAME",
    "CPS1",
    "CPS2",
    "CPS3",
    "Naomi",
    "Atomiswave",
    "Atari 2600",
    "Atari 7800",
    "Lynx",
    "Jaguar",
    "ColecoVision",
    "Intellivision",
    "MSX",
    "MSX2",
    "Virtual Console",
    "Switch Online",
];

/// Three-letter region codes that appear as a ` - CODE` suffix.
pub const REGION_CODES: &[&str] = &[
    "USA", "EUR", "JPN", "JAP", "PAL", "KOR", "CHN", "TWN", "BRA", "AUS", "WLD", "FRA", "GER",
    "SPA", "ITA", "UKV", "NOE", "UNK",
];

/// Dump-quality, provenance and modification markers in brackets.
pub const DUMP_FLAGS: &[&str] = &[
    r"Rev\s*[\w.]+",
    r"v\d+(?:\.\w+)*",
    "Good",
    "Bad",
    "Overdump",
    "Underdump",
    "Verified",
    "Trurip",
    "No-Intro",
    "Redump",
    "Crack",
    "Cracked",
    "Trainer",
    "Cheat",
    "Hack",
    "Patch",
    "Patched",
    "Fixed",
    "Translated",
    r"T[+-][^\]]*",
    r"[!?]+p?",
    r"[abfhopt]\d*",
    "cr",
];
