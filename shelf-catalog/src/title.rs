//! Display-title cleaning for noisy release names.
//!
//! Catalog titles often carry the release metadata of the dump they came
//! from:
//! ```text
//! Game Name (USA, Europe) (Rev 1) (En,Fr,De) (Disc 1 of 2) [!] - EUR
//! ```
//! [`clean`] strips that metadata with an ordered list of rewrite rules and
//! returns a title suitable for display. It never returns an empty string for
//! a non-empty input.

use std::sync::LazyLock;

use regex::Regex;

use crate::tags::{DUMP_FLAGS, LANGUAGES, PLATFORMS, REGION_CODES, REGIONS, VERSIONS};

/// A single `(pattern, replacement)` rewrite applied to every match.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("title rule must compile"),
            replacement,
        }
    }

    fn strip(pattern: &str) -> Self {
        Self::new(pattern, "")
    }
}

fn alternation(lists: &[&[&str]]) -> String {
    lists
        .iter()
        .flat_map(|list| list.iter().copied())
        .collect::<Vec<_>>()
        .join("|")
}

/// Rules in application order. Each one removes every occurrence it finds.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let locales = alternation(&[REGIONS, LANGUAGES]);
    vec![
        // (USA), (USA, Europe), (En,Fr,De), (Bootleg)
        Rule::strip(&format!(
            r"(?i)\s*\((?:{locales})(?:\s*[,+/]\s*(?:{locales}))*\)"
        )),
        // (Rev 1), (v1.1), (Beta 2), (Demo), (Unl)
        Rule::strip(&format!(r"(?i)\s*\((?:{})\)", alternation(&[VERSIONS]))),
        // (SNES), (Arcade), (Virtual Console)
        Rule::strip(&format!(r"(?i)\s*\((?:{})\)", alternation(&[PLATFORMS]))),
        // " - EUR" at the end
        Rule::strip(&format!(
            r"(?:\s+-\s+(?:{}))+\s*$",
            alternation(&[REGION_CODES])
        )),
        // [!], [b1], [Rev 2], [Hack], [T+Eng]
        Rule::strip(&format!(r"(?i)\s*\[(?:{})\]", alternation(&[DUMP_FLAGS]))),
        // (Disk 1 of 2), (Side A), (Track 03)
        Rule::strip(r"(?i)\s*\((?:(?:Disk|Disc)\s*\d+(?:\s*of\s*\d+)?|Side\s*[AB]|Track\s*\d+)\)"),
        // (4 in 1), (1995), (1984-06-15), (1999.12.01), (19xx)
        Rule::strip(r"(?i)\s*\(\d+\s*in\s*\d+\)"),
        Rule::strip(r"(?i)\s*\((?:\d{4}|\d{2}xx)(?:[-.]\d{2}(?:[-.]\d{2})?)?\)"),
        // Catalog marker for entries that are not games
        Rule::strip(r"(?i)^\s*ZZZ\(notgame\):#?\s*"),
        // Whitespace and punctuation cleanup
        Rule::new(r"\s{2,}", " "),
        Rule::strip(r"^[\s-]+|[\s-]+$"),
        Rule::strip(r"[,.]$"),
    ]
});

/// Apply every rule once, in order.
fn apply_rules(title: &str) -> String {
    let mut s = title.trim().to_string();
    for rule in RULES.iter() {
        if rule.pattern.is_match(&s) {
            s = rule.pattern.replace_all(&s, rule.replacement).into_owned();
        }
    }
    s
}

/// Clean a raw catalog title for display.
///
/// The rule list is re-applied until nothing changes, so metadata uncovered
/// by a later rule (a ` - USA` suffix hidden behind `(Track 1)`, a second
/// trailing period) is removed too, and `clean(clean(s)) == clean(s)`. Every
/// rewrite shortens the string, which bounds the loop.
///
/// If cleaning removes everything, the trimmed original is returned instead.
///
/// # Examples
///
/// ```
/// use shelf_catalog::title::clean;
///
/// assert_eq!(clean("Super Game (USA) (Rev 1) [!]"), "Super Game");
/// assert_eq!(clean("ZZZ(notgame): Test Cart (Demo)"), "Test Cart");
/// assert_eq!(clean("(USA)"), "(USA)");
/// ```
pub fn clean(title: &str) -> String {
    let mut current = apply_rules(title);
    loop {
        let next = apply_rules(&current);
        if next == current {
            break;
        }
        current = next;
    }

    if current.trim().is_empty() {
        title.trim().to_string()
    } else {
        current
    }
}

/// [`clean`] for a title that may be missing. `None` becomes `""`.
pub fn clean_opt(title: Option<&str>) -> String {
    title.map(clean).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_compile() {
        assert_eq!(RULES.len(), 12);
    }

    #[test]
    fn single_pass_leaves_exposed_suffix() {
        // One pass removes the track marker but not the suffix it was hiding;
        // the fixed-point loop in `clean` takes care of that.
        assert_eq!(apply_rules("Game - USA (Track 1)"), "Game - USA");
        assert_eq!(clean("Game - USA (Track 1)"), "Game");
    }
}
