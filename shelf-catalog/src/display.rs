//! Human-readable formatting of per-game statistics.

use chrono::{DateTime, Utc};

use crate::types::GameRecord;

/// Format a play time in seconds as `"2h 5m"` or `"42m"`.
///
/// Zero means the game was never played.
pub fn format_play_time(seconds: u64) -> String {
    if seconds == 0 {
        return "Not Played".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Format a last-played timestamp as `dd/mm/yyyy`, or `"Never"` if unset.
///
/// The Unix epoch is treated as unset.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date.filter(|d| d.timestamp_millis() != 0) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "Never".to_string(),
    }
}

/// Name of the first collection a game belongs to, or `"Unknown"`.
pub fn collection_name(game: &GameRecord) -> &str {
    game.first_collection()
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn play_time_formats() {
        assert_eq!(format_play_time(0), "Not Played");
        assert_eq!(format_play_time(59), "0m");
        assert_eq!(format_play_time(42 * 60), "42m");
        assert_eq!(format_play_time(3600), "1h 0m");
        assert_eq!(format_play_time(2 * 3600 + 5 * 60 + 30), "2h 5m");
    }

    #[test]
    fn date_formats() {
        let d = Utc.with_ymd_and_hms(2024, 3, 7, 18, 30, 0).unwrap();
        assert_eq!(format_date(Some(d)), "07/03/2024");
        assert_eq!(format_date(None), "Never");
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(format_date(Some(epoch)), "Never");
    }

    #[test]
    fn collection_name_falls_back_to_unknown() {
        let game = GameRecord::new("Loose");
        assert_eq!(collection_name(&game), "Unknown");
        let game = GameRecord::new("Boxed")
            .with_collection("SNES")
            .with_collection("Favorites 1995");
        assert_eq!(collection_name(&game), "SNES");
    }
}
