use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_catalog::{GameRecord, collection_name, format_date, format_play_time};
use shelf_lib::settings;
use shelf_lib::{FilterKind, Shelf};

use crate::CliContext;
use crate::error::CliError;

/// Print the games in `filter`, or the collection groups for Collections.
///
/// Without an explicit filter the last shown one is resumed when
/// `general.restore_last_filter` is set. The shown filter is remembered.
pub(crate) fn run_show(
    ctx: &CliContext,
    filter: Option<FilterKind>,
    raw: bool,
) -> Result<(), CliError> {
    let catalog = ctx.load_catalog()?;
    let mut shelf = Shelf::new(catalog);
    match filter {
        Some(kind) => shelf.select_filter(kind),
        None if ctx.settings.general.restore_last_filter => {
            shelf.restore(&ctx.settings.memory)
        }
        None => {}
    }
    let filter = shelf.filter();
    remember(ctx, &shelf);

    log::info!(
        "{}",
        filter.label().if_supports_color(Stdout, |t| t.bold()),
    );

    if shelf.showing_collections() {
        let groups = shelf_lib::collection_groups(shelf.catalog());
        if groups.is_empty() {
            log::info!("  (no games)");
        }
        for group in groups {
            log::info!(
                "  {} ({})",
                group.name.if_supports_color(Stdout, |t| t.cyan()),
                group.games.len(),
            );
            for game in group.games.iter().filter_map(|&id| shelf.catalog().get(id)) {
                print_game(game, raw, "    ");
            }
        }
        return Ok(());
    }

    if shelf.view().is_empty() {
        log::info!("  (no games)");
    }
    for game in shelf.view_records() {
        print_game(game, raw, "  ");
    }
    Ok(())
}

fn remember(ctx: &CliContext, shelf: &Shelf) {
    let mut settings = ctx.settings.clone();
    shelf.remember(&mut settings.memory);
    if settings.memory == ctx.settings.memory {
        return;
    }
    if let Err(e) = settings::save_settings_to(&ctx.settings_path, &settings) {
        log::warn!("Could not save last filter: {e}");
    }
}

fn print_game(game: &GameRecord, raw: bool, indent: &str) {
    let title = if raw {
        game.title.clone()
    } else {
        shelf_catalog::clean(&game.title)
    };
    let star = if game.favorite { "★" } else { " " };
    log::info!(
        "{indent}{} {:<40} {:>10}  {:>10}  {}",
        star.if_supports_color(Stdout, |t| t.yellow()),
        title,
        format_play_time(game.play_time),
        format_date(game.last_played_at()),
        collection_name(game).if_supports_color(Stdout, |t| t.dimmed()),
    );
}
