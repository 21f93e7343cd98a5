use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::{FilterKind, GameKey, Shelf};

use crate::CliContext;
use crate::error::CliError;

/// Toggle a game's favorite flag while "viewing" a filter and report what
/// the browser would do. The catalog file is not modified.
pub(crate) fn run_favorite(
    ctx: &CliContext,
    title: String,
    sort_key: String,
    viewing: FilterKind,
) -> Result<(), CliError> {
    let catalog = ctx.load_catalog()?;
    let key = GameKey::new(title, sort_key);
    if catalog.resolve(&key).is_none() {
        return Err(CliError::game_not_found(format!(
            "'{}' (sort key '{}')",
            key.title, key.sort_key
        )));
    }

    let mut shelf = Shelf::new(catalog);
    shelf.select_filter(viewing);
    let favorite = shelf.toggle_favorite(&key);
    shelf.process_messages();

    log::info!(
        "{}: {}",
        shelf_catalog::clean(&key.title).if_supports_color(Stdout, |t| t.bold()),
        if favorite {
            "favorite".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "not favorite".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        },
    );
    if shelf.filter() != viewing {
        log::info!(
            "Last favorite removed; view returned to {}",
            shelf.filter().label().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
