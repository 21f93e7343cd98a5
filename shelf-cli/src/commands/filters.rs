use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::{Direction, FilterKind, ViewDescriptor};

use crate::CliContext;
use crate::error::CliError;

/// List every filter with its game count.
pub(crate) fn run_filters(ctx: &CliContext) -> Result<(), CliError> {
    let catalog = ctx.load_catalog()?;
    log::info!(
        "{} ({} games, {} collections)",
        ctx.catalog_path.display().if_supports_color(Stdout, |t| t.bold()),
        catalog.len(),
        catalog.collection_count(),
    );
    log::info!("");

    for &kind in FilterKind::all() {
        let has_matches = shelf_lib::filter_has_matches(kind.index(), &catalog);
        let size = match shelf_lib::view_for_filter(kind) {
            flat @ ViewDescriptor::Flat { .. } => {
                let n = flat.apply(&catalog).map_or(0, |ids| ids.len());
                format!("{n} games")
            }
            ViewDescriptor::Collections => {
                format!("{} collections", catalog.collection_count())
            }
        };
        let marker = if has_matches {
            format!("{}", "●".if_supports_color(Stdout, |t| t.green()))
        } else {
            format!("{}", "○".if_supports_color(Stdout, |t| t.dimmed()))
        };
        log::info!(
            "  {} {} {:<16} {}",
            marker,
            kind.index(),
            kind.label(),
            size.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Print the next filter with games, starting from `from`.
pub(crate) fn run_cycle(
    ctx: &CliContext,
    from: FilterKind,
    direction: Direction,
) -> Result<(), CliError> {
    let catalog = ctx.load_catalog()?;
    let index = shelf_lib::next_non_empty_filter(from.index(), direction, &catalog);
    let next = FilterKind::from_index(index).unwrap_or(from);
    if next == from {
        log::info!(
            "{} {}",
            next.slug(),
            "(no other filter has games)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        log::info!("{}", next.slug());
    }
    Ok(())
}
