use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::settings;

use crate::CliContext;
use crate::error::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path(ctx: &CliContext) -> Result<(), CliError> {
    log::info!("{}", ctx.settings_path.display());
    Ok(())
}

/// Show the effective settings.
pub(crate) fn run_config_show(ctx: &CliContext) -> Result<(), CliError> {
    let exists = ctx.settings_path.exists();
    log::info!(
        "Settings file: {} {}",
        ctx.settings_path.display().if_supports_color(Stdout, |t| t.cyan()),
        if exists {
            "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "(not found, using defaults)"
                .if_supports_color(Stdout, |t| t.dimmed())
                .to_string()
        },
    );
    log::info!("Catalog:       {}", ctx.catalog_path.display());

    let memory = &ctx.settings.memory;
    log::info!(
        "Last filter:   {}",
        memory.last_filter.as_deref().unwrap_or("-")
    );
    log::info!(
        "Last game:     {}",
        memory
            .last_game_index
            .map_or_else(|| "-".to_string(), |i| i.to_string())
    );
    log::info!(
        "Restore last filter on start: {}",
        ctx.settings.general.restore_last_filter
    );
    Ok(())
}

/// Save `path` as the default catalog location.
pub(crate) fn run_set_catalog(ctx: CliContext, path: PathBuf) -> Result<(), CliError> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    if !path.exists() {
        return Err(CliError::config(format!(
            "catalog path does not exist: {}",
            path.display()
        )));
    }

    let mut settings = ctx.settings;
    settings.library.catalog_path = Some(path.clone());
    settings::save_settings_to(&ctx.settings_path, &settings)?;
    log::info!("Catalog path set to {}", path.display());
    Ok(())
}
