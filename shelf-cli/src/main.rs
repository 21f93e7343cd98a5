//! shelf CLI
//!
//! Command-line front end for browsing a game catalog by filter.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use shelf_lib::settings::{self, ShelfSettings};

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::error::CliError;

/// Settings and catalog location shared by every command.
pub(crate) struct CliContext {
    pub settings_path: PathBuf,
    pub settings: ShelfSettings,
    pub catalog_path: PathBuf,
}

impl CliContext {
    fn new(catalog: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        let settings_path = config.unwrap_or_else(settings::settings_path);
        let settings = settings::load_settings_from(&settings_path);
        let catalog_path = settings::resolve_catalog_path(catalog, &settings);
        Self {
            settings_path,
            settings,
            catalog_path,
        }
    }

    pub fn load_catalog(&self) -> Result<shelf_lib::Catalog, CliError> {
        log::debug!("Loading catalog from {}", self.catalog_path.display());
        Ok(shelf_catalog::load_catalog(&self.catalog_path)?)
    }
}

fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        // Plain output: info lines are the command's output
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);
    let ctx = CliContext::new(cli.catalog, cli.config);

    let result = match cli.command {
        Commands::Clean { titles } => commands::clean::run_clean(titles),
        Commands::Filters => commands::filters::run_filters(&ctx),
        Commands::Show { filter, raw } => commands::show::run_show(&ctx, filter, raw),
        Commands::Cycle { from, direction } => commands::filters::run_cycle(&ctx, from, direction),
        Commands::Favorite {
            title,
            sort_key,
            viewing,
        } => commands::favorite::run_favorite(&ctx, title, sort_key, viewing),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::run_config_path(&ctx),
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::SetCatalog { path } => commands::config::run_set_catalog(ctx, path),
        },
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}
