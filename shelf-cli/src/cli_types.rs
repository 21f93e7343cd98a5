//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shelf_lib::{Direction, FilterKind};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Browse a game catalog by filter and clean up release titles", long_about = None)]
pub(crate) struct Cli {
    /// Catalog YAML file or directory (defaults to the saved path, then ./catalog.yaml)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/shelf/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Clean release titles for display (reads stdin lines when no titles are given)
    Clean {
        /// Raw titles
        titles: Vec<String>,
    },

    /// List every filter with whether it currently has games
    Filters,

    /// Show the games in a filter (all, favorites, mostplayed, recent, collections)
    Show {
        /// Filter name or index (defaults to the last filter shown)
        filter: Option<FilterKind>,

        /// Show raw titles instead of cleaned ones
        #[arg(long)]
        raw: bool,
    },

    /// Print the next filter that has games
    Cycle {
        /// Filter to start from
        #[arg(default_value = "all")]
        from: FilterKind,

        /// Direction to move in (next or prev)
        #[arg(short, long, default_value = "next")]
        direction: Direction,
    },

    /// Toggle a game's favorite flag (in memory) and report the outcome
    Favorite {
        /// Game title exactly as stored in the catalog
        #[arg(short, long)]
        title: String,

        /// Sort key exactly as stored in the catalog
        #[arg(short, long, default_value = "")]
        sort_key: String,

        /// Filter being viewed when the toggle happens
        #[arg(long, default_value = "all")]
        viewing: FilterKind,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show current settings
    Show,

    /// Save the default catalog path
    SetCatalog {
        /// Catalog YAML file or directory
        path: PathBuf,
    },
}
