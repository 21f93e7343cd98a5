use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded
    #[error("{0}")]
    Catalog(#[from] shelf_catalog::YamlError),

    /// Game not present in the catalog
    #[error("Game not found: {0}")]
    GameNotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn game_not_found(msg: impl Into<String>) -> Self {
        Self::GameNotFound(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
