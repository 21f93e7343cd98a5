pub(crate) mod clean;
pub(crate) mod config;
pub(crate) mod favorite;
pub(crate) mod filters;
pub(crate) mod show;
