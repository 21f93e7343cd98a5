//! Game catalog data model, YAML I/O, and display-title cleaning.
//!
//! This crate defines the read-mostly catalog the rest of the workspace
//! filters and presents. The only mutation it exposes is the per-record
//! favorite flag; everything else is loaded once and then read.

pub mod catalog;
pub mod display;
pub mod tags;
pub mod title;
pub mod types;
pub mod yaml;

pub use catalog::Catalog;
pub use display::{collection_name, format_date, format_play_time};
pub use title::{clean, clean_opt};
pub use types::*;
pub use yaml::{load_catalog, parse_catalog, YamlError};
