//! Guest store for table-finder.
//!
//! This crate provides:
//!
//! - **Sources**: where guest rows come from (`CsvSource`, `StaticSource`)
//! - **Column mapping**: tolerant header matching for seating-list files
//! - **Guest store**: loads a source once and caches the deduplicated roster

pub mod config;
pub mod error;
pub mod source;
pub mod store;

pub use config::{ColumnMapping, RosterConfig, TableLabelStyle};
pub use error::RosterError;
pub use source::{CsvSource, GuestSource, StaticSource};
pub use store::{GuestStore, Roster};
