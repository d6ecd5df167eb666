//! Core domain types and utilities for table-finder.
//!
//! This crate provides the guest model, the opaque table identifier, the
//! lookup session id, and the shared `Result` alias used by every other
//! crate in the workspace.

pub mod error;
pub mod guest;
pub mod id;

pub use error::Result;
pub use guest::{Guest, TableLabel};
pub use id::{LookupSessionId, ParseIdError};
