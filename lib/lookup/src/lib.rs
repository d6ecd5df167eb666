//! Guest lookup for table-finder.
//!
//! This crate provides:
//!
//! - **Matcher**: case-insensitive substring search over first and last names
//! - **Disambiguator**: narrows an ambiguous search to one guest, remembering
//!   the choice in a caller-owned [`SearchSession`]
//! - **Tablemates**: everyone else seated at a guest's table

pub mod disambiguator;
pub mod error;
pub mod matcher;
pub mod session;
pub mod tablemates;

pub use disambiguator::{Candidate, Disambiguator, GuestReport, LookupState};
pub use error::SelectionError;
pub use matcher::{MatchOutcome, find, normalize_query};
pub use session::SearchSession;
pub use tablemates::tablemates;
