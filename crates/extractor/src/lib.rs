//! # Supportbot Extractor
//!
//! Turns an uploaded document into raw text units for chunking.
//!
//! A unit is one page for paginated formats and the whole file for flat
//! text. Dispatch is by case-insensitive file extension; anything other
//! than `.pdf` or `.txt` is rejected before any parsing is attempted.
//! PDF extraction is all-or-nothing: a failure on any single page fails
//! the whole document and names the page.

mod error;
mod extract;

pub use error::{ExtractError, Result};
pub use extract::extract_units;
