//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_json_cached`] - Network fetching with timeout
//! - [`cache`] - sessionStorage caching for the item catalog
//! - [`dom`] - safe browser API access
//! - [`format`] - display formatting for CO₂ values and weights

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{RaceResult, fetch_json, fetch_json_cached, race_with_timeout};
