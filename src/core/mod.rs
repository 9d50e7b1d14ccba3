//! Core business logic for the marketplace front-end.
//!
//! This module provides:
//! - [`catalog`] - search/facet filtering and load-more pagination
//! - [`impact`] - CO₂-savings estimation
//! - [`repository`] - item fetching and record normalization
//! - [`validate`] - client-side form validation
//!
//! Everything here is synchronous pure computation over caller-owned
//! data, except the repository's fetch entry point.

pub mod catalog;
pub mod error;
pub mod impact;
pub mod repository;
pub mod validate;

pub use catalog::{
    FilterChange, FilterState, TypeTab, advance_page, apply_filter_change, compute_visible,
    count_matching,
};
pub use impact::{
    ImpactSummary, estimate_co2_saved, estimate_trees_equivalent, multiplier_for, summarize,
};
