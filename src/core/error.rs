//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`CatalogError`] - Filter/pagination contract violations
//! - [`ImpactError`] - CO₂ estimation contract violations
//! - [`ItemParseError`] - Malformed item records from the backend
//! - [`ValidationError`] - Client-side form validation failures
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use std::fmt;

/// Catalog filter engine contract violations.
///
/// Empty results are never errors; these only cover caller bugs
/// in filter-state construction.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Page size must be at least 1.
    InvalidPageSize(usize),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPageSize(size) => {
                write!(f, "page size must be >= 1, got {}", size)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Impact estimator contract violations.
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// Item weight must be non-negative.
    NegativeWeight(f64),
    /// Total CO₂ input must be non-negative.
    NegativeTotal(f64),
}

impl fmt::Display for ImpactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight(w) => write!(f, "item weight must be >= 0 kg, got {}", w),
            Self::NegativeTotal(t) => write!(f, "total CO₂ must be >= 0 kg, got {}", t),
        }
    }
}

impl std::error::Error for ImpactError {}

/// Errors raised while normalizing a raw backend record into an
/// [`Item`](crate::models::Item).
///
/// Listing type and status are closed two-value sets; anything else in
/// those columns is an upstream data bug and must surface, not be coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemParseError {
    /// Listing type outside {donate, swap}.
    UnknownListingType(String),
    /// Status outside {active, completed}.
    UnknownStatus(String),
    /// Declared weight below zero.
    NegativeWeight(f64),
}

impl fmt::Display for ItemParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownListingType(t) => write!(f, "unknown listing type '{}'", t),
            Self::UnknownStatus(s) => write!(f, "unknown item status '{}'", s),
            Self::NegativeWeight(w) => write!(f, "item weight must be >= 0 kg, got {}", w),
        }
    }
}

impl std::error::Error for ItemParseError {}

/// Form validation failures for login, signup and listing forms.
///
/// Display messages match the inline messages shown next to each form.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingCredentials,
    InvalidEmail,
    WeakPassword,
    PasswordMismatch,
    MissingFields,
    PledgeNotAccepted,
    EmptyTitle,
    NoCondition,
    NoCategory,
    EmptyWeight,
    InvalidWeight,
    EmptyDescription,
    NoPickupMethod,
    EmptyLocation,
    NoImages,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingCredentials => "Email and password are required.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::WeakPassword => {
                "Password must be at least 8 characters with a letter and a number."
            }
            Self::PasswordMismatch => "Passwords do not match.",
            Self::MissingFields => "All fields are required.",
            Self::PledgeNotAccepted => "You must agree to the EcoSwap pledge.",
            Self::EmptyTitle => "Please enter an item title",
            Self::NoCondition => "Please select item condition",
            Self::NoCategory => "Please select a category",
            Self::EmptyWeight => "Please enter the item weight",
            Self::InvalidWeight => "Please enter a valid non-negative weight in kg",
            Self::EmptyDescription => "Please enter an item description",
            Self::NoPickupMethod => "Please select a pickup/drop-off method",
            Self::EmptyLocation => "Please enter your campus location",
            Self::NoImages => "Please upload at least one image",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for ValidationError {}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}
