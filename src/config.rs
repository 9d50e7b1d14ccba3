//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and auth cards.
pub const APP_NAME: &str = "EcoSwap";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Tagline shown under the logo.
pub const APP_TAGLINE: &str = "SUSTAINABLE ITEM EXCHANGE";

/// Safety disclaimer shown above the explore grid.
pub const SAFETY_DISCLAIMER: &str = "EcoSwap only provides a platform for users to list and \
discover items. All exchanges, meet-ups, and communications are conducted entirely at the \
users' own discretion and risk. EcoSwap and its developers are not responsible for any \
disputes, losses, damages, or safety issues arising from interactions between users. Users \
are advised to take necessary precautions and ensure their own safety when dealing with \
others.";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Items revealed per page of the explore grid ("Load More" step).
pub const ITEMS_PER_PAGE: usize = 16;

/// Simulated skeleton-loading delay when filters change (milliseconds).
pub const FILTER_LOADING_DELAY_MS: u32 = 500;

// =============================================================================
// Impact Configuration
// =============================================================================

/// kg of CO₂ one planted tree absorbs per year; used for the
/// trees-equivalent stat on the impact tracker.
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.0;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Base URL of the backend REST API.
pub const API_BASE_URL: &str = "https://ecoswap-api.example.com/rest/v1";

/// Public base URL of the item-images storage bucket.
pub const STORAGE_PUBLIC_URL: &str =
    "https://ecoswap-api.example.com/storage/v1/object/public/item-images";

/// Endpoint returning active item rows with their image relations.
pub fn items_endpoint() -> String {
    format!(
        "{}/items?status=eq.active&select=*,item_images(url)",
        API_BASE_URL
    )
}

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for the signed-in session.
pub const SESSION_STORAGE_KEY: &str = "ecoswap_session";

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the item catalog cache.
    pub const ITEMS_KEY: &str = "items_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default, matches the design mocks)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
