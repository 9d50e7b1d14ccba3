//! Item domain types: listings, classification enums and the raw wire record.
//!
//! The backend stores loosely-typed strings ("Home Goods", "donate",
//! legacy "Liked New"); everything past the repository boundary uses the
//! closed enums defined here.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Classification Enums
// =============================================================================

/// Whether an item is given away or exchanged. Always present, exactly
/// one of two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListingType {
    Donate,
    Swap,
}

impl ListingType {
    /// Parse the backend's lowercase column value ("donate" / "swap").
    /// Capitalized display labels are accepted too.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "donate" => Some(Self::Donate),
            "swap" => Some(Self::Swap),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Donate => "Donate",
            Self::Swap => "Swap",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item category facet. The set is closed; labels match the backend's
/// category column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Clothing,
    Books,
    Electronics,
    HomeGoods,
    Stationery,
    Others,
}

impl Category {
    /// All categories in sidebar display order.
    pub const ALL: [Category; 6] = [
        Category::Clothing,
        Category::Books,
        Category::Electronics,
        Category::HomeGoods,
        Category::Stationery,
        Category::Others,
    ];

    /// Parse a backend label. Unrecognized labels return `None`, which
    /// downstream code treats as "uncategorized" (matches no facet value,
    /// falls back to the Others CO₂ multiplier).
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "clothing" => Some(Self::Clothing),
            "books" => Some(Self::Books),
            "electronics" => Some(Self::Electronics),
            // the seed data spells this both ways
            "home goods" => Some(Self::HomeGoods),
            "stationery" => Some(Self::Stationery),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::Electronics => "Electronics",
            Self::HomeGoods => "Home Goods",
            Self::Stationery => "Stationery",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item condition facet, best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Condition {
    BrandNew,
    LikeNew,
    LightlyUsed,
    WellUsed,
    HeavilyUsed,
}

impl Condition {
    /// All conditions in sidebar display order.
    pub const ALL: [Condition; 5] = [
        Condition::BrandNew,
        Condition::LikeNew,
        Condition::LightlyUsed,
        Condition::WellUsed,
        Condition::HeavilyUsed,
    ];

    /// Parse a backend label. The legacy "Liked New" typo from early seed
    /// rows is normalized to Like New.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "brand new" => Some(Self::BrandNew),
            "like new" | "liked new" => Some(Self::LikeNew),
            "lightly used" => Some(Self::LightlyUsed),
            "well used" => Some(Self::WellUsed),
            "heavily used" => Some(Self::HeavilyUsed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BrandNew => "Brand New",
            Self::LikeNew => "Like New",
            Self::LightlyUsed => "Lightly Used",
            Self::WellUsed => "Well Used",
            Self::HeavilyUsed => "Heavily Used",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status. Only active items are eligible for discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Active,
    Completed,
}

impl ItemStatus {
    /// Parse the backend's lowercase status column.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// How the listed item changes hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupMethod {
    Pickup,
    DropOff,
}

impl PickupMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::DropOff => "Drop-off",
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single listed good, fully normalized.
///
/// `category`, `condition` and `weight_kg` are optional on the wire;
/// absence means "unclassified", never an error.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Stable identifier (backend may use integers or UUIDs).
    pub id: String,
    pub title: String,
    /// Resolved image URLs, may be empty.
    pub images: Vec<String>,
    pub listing_type: ListingType,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    /// Declared weight in kg; `None` yields zero estimated impact.
    pub weight_kg: Option<f64>,
    pub status: ItemStatus,
    pub description: String,
    /// Lister's display name; the detail page falls back when absent.
    pub owner_name: Option<String>,
}

impl Item {
    /// First image, for card thumbnails.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Mark the exchange as done. Returns `false` when already completed,
    /// so a double-click cannot fire the side effects twice.
    pub fn mark_completed(&mut self) -> bool {
        if self.status == ItemStatus::Completed {
            return false;
        }
        self.status = ItemStatus::Completed;
        true
    }
}

// =============================================================================
// Wire Record
// =============================================================================

/// Image row from the `item_images` relation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImageRecord {
    pub url: String,
}

/// Raw item row as returned by the backend REST endpoint.
///
/// Kept serde-faithful to the schema; normalization into [`Item`] happens
/// in [`crate::core::repository`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ItemRecord {
    /// Integer or UUID string depending on table generation.
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub item_images: Vec<ImageRecord>,
    #[serde(rename = "type")]
    pub listing_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    /// Stored as a numeric string by the listing form.
    #[serde(default)]
    pub weight: Option<serde_json::Value>,
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_type_from_wire() {
        assert_eq!(ListingType::from_wire("donate"), Some(ListingType::Donate));
        assert_eq!(ListingType::from_wire("Swap"), Some(ListingType::Swap));
        assert_eq!(ListingType::from_wire("loan"), None);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_category_unknown_label_is_absent() {
        assert_eq!(Category::from_label("Furniture"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_condition_normalizes_legacy_label() {
        assert_eq!(Condition::from_label("Liked New"), Some(Condition::LikeNew));
        assert_eq!(Condition::from_label("Like New"), Some(Condition::LikeNew));
    }

    #[test]
    fn test_status_from_wire() {
        assert_eq!(ItemStatus::from_wire("active"), Some(ItemStatus::Active));
        assert_eq!(
            ItemStatus::from_wire("completed"),
            Some(ItemStatus::Completed)
        );
        assert_eq!(ItemStatus::from_wire("archived"), None);
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut item = Item {
            id: "1".to_string(),
            title: "Kettle".to_string(),
            images: Vec::new(),
            listing_type: ListingType::Donate,
            category: None,
            condition: None,
            weight_kg: None,
            status: ItemStatus::Active,
            description: String::new(),
            owner_name: None,
        };
        assert!(item.mark_completed());
        assert_eq!(item.status, ItemStatus::Completed);
        assert!(!item.mark_completed());
    }

    #[test]
    fn test_record_deserializes_sparse_row() {
        let json = r#"{
            "id": 7,
            "title": "IKEA Desk Lamp",
            "type": "swap",
            "status": "active"
        }"#;
        let record: ItemRecord = serde_json::from_str(json).expect("sparse row should parse");
        assert!(record.item_images.is_empty());
        assert_eq!(record.category, None);
        assert_eq!(record.weight, None);
    }
}
