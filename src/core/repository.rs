//! Item repository: the client side of the external BaaS item store.
//!
//! Fetches the active-item collection as JSON, resolves image references
//! to public URLs and normalizes the loosely-typed rows into [`Item`]s.
//! How the backend paginates, caches or indexes is not this module's
//! business; it consumes one materialized snapshot per session.

use crate::config;
use crate::core::error::{FetchError, ItemParseError};
use crate::models::{Category, Condition, Item, ItemRecord, ItemStatus, ListingType};
use crate::utils::fetch_json_cached;

/// Fetch the active item catalog from the backend.
///
/// Results are cached in sessionStorage for the browsing session.
/// Records that fail normalization are logged and dropped; one corrupt
/// row must not blank the whole catalog.
pub async fn fetch_active_items() -> Result<Vec<Item>, FetchError> {
    let records: Vec<ItemRecord> =
        fetch_json_cached(&config::items_endpoint(), config::cache::ITEMS_KEY).await?;

    let (items, errors) = normalize_records(records);
    for err in &errors {
        web_sys::console::error_1(&format!("ecoswap: dropped item record: {}", err).into());
    }
    Ok(items)
}

/// Normalize raw records, splitting parse failures out for the caller
/// to report.
pub fn normalize_records(records: Vec<ItemRecord>) -> (Vec<Item>, Vec<ItemParseError>) {
    let mut items = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    for record in records {
        match record_to_item(record) {
            Ok(item) => items.push(item),
            Err(err) => errors.push(err),
        }
    }
    (items, errors)
}

/// Normalize one backend row into a domain [`Item`].
///
/// Listing type and status are closed sets and fail fast on unknown
/// values. Category and condition labels outside their sets become
/// `None` (uncategorized), per the documented fallback behavior.
fn record_to_item(record: ItemRecord) -> Result<Item, ItemParseError> {
    let listing_type = ListingType::from_wire(&record.listing_type)
        .ok_or_else(|| ItemParseError::UnknownListingType(record.listing_type.clone()))?;
    let status = ItemStatus::from_wire(&record.status)
        .ok_or_else(|| ItemParseError::UnknownStatus(record.status.clone()))?;

    let weight_kg = match parse_weight(record.weight.as_ref()) {
        Some(w) if w < 0.0 => return Err(ItemParseError::NegativeWeight(w)),
        other => other,
    };

    Ok(Item {
        id: id_string(&record.id),
        title: record.title,
        images: record
            .item_images
            .iter()
            .map(|img| resolve_image_url(&img.url))
            .collect(),
        listing_type,
        category: record.category.as_deref().and_then(Category::from_label),
        condition: record.condition.as_deref().and_then(Condition::from_label),
        weight_kg,
        status,
        description: record.description,
        owner_name: record.owner_name.filter(|name| !name.trim().is_empty()),
    })
}

/// The id column is an integer for legacy rows and a UUID for new ones.
fn id_string(id: &serde_json::Value) -> String {
    match id.as_str() {
        Some(s) => s.to_string(),
        None => id.to_string(),
    }
}

/// The listing form stored weight as text; older rows have numbers.
fn parse_weight(weight: Option<&serde_json::Value>) -> Option<f64> {
    let value = weight?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Resolve an image reference to a retrievable URL.
///
/// Rows hold either full URLs or paths inside the public storage bucket.
fn resolve_image_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!(
            "{}/{}",
            config::STORAGE_PUBLIC_URL.trim_end_matches('/'),
            raw.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(json: &str) -> ItemRecord {
        serde_json::from_str(json).expect("test record should parse")
    }

    #[test]
    fn test_normalizes_a_full_row() {
        let record = record_json(
            r#"{
                "id": 3,
                "title": "2nd Hand Introduction to Parallel Programming",
                "item_images": [{"url": "u1/3/175.png"}, {"url": "https://cdn.example.com/x.png"}],
                "type": "donate",
                "category": "Books",
                "condition": "Liked New",
                "weight": "1.2",
                "status": "active",
                "description": "Course textbook",
                "owner_name": "Alex Tan"
            }"#,
        );
        let (items, errors) = normalize_records(vec![record]);
        assert!(errors.is_empty());
        let item = &items[0];
        assert_eq!(item.id, "3");
        assert_eq!(item.listing_type, ListingType::Donate);
        assert_eq!(item.category, Some(Category::Books));
        // Legacy label normalized.
        assert_eq!(item.condition, Some(Condition::LikeNew));
        assert_eq!(item.weight_kg, Some(1.2));
        assert!(item.images[0].starts_with(config::STORAGE_PUBLIC_URL));
        assert!(item.images[0].ends_with("u1/3/175.png"));
        assert_eq!(item.images[1], "https://cdn.example.com/x.png");
        assert_eq!(item.owner_name.as_deref(), Some("Alex Tan"));
    }

    #[test]
    fn test_missing_or_blank_owner_is_absent() {
        let missing = record_json(
            r#"{"id": 1, "title": "Keyboard", "type": "swap", "status": "active"}"#,
        );
        let blank = record_json(
            r#"{"id": 2, "title": "Mug", "type": "donate", "status": "active",
                "owner_name": "  "}"#,
        );
        let (items, errors) = normalize_records(vec![missing, blank]);
        assert!(errors.is_empty());
        assert_eq!(items[0].owner_name, None);
        assert_eq!(items[1].owner_name, None);
    }

    #[test]
    fn test_unknown_category_becomes_uncategorized() {
        let record = record_json(
            r#"{"id": "a-b-c", "title": "Vintage Chair", "type": "swap",
                "category": "Furniture", "status": "active"}"#,
        );
        let (items, errors) = normalize_records(vec![record]);
        assert!(errors.is_empty());
        assert_eq!(items[0].category, None);
        assert_eq!(items[0].id, "a-b-c");
    }

    #[test]
    fn test_unknown_listing_type_fails_fast() {
        let record = record_json(
            r#"{"id": 1, "title": "X", "type": "loan", "status": "active"}"#,
        );
        let (items, errors) = normalize_records(vec![record]);
        assert!(items.is_empty());
        assert_eq!(
            errors,
            vec![ItemParseError::UnknownListingType("loan".into())]
        );
    }

    #[test]
    fn test_negative_weight_fails_fast() {
        let record = record_json(
            r#"{"id": 1, "title": "X", "type": "swap", "weight": -2.5, "status": "active"}"#,
        );
        let (items, errors) = normalize_records(vec![record]);
        assert!(items.is_empty());
        assert_eq!(errors, vec![ItemParseError::NegativeWeight(-2.5)]);
    }

    #[test]
    fn test_one_bad_row_does_not_drop_the_rest() {
        let good = record_json(
            r#"{"id": 1, "title": "Keyboard", "type": "swap", "status": "active"}"#,
        );
        let bad = record_json(
            r#"{"id": 2, "title": "Mystery", "type": "swap", "status": "pending"}"#,
        );
        let (items, errors) = normalize_records(vec![good, bad]);
        assert_eq!(items.len(), 1);
        assert_eq!(errors.len(), 1);
    }
}
