//! Catalog filter engine: search, faceted filtering and load-more
//! pagination over the active item collection.
//!
//! The engine is a set of pure functions over caller-owned state. The UI
//! recomputes the visible page from scratch on every state change; with
//! catalogs in the tens-to-hundreds range an O(n) pass per keystroke is
//! cheaper than any incremental bookkeeping.

use std::collections::BTreeSet;

use crate::config::ITEMS_PER_PAGE;
use crate::core::error::CatalogError;
use crate::models::{Category, Condition, Item, ItemStatus, ListingType};

// =============================================================================
// Filter State
// =============================================================================

/// The All/Donate/Swap tab row above the product grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeTab {
    #[default]
    All,
    Donate,
    Swap,
}

impl TypeTab {
    pub const ALL_TABS: [TypeTab; 3] = [TypeTab::All, TypeTab::Donate, TypeTab::Swap];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Donate => "Donate",
            Self::Swap => "Swap",
        }
    }

    fn matches(&self, listing_type: ListingType) -> bool {
        match self {
            Self::All => true,
            Self::Donate => listing_type == ListingType::Donate,
            Self::Swap => listing_type == ListingType::Swap,
        }
    }
}

/// Search, facet and pagination state for one browsing session.
///
/// Owned by the explore page; every mutation goes through
/// [`apply_filter_change`] or [`advance_page`] so the page counter can
/// never drift out of sync with the criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Free-text title search, matched case-insensitively.
    pub search_text: String,
    pub active_tab: TypeTab,
    /// Empty set = no category restriction.
    pub categories: BTreeSet<Category>,
    /// Empty set = no condition restriction.
    pub conditions: BTreeSet<Condition>,
    /// Items revealed per "Load More" click. Must be >= 1.
    pub page_size: usize,
    /// Number of pages currently revealed, starting at 1.
    pub page_count: usize,
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            active_tab: TypeTab::All,
            categories: BTreeSet::new(),
            conditions: BTreeSet::new(),
            page_size,
            page_count: 1,
        }
    }

    /// Seed the search box, e.g. from a `?search=` route parameter.
    pub fn with_search(search: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.search_text = search.into();
        state
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

/// A single user action that changes a filter criterion.
///
/// Applying any of these resets pagination in the same transition;
/// there is deliberately no way to change a criterion without the reset.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterChange {
    Search(String),
    Tab(TypeTab),
    Categories(BTreeSet<Category>),
    Conditions(BTreeSet<Condition>),
    /// The sidebar's "Clear All": drops both facet sets.
    ClearFacets,
}

// =============================================================================
// Engine Operations
// =============================================================================

/// Does `item` pass every active criterion?
///
/// AND across dimensions, OR within a facet's selected set. An absent
/// category/condition never matches a non-empty selection.
fn matches(item: &Item, state: &FilterState) -> bool {
    let matches_search = state.search_text.is_empty()
        || item
            .title
            .to_lowercase()
            .contains(&state.search_text.to_lowercase());

    let matches_tab = state.active_tab.matches(item.listing_type);

    let matches_category = state.categories.is_empty()
        || item
            .category
            .is_some_and(|cat| state.categories.contains(&cat));

    let matches_condition = state.conditions.is_empty()
        || item
            .condition
            .is_some_and(|cond| state.conditions.contains(&cond));

    matches_search && matches_tab && matches_category && matches_condition
}

/// Compute the currently visible page of results.
///
/// Filters `items` in order (stable, no re-sort), then truncates to the
/// first `page_size * page_count` entries. Items not in `Active` status
/// are dropped even though the repository should already have excluded
/// them; a stale cache must not resurface completed listings.
///
/// An empty result is a valid outcome, not an error. `page_size == 0`
/// is a caller bug and fails fast.
pub fn compute_visible<'a>(
    items: &'a [Item],
    state: &FilterState,
) -> Result<Vec<&'a Item>, CatalogError> {
    if state.page_size == 0 {
        return Err(CatalogError::InvalidPageSize(state.page_size));
    }

    let revealed = state.page_size.saturating_mul(state.page_count);
    Ok(items
        .iter()
        .filter(|item| item.status == ItemStatus::Active)
        .filter(|item| matches(item, state))
        .take(revealed)
        .collect())
}

/// Count every item matching the criteria, ignoring pagination.
///
/// The grid uses this to decide whether "Load More" has anything left
/// to reveal.
pub fn count_matching(items: &[Item], state: &FilterState) -> usize {
    items
        .iter()
        .filter(|item| item.status == ItemStatus::Active)
        .filter(|item| matches(item, state))
        .count()
}

/// Reveal one more page. Filter criteria are untouched.
///
/// Calling this when everything is already visible is harmless; the
/// next [`compute_visible`] simply returns the same full set.
pub fn advance_page(state: &FilterState) -> FilterState {
    let mut next = state.clone();
    next.page_count += 1;
    next
}

/// Apply a criterion change, resetting pagination to the first page in
/// the same transition.
///
/// The reset must never be a separate step: two-effect patterns where a
/// filter changes and a later effect resets the page leave a window
/// where page N of the old results is shown against the new criteria.
pub fn apply_filter_change(state: &FilterState, change: FilterChange) -> FilterState {
    let mut next = state.clone();
    match change {
        FilterChange::Search(text) => next.search_text = text,
        FilterChange::Tab(tab) => next.active_tab = tab,
        FilterChange::Categories(categories) => next.categories = categories,
        FilterChange::Conditions(conditions) => next.conditions = conditions,
        FilterChange::ClearFacets => {
            next.categories.clear();
            next.conditions.clear();
        }
    }
    next.page_count = 1;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        id: &str,
        title: &str,
        listing_type: ListingType,
        category: Option<Category>,
        condition: Option<Condition>,
    ) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            images: vec![],
            listing_type,
            category,
            condition,
            weight_kg: None,
            status: ItemStatus::Active,
            description: String::new(),
            owner_name: None,
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item(
                "1",
                "Java Textbook",
                ListingType::Donate,
                Some(Category::Books),
                Some(Condition::LightlyUsed),
            ),
            item(
                "2",
                "Keyboard",
                ListingType::Swap,
                Some(Category::Electronics),
                Some(Condition::LikeNew),
            ),
            item(
                "3",
                "IKEA Desk Lamp",
                ListingType::Swap,
                Some(Category::HomeGoods),
                Some(Condition::LikeNew),
            ),
            item("4", "Mystery Box", ListingType::Donate, None, None),
        ]
    }

    fn ids(visible: &[&Item]) -> Vec<String> {
        visible.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_default_state_shows_everything_in_order() {
        let items = catalog();
        let visible = compute_visible(&items, &FilterState::default()).unwrap();
        assert_eq!(ids(&visible), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let visible = compute_visible(&[], &FilterState::default()).unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = catalog();
        for query in ["desk", "DESK", "Desk La"] {
            let state =
                apply_filter_change(&FilterState::default(), FilterChange::Search(query.into()));
            let visible = compute_visible(&items, &state).unwrap();
            assert_eq!(ids(&visible), ["3"], "query {:?}", query);
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = catalog();
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Search("quantum".into()),
        );
        assert!(compute_visible(&items, &state).unwrap().is_empty());
    }

    #[test]
    fn test_tab_excludes_other_listing_type() {
        let items = catalog();
        let state =
            apply_filter_change(&FilterState::default(), FilterChange::Tab(TypeTab::Donate));
        let visible = compute_visible(&items, &state).unwrap();
        assert!(
            visible
                .iter()
                .all(|i| i.listing_type == ListingType::Donate)
        );
        assert_eq!(ids(&visible), ["1", "4"]);
    }

    #[test]
    fn test_and_across_dimensions_or_within_dimension() {
        let items = vec![
            item(
                "a",
                "A",
                ListingType::Donate,
                Some(Category::Books),
                Some(Condition::BrandNew),
            ),
            item(
                "b",
                "B",
                ListingType::Donate,
                Some(Category::Books),
                Some(Condition::WellUsed),
            ),
            item(
                "c",
                "C",
                ListingType::Donate,
                Some(Category::Electronics),
                Some(Condition::BrandNew),
            ),
        ];
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Categories(BTreeSet::from([Category::Books])),
        );
        let state = apply_filter_change(
            &state,
            FilterChange::Conditions(BTreeSet::from([Condition::BrandNew])),
        );
        let visible = compute_visible(&items, &state).unwrap();
        assert_eq!(ids(&visible), ["a"]);

        // OR within a dimension: adding WellUsed brings B back.
        let state = apply_filter_change(
            &state,
            FilterChange::Conditions(BTreeSet::from([Condition::BrandNew, Condition::WellUsed])),
        );
        let visible = compute_visible(&items, &state).unwrap();
        assert_eq!(ids(&visible), ["a", "b"]);
    }

    #[test]
    fn test_uncategorized_item_never_matches_a_facet_selection() {
        let items = catalog();
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Categories(BTreeSet::from([Category::Books])),
        );
        let visible = compute_visible(&items, &state).unwrap();
        // Mystery Box (no category) must not appear.
        assert_eq!(ids(&visible), ["1"]);
    }

    #[test]
    fn test_completed_items_are_dropped_defensively() {
        let mut items = catalog();
        items[1].status = ItemStatus::Completed;
        let visible = compute_visible(&items, &FilterState::default()).unwrap();
        assert_eq!(ids(&visible), ["1", "3", "4"]);
        assert_eq!(count_matching(&items, &FilterState::default()), 3);
    }

    #[test]
    fn test_pagination_truncates_and_load_more_extends_prefix() {
        let items: Vec<Item> = (0..10)
            .map(|i| {
                item(
                    &i.to_string(),
                    &format!("Item {}", i),
                    ListingType::Donate,
                    None,
                    None,
                )
            })
            .collect();
        let mut state = FilterState::new(4);

        let page1 = compute_visible(&items, &state).unwrap();
        assert_eq!(page1.len(), 4);

        state = advance_page(&state);
        let page2 = compute_visible(&items, &state).unwrap();
        assert_eq!(page2.len(), 8);
        // Prefix extension: page1 is exactly the head of page2.
        assert_eq!(ids(&page2)[..4], ids(&page1)[..]);

        state = advance_page(&state);
        let page3 = compute_visible(&items, &state).unwrap();
        assert_eq!(page3.len(), 10);

        // Advancing past the end reveals nothing new and does not error.
        state = advance_page(&state);
        assert_eq!(compute_visible(&items, &state).unwrap().len(), 10);
    }

    #[test]
    fn test_paging_is_monotone() {
        let items = catalog();
        let state = FilterState::new(2);
        let before = compute_visible(&items, &state).unwrap();
        let after = compute_visible(&items, &advance_page(&state)).unwrap();
        assert!(after.len() >= before.len());
        assert_eq!(ids(&after)[..before.len()], ids(&before)[..]);
    }

    #[test]
    fn test_compute_visible_is_idempotent() {
        let items = catalog();
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Search("e".to_string()),
        );
        let first = ids(&compute_visible(&items, &state).unwrap());
        let second = ids(&compute_visible(&items, &state).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_filter_change_resets_pagination() {
        let mut state = FilterState::default();
        state.page_count = 5;

        let changes = [
            FilterChange::Search("lamp".into()),
            FilterChange::Tab(TypeTab::Swap),
            FilterChange::Categories(BTreeSet::from([Category::Clothing])),
            FilterChange::Conditions(BTreeSet::from([Condition::LikeNew])),
            FilterChange::ClearFacets,
        ];
        for change in changes {
            let next = apply_filter_change(&state, change.clone());
            assert_eq!(next.page_count, 1, "change {:?} must reset paging", change);
        }
    }

    #[test]
    fn test_advance_page_touches_nothing_else() {
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Search("lamp".into()),
        );
        let next = advance_page(&state);
        assert_eq!(next.page_count, 2);
        assert_eq!(next.search_text, state.search_text);
        assert_eq!(next.active_tab, state.active_tab);
        assert_eq!(next.categories, state.categories);
        assert_eq!(next.conditions, state.conditions);
    }

    #[test]
    fn test_zero_page_size_fails_fast() {
        let items = catalog();
        let state = FilterState::new(0);
        assert_eq!(
            compute_visible(&items, &state),
            Err(CatalogError::InvalidPageSize(0))
        );
    }

    #[test]
    fn test_clear_facets_keeps_search_and_tab() {
        let state = apply_filter_change(
            &FilterState::default(),
            FilterChange::Categories(BTreeSet::from([Category::Books])),
        );
        let state = apply_filter_change(&state, FilterChange::Search("lamp".into()));
        let state = apply_filter_change(&state, FilterChange::ClearFacets);
        assert!(state.categories.is_empty());
        assert!(state.conditions.is_empty());
        assert_eq!(state.search_text, "lamp");
    }

    #[test]
    fn test_end_to_end_browse_scenario() {
        let items = vec![
            item(
                "1",
                "Java Textbook",
                ListingType::Donate,
                Some(Category::Books),
                Some(Condition::LightlyUsed),
            ),
            item(
                "2",
                "Keyboard",
                ListingType::Swap,
                Some(Category::Electronics),
                Some(Condition::LikeNew),
            ),
        ];
        let state = FilterState::default();
        assert_eq!(ids(&compute_visible(&items, &state).unwrap()), ["1", "2"]);

        let state = apply_filter_change(&state, FilterChange::Tab(TypeTab::Swap));
        let visible = compute_visible(&items, &state).unwrap();
        assert_eq!(ids(&visible), ["2"]);
        assert_eq!(visible[0].title, "Keyboard");
    }
}
