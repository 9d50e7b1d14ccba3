//! CO₂ impact estimation for listed items.
//!
//! The numbers are display-grade sustainability estimates, not science:
//! a fixed kg-CO₂-saved-per-kg multiplier per category, and a
//! trees-planted equivalence for the impact tracker.

use crate::config::KG_CO2_PER_TREE_YEAR;
use crate::core::error::ImpactError;
use crate::models::{Category, Item};

/// kg CO₂ saved per kg of item weight, by category.
///
/// This is the only multiplier table in the codebase; the filter
/// sidebar renders its per-kg labels from it, so the number a user sees
/// while filtering is always the one the detail page computes with.
/// Uncategorized items fall back to the Others multiplier. That fallback
/// is deliberate display-level degradation, not a generic catch-all.
pub fn multiplier_for(category: Option<Category>) -> f64 {
    match category.unwrap_or(Category::Others) {
        Category::Clothing => 3.0,
        Category::Books => 1.5,
        Category::Electronics => 7.5,
        Category::HomeGoods => 6.0,
        Category::Stationery => 3.5,
        Category::Others => 2.0,
    }
}

/// Round to one decimal place, half away from zero.
///
/// `format!` precision rounds half-to-even; exact halves must land on
/// the upper value, so the rounding is done before formatting.
fn round_half_up_1dp(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Estimate kg of CO₂ saved by reusing an item.
///
/// `weight_kg * multiplier`, rounded to one decimal for display.
/// Zero weight yields zero; negative weight is a caller bug and fails
/// fast rather than producing a silently-wrong badge.
pub fn estimate_co2_saved(category: Option<Category>, weight_kg: f64) -> Result<f64, ImpactError> {
    if weight_kg < 0.0 {
        return Err(ImpactError::NegativeWeight(weight_kg));
    }
    Ok(round_half_up_1dp(weight_kg * multiplier_for(category)))
}

/// Whole trees-planted-for-a-year equivalent of a CO₂ total.
///
/// Uses the 21 kg CO₂ per tree-year constant; always floors.
pub fn estimate_trees_equivalent(total_co2_kg: f64) -> Result<u32, ImpactError> {
    if total_co2_kg < 0.0 {
        return Err(ImpactError::NegativeTotal(total_co2_kg));
    }
    Ok((total_co2_kg / KG_CO2_PER_TREE_YEAR).floor() as u32)
}

/// Aggregate impact figures for a set of items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSummary {
    pub total_co2_kg: f64,
    pub trees_equivalent: u32,
    /// Items that contributed, i.e. carried a declared weight.
    pub items_counted: usize,
}

/// Sum the estimated savings over a set of items.
///
/// Items without a declared weight contribute nothing. Feeds the impact
/// tracker's stat cards and the profile stats.
pub fn summarize(items: &[Item]) -> ImpactSummary {
    let mut total = 0.0;
    let mut counted = 0;
    for item in items {
        if let Some(kg) = item.weight_kg
            && let Ok(saved) = estimate_co2_saved(item.category, kg)
        {
            total += saved;
            counted += 1;
        }
    }
    // Total is a sum of non-negative estimates, so this cannot fail.
    let trees = estimate_trees_equivalent(total).unwrap_or(0);
    ImpactSummary {
        total_co2_kg: total,
        trees_equivalent: trees,
        items_counted: counted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ListingType};

    fn item(category: Option<Category>, weight_kg: Option<f64>) -> Item {
        Item {
            id: "t".to_string(),
            title: "test".to_string(),
            images: Vec::new(),
            listing_type: ListingType::Donate,
            category,
            condition: None,
            weight_kg,
            status: ItemStatus::Active,
            description: String::new(),
            owner_name: None,
        }
    }

    #[test]
    fn test_summary_counts_only_weighted_items() {
        let items = vec![
            item(Some(Category::Clothing), Some(2.0)), // 6.0
            item(Some(Category::Books), None),         // skipped
            item(None, Some(2.0)),                     // fallback 4.0
        ];
        let summary = summarize(&items);
        assert_eq!(summary.items_counted, 2);
        assert!((summary.total_co2_kg - 10.0).abs() < 1e-9);
        assert_eq!(summary.trees_equivalent, 0);
    }

    #[test]
    fn test_summary_trees_floor() {
        let items = vec![item(Some(Category::Electronics), Some(6.0))]; // 45.0
        let summary = summarize(&items);
        assert_eq!(summary.trees_equivalent, 2);
    }

    #[test]
    fn test_known_multipliers() {
        assert_eq!(multiplier_for(Some(Category::Clothing)), 3.0);
        assert_eq!(multiplier_for(Some(Category::Books)), 1.5);
        assert_eq!(multiplier_for(Some(Category::Electronics)), 7.5);
        assert_eq!(multiplier_for(Some(Category::HomeGoods)), 6.0);
        assert_eq!(multiplier_for(Some(Category::Stationery)), 3.5);
        assert_eq!(multiplier_for(Some(Category::Others)), 2.0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        assert_eq!(estimate_co2_saved(Some(Category::Clothing), 2.0), Ok(6.0));
        assert_eq!(estimate_co2_saved(Some(Category::Books), 1.2), Ok(1.8));
        assert_eq!(
            estimate_co2_saved(Some(Category::Electronics), 0.8),
            Ok(6.0)
        );
    }

    #[test]
    fn test_absent_category_falls_back_to_others() {
        assert_eq!(
            estimate_co2_saved(None, 2.0),
            estimate_co2_saved(Some(Category::Others), 2.0)
        );
        assert_eq!(estimate_co2_saved(None, 2.0), Ok(4.0));
    }

    #[test]
    fn test_zero_weight_yields_zero() {
        assert_eq!(estimate_co2_saved(Some(Category::Electronics), 0.0), Ok(0.0));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        assert_eq!(
            estimate_co2_saved(Some(Category::Books), -1.0),
            Err(ImpactError::NegativeWeight(-1.0))
        );
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 0.05 kg of stationery = 0.175 kg CO₂, rounds up to 0.2.
        assert_eq!(estimate_co2_saved(Some(Category::Stationery), 0.05), Ok(0.2));
        // An exact half: 0.125 kg * 2.0 = 0.25, half-up to 0.3
        // (half-to-even would give 0.2). Both factors are exact in f64.
        assert_eq!(estimate_co2_saved(None, 0.125), Ok(0.3));
    }

    #[test]
    fn test_trees_equivalent_floors() {
        assert_eq!(estimate_trees_equivalent(42.9), Ok(2));
        assert_eq!(estimate_trees_equivalent(20.9), Ok(0));
        assert_eq!(estimate_trees_equivalent(21.0), Ok(1));
        assert_eq!(estimate_trees_equivalent(0.0), Ok(0));
    }

    #[test]
    fn test_negative_total_is_rejected() {
        assert_eq!(
            estimate_trees_equivalent(-0.1),
            Err(ImpactError::NegativeTotal(-0.1))
        );
    }
}
