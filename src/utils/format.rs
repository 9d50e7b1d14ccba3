//! Formatting utilities for display values.

/// Format a CO₂ amount for the item detail badge (e.g., "1.8kg CO₂").
pub fn format_co2_badge(kg: f64) -> String {
    format!("{:.1}kg CO₂", kg)
}

/// Format a CO₂ amount for stat cards (e.g., "12.5 kg").
pub fn format_co2_stat(kg: f64) -> String {
    format!("{:.1} kg", kg)
}

/// Format the trees-planted equivalence line for the impact tracker.
pub fn format_trees_subtext(trees: u32) -> String {
    match trees {
        1 => "Equivalent to 1 tree planted".to_string(),
        n => format!("Equivalent to {} trees planted", n),
    }
}

/// Format a per-kg multiplier label for the filter sidebar
/// (e.g., "x3.0/kg CO₂ saved").
pub fn format_multiplier_label(multiplier: f64) -> String {
    format!("x{:.1}/kg CO₂ saved", multiplier)
}

/// Format a declared weight, or a dash when the lister left it out.
pub fn format_weight(weight_kg: Option<f64>) -> String {
    match weight_kg {
        Some(kg) => format!("{:.1} kg", kg),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_co2() {
        assert_eq!(format_co2_badge(1.8), "1.8kg CO₂");
        assert_eq!(format_co2_badge(6.0), "6.0kg CO₂");
        assert_eq!(format_co2_stat(12.5), "12.5 kg");
    }

    #[test]
    fn test_format_trees_subtext() {
        assert_eq!(format_trees_subtext(0), "Equivalent to 0 trees planted");
        assert_eq!(format_trees_subtext(1), "Equivalent to 1 tree planted");
        assert_eq!(format_trees_subtext(6), "Equivalent to 6 trees planted");
    }

    #[test]
    fn test_format_multiplier_label() {
        assert_eq!(format_multiplier_label(3.0), "x3.0/kg CO₂ saved");
        assert_eq!(format_multiplier_label(7.5), "x7.5/kg CO₂ saved");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(Some(1.25)), "1.2 kg");
        assert_eq!(format_weight(None), "-");
    }
}
