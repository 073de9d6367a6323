//! View model for the category-distribution chart.

use super::CategoryTotal;

const PALETTE: [&str; 7] = [
    "#0A3D62", "#16A34A", "#4F46E5", "#FF4444", "#F59E0B", "#8B5CF6", "#EC4899",
];

const PLACEHOLDER_LABEL: &str = "No data";
const PLACEHOLDER_COLOR: &str = "#2C2C2C";

/// Data series handed to the charting widget. An empty breakdown becomes a
/// single placeholder slice so the chart never renders blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub is_placeholder: bool,
}

impl ChartData {
    pub fn from_breakdown(breakdown: &[CategoryTotal]) -> Self {
        if breakdown.is_empty() {
            return Self {
                labels: vec![PLACEHOLDER_LABEL.to_string()],
                values: vec![1.0],
                colors: vec![PLACEHOLDER_COLOR],
                is_placeholder: true,
            };
        }
        Self {
            labels: breakdown.iter().map(|g| g.category.clone()).collect(),
            values: breakdown.iter().map(|g| g.total).collect(),
            colors: (0..breakdown.len())
                .map(|i| PALETTE[i % PALETTE.len()])
                .collect(),
            is_placeholder: false,
        }
    }
}

/// Formats an amount for display, e.g. `$12.50`.
pub fn format_amount(symbol: &str, value: f64) -> String {
    format!("{symbol}{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            category: category.into(),
            total,
        }
    }

    #[test]
    fn breakdown_maps_to_labels_and_values_in_order() {
        let chart = ChartData::from_breakdown(&[group("Housing", 800.0), group("Food", 72.75)]);
        assert_eq!(chart.labels, vec!["Housing", "Food"]);
        assert_eq!(chart.values, vec![800.0, 72.75]);
        assert!(!chart.is_placeholder);
    }

    #[test]
    fn empty_breakdown_yields_single_placeholder_slice() {
        let chart = ChartData::from_breakdown(&[]);
        assert!(chart.is_placeholder);
        assert_eq!(chart.labels, vec!["No data"]);
        assert_eq!(chart.values, vec![1.0]);
        assert_eq!(chart.colors.len(), 1);
    }

    #[test]
    fn palette_cycles_past_seven_categories() {
        let breakdown: Vec<_> = (0..9).map(|i| group(&format!("C{i}"), 1.0)).collect();
        let chart = ChartData::from_breakdown(&breakdown);
        assert_eq!(chart.colors[7], chart.colors[0]);
        assert_eq!(chart.colors[8], chart.colors[1]);
    }

    #[test]
    fn amounts_format_with_two_decimals() {
        assert_eq!(format_amount("$", 12.5), "$12.50");
        assert_eq!(format_amount("€", 0.1), "€0.10");
    }
}
