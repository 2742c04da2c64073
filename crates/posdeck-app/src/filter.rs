//! Search filter over a section's widget order.
//!
//! Pure derivation for rendering: narrows which widgets are listed without
//! ever touching the underlying order or persisted data.

use posdeck_core::WidgetRegistry;

/// Filter a widget-id order by a case-insensitive substring match against
/// each widget's name or description.
///
/// An empty term is the identity: the order is returned unchanged. Ids with
/// no registry descriptor only survive an empty term (there is no text to
/// match them against).
pub fn filter_widgets(
    order: &[String],
    registry: &WidgetRegistry,
    section_id: &str,
    term: &str,
) -> Vec<String> {
    if term.is_empty() {
        return order.to_vec();
    }

    order
        .iter()
        .filter(|id| {
            registry
                .widget(section_id, id)
                .map(|w| w.matches(term))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use posdeck_core::{SectionInfo, WidgetInfo};

    fn registry() -> WidgetRegistry {
        WidgetRegistry::new().with_section(
            SectionInfo::new("general", "General"),
            vec![
                WidgetInfo::new("w1", "Weekly Chart").description("Sales per week"),
                WidgetInfo::new("w2", "Status Cards").description("At-a-glance totals"),
                WidgetInfo::new("w3", "Inventory").description("Stock level chart"),
            ],
        )
    }

    fn order() -> Vec<String> {
        vec!["w1".to_string(), "w2".to_string(), "w3".to_string()]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let registry = registry();
        assert_eq!(filter_widgets(&order(), &registry, "general", ""), order());
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let registry = registry();
        assert_eq!(
            filter_widgets(&order(), &registry, "general", "chart"),
            vec!["w1".to_string(), "w3".to_string()]
        );
        assert_eq!(
            filter_widgets(&order(), &registry, "general", "CHART"),
            vec!["w1".to_string(), "w3".to_string()]
        );
    }

    #[test]
    fn test_description_match() {
        let registry = registry();
        assert_eq!(
            filter_widgets(&order(), &registry, "general", "glance"),
            vec!["w2".to_string()]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let registry = registry();
        assert!(filter_widgets(&order(), &registry, "general", "suppliers").is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_input() {
        let registry = registry();
        let input = vec!["w3".to_string(), "w1".to_string(), "w2".to_string()];
        let filtered = filter_widgets(&input, &registry, "general", "chart");
        assert_eq!(filtered, vec!["w3".to_string(), "w1".to_string()]);
        // input untouched
        assert_eq!(input, vec!["w3".to_string(), "w1".to_string(), "w2".to_string()]);
    }

    #[test]
    fn test_unknown_id_dropped_under_active_term() {
        let registry = registry();
        let input = vec!["ghost".to_string(), "w1".to_string()];
        assert_eq!(
            filter_widgets(&input, &registry, "general", "chart"),
            vec!["w1".to_string()]
        );
        // but identity still returns it
        assert_eq!(filter_widgets(&input, &registry, "general", ""), input);
    }
}
