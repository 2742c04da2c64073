//! Persisted settings types
//!
//! Defines the external wire shape the surrounding application stores and
//! ships to the panel: a flat `{ widget_id: visible }` map plus a
//! `widgetOrder` table of per-section id sequences. The panel converts this
//! to and from its internal snapshot via [`crate::transform`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dashboard settings in their externally persisted shape.
///
/// Example (`dashboard.toml`):
/// ```toml
/// sales_summary = true
/// stock_alerts = false
///
/// [widgetOrder]
/// general = ["stock_alerts", "sales_summary"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersistedSettings {
    /// Per-section widget id order. Missing sections fall back to the
    /// registry's natural order.
    #[serde(default, rename = "widgetOrder")]
    pub widget_order: BTreeMap<String, Vec<String>>,

    /// Flat widget visibility map. A missing widget id means the widget has
    /// never been configured and defaults to visible (first-run default-on).
    #[serde(flatten)]
    pub widgets: BTreeMap<String, bool>,
}

impl PersistedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility for a widget id, applying the default-on policy.
    pub fn visible(&self, widget_id: &str) -> bool {
        self.widgets.get(widget_id).copied().unwrap_or(true)
    }

    /// Saved order for a section, if one exists.
    pub fn order(&self, section_id: &str) -> Option<&[String]> {
        self.widget_order.get(section_id).map(Vec::as_slice)
    }

    pub fn set_visible(&mut self, widget_id: impl Into<String>, visible: bool) {
        self.widgets.insert(widget_id.into(), visible);
    }

    pub fn set_order(&mut self, section_id: impl Into<String>, order: Vec<String>) {
        self.widget_order.insert(section_id.into(), order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_widget_defaults_to_visible() {
        let settings = PersistedSettings::new();
        assert!(settings.visible("sales_summary"));
    }

    #[test]
    fn test_explicit_false_wins_over_default() {
        let mut settings = PersistedSettings::new();
        settings.set_visible("stock_alerts", false);
        assert!(!settings.visible("stock_alerts"));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = PersistedSettings::new();
        settings.set_visible("sales_summary", true);
        settings.set_visible("stock_alerts", false);
        settings.set_order(
            "general",
            vec!["stock_alerts".to_string(), "sales_summary".to_string()],
        );

        let text = toml::to_string(&settings).unwrap();
        let parsed: PersistedSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_deserializes_wire_key_name() {
        let text = r#"
            sales_summary = false

            [widgetOrder]
            general = ["sales_summary"]
        "#;
        let parsed: PersistedSettings = toml::from_str(text).unwrap();
        assert!(!parsed.visible("sales_summary"));
        assert_eq!(
            parsed.order("general").unwrap(),
            &["sales_summary".to_string()]
        );
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let parsed: PersistedSettings = toml::from_str("").unwrap();
        assert!(parsed.widgets.is_empty());
        assert!(parsed.widget_order.is_empty());
    }
}
