//! The normalized in-memory settings model.
//!
//! Two [`SettingsSnapshot`] values exist per panel session: **current**
//! (live-edited) and **baseline** (last saved). They are always deep
//! copies of one another, never aliases, so editing current can never
//! bleed into baseline.
//!
//! Equality is typed rather than generic deep-equal: `order` is a `Vec`
//! (position matters), `widgets` is a `BTreeMap` (key order is
//! canonical by construction), so derived `PartialEq` enforces exactly
//! the dirty-check semantics the panel needs.

use std::collections::BTreeMap;

use posdeck_core::prelude::*;
use posdeck_core::{WidgetRegistry, WidgetSetting};

/// One section's mutable settings: visibility map plus render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSettings {
    /// Per-widget settings, keyed by widget id.
    pub widgets: BTreeMap<String, WidgetSetting>,

    /// Widget ids in render order. Always a permutation of the
    /// `widgets` key set after [`SectionSettings::reconcile`].
    pub order: Vec<String>,
}

impl SectionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility for a widget, defaulting to hidden for unknown ids.
    pub fn visible(&self, widget_id: &str) -> bool {
        self.widgets.get(widget_id).map(|w| w.visible).unwrap_or(false)
    }

    /// Number of widgets in the render order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Enforce the widgets/order bijection:
    /// - drop duplicate order entries (first occurrence wins)
    /// - seed a hidden entry for order ids missing from `widgets`
    /// - append `widgets` keys missing from `order`
    pub fn reconcile(&mut self) {
        let mut seen = BTreeMap::new();
        self.order.retain(|id| seen.insert(id.clone(), ()).is_none());

        for id in &self.order {
            self.widgets
                .entry(id.clone())
                .or_insert_with(WidgetSetting::hidden);
        }

        for id in self.widgets.keys() {
            if !self.order.contains(id) {
                self.order.push(id.clone());
            }
        }
    }

    /// True when `order` holds each `widgets` key exactly once.
    pub fn is_consistent(&self) -> bool {
        if self.order.len() != self.widgets.len() {
            return false;
        }
        let mut sorted = self.order.clone();
        sorted.sort();
        sorted.dedup();
        sorted.len() == self.order.len() && sorted.iter().all(|id| self.widgets.contains_key(id))
    }
}

/// The aggregate settings state across all sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSnapshot {
    sections: BTreeMap<String, SectionSettings>,
}

impl SettingsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_section(&self, section_id: &str) -> bool {
        self.sections.contains_key(section_id)
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionSettings> {
        self.sections.get(section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut SectionSettings> {
        self.sections.get_mut(section_id)
    }

    pub fn insert_section(&mut self, section_id: impl Into<String>, section: SectionSettings) {
        self.sections.insert(section_id.into(), section);
    }

    pub fn sections(&self) -> impl Iterator<Item = (&String, &SectionSettings)> {
        self.sections.iter()
    }

    /// Replace one section with a deep copy of the same section from
    /// another snapshot. Used by the reset flow.
    pub fn restore_section_from(&mut self, other: &SettingsSnapshot, section_id: &str) -> Result<()> {
        let source = other
            .section(section_id)
            .ok_or_else(|| Error::unknown_section(section_id))?;
        self.sections.insert(section_id.to_string(), source.clone());
        Ok(())
    }

    /// Reconcile every section against the registry's widget universe.
    ///
    /// Registry widgets missing entirely from a section are appended in
    /// natural order, seeded hidden (they were added to the product after
    /// the settings were last saved).
    pub fn reconcile_with(&mut self, registry: &WidgetRegistry) {
        for entry in registry.sections() {
            let section = self
                .sections
                .entry(entry.info.id.clone())
                .or_default();
            for widget in &entry.widgets {
                if !section.widgets.contains_key(&widget.id) {
                    section.widgets.insert(widget.id.clone(), WidgetSetting::hidden());
                }
            }
            section.reconcile();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(widgets: &[(&str, bool)], order: &[&str]) -> SectionSettings {
        SectionSettings {
            widgets: widgets
                .iter()
                .map(|(id, v)| (id.to_string(), WidgetSetting { visible: *v }))
                .collect(),
            order: order.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_reconcile_seeds_hidden_for_order_only_ids() {
        let mut s = section(&[("a", true)], &["a", "b"]);
        s.reconcile();
        assert!(s.widgets.contains_key("b"));
        assert!(!s.visible("b"));
        assert!(s.is_consistent());
    }

    #[test]
    fn test_reconcile_appends_widgets_missing_from_order() {
        let mut s = section(&[("a", true), ("b", false)], &["a"]);
        s.reconcile();
        assert_eq!(s.order, vec!["a", "b"]);
        assert!(s.is_consistent());
    }

    #[test]
    fn test_reconcile_drops_duplicate_order_entries() {
        let mut s = section(&[("a", true), ("b", true)], &["a", "b", "a"]);
        s.reconcile();
        assert_eq!(s.order, vec!["a", "b"]);
        assert!(s.is_consistent());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let left = section(&[("a", true), ("b", true)], &["a", "b"]);
        let right = section(&[("a", true), ("b", true)], &["b", "a"]);
        assert_ne!(left, right);
    }

    #[test]
    fn test_equality_ignores_widget_insertion_order() {
        let left = section(&[("a", true), ("b", false)], &["a", "b"]);
        let right = section(&[("b", false), ("a", true)], &["a", "b"]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_restore_section_is_a_deep_copy() {
        let mut current = SettingsSnapshot::new();
        let mut baseline = SettingsSnapshot::new();
        current.insert_section("general", section(&[("a", false)], &["a"]));
        baseline.insert_section("general", section(&[("a", true)], &["a"]));

        current.restore_section_from(&baseline, "general").unwrap();
        assert!(current.section("general").unwrap().visible("a"));

        // Mutating current must not touch baseline
        current
            .section_mut("general")
            .unwrap()
            .widgets
            .insert("a".to_string(), WidgetSetting::hidden());
        assert!(baseline.section("general").unwrap().visible("a"));
    }

    #[test]
    fn test_restore_unknown_section_is_error() {
        let mut current = SettingsSnapshot::new();
        let baseline = SettingsSnapshot::new();
        let err = current.restore_section_from(&baseline, "reports").unwrap_err();
        assert!(matches!(err, Error::UnknownSection { .. }));
    }

    #[test]
    fn test_reconcile_with_registry_appends_new_widgets_hidden() {
        let registry = posdeck_core::registry::builtin();
        let mut snapshot = SettingsSnapshot::new();
        snapshot.insert_section("general", section(&[("sales_summary", true)], &["sales_summary"]));

        snapshot.reconcile_with(&registry);
        let general = snapshot.section("general").unwrap();
        assert_eq!(general.len(), registry.widgets("general").len());
        assert!(general.visible("sales_summary"));
        // A widget the saved settings predate arrives hidden
        assert!(!general.visible("supplier_balances"));
        assert!(general.is_consistent());
    }
}
