//! Conversion between the persisted settings shape and the snapshot model.
//!
//! `to_internal` normalizes the flat persisted map into per-section
//! visibility + order; `to_external` inverts it. The pair round-trips
//! exactly whenever the persisted input already covers every registry
//! widget id (no lossy defaulting triggered).

use posdeck_core::{WidgetRegistry, WidgetSetting};

use crate::config::PersistedSettings;
use crate::snapshot::{SectionSettings, SettingsSnapshot};

/// Build the normalized snapshot from persisted settings.
///
/// Per section:
/// - visibility comes from the flat map, defaulting to visible for ids the
///   persisted settings have never seen (first-run default-on policy)
/// - order comes from `widgetOrder[section]` when present, with unknown ids
///   dropped and missing registry ids appended in natural order, so the
///   result is always a permutation of the registry's id universe
/// - otherwise order falls back to the registry's natural order
pub fn to_internal(persisted: &PersistedSettings, registry: &WidgetRegistry) -> SettingsSnapshot {
    let mut snapshot = SettingsSnapshot::new();

    for entry in registry.sections() {
        let section_id = &entry.info.id;
        let natural = registry.natural_order(section_id);

        let mut section = SectionSettings::new();
        for widget_id in &natural {
            section.widgets.insert(
                widget_id.clone(),
                WidgetSetting {
                    visible: persisted.visible(widget_id),
                },
            );
        }

        let mut order: Vec<String> = match persisted.order(section_id) {
            Some(saved) => saved
                .iter()
                .filter(|id| section.widgets.contains_key(*id))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        for widget_id in &natural {
            if !order.contains(widget_id) {
                order.push(widget_id.clone());
            }
        }
        section.order = order;
        section.reconcile();

        snapshot.insert_section(section_id.clone(), section);
    }

    snapshot
}

/// Flatten the snapshot back into the persisted shape.
pub fn to_external(snapshot: &SettingsSnapshot) -> PersistedSettings {
    let mut persisted = PersistedSettings::new();

    for (section_id, section) in snapshot.sections() {
        for (widget_id, setting) in &section.widgets {
            persisted.set_visible(widget_id.clone(), setting.visible);
        }
        persisted.set_order(section_id.clone(), section.order.clone());
    }

    persisted
}
