//! Notification events emitted by the customization panel.
//!
//! These are fire-and-forget and purely observational: the surrounding
//! application renders them as toasts/log lines. Nothing in the panel's
//! state machine waits on, or is gated by, a notification being delivered.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An informational event from a panel session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    /// A widget's visibility was toggled.
    WidgetToggled {
        section_id: String,
        widget_id: String,
        visible: bool,
    },

    /// A widget was moved to a new position.
    WidgetMoved {
        section_id: String,
        widget_id: String,
        from: usize,
        to: usize,
    },

    /// A section was reset to its last-saved state.
    SectionReset { section_id: String },

    /// Settings were persisted successfully.
    SettingsSaved { at: DateTime<Local> },

    /// The persistence collaborator rejected a save.
    SaveFailed { reason: String },

    /// The panel session ended.
    PanelClosed { discarded_changes: bool },
}

impl PanelEvent {
    pub fn settings_saved() -> Self {
        Self::SettingsSaved { at: Local::now() }
    }

    pub fn save_failed(reason: impl Into<String>) -> Self {
        Self::SaveFailed {
            reason: reason.into(),
        }
    }

    /// Short human-readable label for toast rendering.
    pub fn label(&self) -> String {
        match self {
            PanelEvent::WidgetToggled {
                widget_id, visible, ..
            } => {
                if *visible {
                    format!("Widget '{widget_id}' shown")
                } else {
                    format!("Widget '{widget_id}' hidden")
                }
            }
            PanelEvent::WidgetMoved { widget_id, to, .. } => {
                format!("Widget '{widget_id}' moved to position {}", to + 1)
            }
            PanelEvent::SectionReset { section_id } => {
                format!("Section '{section_id}' restored")
            }
            PanelEvent::SettingsSaved { .. } => "Dashboard settings saved".to_string(),
            PanelEvent::SaveFailed { reason } => format!("Save failed: {reason}"),
            PanelEvent::PanelClosed {
                discarded_changes: true,
            } => "Customization closed, changes discarded".to_string(),
            PanelEvent::PanelClosed { .. } => "Customization closed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        let ev = PanelEvent::WidgetToggled {
            section_id: "general".into(),
            widget_id: "stock_alerts".into(),
            visible: false,
        };
        assert_eq!(ev.label(), "Widget 'stock_alerts' hidden");
    }

    #[test]
    fn test_moved_label_is_one_based() {
        let ev = PanelEvent::WidgetMoved {
            section_id: "general".into(),
            widget_id: "top_products".into(),
            from: 0,
            to: 2,
        };
        assert!(ev.label().ends_with("position 3"));
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let ev = PanelEvent::SectionReset {
            section_id: "general".into(),
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"event\":\"section_reset\""));
    }
}
