//! Domain types for the dashboard customization panel
//!
//! Defines:
//! - `SectionInfo` - A named grouping of dashboard widgets
//! - `WidgetInfo` - Static display metadata for one widget
//! - `WidgetSetting` - Per-section, per-widget mutable state

use serde::{Deserialize, Serialize};

/// A named grouping of dashboard widgets.
///
/// Only the `general` section ships today, but the model supports many
/// (e.g., a future `reports` section gated behind `requires_auth`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionInfo {
    /// Unique identifier (e.g., "general")
    pub id: String,
    /// Display name (e.g., "General")
    pub name: String,
    /// Icon glyph shown in the section header
    #[serde(default)]
    pub icon: Option<String>,
    /// Short usage hint rendered above the widget list
    #[serde(default)]
    pub instructions: Option<String>,
    /// Whether viewing this section requires an authenticated user
    #[serde(default)]
    pub requires_auth: bool,
}

impl SectionInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            instructions: None,
            requires_auth: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn instructions(mut self, text: impl Into<String>) -> Self {
        self.instructions = Some(text.into());
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// Static display metadata for one dashboard widget.
///
/// Immutable and owned by the registry; the panel never creates or
/// destroys descriptors, it only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WidgetInfo {
    /// Unique identifier (e.g., "sales_summary")
    pub id: String,
    /// Display label (e.g., "Sales Summary")
    pub name: String,
    /// Help text shown in the customization panel
    pub description: String,
    /// Icon glyph
    #[serde(default)]
    pub icon: Option<String>,
}

impl WidgetInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Case-insensitive substring match against name or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Per-section, per-widget mutable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WidgetSetting {
    /// Whether the widget is rendered on the dashboard
    pub visible: bool,
}

impl WidgetSetting {
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }
}

impl Default for WidgetSetting {
    fn default() -> Self {
        Self::visible()
    }
}
