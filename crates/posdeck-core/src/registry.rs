//! Widget registry: the static, externally-owned descriptor table.
//!
//! The registry defines which widgets exist, which section each belongs to,
//! and their natural order (the order used when no saved order exists).
//! It is read-only and shared by reference across panel sessions.

use crate::types::{SectionInfo, WidgetInfo};

/// One section's descriptor plus its widgets in natural order.
#[derive(Debug, Clone)]
pub struct SectionEntry {
    pub info: SectionInfo,
    pub widgets: Vec<WidgetInfo>,
}

/// Static table of sections and widget descriptors.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    sections: Vec<SectionEntry>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section with its widgets in natural order.
    pub fn with_section(mut self, info: SectionInfo, widgets: Vec<WidgetInfo>) -> Self {
        self.sections.push(SectionEntry { info, widgets });
        self
    }

    /// All sections, in declaration order.
    pub fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }

    /// Section ids in declaration order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.info.id.clone()).collect()
    }

    pub fn contains_section(&self, section_id: &str) -> bool {
        self.sections.iter().any(|s| s.info.id == section_id)
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.info.id == section_id)
    }

    /// Widget descriptors for a section, natural order.
    pub fn widgets(&self, section_id: &str) -> &[WidgetInfo] {
        self.section(section_id)
            .map(|s| s.widgets.as_slice())
            .unwrap_or(&[])
    }

    pub fn widget(&self, section_id: &str, widget_id: &str) -> Option<&WidgetInfo> {
        self.widgets(section_id).iter().find(|w| w.id == widget_id)
    }

    pub fn contains_widget(&self, section_id: &str, widget_id: &str) -> bool {
        self.widget(section_id, widget_id).is_some()
    }

    /// Widget ids for a section in natural order.
    ///
    /// This is the fallback order when no saved order exists, and the id
    /// universe the snapshot is reconciled against.
    pub fn natural_order(&self, section_id: &str) -> Vec<String> {
        self.widgets(section_id)
            .iter()
            .map(|w| w.id.clone())
            .collect()
    }
}

/// The built-in dashboard registry.
///
/// One `general` section today; the customization model supports more.
pub fn builtin() -> WidgetRegistry {
    WidgetRegistry::new().with_section(
        SectionInfo::new("general", "General")
            .icon("▦")
            .instructions("Toggle widgets on or off and drag to reorder them."),
        vec![
            WidgetInfo::new("sales_summary", "Sales Summary")
                .description("Today's revenue and completed sales total")
                .icon("$"),
            WidgetInfo::new("orders_today", "Orders Today")
                .description("Count of completed transactions since midnight")
                .icon("#"),
            WidgetInfo::new("revenue_chart", "Revenue Chart")
                .description("Weekly revenue, grouped by day")
                .icon("▁▃▆"),
            WidgetInfo::new("stock_alerts", "Stock Alerts")
                .description("Products at or below their alert threshold")
                .icon("!"),
            WidgetInfo::new("top_products", "Top Products")
                .description("Best sellers ranked by units sold")
                .icon("★"),
            WidgetInfo::new("recent_transactions", "Recent Transactions")
                .description("Latest sales with customer and total")
                .icon("≡"),
            WidgetInfo::new("customer_count", "Customer Count")
                .description("Registered customers on file")
                .icon("◉"),
            WidgetInfo::new("supplier_balances", "Supplier Balances")
                .description("Outstanding balance owed across suppliers")
                .icon("⇄"),
        ],
    )
}
