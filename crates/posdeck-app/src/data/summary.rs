//! Dashboard card aggregation.
//!
//! Turns the raw records into one card per visible widget, in the
//! section's configured order. This is the read path that makes the
//! customization subsystem observable: hide a widget and its card
//! disappears, reorder and the cards follow.

use chrono::{Duration, Local};
use serde::Serialize;

use posdeck_core::prelude::*;
use posdeck_core::WidgetRegistry;

use crate::snapshot::SettingsSnapshot;

use super::records::SaleTransaction;
use super::DataStores;

/// One rendered dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub widget_id: String,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Format integer cents as a dollar string, e.g. `1999` -> `$19.99`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

fn is_today(tx: &SaleTransaction) -> bool {
    tx.completed_at.date_naive() == Local::now().date_naive()
}

/// Build cards for every visible widget of a section, in configured order.
///
/// Widget ids in the order with no card builder (stale settings entries)
/// are skipped rather than refused.
pub async fn build_cards(
    stores: &DataStores,
    snapshot: &SettingsSnapshot,
    registry: &WidgetRegistry,
    section_id: &str,
) -> Result<Vec<DashboardCard>> {
    let section = snapshot
        .section(section_id)
        .ok_or_else(|| Error::unknown_section(section_id))?;

    let transactions = stores.transactions.list().await;
    let products = stores.products.list().await;

    let mut cards = Vec::new();
    for widget_id in &section.order {
        if !section.visible(widget_id) {
            continue;
        }
        let Some(info) = registry.widget(section_id, widget_id) else {
            continue;
        };

        let card = match widget_id.as_str() {
            "sales_summary" => {
                let today: Vec<&SaleTransaction> =
                    transactions.iter().filter(|t| is_today(t)).collect();
                let revenue: i64 = today.iter().map(|t| t.total_cents()).sum();
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: format_cents(revenue),
                    detail: Some(format!("{} sales today", today.len())),
                }
            }
            "orders_today" => {
                let count = transactions.iter().filter(|t| is_today(t)).count();
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: count.to_string(),
                    detail: None,
                }
            }
            "revenue_chart" => {
                let today = Local::now().date_naive();
                let mut days = Vec::new();
                for offset in (0..7).rev() {
                    let day = today - Duration::days(offset);
                    let total: i64 = transactions
                        .iter()
                        .filter(|t| t.completed_at.date_naive() == day)
                        .map(|t| t.total_cents())
                        .sum();
                    days.push(format_cents(total));
                }
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: days.join(" "),
                    detail: Some("last 7 days".to_string()),
                }
            }
            "stock_alerts" => {
                let low: Vec<String> = products
                    .iter()
                    .filter(|p| p.is_low_stock())
                    .map(|p| p.name.clone())
                    .collect();
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: low.len().to_string(),
                    detail: (!low.is_empty()).then(|| low.join(", ")),
                }
            }
            "top_products" => {
                let mut units: Vec<(String, u32)> = products
                    .iter()
                    .map(|p| {
                        let sold = transactions.iter().map(|t| t.units_of(&p.id)).sum::<u32>();
                        (p.name.clone(), sold)
                    })
                    .filter(|(_, sold)| *sold > 0)
                    .collect();
                units.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                units.truncate(3);
                let listing = units
                    .iter()
                    .map(|(name, sold)| format!("{name} ({sold})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: listing,
                    detail: Some("by units sold".to_string()),
                }
            }
            "recent_transactions" => {
                let mut recent: Vec<&SaleTransaction> = transactions.iter().collect();
                recent.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
                recent.truncate(3);
                let listing = recent
                    .iter()
                    .map(|t| format!("{} {}", t.id, format_cents(t.total_cents())))
                    .collect::<Vec<_>>()
                    .join(", ");
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: listing,
                    detail: None,
                }
            }
            "customer_count" => DashboardCard {
                widget_id: widget_id.clone(),
                title: info.name.clone(),
                value: stores.customers.len().await.to_string(),
                detail: None,
            },
            "supplier_balances" => {
                let suppliers = stores.suppliers.list().await;
                let total: i64 = suppliers.iter().map(|s| s.balance_cents).sum();
                DashboardCard {
                    widget_id: widget_id.clone(),
                    title: info.name.clone(),
                    value: format_cents(total),
                    detail: Some(format!("{} suppliers", suppliers.len())),
                }
            }
            other => {
                debug!("No card builder for widget '{other}', skipping");
                continue;
            }
        };
        cards.push(card);
    }

    Ok(cards)
}
