//! Domain records backing the dashboard widgets.
//!
//! Money is carried in integer cents; floating point never touches a
//! total.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A record that can live in a [`crate::data::Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A product on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    /// Stock level at or below which the product appears in stock alerts.
    #[serde(default)]
    pub alert_threshold: u32,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.alert_threshold
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A supplier with an outstanding balance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    /// Amount currently owed to this supplier, in cents.
    pub balance_cents: i64,
}

impl Record for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One line of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SaleLine {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl SaleLine {
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// A completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SaleTransaction {
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub lines: Vec<SaleLine>,
    pub completed_at: DateTime<Local>,
}

impl SaleTransaction {
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(SaleLine::total_cents).sum()
    }

    pub fn units_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .sum()
    }
}

impl Record for SaleTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_total_sums_lines() {
        let sale = SaleTransaction {
            id: "t1".into(),
            customer_id: None,
            lines: vec![
                SaleLine {
                    product_id: "p1".into(),
                    quantity: 2,
                    unit_price_cents: 350,
                },
                SaleLine {
                    product_id: "p2".into(),
                    quantity: 1,
                    unit_price_cents: 1299,
                },
            ],
            completed_at: Local::now(),
        };
        assert_eq!(sale.total_cents(), 1999);
        assert_eq!(sale.units_of("p1"), 2);
        assert_eq!(sale.units_of("p3"), 0);
    }

    #[test]
    fn test_low_stock_is_inclusive_of_threshold() {
        let product = Product {
            id: "p1".into(),
            name: "Espresso Beans".into(),
            category: "coffee".into(),
            unit_price_cents: 1499,
            quantity: 5,
            alert_threshold: 5,
        };
        assert!(product.is_low_stock());
    }
}
