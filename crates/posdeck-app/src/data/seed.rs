//! Demo dataset for the headless dashboard and tests.

use chrono::{Duration, Local};

use super::records::{Customer, Product, SaleLine, SaleTransaction, Supplier};
use super::DataStores;

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "p-espresso".into(),
            name: "Espresso Beans 1kg".into(),
            category: "coffee".into(),
            unit_price_cents: 1499,
            quantity: 42,
            alert_threshold: 10,
        },
        Product {
            id: "p-filter".into(),
            name: "Filter Papers".into(),
            category: "accessories".into(),
            unit_price_cents: 349,
            quantity: 8,
            alert_threshold: 15,
        },
        Product {
            id: "p-grinder".into(),
            name: "Hand Grinder".into(),
            category: "equipment".into(),
            unit_price_cents: 4999,
            quantity: 5,
            alert_threshold: 5,
        },
        Product {
            id: "p-mug".into(),
            name: "Ceramic Mug".into(),
            category: "accessories".into(),
            unit_price_cents: 1250,
            quantity: 30,
            alert_threshold: 6,
        },
        Product {
            id: "p-decaf".into(),
            name: "Decaf Blend 500g".into(),
            category: "coffee".into(),
            unit_price_cents: 999,
            quantity: 21,
            alert_threshold: 8,
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "c-ada".into(),
            name: "Ada Lindgren".into(),
            email: Some("ada@example.com".into()),
            phone: None,
        },
        Customer {
            id: "c-bo".into(),
            name: "Bo Tanaka".into(),
            email: None,
            phone: Some("555-0142".into()),
        },
        Customer {
            id: "c-iris".into(),
            name: "Iris Okafor".into(),
            email: Some("iris@example.com".into()),
            phone: None,
        },
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "s-roast".into(),
            name: "Roastworks Co.".into(),
            contact: Some("orders@roastworks.example".into()),
            balance_cents: 48_500,
        },
        Supplier {
            id: "s-ceramic".into(),
            name: "Ceramica Ltd.".into(),
            contact: None,
            balance_cents: 12_000,
        },
    ]
}

pub fn transactions() -> Vec<SaleTransaction> {
    let now = Local::now();
    vec![
        SaleTransaction {
            id: "t-1001".into(),
            customer_id: Some("c-ada".into()),
            lines: vec![
                SaleLine {
                    product_id: "p-espresso".into(),
                    quantity: 2,
                    unit_price_cents: 1499,
                },
                SaleLine {
                    product_id: "p-filter".into(),
                    quantity: 1,
                    unit_price_cents: 349,
                },
            ],
            completed_at: now - Duration::minutes(30),
        },
        SaleTransaction {
            id: "t-1002".into(),
            customer_id: None,
            lines: vec![SaleLine {
                product_id: "p-mug".into(),
                quantity: 3,
                unit_price_cents: 1250,
            }],
            completed_at: now - Duration::hours(2),
        },
        SaleTransaction {
            id: "t-1003".into(),
            customer_id: Some("c-bo".into()),
            lines: vec![SaleLine {
                product_id: "p-grinder".into(),
                quantity: 1,
                unit_price_cents: 4999,
            }],
            completed_at: now - Duration::days(1),
        },
        SaleTransaction {
            id: "t-1004".into(),
            customer_id: Some("c-iris".into()),
            lines: vec![SaleLine {
                product_id: "p-espresso".into(),
                quantity: 1,
                unit_price_cents: 1499,
            }],
            completed_at: now - Duration::days(3),
        },
    ]
}

/// Build fully seeded stores.
pub async fn seeded_stores() -> posdeck_core::Result<DataStores> {
    let stores = DataStores::new();
    for p in products() {
        stores.products.insert(p).await?;
    }
    for c in customers() {
        stores.customers.insert(c).await?;
    }
    for s in suppliers() {
        stores.suppliers.insert(s).await?;
    }
    for t in transactions() {
        stores.transactions.insert(t).await?;
    }
    Ok(stores)
}
