//! In-memory data layer backing the dashboard widgets.
//!
//! Repositories are instance-owned: whoever constructs `DataStores` owns
//! the data, keeping sessions and tests isolated from one another.

pub mod records;
pub mod repository;
pub mod seed;
pub mod summary;

pub use records::{Customer, Product, Record, SaleLine, SaleTransaction, Supplier};
pub use repository::Repository;
pub use summary::{build_cards, format_cents, DashboardCard};

/// The full set of repositories one dashboard instance reads from.
#[derive(Debug, Default)]
pub struct DataStores {
    pub products: Repository<Product>,
    pub customers: Repository<Customer>,
    pub suppliers: Repository<Supplier>,
    pub transactions: Repository<SaleTransaction>,
}

impl DataStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a simulated backend latency to every store.
    pub fn with_latency(latency_ms: std::ops::Range<u64>) -> Self {
        Self {
            products: Repository::new().with_latency(latency_ms.clone()),
            customers: Repository::new().with_latency(latency_ms.clone()),
            suppliers: Repository::new().with_latency(latency_ms.clone()),
            transactions: Repository::new().with_latency(latency_ms),
        }
    }
}
