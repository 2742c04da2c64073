//! In-memory record repository.
//!
//! Storage is injected and instance-owned (a map behind an async lock),
//! never process-wide state, so each service or test harness owns its own
//! isolated data. An optional simulated latency stands in for the network
//! round-trip a real backend would add.

use std::collections::BTreeMap;
use std::ops::Range;

use rand::Rng;
use tokio::sync::RwLock;

use posdeck_core::prelude::*;

use super::records::Record;

/// Async CRUD over an in-memory map keyed by record id.
#[derive(Debug)]
pub struct Repository<T: Record> {
    items: RwLock<BTreeMap<String, T>>,
    latency_ms: Option<Range<u64>>,
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            latency_ms: None,
        }
    }

    /// Simulate a backend round-trip of a random duration in the given
    /// millisecond range on every operation.
    pub fn with_latency(mut self, latency_ms: Range<u64>) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(range) = &self.latency_ms {
            let ms = rand::thread_rng().gen_range(range.clone());
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        self.simulate_latency().await;
        self.items
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Error::record_not_found(id))
    }

    /// All records in id order.
    pub async fn list(&self) -> Vec<T> {
        self.simulate_latency().await;
        self.items.read().await.values().cloned().collect()
    }

    pub async fn insert(&self, record: T) -> Result<()> {
        self.simulate_latency().await;
        let mut items = self.items.write().await;
        let id = record.id().to_string();
        if items.contains_key(&id) {
            return Err(Error::duplicate_record(id));
        }
        items.insert(id, record);
        Ok(())
    }

    pub async fn update(&self, record: T) -> Result<()> {
        self.simulate_latency().await;
        let mut items = self.items.write().await;
        let id = record.id().to_string();
        if !items.contains_key(&id) {
            return Err(Error::record_not_found(id));
        }
        items.insert(id, record);
        Ok(())
    }

    pub async fn remove(&self, id: &str) -> Result<T> {
        self.simulate_latency().await;
        self.items
            .write()
            .await
            .remove(id)
            .ok_or_else(|| Error::record_not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
