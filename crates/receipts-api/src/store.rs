//! Receipt storage
//!
//! Handlers only see the `ReceiptStore` trait; the default implementation keeps
//! everything in a `DashMap` so concurrent submissions and lookups never block
//! each other on a single lock.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use receipts_types::Receipt;
use std::sync::Arc;

/// A receipt together with the identifier it was filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub received_at: DateTime<Utc>,
}

impl StoredReceipt {
    pub fn new(id: impl Into<String>, receipt: Receipt) -> Self {
        Self { id: id.into(), receipt, received_at: Utc::now() }
    }
}

/// Key-value storage for accepted receipts.
pub trait ReceiptStore: Send + Sync + std::fmt::Debug {
    /// Inserts the receipt, replacing any previous entry with the same id.
    fn put(&self, receipt: StoredReceipt);

    fn get(&self, id: &str) -> Option<Arc<StoredReceipt>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory store backed by `dashmap`. Entries never expire.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: DashMap<String, Arc<StoredReceipt>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: StoredReceipt) {
        self.receipts.insert(receipt.id.clone(), Arc::new(receipt));
    }

    fn get(&self, id: &str) -> Option<Arc<StoredReceipt>> {
        self.receipts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}
