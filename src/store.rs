//! In-memory transaction store.
//!
//! Backs the dashboard's history table and stats widget: upsert by id,
//! lookup, deletion, newest-first listing, substring search, and aggregate
//! statistics. A `HashMap` keyed by transaction id; listing sorts on demand.
//! The server wraps one of these in an `RwLock` for shared access.

use crate::transaction::Transaction;
use std::collections::HashMap;

/// Aggregate statistics over the stored transactions, as shown in the
/// dashboard's summary cards.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Number of stored transactions.
    pub total: usize,
    /// Number flagged as fraudulent.
    pub flagged: usize,
    /// Fraction flagged, 0.0 when the store is empty.
    pub flagged_rate: f64,
    /// Mean prediction confidence, 0.0 when the store is empty.
    pub avg_confidence: f64,
    /// Sum of all transaction amounts.
    pub total_amount: f64,
    /// Mean transaction amount, 0.0 when the store is empty.
    pub avg_amount: f64,
}

/// In-memory store of transactions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    entries: HashMap<String, Transaction>,
}

impl TransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a transaction, replacing any existing one with the same id.
    ///
    /// Returns the replaced transaction, if any.
    pub fn upsert(&mut self, transaction: Transaction) -> Option<Transaction> {
        self.entries.insert(transaction.id.clone(), transaction)
    }

    /// Looks up a transaction by id.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.entries.get(id)
    }

    /// Removes a transaction by id, returning it if present.
    pub fn delete(&mut self, id: &str) -> Option<Transaction> {
        self.entries.remove(id)
    }

    /// Removes every transaction.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists all transactions newest-first.
    ///
    /// Times are datetime-local strings, so lexicographic order is
    /// chronological order. Ties break on id for a stable listing.
    pub fn list(&self) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = self.entries.values().collect();
        all.sort_by(|a, b| {
            b.input
                .time
                .cmp(&a.input.time)
                .then_with(|| a.id.cmp(&b.id))
        });
        all
    }

    /// Case-insensitive substring search over id, location, and merchant.
    ///
    /// An empty query matches everything. Results come back newest-first.
    pub fn search(&self, query: &str) -> Vec<&Transaction> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }
        self.list()
            .into_iter()
            .filter(|t| {
                t.id.to_lowercase().contains(&needle)
                    || t.input.location.to_lowercase().contains(&needle)
                    || t.input.merchant.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Computes aggregate statistics; all ratios are 0.0 for an empty store.
    pub fn stats(&self) -> Stats {
        let total = self.entries.len();
        if total == 0 {
            return Stats::default();
        }

        let mut flagged = 0usize;
        let mut confidence_sum = 0.0;
        let mut total_amount = 0.0;

        for t in self.entries.values() {
            if t.prediction.fraudulent {
                flagged += 1;
            }
            confidence_sum += t.prediction.confidence;
            total_amount += t.input.amount;
        }

        Stats {
            total,
            flagged,
            flagged_rate: flagged as f64 / total as f64,
            avg_confidence: confidence_sum / total as f64,
            total_amount,
            avg_amount: total_amount / total as f64,
        }
    }
}
