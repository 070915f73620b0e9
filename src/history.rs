//! Accepted-transaction history used by the recency rules.

use crate::operation::Transaction;
use chrono::{DateTime, Duration, Utc};

/// One accepted transaction, retained for lookback queries.
#[derive(Debug, Clone)]
struct Entry {
    merchant: String,
    amount: i64,
    time: DateTime<Utc>,
}

/// Append-only record of accepted transactions, in input order.
///
/// Only accepted transactions are recorded; account-open operations and
/// rejected transactions never enter. The store does not reorder: callers
/// feed events in non-decreasing time order, and the bounded backward scans
/// rely on that to stop early. Entries are kept for the process lifetime;
/// the lookback window bounds the scan, not the storage.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Records an accepted transaction.
    pub fn record(&mut self, tx: &Transaction) {
        self.entries.push(Entry {
            merchant: tx.merchant.clone(),
            amount: tx.amount,
            time: tx.time,
        });
    }

    /// Counts entries strictly inside the trailing `window` before `time`.
    ///
    /// Scans from the most recent entry backward and stops at the first
    /// entry at or before the cutoff. With in-order input this produces the
    /// same count as a full scan.
    pub fn count_within(&self, time: DateTime<Utc>, window: Duration) -> usize {
        let bound = time - window;
        self.entries
            .iter()
            .rev()
            .take_while(|entry| entry.time > bound)
            .count()
    }

    /// Returns `true` if any entry strictly inside the trailing `window`
    /// before `time` matches both `merchant` and `amount`.
    pub fn has_matching_within(
        &self,
        merchant: &str,
        amount: i64,
        time: DateTime<Utc>,
        window: Duration,
    ) -> bool {
        let bound = time - window;
        self.entries
            .iter()
            .rev()
            .take_while(|entry| entry.time > bound)
            .any(|entry| entry.merchant == merchant && entry.amount == amount)
    }

    /// Returns the number of recorded transactions (for testing).
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
