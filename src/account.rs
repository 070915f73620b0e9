//! Account model and operations.
//!
//! At most one account exists per run; only accepted transactions mutate it.

use serde::{Deserialize, Serialize};

/// The card account state.
///
/// # Invariants
///
/// - Created by the first accepted account-open operation; later
///   account-open operations are rejected and never replace it
/// - Mutated only by accepted transactions, which debit `available_limit`
///
/// # Negative Limits
///
/// Amounts are assumed non-negative and an accepted transaction is always
/// covered by the limit, so `available_limit` never goes below zero through
/// the engine. The field is signed because the wire contract carries plain
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Whether the card can authorize transactions.
    #[serde(rename = "active-card")]
    pub active: bool,

    /// Remaining credit. Debited by accepted transactions.
    #[serde(rename = "available-limit")]
    pub available_limit: i64,
}

impl Account {
    /// Creates an account with the given card state and limit.
    pub fn new(active: bool, available_limit: i64) -> Self {
        Account {
            active,
            available_limit,
        }
    }

    /// Returns `true` if the available limit covers `amount`.
    pub fn covers(&self, amount: i64) -> bool {
        self.available_limit >= amount
    }

    /// Debits an accepted transaction amount from the available limit.
    pub fn debit(&mut self, amount: i64) {
        self.available_limit -= amount;
    }
}
