//! Operation models for line decoding and internal representation.

use crate::account::Account;
use crate::violation::Violation;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A purchase attempt against the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Merchant name, compared verbatim by the doubled-transaction rule.
    pub merchant: String,

    /// Amount to debit. Assumed non-negative; not validated.
    pub amount: i64,

    /// When the transaction happened. Input is expected in non-decreasing
    /// time order.
    pub time: DateTime<Utc>,
}

/// Raw operation record as decoded from one input line.
///
/// A well-formed line populates exactly one of the two payloads; `parse`
/// rejects anything else so the ambiguity never reaches the engine.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    /// Account-open payload.
    pub account: Option<Account>,

    /// Transaction payload.
    pub transaction: Option<Transaction>,
}

impl OperationRecord {
    /// Converts the raw record into a typed event.
    ///
    /// Returns `None` unless exactly one payload is populated.
    pub fn parse(self) -> Option<Event> {
        match (self.account, self.transaction) {
            (Some(account), None) => Some(Event::AccountOpen(account)),
            (None, Some(tx)) => Some(Event::Transaction(tx)),
            _ => None,
        }
    }
}

/// A decoded input event ready for processing.
#[derive(Debug, Clone)]
pub enum Event {
    /// Create the singleton account.
    AccountOpen(Account),

    /// Authorize a purchase against the account.
    Transaction(Transaction),
}

/// The outcome of processing one event.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    /// Snapshot of the account after the event. `None` until an account has
    /// been opened; serialized as an empty record.
    #[serde(serialize_with = "serialize_snapshot")]
    pub account: Option<Account>,

    /// Violations in evaluation order. Empty means the event was accepted.
    pub violations: Vec<Violation>,

    /// When the event settled. Not part of the wire format.
    #[serde(skip)]
    pub at: DateTime<Utc>,
}

/// Serializes an absent account as `{}` rather than `null`.
fn serialize_snapshot<S>(
    account: &Option<Account>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match account {
        Some(account) => account.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
