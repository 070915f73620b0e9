//! Rule evaluation over the account and accepted history.
//!
//! Functions here are pure: they read state and report violations, and
//! never mutate the account or the history. The engine applies side effects
//! only when the returned sequence is empty.

use crate::account::Account;
use crate::history::History;
use crate::operation::Transaction;
use crate::violation::Violation;
use chrono::Duration;

/// Trailing lookback, in minutes, shared by both recency rules.
const WINDOW_MINUTES: i64 = 2;

/// Accepted transactions inside the window at which the frequency rule fires.
const HIGH_FREQUENCY_LIMIT: usize = 3;

/// Evaluates a transaction against an initialized account.
///
/// Violations accumulate in a fixed order that the output contract
/// preserves: card-not-active, insufficient-limit,
/// high-frequency-small-interval, doubled-transaction. The candidate
/// transaction itself is not part of the history it is checked against.
pub fn evaluate_transaction(
    account: &Account,
    history: &History,
    tx: &Transaction,
) -> Vec<Violation> {
    let window = Duration::minutes(WINDOW_MINUTES);
    let mut violations = Vec::new();

    if !account.active {
        violations.push(Violation::CardNotActive);
    }
    if !account.covers(tx.amount) {
        violations.push(Violation::InsufficientLimit);
    }
    if history.count_within(tx.time, window) >= HIGH_FREQUENCY_LIMIT {
        violations.push(Violation::HighFrequencySmallInterval);
    }
    if history.has_matching_within(&tx.merchant, tx.amount, tx.time, window) {
        violations.push(Violation::DoubledTransaction);
    }

    violations
}
