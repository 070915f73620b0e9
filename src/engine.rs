//! Core authorization engine.
//!
//! Processes operations in input order and maintains the single account
//! plus the history of accepted transactions. The engine owns both
//! exclusively; each event is fully resolved before the next one is read.

use crate::account::Account;
use crate::error::Result;
use crate::history::History;
use crate::operation::{Event, OperationRecord, OperationResult, Transaction};
use crate::rules;
use crate::violation::Violation;
use chrono::Utc;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// The authorization engine.
///
/// State machine over the optional account: uninitialized until the first
/// accepted account-open, initialized and identity-stable afterwards.
/// Transactions within the initialized state are accepted or rejected
/// without changing that coarse state.
///
/// # Output Ordering
///
/// `process` returns exactly one result per event, synchronously, so the
/// stream adapter emits results in input order with no reordering or
/// batching.
pub struct Authorizer {
    /// The singleton account; `None` until the first accepted account-open.
    account: Option<Account>,

    /// Accepted transactions, consulted by the recency rules.
    history: History,
}

impl Authorizer {
    /// Creates a new engine with no account and empty history.
    pub fn new() -> Self {
        Authorizer {
            account: None,
            history: History::new(),
        }
    }

    /// Processes line-delimited JSON operations from a reader in streaming
    /// fashion, writing one result line per decoded input line.
    ///
    /// Lines are read one at a time to keep memory flat. Malformed lines
    /// are reported on the output stream, logged at warn level, and skipped
    /// without touching the engine.
    pub fn process_stream<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<()> {
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = line_idx + 1;

            let record = match serde_json::from_str::<OperationRecord>(&line) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Line {}: decode error: {}", line_num, e);
                    writeln!(writer, "decode error: {}", e)?;
                    continue;
                }
            };

            let event = match record.parse() {
                Some(event) => event,
                None => {
                    warn!(
                        "Line {}: expected exactly one of account or transaction",
                        line_num
                    );
                    writeln!(
                        writer,
                        "decode error: expected exactly one of account or transaction"
                    )?;
                    continue;
                }
            };

            let result = self.process(event);
            let encoded = serde_json::to_string(&result)?;
            writeln!(writer, "{}", encoded)?;
        }

        Ok(())
    }

    /// Processes a single event, returning exactly one result.
    pub fn process(&mut self, event: Event) -> OperationResult {
        match event {
            Event::AccountOpen(account) => self.process_account_open(account),
            Event::Transaction(tx) => self.process_transaction(tx),
        }
    }

    /// Processes an account-open event.
    ///
    /// The first accepted account-open installs the singleton; any later
    /// one is rejected and the stored account is returned unchanged.
    fn process_account_open(&mut self, new_account: Account) -> OperationResult {
        if let Some(existing) = self.account {
            debug!("Rejecting account-open: account already initialized");
            return OperationResult {
                account: Some(existing),
                violations: vec![Violation::AccountAlreadyInitialized],
                at: Utc::now(),
            };
        }

        self.account = Some(new_account);
        debug!(
            "Account opened, active {}, available limit {}",
            new_account.active, new_account.available_limit
        );

        OperationResult {
            account: Some(new_account),
            violations: Vec::new(),
            at: Utc::now(),
        }
    }

    /// Processes a transaction event.
    ///
    /// An accepted transaction debits the limit and enters the history; a
    /// rejected one leaves both untouched and stays invisible to future
    /// rule evaluations.
    fn process_transaction(&mut self, tx: Transaction) -> OperationResult {
        let mut account = match self.account {
            Some(account) => account,
            None => {
                debug!(
                    "Rejecting transaction at {}: account not initialized",
                    tx.merchant
                );
                return OperationResult {
                    account: None,
                    violations: vec![Violation::AccountNotInitialized],
                    at: Utc::now(),
                };
            }
        };

        let violations = rules::evaluate_transaction(&account, &self.history, &tx);

        if violations.is_empty() {
            account.debit(tx.amount);
            self.account = Some(account);
            self.history.record(&tx);
            debug!(
                "Accepted {} at {}, available limit now {}",
                tx.amount, tx.merchant, account.available_limit
            );
        } else {
            debug!(
                "Rejected {} at {}: {} violation(s)",
                tx.amount,
                tx.merchant,
                violations.len()
            );
        }

        OperationResult {
            account: Some(account),
            violations,
            at: Utc::now(),
        }
    }

    /// Returns the current account (for testing).
    #[cfg(test)]
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }
}

impl Default for Authorizer {
    fn default() -> Self {
        Self::new()
    }
}
