//! # Card Authorizer
//!
//! A streaming authorizer that validates account-open and transaction
//! operations against a fixed rule set, emitting one result per input
//! event, in input order.
//!
//! ## Design Principles
//!
//! - **Integer amounts**: limits and amounts are plain integers, debits are
//!   plain subtraction
//! - **Streaming processing**: one line decoded, processed, and answered at
//!   a time
//! - **Single account**: the first accepted account-open creates the
//!   singleton; its identity never changes afterwards
//! - **Deterministic output**: violations preserve evaluation order
//!
//! ## Example
//!
//! ```no_run
//! use card_authorizer::Authorizer;
//! use std::io::Cursor;
//!
//! let ops = r#"{"account": {"active-card": true, "available-limit": 100}}"#;
//! let mut authorizer = Authorizer::new();
//! authorizer.process_stream(Cursor::new(ops), std::io::stdout()).unwrap();
//! ```

pub mod account;
pub mod engine;
pub mod error;
pub mod history;
pub mod operation;
pub mod rules;
pub mod violation;

pub use account::Account;
pub use engine::Authorizer;
pub use error::{EngineError, Result};
pub use history::History;
pub use operation::{Event, OperationRecord, OperationResult, Transaction};
pub use violation::Violation;
