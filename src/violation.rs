//! Violation catalog shared by the rule evaluator and the wire format.

use serde::Serialize;
use std::fmt;

/// A named reason an operation's default effect was suppressed.
///
/// The kebab-case identifiers are part of the output contract; external
/// consumers match on the strings, never on discriminant values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// An account-open operation arrived after the account was created.
    AccountAlreadyInitialized,

    /// A transaction arrived before any account was created.
    AccountNotInitialized,

    /// The account's card is inactive.
    CardNotActive,

    /// The transaction amount exceeds the available limit.
    InsufficientLimit,

    /// Three or more accepted transactions in the trailing two minutes.
    HighFrequencySmallInterval,

    /// A prior accepted transaction with the same merchant and amount in
    /// the trailing two minutes.
    DoubledTransaction,
}

impl Violation {
    /// Returns the wire identifier for this violation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::AccountAlreadyInitialized => "account-already-initialized",
            Violation::AccountNotInitialized => "account-not-initialized",
            Violation::CardNotActive => "card-not-active",
            Violation::InsufficientLimit => "insufficient-limit",
            Violation::HighFrequencySmallInterval => "high-frequency-small-interval",
            Violation::DoubledTransaction => "doubled-transaction",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_identifiers_are_stable() {
        let cases = [
            (Violation::AccountAlreadyInitialized, "account-already-initialized"),
            (Violation::AccountNotInitialized, "account-not-initialized"),
            (Violation::CardNotActive, "card-not-active"),
            (Violation::InsufficientLimit, "insufficient-limit"),
            (Violation::HighFrequencySmallInterval, "high-frequency-small-interval"),
            (Violation::DoubledTransaction, "doubled-transaction"),
        ];

        for (violation, expected) in cases {
            assert_eq!(violation.as_str(), expected);
            assert_eq!(violation.to_string(), expected);
            assert_eq!(
                serde_json::to_string(&violation).unwrap(),
                format!("\"{}\"", expected)
            );
        }
    }

    #[test]
    fn test_sequence_serializes_as_string_array() {
        let violations = vec![Violation::InsufficientLimit, Violation::DoubledTransaction];
        assert_eq!(
            serde_json::to_string(&violations).unwrap(),
            r#"["insufficient-limit","doubled-transaction"]"#
        );
    }
}
