//! Ledger entry types.
//! Serialized layout matches the account file: entries are tagged by
//! `type` and carry the counterparty fields of their direction.

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label recorded as the counterparty of every wire credit.
pub const WIRE_SENDER: &str = "Wire Deposit";

/// An immutable, append-only record of a balance change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transaction {
    /// Outgoing transfer. The receiver fields are free-text metadata,
    /// not a reference to another stored account.
    Debit {
        #[serde(with = "rust_decimal::serde::float")]
        amount: Decimal,
        receiver: String,
        bank: String,
        account: String,
        date: String,
    },
    /// Incoming wire deposit.
    Credit {
        #[serde(with = "rust_decimal::serde::float")]
        amount: Decimal,
        sender: String,
        date: String,
    },
}

impl Transaction {
    pub fn debit(amount: Decimal, receiver: &str, bank: &str, account: &str) -> Self {
        Transaction::Debit {
            amount,
            receiver: receiver.to_string(),
            bank: bank.to_string(),
            account: account.to_string(),
            date: timestamp(),
        }
    }

    pub fn credit(amount: Decimal, sender: &str) -> Self {
        Transaction::Credit {
            amount,
            sender: sender.to_string(),
            date: timestamp(),
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Debit { amount, .. } | Transaction::Credit { amount, .. } => *amount,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Transaction::Debit { .. })
    }
}

/// Human-readable local timestamp, e.g. `2/15/2026, 9:05:07 AM`.
fn timestamp() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
