//! Account records and the ledger mutation rules.
//!
//! `transfer_out` and `wire_in` are the only places a balance changes or
//! a transaction is appended. Both check their business rules before
//! touching any state, so a rule failure leaves the account untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::transaction::{Transaction, WIRE_SENDER};

/// Balance granted to every freshly registered account.
pub const SIGNUP_BONUS: i64 = 90_000;

/// A first transfer below this amount is rejected.
pub const MIN_FIRST_TRANSFER: i64 = 100_000;

/// A phone-identified balance-holding record. Field names serialize in
/// camelCase so the persisted file stays compatible with the legacy
/// `users.json` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub full_name: String,
    pub phone: String,
    pub pin: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an account with the signup bonus and an empty history.
    pub fn new(full_name: String, phone: String, pin: String) -> Self {
        Account {
            full_name,
            phone,
            pin,
            balance: Decimal::from(SIGNUP_BONUS),
            transactions: Vec::new(),
        }
    }

    /// Checks the PIN by exact string equality.
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Debits this account for an outgoing transfer and appends the
    /// matching ledger entry. The receiver is recorded as free text; no
    /// other account is credited.
    ///
    /// Rule order: first-transfer minimum, then sufficient funds.
    /// Returns the new balance.
    pub fn transfer_out(
        &mut self,
        amount: Decimal,
        receiver: &str,
        bank: &str,
        account: &str,
    ) -> Result<Decimal, LedgerError> {
        if self.transactions.is_empty() && amount < Decimal::from(MIN_FIRST_TRANSFER) {
            return Err(LedgerError::MinimumFirstTransfer);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        self.balance -= amount;
        self.transactions
            .push(Transaction::debit(amount, receiver, bank, account));
        Ok(self.balance)
    }

    /// Credits this account from a wire deposit and appends the matching
    /// ledger entry. Returns the new balance.
    pub fn wire_in(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        self.transactions
            .push(Transaction::credit(amount, WIRE_SENDER));
        Ok(self.balance)
    }
}

/// Ledger rule violations. Converted into the HTTP error surface by the
/// `error` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("first transfer below the minimum")]
    MinimumFirstTransfer,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("amount must be a positive number")]
    InvalidAmount,
}
