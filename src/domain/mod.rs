//! Framework-agnostic account and ledger types.

pub mod account;
pub mod transaction;

pub use account::{Account, LedgerError, MIN_FIRST_TRANSFER, SIGNUP_BONUS};
pub use transaction::{Transaction, WIRE_SENDER};
