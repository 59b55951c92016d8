//! Persistence layer (JSON document store).

pub mod ledger;

pub use ledger::{Ledger, LedgerError};
