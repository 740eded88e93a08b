//! Gravity checkpoint tool
//!
//! Offline companion to `gravity-rs`: loads outgoing transactions from JSON
//! and prints the values a signer or relayer needs (store index, source
//! height, checkpoint). Performs no network I/O.

pub mod config;
pub mod report;

pub use config::{Config, LogFormat};
pub use report::{parse_transactions, read_transactions, TxReport};
