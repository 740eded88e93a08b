//! Error types for checkpoint encoding
//!
//! Both kinds are data-integrity failures. A correct caller builds outgoing
//! transactions from already-validated chain state, so neither should ever be
//! retried: treat them like a failed assertion on the offending instance.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    /// A domain separator or invalidation scope does not fit a `bytes32` slot
    #[error("identifier is {len} bytes, exceeds the 32 byte field width")]
    OversizedIdentifier { len: usize },

    /// An address is not a valid fixed-width address for its chain
    #[error("malformed address {value:?}: {reason}")]
    MalformedAddress { value: String, reason: String },
}

impl CheckpointError {
    pub(crate) fn malformed_address(value: &str, reason: impl Into<String>) -> Self {
        CheckpointError::MalformedAddress {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = CheckpointError> = std::result::Result<T, E>;
