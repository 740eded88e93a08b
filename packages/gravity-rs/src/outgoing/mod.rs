//! Outgoing transactions: source-chain state changes awaiting execution on
//! the destination chain
//!
//! ## Submodules
//!
//! - `signer_set` - validator set updates
//! - `batch` - token transfer batches
//! - `contract_call` - arbitrary logic calls
//!
//! Every variant implements [`OutgoingTx`], so pending-transaction queues and
//! signature collectors can work over [`AnyOutgoingTx`] without knowing which
//! shape they hold. The set of variants is fixed by the destination
//! contract's ABI.

pub mod batch;
pub mod contract_call;
pub mod signer_set;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Checkpoint;

pub use batch::BatchTx;
pub use contract_call::ContractCallTx;
pub use signer_set::SignerSetTx;

/// Capabilities shared by every outgoing transaction variant
pub trait OutgoingTx {
    /// Key under which the pending-transaction store holds this transaction
    fn store_index(&self) -> Vec<u8>;

    /// Store index without the trailing nonce. Transactions with equal
    /// groups are ordered by [`OutgoingTx::nonce`].
    fn nonce_group(&self) -> Vec<u8>;

    /// Nonce that orders this transaction inside its group
    fn nonce(&self) -> u64;

    /// Source-chain block height at which the transaction was created
    fn source_height(&self) -> u64;

    /// Commitment hash for signers and the destination verifier.
    ///
    /// Fails only when `gravity_id` is longer than 32 bytes.
    fn checkpoint(&self, gravity_id: &[u8]) -> Result<Checkpoint>;
}

/// Closed union of the outgoing transaction variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyOutgoingTx {
    SignerSet(SignerSetTx),
    Batch(BatchTx),
    ContractCall(ContractCallTx),
}

impl AnyOutgoingTx {
    /// Variant name as used in the JSON `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            AnyOutgoingTx::SignerSet(_) => "signer_set",
            AnyOutgoingTx::Batch(_) => "batch",
            AnyOutgoingTx::ContractCall(_) => "contract_call",
        }
    }

    /// True when `self` may follow `earlier` in the same nonce group.
    ///
    /// A store rejects a new transaction that shares a group with an existing
    /// one but does not carry a strictly greater nonce; for contract calls
    /// this is what keeps conflicting calls in one invalidation scope from
    /// both executing. Transactions in different groups never supersede
    /// each other.
    pub fn supersedes(&self, earlier: &AnyOutgoingTx) -> bool {
        self.nonce_group() == earlier.nonce_group() && self.nonce() > earlier.nonce()
    }

    fn as_dyn(&self) -> &dyn OutgoingTx {
        match self {
            AnyOutgoingTx::SignerSet(tx) => tx,
            AnyOutgoingTx::Batch(tx) => tx,
            AnyOutgoingTx::ContractCall(tx) => tx,
        }
    }
}

impl OutgoingTx for AnyOutgoingTx {
    fn store_index(&self) -> Vec<u8> {
        self.as_dyn().store_index()
    }

    fn nonce_group(&self) -> Vec<u8> {
        self.as_dyn().nonce_group()
    }

    fn nonce(&self) -> u64 {
        self.as_dyn().nonce()
    }

    fn source_height(&self) -> u64 {
        self.as_dyn().source_height()
    }

    fn checkpoint(&self, gravity_id: &[u8]) -> Result<Checkpoint> {
        self.as_dyn().checkpoint(gravity_id)
    }
}

impl From<SignerSetTx> for AnyOutgoingTx {
    fn from(tx: SignerSetTx) -> Self {
        AnyOutgoingTx::SignerSet(tx)
    }
}

impl From<BatchTx> for AnyOutgoingTx {
    fn from(tx: BatchTx) -> Self {
        AnyOutgoingTx::Batch(tx)
    }
}

impl From<ContractCallTx> for AnyOutgoingTx {
    fn from(tx: ContractCallTx) -> Self {
        AnyOutgoingTx::ContractCall(tx)
    }
}
