//! Gravity-RS: checkpoint commitments for Gravity bridge outgoing transactions
//!
//! An outgoing transaction is a state change created on the source chain that
//! must execute on the destination chain. Validators sign its checkpoint, and
//! the destination contract recomputes the same checkpoint from the submitted
//! fields before accepting the signatures. This crate is the off-chain half of
//! that contract:
//!
//! - **Fixed-Width Codec** - `bytes32` packing of domain separators and salts
//! - **Address Codec** - validated Ethereum (hex) and Cosmos (bech32) addresses
//! - **Outgoing Transactions** - signer set updates, token batches, contract calls
//! - **Store Index** - prefix-disambiguated keys for the pending-transaction store
//! - **Checkpoint Hashing** - `keccak256(abi.encode(...))` matching the contract
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! gravity-rs = { path = "../gravity-rs" }
//! ```
//!
//! ```ignore
//! use gravity_rs::{AnyOutgoingTx, OutgoingTx};
//!
//! let tx: AnyOutgoingTx = serde_json::from_str(&json)?;
//! let checkpoint = tx.checkpoint(b"gravity-mainnet")?;
//! tracing::info!(checkpoint = %checkpoint, index = %hex::encode(tx.store_index()));
//! ```

pub mod abi;
pub mod address;
pub mod codec;
pub mod error;
pub mod hash;
pub mod outgoing;
pub mod store_index;
pub mod types;

// Re-export commonly used items at the crate root
pub use address::{CosmosAddress, EthAddress};
pub use codec::to_fixed_32;
pub use error::CheckpointError;
pub use hash::keccak256;
pub use outgoing::{AnyOutgoingTx, BatchTx, ContractCallTx, OutgoingTx, SignerSetTx};
pub use types::{Checkpoint, Erc20Token, EthereumSigner, InvalidationScope, SendToEthereum};
