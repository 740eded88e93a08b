//! Token transfer batch checkpoint

use alloy::primitives::{Address, FixedBytes, U256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OutgoingTx;
use crate::abi::BatchCheckpoint;
use crate::address::EthAddress;
use crate::codec::{method_salt, to_fixed_32, BATCH_METHOD};
use crate::error::Result;
use crate::hash::hash_call_arguments;
use crate::store_index::{batch_tx_key, batch_tx_prefix};
use crate::types::{Checkpoint, SendToEthereum};

/// Batch of transfers of a single ERC20 token
///
/// `timeout` is the destination-chain block height after which the batch
/// can no longer be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTx {
    pub batch_nonce: u64,
    pub timeout: u64,
    pub transactions: Vec<SendToEthereum>,
    pub token_contract: EthAddress,
    pub height: u64,
}

impl BatchTx {
    pub fn new(
        batch_nonce: u64,
        height: u64,
        token_contract: EthAddress,
        timeout: u64,
        transactions: Vec<SendToEthereum>,
    ) -> Self {
        Self {
            batch_nonce,
            timeout,
            transactions,
            token_contract,
            height,
        }
    }

    /// Sum of fees paid to the relayer, in the batch token
    pub fn total_fee(&self) -> U256 {
        self.transactions
            .iter()
            .fold(U256::ZERO, |acc, tx| acc.saturating_add(tx.fee))
    }

    /// Structured checkpoint arguments, in contract order
    pub fn checkpoint_call(&self, gravity_id: &[u8]) -> Result<BatchCheckpoint::submitBatchCall> {
        let gravity_id = to_fixed_32(gravity_id)?;
        let method_name = method_salt(BATCH_METHOD)?;

        let count = self.transactions.len();
        let mut amounts = Vec::with_capacity(count);
        let mut destinations = Vec::with_capacity(count);
        let mut fees = Vec::with_capacity(count);
        for tx in &self.transactions {
            amounts.push(tx.amount);
            destinations.push(Address::from(tx.ethereum_recipient));
            fees.push(tx.fee);
        }

        Ok(BatchCheckpoint::submitBatchCall {
            gravityId: FixedBytes::from(gravity_id),
            methodName: FixedBytes::from(method_name),
            amounts,
            destinations,
            fees,
            batchNonce: U256::from(self.batch_nonce),
            tokenContract: Address::from(self.token_contract),
            batchTimeout: U256::from(self.timeout),
        })
    }
}

impl OutgoingTx for BatchTx {
    fn store_index(&self) -> Vec<u8> {
        batch_tx_key(&self.token_contract, self.batch_nonce)
    }

    fn nonce_group(&self) -> Vec<u8> {
        batch_tx_prefix(&self.token_contract)
    }

    fn nonce(&self) -> u64 {
        self.batch_nonce
    }

    fn source_height(&self) -> u64 {
        self.height
    }

    fn checkpoint(&self, gravity_id: &[u8]) -> Result<Checkpoint> {
        let call = self.checkpoint_call(gravity_id)?;
        let checkpoint = Checkpoint(hash_call_arguments(&call));

        debug!(
            kind = "batch",
            nonce = self.batch_nonce,
            token_contract = %self.token_contract,
            transactions = self.transactions.len(),
            checkpoint = %checkpoint,
            "Computed checkpoint"
        );
        Ok(checkpoint)
    }
}
