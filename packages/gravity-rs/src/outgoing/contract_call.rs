//! Arbitrary logic call checkpoint

use alloy::primitives::{Address, Bytes, FixedBytes, U256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OutgoingTx;
use crate::abi::ContractCallCheckpoint;
use crate::address::EthAddress;
use crate::codec::{method_salt, to_fixed_32, CONTRACT_CALL_METHOD};
use crate::error::Result;
use crate::hash::hash_call_arguments;
use crate::store_index::{contract_call_tx_key, contract_call_tx_prefix};
use crate::types::{hex_bytes, Checkpoint, Erc20Token, InvalidationScope};

/// Call of `payload` on contract `address`, funded by `tokens` and paying
/// `fees` to the relayer
///
/// Only one call per `invalidation_scope` can win: executing a call
/// invalidates every other call in the scope with an equal or lower
/// `invalidation_nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCallTx {
    pub invalidation_nonce: u64,
    pub invalidation_scope: InvalidationScope,
    pub address: EthAddress,
    #[serde(with = "hex_bytes")]
    pub payload: Vec<u8>,
    pub timeout: u64,
    pub tokens: Vec<Erc20Token>,
    pub fees: Vec<Erc20Token>,
    pub height: u64,
}

impl ContractCallTx {
    /// Structured checkpoint arguments, in contract order
    pub fn checkpoint_call(
        &self,
        gravity_id: &[u8],
    ) -> Result<ContractCallCheckpoint::checkpointCall> {
        let gravity_id = to_fixed_32(gravity_id)?;
        let method_name = method_salt(CONTRACT_CALL_METHOD)?;

        let (transfer_amounts, transfer_contracts) = split_tokens(&self.tokens);
        let (fee_amounts, fee_contracts) = split_tokens(&self.fees);

        Ok(ContractCallCheckpoint::checkpointCall {
            gravityId: FixedBytes::from(gravity_id),
            methodName: FixedBytes::from(method_name),
            transferAmounts: transfer_amounts,
            transferTokenContracts: transfer_contracts,
            feeAmounts: fee_amounts,
            feeTokenContracts: fee_contracts,
            logicContractAddress: Address::from(self.address),
            payload: Bytes::from(self.payload.clone()),
            timeout: U256::from(self.timeout),
            invalidationId: FixedBytes::from(self.invalidation_scope.0),
            invalidationNonce: U256::from(self.invalidation_nonce),
        })
    }
}

/// Split tokens into parallel (amounts, contracts) arrays
fn split_tokens(tokens: &[Erc20Token]) -> (Vec<U256>, Vec<Address>) {
    let mut amounts = Vec::with_capacity(tokens.len());
    let mut contracts = Vec::with_capacity(tokens.len());
    for token in tokens {
        amounts.push(token.amount);
        contracts.push(Address::from(token.contract));
    }
    (amounts, contracts)
}

impl OutgoingTx for ContractCallTx {
    fn store_index(&self) -> Vec<u8> {
        contract_call_tx_key(&self.invalidation_scope, self.invalidation_nonce)
    }

    fn nonce_group(&self) -> Vec<u8> {
        contract_call_tx_prefix(&self.invalidation_scope)
    }

    fn nonce(&self) -> u64 {
        self.invalidation_nonce
    }

    fn source_height(&self) -> u64 {
        self.height
    }

    fn checkpoint(&self, gravity_id: &[u8]) -> Result<Checkpoint> {
        let call = self.checkpoint_call(gravity_id)?;
        let checkpoint = Checkpoint(hash_call_arguments(&call));

        debug!(
            kind = "contract_call",
            nonce = self.invalidation_nonce,
            scope = %self.invalidation_scope,
            target = %self.address,
            checkpoint = %checkpoint,
            "Computed checkpoint"
        );
        Ok(checkpoint)
    }
}
