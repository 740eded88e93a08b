//! Validator set update checkpoint

use alloy::primitives::{Address, FixedBytes, U256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OutgoingTx;
use crate::abi::SignerSetCheckpoint;
use crate::codec::{method_salt, to_fixed_32, SIGNER_SET_METHOD};
use crate::error::Result;
use crate::hash::hash_call_arguments;
use crate::store_index::{signer_set_tx_key, signer_set_tx_prefix};
use crate::types::{Checkpoint, EthereumSigner};

/// A new validator set for the destination contract
///
/// `signers` order is part of the checkpoint and must match the order the
/// contract iterates; it is not sorted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerSetTx {
    pub nonce: u64,
    pub height: u64,
    pub signers: Vec<EthereumSigner>,
}

impl SignerSetTx {
    pub fn new(nonce: u64, height: u64, signers: Vec<EthereumSigner>) -> Self {
        Self {
            nonce,
            height,
            signers,
        }
    }

    /// Sum of all signer powers
    pub fn total_power(&self) -> u128 {
        self.signers.iter().map(|s| s.power as u128).sum()
    }

    /// Structured checkpoint arguments, in contract order
    ///
    /// Signers are split into parallel address and power arrays.
    pub fn checkpoint_call(&self, gravity_id: &[u8]) -> Result<SignerSetCheckpoint::checkpointCall> {
        let gravity_id = to_fixed_32(gravity_id)?;
        let method_name = method_salt(SIGNER_SET_METHOD)?;

        let mut validators = Vec::with_capacity(self.signers.len());
        let mut powers = Vec::with_capacity(self.signers.len());
        for signer in &self.signers {
            validators.push(Address::from(signer.ethereum_address));
            powers.push(U256::from(signer.power));
        }

        Ok(SignerSetCheckpoint::checkpointCall {
            gravityId: FixedBytes::from(gravity_id),
            methodName: FixedBytes::from(method_name),
            valsetNonce: U256::from(self.nonce),
            validators,
            powers,
        })
    }
}

impl OutgoingTx for SignerSetTx {
    fn store_index(&self) -> Vec<u8> {
        signer_set_tx_key(self.nonce)
    }

    fn nonce_group(&self) -> Vec<u8> {
        signer_set_tx_prefix()
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn source_height(&self) -> u64 {
        self.height
    }

    fn checkpoint(&self, gravity_id: &[u8]) -> Result<Checkpoint> {
        let call = self.checkpoint_call(gravity_id)?;
        let checkpoint = Checkpoint(hash_call_arguments(&call));

        debug!(
            kind = "signer_set",
            nonce = self.nonce,
            signers = self.signers.len(),
            checkpoint = %checkpoint,
            "Computed checkpoint"
        );
        Ok(checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::EthAddress;

    fn signer(byte: u8, power: u64) -> EthereumSigner {
        EthereumSigner::new(EthAddress([byte; 20]), power)
    }

    #[test]
    fn test_checkpoint_deterministic() {
        let tx = SignerSetTx::new(1, 100, vec![signer(0x11, 3000), signer(0x22, 2000)]);
        assert_eq!(
            tx.checkpoint(b"test-id").unwrap(),
            tx.checkpoint(b"test-id").unwrap()
        );
    }

    #[test]
    fn test_checkpoint_order_sensitive() {
        let tx = SignerSetTx::new(2, 100, vec![signer(0x11, 3000), signer(0x22, 2000)]);
        let reversed = SignerSetTx::new(2, 100, vec![signer(0x22, 2000), signer(0x11, 3000)]);
        assert_ne!(
            tx.checkpoint(b"test-id").unwrap(),
            reversed.checkpoint(b"test-id").unwrap()
        );
    }

    #[test]
    fn test_checkpoint_domain_separated() {
        let tx = SignerSetTx::new(1, 100, vec![signer(0x11, 5000)]);
        assert_ne!(
            tx.checkpoint(b"bridge-a").unwrap(),
            tx.checkpoint(b"bridge-b").unwrap()
        );
    }

    #[test]
    fn test_height_not_committed() {
        let a = SignerSetTx::new(1, 100, vec![signer(0x11, 5000)]);
        let b = SignerSetTx::new(1, 999, vec![signer(0x11, 5000)]);
        assert_eq!(a.checkpoint(b"foo").unwrap(), b.checkpoint(b"foo").unwrap());
        assert_eq!(b.source_height(), 999);
    }

    #[test]
    fn test_checkpoint_call_parallel_arrays() {
        let tx = SignerSetTx::new(7, 1, vec![signer(0x11, 3000), signer(0x22, 2000)]);
        let call = tx.checkpoint_call(b"foo").unwrap();

        assert_eq!(call.valsetNonce, U256::from(7u64));
        assert_eq!(call.validators.len(), 2);
        assert_eq!(call.powers.len(), 2);
        assert_eq!(call.validators[1], Address::from([0x22u8; 20]));
        assert_eq!(call.powers[1], U256::from(2000u64));
        assert_eq!(&call.methodName[..10], b"checkpoint");
        assert_eq!(&call.gravityId[..3], b"foo");
    }

    #[test]
    fn test_large_nonce_widened_losslessly() {
        let tx = SignerSetTx::new(u64::MAX, 1, vec![]);
        let call = tx.checkpoint_call(b"foo").unwrap();
        assert_eq!(call.valsetNonce, U256::from(u64::MAX));
        assert_eq!(tx.store_index(), signer_set_tx_key(u64::MAX));
    }

    #[test]
    fn test_total_power() {
        let tx = SignerSetTx::new(1, 1, vec![signer(0x11, u64::MAX), signer(0x22, 1)]);
        assert_eq!(tx.total_power(), u64::MAX as u128 + 1);
    }
}
