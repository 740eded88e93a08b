//! Store keys for pending outgoing transactions
//!
//! Layout per variant:
//! ```text
//! SignerSetTx:    | 0x01 | nonce (8, BE) |
//! BatchTx:        | 0x02 | token contract (20) | batch nonce (8, BE) |
//! ContractCallTx: | 0x03 | invalidation scope (32) | invalidation nonce (8, BE) |
//! ```
//!
//! The leading type byte keeps the variants disjoint. Big-endian nonces make
//! lexicographic key order equal to nonce order inside each group, so a store
//! can range-scan one token contract or one invalidation scope by prefix.

use crate::address::EthAddress;
use crate::types::InvalidationScope;

/// Type prefix for validator set updates. Never reuse these values.
pub const SIGNER_SET_TX_PREFIX: u8 = 1;
/// Type prefix for token batches
pub const BATCH_TX_PREFIX: u8 = 2;
/// Type prefix for arbitrary contract calls
pub const CONTRACT_CALL_TX_PREFIX: u8 = 3;

/// Group prefix shared by every signer set (only the type byte)
pub fn signer_set_tx_prefix() -> Vec<u8> {
    vec![SIGNER_SET_TX_PREFIX]
}

/// Group prefix for all batches of one token contract
pub fn batch_tx_prefix(token_contract: &EthAddress) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + 20 + 8);
    key.push(BATCH_TX_PREFIX);
    key.extend_from_slice(token_contract.as_bytes());
    key
}

/// Group prefix for all calls sharing one invalidation scope
pub fn contract_call_tx_prefix(scope: &InvalidationScope) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + 32 + 8);
    key.push(CONTRACT_CALL_TX_PREFIX);
    key.extend_from_slice(scope.as_bytes());
    key
}

pub fn signer_set_tx_key(nonce: u64) -> Vec<u8> {
    let mut key = signer_set_tx_prefix();
    key.extend_from_slice(&nonce.to_be_bytes());
    key
}

pub fn batch_tx_key(token_contract: &EthAddress, batch_nonce: u64) -> Vec<u8> {
    let mut key = batch_tx_prefix(token_contract);
    key.extend_from_slice(&batch_nonce.to_be_bytes());
    key
}

pub fn contract_call_tx_key(scope: &InvalidationScope, invalidation_nonce: u64) -> Vec<u8> {
    let mut key = contract_call_tx_prefix(scope);
    key.extend_from_slice(&invalidation_nonce.to_be_bytes());
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signer_set_key_layout() {
        let key = signer_set_tx_key(0x0102);
        assert_eq!(key, vec![1, 0, 0, 0, 0, 0, 0, 0x01, 0x02]);
    }

    #[test]
    fn test_batch_key_layout() {
        let token = EthAddress([0xaa; 20]);
        let key = batch_tx_key(&token, 5);
        assert_eq!(key.len(), 29);
        assert_eq!(key[0], BATCH_TX_PREFIX);
        assert_eq!(&key[1..21], &[0xaa; 20]);
        assert_eq!(&key[21..], &5u64.to_be_bytes());
        assert!(key.starts_with(&batch_tx_prefix(&token)));
    }

    #[test]
    fn test_contract_call_key_layout() {
        let scope = InvalidationScope([0x33; 32]);
        let key = contract_call_tx_key(&scope, u64::MAX);
        assert_eq!(key.len(), 41);
        assert_eq!(key[0], CONTRACT_CALL_TX_PREFIX);
        assert_eq!(&key[1..33], &[0x33; 32]);
        assert_eq!(&key[33..], &[0xff; 8]);
    }

    #[test]
    fn test_keys_sort_by_nonce_within_group() {
        let token = EthAddress([0x01; 20]);
        let mut keys = vec![
            batch_tx_key(&token, 256),
            batch_tx_key(&token, 2),
            batch_tx_key(&token, 1),
        ];
        keys.sort();
        assert_eq!(keys[0], batch_tx_key(&token, 1));
        assert_eq!(keys[1], batch_tx_key(&token, 2));
        assert_eq!(keys[2], batch_tx_key(&token, 256));
    }

    #[test]
    fn test_keys_group_by_token_contract() {
        let a = EthAddress([0x01; 20]);
        let b = EthAddress([0x02; 20]);
        // Every batch of token a sorts before any batch of token b
        assert!(batch_tx_key(&a, u64::MAX) < batch_tx_key(&b, 0));
    }

    #[test]
    fn test_prefixes_are_distinct() {
        assert_ne!(SIGNER_SET_TX_PREFIX, BATCH_TX_PREFIX);
        assert_ne!(BATCH_TX_PREFIX, CONTRACT_CALL_TX_PREFIX);
        assert_ne!(SIGNER_SET_TX_PREFIX, CONTRACT_CALL_TX_PREFIX);
    }
}
