//! Field types shared by the outgoing transaction variants

use alloy::primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::address::{CosmosAddress, EthAddress};
use crate::codec::to_fixed_32;
use crate::error::Result;

// ============================================================================
// Checkpoint
// ============================================================================

/// 32-byte commitment signed by the validator set and recomputed on chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checkpoint(pub [u8; 32]);

impl Checkpoint {
    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        crate::hash::bytes32_to_hex(&self.0)
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Checkpoint {
    fn from(bytes: [u8; 32]) -> Self {
        Checkpoint(bytes)
    }
}

impl AsRef<[u8]> for Checkpoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ============================================================================
// Invalidation scope
// ============================================================================

/// 32-byte class of mutually exclusive contract calls
///
/// Calls sharing a scope are ordered by their invalidation nonce; executing
/// one on the destination chain invalidates every call in the scope with an
/// equal or lower nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InvalidationScope(pub [u8; 32]);

impl InvalidationScope {
    /// Left-align `data` into 32 bytes. Longer input is rejected.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        to_fixed_32(data).map(InvalidationScope)
    }

    /// Parse from hex (with or without 0x prefix)
    pub(crate) fn from_hex(hex_str: &str) -> std::result::Result<Self, String> {
        let bytes = decode_hex(hex_str)?;
        Self::from_slice(&bytes).map_err(|e| e.to_string())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::hash::bytes32_to_hex(&self.0)
    }
}

impl fmt::Display for InvalidationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for InvalidationScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for InvalidationScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        InvalidationScope::from_hex(&s).map_err(de::Error::custom)
    }
}

// ============================================================================
// Transfer entries
// ============================================================================

/// An amount of an ERC20 token on the destination chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Token {
    pub contract: EthAddress,
    #[serde(with = "u256_dec")]
    pub amount: U256,
}

impl Erc20Token {
    pub fn new(contract: EthAddress, amount: U256) -> Self {
        Self { contract, amount }
    }
}

/// Member of a validator set with its voting power
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthereumSigner {
    pub ethereum_address: EthAddress,
    pub power: u64,
}

impl EthereumSigner {
    pub fn new(ethereum_address: EthAddress, power: u64) -> Self {
        Self {
            ethereum_address,
            power,
        }
    }
}

/// One queued transfer inside a batch
///
/// `id` and `sender` identify the transfer on the source chain (refunds,
/// pruning) and are not part of the checkpoint. Amount and fee are
/// denominated in the batch's token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendToEthereum {
    pub id: u64,
    pub sender: CosmosAddress,
    pub ethereum_recipient: EthAddress,
    #[serde(with = "u256_dec")]
    pub amount: U256,
    #[serde(with = "u256_dec")]
    pub fee: U256,
}

// ============================================================================
// Serde helpers
// ============================================================================

pub(crate) fn decode_hex(hex_str: &str) -> std::result::Result<Vec<u8>, String> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    hex::decode(stripped).map_err(|e| format!("invalid hex {:?}: {}", hex_str, e))
}

/// 256-bit integers as decimal strings, the way the source chain renders
/// token amounts in JSON
pub(crate) mod u256_dec {
    use alloy::primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str_radix(&s, 10)
            .map_err(|e| de::Error::custom(format!("invalid uint256 {:?}: {}", s, e)))
    }
}

/// Opaque byte strings as 0x-prefixed hex
pub(crate) mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckpointError;

    #[test]
    fn test_checkpoint_hex() {
        let cp = Checkpoint::from([1u8; 32]);
        let hex = cp.to_hex();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 66);
        assert_eq!(format!("{}", cp), hex);
    }

    #[test]
    fn test_invalidation_scope_left_aligned() {
        let scope = InvalidationScope::from_slice(b"scope-a").unwrap();
        assert_eq!(&scope.0[..7], b"scope-a");
        assert!(scope.0[7..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalidation_scope_oversized() {
        assert_eq!(
            InvalidationScope::from_slice(&[0u8; 40]),
            Err(CheckpointError::OversizedIdentifier { len: 40 })
        );
        assert!(InvalidationScope::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn test_invalidation_scope_serde() {
        let scope = InvalidationScope([0x42; 32]);
        let json = serde_json::to_string(&scope).unwrap();
        let back: InvalidationScope = serde_json::from_str(&json).unwrap();
        assert_eq!(scope, back);
    }

    #[test]
    fn test_erc20_token_amount_serde() {
        let json = r#"{"contract":"0x835973768750b3ed2d5c3ef5adcd5edb44d12ad4","amount":"115792089237316195423570985008687907853269984665640564039457584007913129639935"}"#;
        let token: Erc20Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.amount, U256::MAX);
        assert_eq!(serde_json::to_string(&token).unwrap(), json);
    }

    #[test]
    fn test_erc20_token_rejects_bad_amount() {
        let json = r#"{"contract":"0x835973768750b3ed2d5c3ef5adcd5edb44d12ad4","amount":"1.5"}"#;
        assert!(serde_json::from_str::<Erc20Token>(json).is_err());

        let json = r#"{"contract":"0x835973768750b3ed2d5c3ef5adcd5edb44d12ad4","amount":"-1"}"#;
        assert!(serde_json::from_str::<Erc20Token>(json).is_err());
    }
}
