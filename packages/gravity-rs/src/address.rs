//! Address codec for the two chains an outgoing transaction touches
//!
//! Ethereum addresses are parsed once from hex and held as 20 raw bytes, so
//! every address that reaches the checkpoint encoder is already well formed.
//! Cosmos addresses only appear as the sender of a queued transfer; they are
//! validated as bech32 and never enter the checkpoint.

use bech32::{self, FromBase32, ToBase32, Variant};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{CheckpointError, Result};

// ============================================================================
// Ethereum
// ============================================================================

/// 20-byte Ethereum address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EthAddress(pub [u8; 20]);

impl EthAddress {
    /// Parse from 40 hex characters, with or without a `0x` prefix.
    ///
    /// Checksum casing is accepted but not enforced.
    pub fn from_hex(addr: &str) -> Result<Self> {
        parse_eth_address(addr).map(EthAddress)
    }

    /// Parse from a raw byte slice (must be exactly 20 bytes)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; 20] = bytes.try_into().map_err(|_| {
            CheckpointError::malformed_address(
                &hex::encode(bytes),
                format!("expected 20 bytes, got {}", bytes.len()),
            )
        })?;
        Ok(EthAddress(raw))
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex string with `0x` prefix
    pub fn to_hex(&self) -> String {
        encode_eth_address(&self.0)
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for EthAddress {
    type Err = CheckpointError;

    fn from_str(s: &str) -> Result<Self> {
        EthAddress::from_hex(s)
    }
}

impl From<[u8; 20]> for EthAddress {
    fn from(bytes: [u8; 20]) -> Self {
        EthAddress(bytes)
    }
}

impl From<EthAddress> for alloy::primitives::Address {
    fn from(addr: EthAddress) -> Self {
        alloy::primitives::Address::from(addr.0)
    }
}

impl Serialize for EthAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EthAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EthAddress::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Parse a hex Ethereum address (optional `0x`) to 20 bytes
pub fn parse_eth_address(addr: &str) -> Result<[u8; 20]> {
    let hex_str = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(CheckpointError::malformed_address(
            addr,
            format!("expected 40 hex chars, got {}", hex_str.len()),
        ));
    }

    let mut result = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut result)
        .map_err(|e| CheckpointError::malformed_address(addr, e.to_string()))?;
    Ok(result)
}

/// Encode 20 bytes to a lowercase hex string with `0x` prefix
pub fn encode_eth_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================================================
// Cosmos
// ============================================================================

/// Bech32 account address on the source chain (20-byte wallet or 32-byte
/// module/contract payload)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CosmosAddress {
    hrp: String,
    raw: Vec<u8>,
}

impl CosmosAddress {
    /// Parse and validate a bech32 string such as `cosmos1...`
    pub fn from_bech32(addr: &str) -> Result<Self> {
        let (raw, hrp) = decode_bech32_address(addr)?;
        Ok(Self { hrp, raw })
    }

    /// Human-readable prefix
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Canonical bech32 string
    pub fn to_bech32(&self) -> String {
        // hrp and payload were accepted by the decoder, re-encoding cannot fail
        bech32::encode(&self.hrp, self.raw.to_base32(), Variant::Bech32).unwrap_or_default()
    }
}

impl fmt::Display for CosmosAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bech32())
    }
}

impl FromStr for CosmosAddress {
    type Err = CheckpointError;

    fn from_str(s: &str) -> Result<Self> {
        CosmosAddress::from_bech32(s)
    }
}

impl Serialize for CosmosAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bech32())
    }
}

impl<'de> Deserialize<'de> for CosmosAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CosmosAddress::from_bech32(&s).map_err(de::Error::custom)
    }
}

/// Decode a bech32 address to raw bytes (20 or 32 bytes)
///
/// Returns (raw_bytes, hrp) where hrp is the human-readable prefix.
pub fn decode_bech32_address(addr: &str) -> Result<(Vec<u8>, String)> {
    let (hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| CheckpointError::malformed_address(addr, format!("invalid bech32: {}", e)))?;

    if variant != Variant::Bech32 {
        return Err(CheckpointError::malformed_address(
            addr,
            "bech32m is not used for account addresses",
        ));
    }

    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| {
        CheckpointError::malformed_address(addr, format!("invalid base32 data: {}", e))
    })?;

    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(CheckpointError::malformed_address(
            addr,
            format!("expected 20 or 32 bytes, got {}", bytes.len()),
        ));
    }

    Ok((bytes, hrp))
}
