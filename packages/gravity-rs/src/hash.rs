//! Keccak-256 hashing of ABI-encoded checkpoint arguments
//!
//! The destination contract recomputes every checkpoint as
//! `keccak256(abi.encode(args...))`. Off-chain, the same argument list is
//! encoded as a function call (see [`crate::abi`]), which prepends a 4-byte
//! selector. The selector is dropped and only the argument encoding is
//! hashed, so the method name in the declaration never affects the digest.

use alloy::sol_types::SolCall;
use tiny_keccak::{Hasher, Keccak};

/// Length of the EVM function selector prepended by call encoding
pub const SELECTOR_LEN: usize = 4;

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode `call` with its selector, drop the selector and hash the rest.
///
/// Equivalent to `keccak256(abi.encode(args...))` on the contract side.
pub fn hash_call_arguments<C: SolCall>(call: &C) -> [u8; 32] {
    let encoded = call.abi_encode();
    keccak256(&encoded[SELECTOR_LEN..])
}

/// Convert bytes to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
