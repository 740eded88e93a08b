//! Fixed-width field codec
//!
//! The destination contract takes the domain separator, the method salt and
//! the invalidation scope as `bytes32` arguments. Variable-length identifiers
//! are copied left-aligned into a 32-byte buffer and zero padded; anything
//! longer than 32 bytes is rejected rather than truncated.

use crate::error::{CheckpointError, Result};

/// Width of a `bytes32` ABI slot
pub const FIXED_FIELD_LEN: usize = 32;

/// Salt mixed into signer set checkpoints
pub const SIGNER_SET_METHOD: &[u8] = b"checkpoint";

/// Salt mixed into batch checkpoints
pub const BATCH_METHOD: &[u8] = b"transactionBatch";

/// Salt mixed into contract call checkpoints
pub const CONTRACT_CALL_METHOD: &[u8] = b"logicCall";

/// Copy `data` left-aligned into a zero padded 32-byte array.
///
/// Fails with [`CheckpointError::OversizedIdentifier`] when `data` is longer
/// than 32 bytes.
pub fn to_fixed_32(data: &[u8]) -> Result<[u8; 32]> {
    if data.len() > FIXED_FIELD_LEN {
        return Err(CheckpointError::OversizedIdentifier { len: data.len() });
    }
    let mut result = [0u8; FIXED_FIELD_LEN];
    result[..data.len()].copy_from_slice(data);
    Ok(result)
}

/// Fixed-width salt for one of the method name constants above
pub fn method_salt(method: &[u8]) -> Result<[u8; 32]> {
    to_fixed_32(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_32_pads_right() {
        let fixed = to_fixed_32(b"test-id").unwrap();
        assert_eq!(&fixed[..7], b"test-id");
        assert!(fixed[7..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_to_fixed_32_empty() {
        assert_eq!(to_fixed_32(&[]).unwrap(), [0u8; 32]);
    }

    #[test]
    fn test_to_fixed_32_exact_width() {
        let data = [0xabu8; 32];
        assert_eq!(to_fixed_32(&data).unwrap(), data);
    }

    #[test]
    fn test_to_fixed_32_rejects_oversized() {
        let data = [1u8; 33];
        assert_eq!(
            to_fixed_32(&data),
            Err(CheckpointError::OversizedIdentifier { len: 33 })
        );
    }

    #[test]
    fn test_method_salts_are_distinct() {
        let a = method_salt(SIGNER_SET_METHOD).unwrap();
        let b = method_salt(BATCH_METHOD).unwrap();
        let c = method_salt(CONTRACT_CALL_METHOD).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(&a[..10], b"checkpoint");
    }
}
