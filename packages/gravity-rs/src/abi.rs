//! Checkpoint argument lists as declared by the destination bridge contract
//!
//! Uses alloy's sol! macro so the argument encoding is the EVM's own call
//! encoding. Argument order and types must match the contract exactly;
//! arrays stay parallel (`address[]` next to `uint256[]`) as the contract
//! declares them. Function names only shape the discarded 4-byte selector.

#![allow(clippy::too_many_arguments)]

use alloy::sol;

sol! {
    /// Validator set checkpoint: `updateValset` recomputes this
    interface SignerSetCheckpoint {
        function checkpoint(
            bytes32 gravityId,
            bytes32 methodName,
            uint256 valsetNonce,
            address[] validators,
            uint256[] powers
        ) external;
    }

    /// Token batch checkpoint: `submitBatch` recomputes this
    interface BatchCheckpoint {
        function submitBatch(
            bytes32 gravityId,
            bytes32 methodName,
            uint256[] amounts,
            address[] destinations,
            uint256[] fees,
            uint256 batchNonce,
            address tokenContract,
            uint256 batchTimeout
        ) external;
    }

    /// Arbitrary logic call checkpoint: `submitLogicCall` recomputes this
    interface ContractCallCheckpoint {
        function checkpoint(
            bytes32 gravityId,
            bytes32 methodName,
            uint256[] transferAmounts,
            address[] transferTokenContracts,
            uint256[] feeAmounts,
            address[] feeTokenContracts,
            address logicContractAddress,
            bytes payload,
            uint256 timeout,
            bytes32 invalidationId,
            uint256 invalidationNonce
        ) external;
    }
}
