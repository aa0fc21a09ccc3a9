//! Error types for the WeFi lock bridge

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Bridge is already paused")]
    AlreadyPaused,

    #[error("Bridge is not paused")]
    NotPaused,

    // ========================================================================
    // Lock Validation Errors
    // ========================================================================

    #[error("Amount too small: minimum lock is {min_amount}")]
    AmountTooSmall { min_amount: Uint128 },

    #[error("Amount too large: maximum lock is {max_amount}")]
    AmountTooLarge { max_amount: Uint128 },

    #[error("Native funds are not accepted: {denoms}")]
    FundsNotAccepted { denoms: String },

    #[error("Invalid destination address: empty")]
    InvalidDestinationAddress,

    #[error("Invalid destination address format: {address}")]
    InvalidDestinationAddressFormat { address: String },

    // ========================================================================
    // Accounting Errors
    // ========================================================================

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<OverflowError> for ContractError {
    fn from(_: OverflowError) -> Self {
        ContractError::ArithmeticOverflow
    }
}
