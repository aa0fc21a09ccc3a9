use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: allowance {allowance}, required {required}")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Exceeds max supply: cap {max_supply}, resulting supply would be {requested}")]
    SupplyExceeded {
        max_supply: Uint128,
        requested: Uint128,
    },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<OverflowError> for ContractError {
    fn from(_: OverflowError) -> Self {
        ContractError::ArithmeticOverflow
    }
}
