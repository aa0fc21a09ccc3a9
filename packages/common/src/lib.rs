//! Common - Shared Types and Constants for the WeFi Bridge Contracts
//!
//! This package holds the pieces both contracts (and any off-chain relayer)
//! must agree on: the lock event wire format and the fixed token/lock limits.

pub mod event;
pub mod limits;

pub use event::{EventDecodeError, TokensLocked};
pub use limits::{DECIMALS, MAX_LOCK_AMOUNT, MAX_SUPPLY, MIN_LOCK_AMOUNT};
