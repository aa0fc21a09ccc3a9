//! WeFi Lock Bridge - Lock Side of the WEFI Cross-Chain Bridge
//!
//! This contract custodies WEFI tokens on the source chain and announces each
//! lock to an off-chain relayer, which mints the wrapped representation on
//! the destination Cosmos chain.
//!
//! # Lock Flow
//! 1. User approves the bridge on the WEFI token ledger
//! 2. User calls `LockTokens` with an amount and a `cosmos1...` recipient
//! 3. Bridge validates, records the lock under the next lock id, and pulls
//!    the tokens with `TransferFrom`
//! 4. Relayer observes the `tokens_locked` event and mints on the destination
//!
//! # Security
//! - Owner-only pause (gates locking only) and emergency withdrawal
//! - Checks-effects-interactions: the ledger call runs after all bridge
//!   writes and its failure reverts them
//! - Checked arithmetic on every counter and balance
//!
//! `EmergencyWithdraw` deliberately leaves lock accounting untouched, so after
//! an incident `total_locked` no longer reconciles with the custodied balance.

pub mod contract;
pub mod destination;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
