//! WEFI Token Ledger
//!
//! CW20-compatible fungible token backing the WeFi lock bridge. The owner
//! receives the initial supply at instantiation and is the only account that
//! can mint, up to a fixed cap of 1,000,000,000 WEFI. Holders can burn their
//! own tokens, and spenders can burn on a holder's behalf through an
//! allowance.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
