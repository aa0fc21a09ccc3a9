//! Message types for the WeFi lock bridge
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for pause and emergency controls
    pub owner: String,
    /// WEFI token ledger contract address
    pub token: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Lock tokens for bridging to the destination chain
    ///
    /// The caller must first approve the bridge on the token ledger for at
    /// least `amount`. Emits a `tokens_locked` event for the relayer.
    LockTokens {
        /// Amount in base units (18 decimals)
        amount: Uint128,
        /// Recipient on the destination chain (`cosmos1...`)
        destination_address: String,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Pause locking (owner only)
    Pause {},

    /// Resume locking (owner only)
    Unpause {},

    /// Move custodied tokens to the owner without touching lock accounting
    /// (owner only, incident recovery)
    EmergencyWithdraw { amount: Uint128 },

    /// Nominate a new owner (owner only)
    TransferOwnership { new_owner: String },

    /// Accept a pending nomination (nominee only)
    AcceptOwnership {},

    /// Withdraw a pending nomination (owner only)
    CancelOwnershipTransfer {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns owner, token, pause flag and lock limits
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the cumulative locked amount for an account
    #[returns(LockedBalanceResponse)]
    LockedBalance { account: String },

    /// Returns the sum of all locked balances
    #[returns(TotalLockedResponse)]
    TotalLocked {},

    /// Returns the last assigned lock id
    #[returns(LockIdResponse)]
    CurrentLockId {},

    /// Returns the configured token ledger address
    #[returns(TokenResponse)]
    Token {},

    /// Returns the owner and any pending nominee
    #[returns(OwnerResponse)]
    Owner {},

    /// Returns whether locking is paused
    #[returns(PausedResponse)]
    Paused {},

    /// Returns a single lock record
    #[returns(LockResponse)]
    Lock { lock_id: u64 },

    /// Returns lock records in ascending id order
    #[returns(LocksResponse)]
    Locks {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Compares lock accounting with the bridge's live token balance
    #[returns(CustodyResponse)]
    Custody {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    pub paused: bool,
    pub min_lock_amount: Uint128,
    pub max_lock_amount: Uint128,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub account: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TotalLockedResponse {
    pub total_locked: Uint128,
}

#[cw_serde]
pub struct LockIdResponse {
    pub lock_id: u64,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct LockResponse {
    pub lock_id: u64,
    pub sender: Addr,
    pub destination_address: String,
    pub amount: Uint128,
    pub block_height: u64,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct LocksResponse {
    pub locks: Vec<LockResponse>,
}

/// `custodied_balance` equals `total_locked` unless an emergency withdrawal
/// (or a direct transfer to the bridge) has happened.
#[cw_serde]
pub struct CustodyResponse {
    pub total_locked: Uint128,
    pub custodied_balance: Uint128,
}
