//! State definitions for the WeFi lock bridge
//!
//! This module defines the bridge configuration and the lock accounting
//! storage.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Administrative authority (pause, emergency withdraw, ownership)
    pub owner: Addr,
    /// WEFI token ledger the bridge custodies
    pub token: Addr,
    /// Whether locking is currently paused
    pub paused: bool,
}

/// Record of one accepted lock, kept for relayer lookups by id
#[cw_serde]
pub struct LockRecord {
    /// Sequential lock identifier (first lock is 1)
    pub lock_id: u64,
    /// Account the tokens were pulled from
    pub sender: Addr,
    /// Recipient on the destination chain
    pub destination_address: String,
    /// Locked amount in base units
    pub amount: Uint128,
    /// Block height the lock was accepted at
    pub block_height: u64,
    /// Block time the lock was accepted at
    pub timestamp: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wefi-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Nominated owner awaiting acceptance (if any)
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Last assigned lock id (0 before the first lock)
pub const CURRENT_LOCK_ID: Item<u64> = Item::new("current_lock_id");

/// Sum of all LOCKED_BALANCES entries
pub const TOTAL_LOCKED: Item<Uint128> = Item::new("total_locked");

/// Cumulative locked amount per user
/// Key: user address, Value: locked amount
pub const LOCKED_BALANCES: Map<&Addr, Uint128> = Map::new("locked_balances");

/// Lock history
/// Key: lock id, Value: LockRecord
pub const LOCKS: Map<u64, LockRecord> = Map::new("locks");
