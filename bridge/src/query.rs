//! Query handlers for the WeFi lock bridge.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use common::{MAX_LOCK_AMOUNT, MIN_LOCK_AMOUNT};

use crate::msg::{
    ConfigResponse, CustodyResponse, LockIdResponse, LockResponse, LockedBalanceResponse,
    LocksResponse, OwnerResponse, PausedResponse, TokenResponse, TotalLockedResponse,
};
use crate::state::{
    LockRecord, CONFIG, CURRENT_LOCK_ID, LOCKED_BALANCES, LOCKS, PENDING_OWNER, TOTAL_LOCKED,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token: config.token,
        paused: config.paused,
        min_lock_amount: MIN_LOCK_AMOUNT,
        max_lock_amount: MAX_LOCK_AMOUNT,
    })
}

pub fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenResponse {
        token: config.token,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

pub fn query_paused(deps: Deps) -> StdResult<PausedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PausedResponse {
        paused: config.paused,
    })
}

// ============================================================================
// Lock Accounting Queries
// ============================================================================

/// Query the cumulative locked amount of an account (zero if it never locked).
pub fn query_locked_balance(deps: Deps, account: String) -> StdResult<LockedBalanceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let amount = LOCKED_BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    Ok(LockedBalanceResponse { account, amount })
}

pub fn query_total_locked(deps: Deps) -> StdResult<TotalLockedResponse> {
    let total_locked = TOTAL_LOCKED.load(deps.storage)?;
    Ok(TotalLockedResponse { total_locked })
}

pub fn query_current_lock_id(deps: Deps) -> StdResult<LockIdResponse> {
    let lock_id = CURRENT_LOCK_ID.load(deps.storage)?;
    Ok(LockIdResponse { lock_id })
}

fn lock_response(record: LockRecord) -> LockResponse {
    LockResponse {
        lock_id: record.lock_id,
        sender: record.sender,
        destination_address: record.destination_address,
        amount: record.amount,
        block_height: record.block_height,
        timestamp: record.timestamp,
    }
}

/// Query a specific lock by id.
pub fn query_lock(deps: Deps, lock_id: u64) -> StdResult<LockResponse> {
    let record = LOCKS.load(deps.storage, lock_id)?;
    Ok(lock_response(record))
}

/// Query lock records in ascending id order.
pub fn query_locks(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LocksResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let locks: Vec<LockResponse> = LOCKS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, record) = item?;
            Ok(lock_response(record))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LocksResponse { locks })
}

/// Query lock accounting against the bridge's live balance on the ledger.
pub fn query_custody(deps: Deps, env: Env) -> StdResult<CustodyResponse> {
    let config = CONFIG.load(deps.storage)?;
    let total_locked = TOTAL_LOCKED.load(deps.storage)?;

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    Ok(CustodyResponse {
        total_locked,
        custodied_balance: balance.balance,
    })
}
