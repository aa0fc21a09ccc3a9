//! WeFi Lock Bridge - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_cancel_ownership_transfer, execute_emergency_withdraw,
    execute_lock_tokens, execute_pause, execute_transfer_ownership, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_lock_id, query_custody, query_lock, query_locked_balance,
    query_locks, query_owner, query_paused, query_token, query_total_locked,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CURRENT_LOCK_ID, TOTAL_LOCKED,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        owner,
        token,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    CURRENT_LOCK_ID.save(deps.storage, &0u64)?;
    TOTAL_LOCKED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token", config.token))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Only WEFI moves through the bridge, and only via the ledger
    if !info.funds.is_empty() {
        let denoms: Vec<&str> = info.funds.iter().map(|c| c.denom.as_str()).collect();
        return Err(ContractError::FundsNotAccepted {
            denoms: denoms.join(","),
        });
    }

    match msg {
        ExecuteMsg::LockTokens {
            amount,
            destination_address,
        } => execute_lock_tokens(deps, env, info, amount, destination_address),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::EmergencyWithdraw { amount } => {
            execute_emergency_withdraw(deps, info, amount)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipTransfer {} => execute_cancel_ownership_transfer(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LockedBalance { account } => {
            to_json_binary(&query_locked_balance(deps, account)?)
        }
        QueryMsg::TotalLocked {} => to_json_binary(&query_total_locked(deps)?),
        QueryMsg::CurrentLockId {} => to_json_binary(&query_current_lock_id(deps)?),
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Paused {} => to_json_binary(&query_paused(deps)?),
        QueryMsg::Lock { lock_id } => to_json_binary(&query_lock(deps, lock_id)?),
        QueryMsg::Locks { start_after, limit } => {
            to_json_binary(&query_locks(deps, start_after, limit)?)
        }
        QueryMsg::Custody {} => to_json_binary(&query_custody(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
