//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause locking
//! - Ownership transfer (nominate/accept/cancel)
//! - Emergency withdrawal of custodied tokens

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{Config, CONFIG, PENDING_OWNER};

fn load_config_as_owner(
    storage: &dyn Storage,
    info: &MessageInfo,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause locking. Pausing an already paused bridge is rejected.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_config_as_owner(deps.storage, &info)?;
    if config.paused {
        return Err(ContractError::AlreadyPaused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "pause")
        .add_attribute("owner", info.sender))
}

/// Resume locking. Unpausing a running bridge is rejected.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_config_as_owner(deps.storage, &info)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "unpause")
        .add_attribute("owner", info.sender))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Nominate a new owner.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    load_config_as_owner(deps.storage, &info)?;

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner_addr)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("pending_owner", new_owner_addr))
}

/// Accept a pending nomination.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.owner = pending.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("owner", pending))
}

/// Withdraw a pending nomination.
pub fn execute_cancel_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    load_config_as_owner(deps.storage, &info)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_ownership_transfer"))
}

// ============================================================================
// Emergency Withdrawal
// ============================================================================

/// Send custodied tokens to the owner (incident recovery).
///
/// LOCKED_BALANCES and TOTAL_LOCKED are intentionally left untouched: after
/// this call `total_locked` exceeds the bridge's token balance until the
/// owner restores custody. Available whether or not the bridge is paused.
/// A shortfall in custody fails inside the token ledger and reverts.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config_as_owner(deps.storage, &info)?;

    let transfer_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: config.owner.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "emergency_withdraw")
        .add_attribute("recipient", config.owner)
        .add_attribute("amount", amount))
}
