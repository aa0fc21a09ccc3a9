//! Outgoing transfer handler (LockTokens).
//!
//! Pulls tokens from the caller into bridge custody and records the lock for
//! the relayer.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::{TokensLocked, MAX_LOCK_AMOUNT, MIN_LOCK_AMOUNT};

use crate::destination::validate_destination_address;
use crate::error::ContractError;
use crate::state::{LockRecord, CONFIG, CURRENT_LOCK_ID, LOCKED_BALANCES, LOCKS, TOTAL_LOCKED};

/// Execute handler for locking tokens.
///
/// All checks run before any write, all bridge state is written before the
/// ledger is called, and the `TransferFrom` is dispatched without a reply:
/// if the ledger rejects the pull the whole transaction, including the new
/// lock id, is rolled back.
pub fn execute_lock_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    if amount < MIN_LOCK_AMOUNT {
        return Err(ContractError::AmountTooSmall {
            min_amount: MIN_LOCK_AMOUNT,
        });
    }

    if amount > MAX_LOCK_AMOUNT {
        return Err(ContractError::AmountTooLarge {
            max_amount: MAX_LOCK_AMOUNT,
        });
    }

    validate_destination_address(&destination_address)?;

    // Compute every new value first so an overflow leaves storage untouched
    let lock_id = CURRENT_LOCK_ID
        .load(deps.storage)?
        .checked_add(1)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let user_locked = LOCKED_BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(amount)?;
    let total_locked = TOTAL_LOCKED.load(deps.storage)?.checked_add(amount)?;

    CURRENT_LOCK_ID.save(deps.storage, &lock_id)?;
    LOCKED_BALANCES.save(deps.storage, &info.sender, &user_locked)?;
    TOTAL_LOCKED.save(deps.storage, &total_locked)?;

    let record = LockRecord {
        lock_id,
        sender: info.sender.clone(),
        destination_address: destination_address.clone(),
        amount,
        block_height: env.block.height,
        timestamp: env.block.time,
    };
    LOCKS.save(deps.storage, lock_id, &record)?;

    let pull_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    let event = TokensLocked {
        sender: info.sender.clone(),
        destination_address: destination_address.clone(),
        amount,
        lock_id,
    }
    .to_event();

    Ok(Response::new()
        .add_message(pull_msg)
        .add_event(event)
        .add_attribute("action", "lock_tokens")
        .add_attribute("lock_id", lock_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("destination_address", destination_address)
        .add_attribute("amount", amount)
        .add_attribute("total_locked", total_locked))
}
