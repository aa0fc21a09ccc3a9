use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, Expiration, MinterResponse, TokenInfoResponse};

use common::{DECIMALS, MAX_SUPPLY};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerResponse, QueryMsg};
use crate::state::{
    ALLOWANCES, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, INITIAL_SUPPLY, OWNER, PENDING_OWNER,
    TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.save(deps.storage, &owner)?;

    TOTAL_SUPPLY.save(deps.storage, &INITIAL_SUPPLY)?;
    BALANCES.save(deps.storage, &owner, &INITIAL_SUPPLY)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("initial_supply", INITIAL_SUPPLY)
        .add_attribute("max_supply", MAX_SUPPLY))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipTransfer {} => execute_cancel_ownership_transfer(deps, info),
    }
}

// ============================================================================
// Balance helpers
// ============================================================================

fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

fn debit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let available = balance_of(storage, account)?;
    let remaining =
        available
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                available,
                required: amount,
            })?;
    BALANCES.save(storage, account, &remaining)?;
    Ok(())
}

fn credit(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = balance_of(storage, account)?.checked_add(amount)?;
    BALANCES.save(storage, account, &balance)?;
    Ok(())
}

/// Remaining allowance after spending `amount`; does not write.
fn allowance_after_spend(
    storage: &dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let allowance = ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default();
    allowance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientAllowance {
            allowance,
            required: amount,
        })
}

fn save_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> StdResult<()> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
        Ok(())
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)
    }
}

fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let owner = OWNER.load(storage)?;
    if *sender != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Transfers & Allowances
// ============================================================================

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let remaining = allowance_after_spend(deps.storage, &owner_addr, &info.sender, amount)?;
    debit(deps.storage, &owner_addr, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;
    save_allowance(deps.storage, &owner_addr, &info.sender, remaining)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner_addr)
        .add_attribute("to", recipient_addr)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    save_allowance(deps.storage, &info.sender, &spender_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount))
}

fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .unwrap_or_default();
    let allowance = current.checked_add(amount)?;
    save_allowance(deps.storage, &info.sender, &spender_addr, allowance)?;

    Ok(Response::new()
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("allowance", allowance))
}

fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .unwrap_or_default();
    let allowance = current.saturating_sub(amount);
    save_allowance(deps.storage, &info.sender, &spender_addr, allowance)?;

    Ok(Response::new()
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("allowance", allowance))
}

// ============================================================================
// Supply
// ============================================================================

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let new_supply = TOTAL_SUPPLY.load(deps.storage)?.checked_add(amount)?;
    if new_supply > MAX_SUPPLY {
        return Err(ContractError::SupplyExceeded {
            max_supply: MAX_SUPPLY,
            requested: new_supply,
        });
    }

    credit(deps.storage, &recipient_addr, amount)?;
    TOTAL_SUPPLY.save(deps.storage, &new_supply)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", new_supply))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    debit(deps.storage, &info.sender, amount)?;
    let new_supply = TOTAL_SUPPLY.load(deps.storage)?.checked_sub(amount)?;
    TOTAL_SUPPLY.save(deps.storage, &new_supply)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

fn execute_burn_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;

    let remaining = allowance_after_spend(deps.storage, &owner_addr, &info.sender, amount)?;
    debit(deps.storage, &owner_addr, amount)?;
    save_allowance(deps.storage, &owner_addr, &info.sender, remaining)?;

    let new_supply = TOTAL_SUPPLY.load(deps.storage)?.checked_sub(amount)?;
    TOTAL_SUPPLY.save(deps.storage, &new_supply)?;

    Ok(Response::new()
        .add_attribute("action", "burn_from")
        .add_attribute("from", owner_addr)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Ownership
// ============================================================================

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner_addr)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("pending_owner", new_owner_addr))
}

fn execute_accept_ownership(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    OWNER.save(deps.storage, &pending)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("owner", pending))
}

fn execute_cancel_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_ownership_transfer"))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: balance_of(deps.storage, &addr)?,
    })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender_addr))?
        .unwrap_or_default();
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
    })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    Ok(TokenInfoResponse {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        decimals: DECIMALS,
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
    })
}

fn query_minter(deps: Deps) -> StdResult<MinterResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(MinterResponse {
        minter: owner.to_string(),
        cap: Some(MAX_SUPPLY),
    })
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.load(deps.storage)?,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
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
