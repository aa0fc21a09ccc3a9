//! Message types for the WEFI token ledger
//!
//! Execute and query variants that overlap with CW20 use the CW20 JSON
//! shapes, so `cw20::Cw20ExecuteMsg` / `cw20::Cw20QueryMsg` built by other
//! contracts (the bridge) are understood here.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, MinterResponse, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner: receives the initial supply and is the only minter
    pub owner: String,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` from the caller to `recipient`
    Transfer { recipient: String, amount: Uint128 },
    /// Move `amount` from `owner` to `recipient` using the caller's allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Set the caller's allowance for `spender` to exactly `amount`
    Approve { spender: String, amount: Uint128 },
    /// Raise the caller's allowance for `spender` by `amount`
    IncreaseAllowance { spender: String, amount: Uint128 },
    /// Lower the caller's allowance for `spender` by `amount` (floors at zero)
    DecreaseAllowance { spender: String, amount: Uint128 },
    /// Destroy `amount` of the caller's tokens
    Burn { amount: Uint128 },
    /// Destroy `amount` of `owner`'s tokens using the caller's allowance
    BurnFrom { owner: String, amount: Uint128 },
    /// Owner: create `amount` new tokens for `recipient`, up to the supply cap
    Mint { recipient: String, amount: Uint128 },
    /// Owner: nominate a new owner
    TransferOwnership { new_owner: String },
    /// Pending owner: take over ownership
    AcceptOwnership {},
    /// Owner: withdraw the nomination
    CancelOwnershipTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Name, symbol, decimals and total supply
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Minter (the owner) and the supply cap
    #[returns(MinterResponse)]
    Minter {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}
