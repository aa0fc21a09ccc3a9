use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:wefi-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "WeFi Token";
pub const TOKEN_SYMBOL: &str = "WEFI";

/// Minted to the owner at instantiation: 100,000,000 WEFI
pub const INITIAL_SUPPLY: Uint128 = Uint128::new(100_000_000 * common::limits::ONE_TOKEN);

pub const OWNER: Item<Addr> = Item::new("owner");

/// Set by TransferOwnership, cleared on accept/cancel
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// account => balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// (owner, spender) => remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");
