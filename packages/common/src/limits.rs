//! Fixed amount limits, expressed in base units (18 decimals).

use cosmwasm_std::Uint128;

/// Fractional digits of the WEFI token
pub const DECIMALS: u8 = 18;

/// One whole WEFI in base units
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Hard cap on the ledger's total supply: 1,000,000,000 WEFI
pub const MAX_SUPPLY: Uint128 = Uint128::new(1_000_000_000 * ONE_TOKEN);

/// Smallest accepted lock: 0.001 WEFI
pub const MIN_LOCK_AMOUNT: Uint128 = Uint128::new(ONE_TOKEN / 1_000);

/// Largest accepted lock: 1,000,000 WEFI
pub const MAX_LOCK_AMOUNT: Uint128 = Uint128::new(1_000_000 * ONE_TOKEN);
