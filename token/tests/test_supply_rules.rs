//! Exact error variants and supply bookkeeping, driven directly through the
//! entry points with mock dependencies.

use cosmwasm_std::testing::{
    mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{from_json, OwnedDeps, Response, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};

use common::MAX_SUPPLY;
use token::contract::{execute, instantiate, query};
use token::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use token::state::INITIAL_SUPPLY;
use token::ContractError;

const OWNER: &str = "terra1owner";
const ALICE: &str = "terra1alice";
const BOB: &str = "terra1bob";

fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(OWNER, &[]),
        InstantiateMsg {
            owner: OWNER.to_string(),
        },
    )
    .unwrap();
    deps
}

fn run(
    deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
    sender: &str,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    execute(deps.as_mut(), mock_env(), mock_info(sender, &[]), msg)
}

fn balance(deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>, account: &str) -> Uint128 {
    let res: BalanceResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    res.balance
}

fn supply(deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>) -> Uint128 {
    let res: TokenInfoResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::TokenInfo {}).unwrap()).unwrap();
    res.total_supply
}

#[test]
fn test_mint_unauthorized() {
    let mut deps = setup();
    let err = run(
        &mut deps,
        ALICE,
        ExecuteMsg::Mint {
            recipient: ALICE.to_string(),
            amount: Uint128::one(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Unauthorized);
}

#[test]
fn test_mint_supply_exceeded_reports_cap() {
    let mut deps = setup();
    let headroom = MAX_SUPPLY - INITIAL_SUPPLY;

    let err = run(
        &mut deps,
        OWNER,
        ExecuteMsg::Mint {
            recipient: ALICE.to_string(),
            amount: headroom + Uint128::one(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::SupplyExceeded {
            max_supply: MAX_SUPPLY,
            requested: MAX_SUPPLY + Uint128::one(),
        }
    );
    assert_eq!(supply(&deps), INITIAL_SUPPLY);
}

#[test]
fn test_mint_overflow_fails_closed() {
    let mut deps = setup();
    let err = run(
        &mut deps,
        OWNER,
        ExecuteMsg::Mint {
            recipient: ALICE.to_string(),
            amount: Uint128::MAX,
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::ArithmeticOverflow);
}

#[test]
fn test_mint_emits_transfer_style_attributes() {
    let mut deps = setup();
    let res = run(
        &mut deps,
        OWNER,
        ExecuteMsg::Mint {
            recipient: ALICE.to_string(),
            amount: Uint128::new(42),
        },
    )
    .unwrap();

    let attrs: Vec<(&str, &str)> = res
        .attributes
        .iter()
        .map(|a| (a.key.as_str(), a.value.as_str()))
        .collect();
    assert!(attrs.contains(&("action", "mint")));
    assert!(attrs.contains(&("to", ALICE)));
    assert!(attrs.contains(&("amount", "42")));
}

#[test]
fn test_burn_insufficient_balance() {
    let mut deps = setup();
    let err = run(&mut deps, ALICE, ExecuteMsg::Burn { amount: Uint128::one() }).unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            available: Uint128::zero(),
            required: Uint128::one(),
        }
    );
}

#[test]
fn test_burn_from_checks_allowance_before_balance() {
    let mut deps = setup();

    // Alice has no tokens and Bob has no allowance: allowance is reported
    let err = run(
        &mut deps,
        BOB,
        ExecuteMsg::BurnFrom {
            owner: ALICE.to_string(),
            amount: Uint128::new(10),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientAllowance {
            allowance: Uint128::zero(),
            required: Uint128::new(10),
        }
    );

    // With allowance in place the balance shortfall surfaces
    run(
        &mut deps,
        ALICE,
        ExecuteMsg::Approve {
            spender: BOB.to_string(),
            amount: Uint128::new(10),
        },
    )
    .unwrap();
    let err = run(
        &mut deps,
        BOB,
        ExecuteMsg::BurnFrom {
            owner: ALICE.to_string(),
            amount: Uint128::new(10),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            available: Uint128::zero(),
            required: Uint128::new(10),
        }
    );
}

#[test]
fn test_increase_allowance_overflow() {
    let mut deps = setup();
    run(
        &mut deps,
        ALICE,
        ExecuteMsg::Approve {
            spender: BOB.to_string(),
            amount: Uint128::MAX,
        },
    )
    .unwrap();

    let err = run(
        &mut deps,
        ALICE,
        ExecuteMsg::IncreaseAllowance {
            spender: BOB.to_string(),
            amount: Uint128::one(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::ArithmeticOverflow);
}

#[test]
fn test_supply_tracks_mixed_sequence() {
    let mut deps = setup();
    let accounts = [OWNER, ALICE, BOB];

    // (sender, message, expected to succeed)
    let steps = vec![
        (
            OWNER,
            ExecuteMsg::Mint {
                recipient: ALICE.to_string(),
                amount: Uint128::new(5_000),
            },
            true,
        ),
        (
            ALICE,
            ExecuteMsg::Transfer {
                recipient: BOB.to_string(),
                amount: Uint128::new(1_200),
            },
            true,
        ),
        (
            BOB,
            ExecuteMsg::Burn {
                amount: Uint128::new(200),
            },
            true,
        ),
        (
            ALICE,
            ExecuteMsg::Approve {
                spender: OWNER.to_string(),
                amount: Uint128::new(800),
            },
            true,
        ),
        (
            OWNER,
            ExecuteMsg::BurnFrom {
                owner: ALICE.to_string(),
                amount: Uint128::new(300),
            },
            true,
        ),
        (
            OWNER,
            ExecuteMsg::TransferFrom {
                owner: ALICE.to_string(),
                recipient: BOB.to_string(),
                amount: Uint128::new(500),
            },
            true,
        ),
        (
            OWNER,
            ExecuteMsg::Burn {
                amount: Uint128::new(1_000_000),
            },
            true,
        ),
        // Allowance exhausted
        (
            OWNER,
            ExecuteMsg::BurnFrom {
                owner: ALICE.to_string(),
                amount: Uint128::new(1),
            },
            false,
        ),
        // Bob holds only 1_500
        (
            BOB,
            ExecuteMsg::Transfer {
                recipient: ALICE.to_string(),
                amount: Uint128::new(1_501),
            },
            false,
        ),
    ];

    for (sender, msg, should_succeed) in steps {
        let description = format!("{:?}", msg);
        let res = run(&mut deps, sender, msg);
        assert_eq!(res.is_ok(), should_succeed, "{}: {:?}", description, res);

        let sum = accounts
            .iter()
            .fold(Uint128::zero(), |acc, a| acc + balance(&deps, a));
        assert_eq!(sum, supply(&deps));
        assert!(supply(&deps) <= MAX_SUPPLY);
    }

    assert_eq!(balance(&deps, ALICE), Uint128::new(3_000));
    assert_eq!(balance(&deps, BOB), Uint128::new(1_500));
    assert_eq!(
        supply(&deps),
        INITIAL_SUPPLY + Uint128::new(5_000) - Uint128::new(200) - Uint128::new(300)
            - Uint128::new(1_000_000)
    );
}

#[test]
fn test_unknown_account_reads_zero() {
    let deps = setup();
    assert_eq!(balance(&deps, "terra1nobody"), Uint128::zero());
    assert_eq!(balance(&deps, OWNER), INITIAL_SUPPLY);
}
