use cosmwasm_std::{
    coin, testing::mock_env, Addr, BankMsg, CosmosMsg, DepsMut, Response, SubMsg, Uint128,
};
use cw_utils::PaymentError;
use mars_gauge::{contract::execute, ContractError};
use mars_testing::{find_event_attr, mock_info_with_funds};
use mars_types::gauge::{ExecuteMsg, KeeperResponse, QueryMsg};

use super::helpers::{query, setup_test, KEEPER_DENOM, PRIMARY_DENOM};

fn bid(deps: DepsMut, sender: &str, amount: u128) -> Result<Response, ContractError> {
    execute(
        deps,
        mock_env(),
        mock_info_with_funds(sender, &[coin(amount, KEEPER_DENOM)]),
        ExecuteMsg::BecomeKeeper {},
    )
}

#[test]
fn keeper_slot_starts_vacant() {
    let deps = setup_test();

    let res: KeeperResponse = query(deps.as_ref(), QueryMsg::KeeperInfo {});
    assert_eq!(
        res,
        KeeperResponse {
            keeper: None,
            deposit: Uint128::zero(),
        }
    );
}

#[test]
fn first_bid_takes_vacant_slot() {
    let mut deps = setup_test();

    let res = bid(deps.as_mut(), "alice", 1_000).unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(find_event_attr(&res.events, "mars/gauge/keeper_change", "previous_keeper"), None);

    let res: KeeperResponse = query(deps.as_ref(), QueryMsg::KeeperInfo {});
    assert_eq!(res.keeper, Some(Addr::unchecked("alice")));
    assert_eq!(res.deposit, Uint128::new(1_000));
}

#[test]
fn outbid_keeper_is_refunded() {
    let mut deps = setup_test();

    bid(deps.as_mut(), "alice", 1_000).unwrap();
    let res = bid(deps.as_mut(), "bob", 2_000).unwrap();

    assert_eq!(
        res.messages,
        vec![SubMsg::new(CosmosMsg::Bank(BankMsg::Send {
            to_address: "alice".to_string(),
            amount: vec![coin(1_000, KEEPER_DENOM)],
        }))]
    );
    assert_eq!(
        find_event_attr(&res.events, "mars/gauge/keeper_change", "refund"),
        Some("1000".to_string())
    );

    let res: KeeperResponse = query(deps.as_ref(), QueryMsg::KeeperInfo {});
    assert_eq!(res.keeper, Some(Addr::unchecked("bob")));
    assert_eq!(res.deposit, Uint128::new(2_000));
}

#[test]
fn bid_must_exceed_current_deposit() {
    let mut deps = setup_test();

    bid(deps.as_mut(), "alice", 1_000).unwrap();

    let err = bid(deps.as_mut(), "bob", 1_000).unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBid {
            current: Uint128::new(1_000),
            bid: Uint128::new(1_000),
        }
    );

    let res: KeeperResponse = query(deps.as_ref(), QueryMsg::KeeperInfo {});
    assert_eq!(res.keeper, Some(Addr::unchecked("alice")));
}

#[test]
fn keeper_can_raise_own_deposit() {
    let mut deps = setup_test();

    bid(deps.as_mut(), "alice", 1_000).unwrap();
    let res = bid(deps.as_mut(), "alice", 1_500).unwrap();

    assert_eq!(
        res.messages,
        vec![SubMsg::new(CosmosMsg::Bank(BankMsg::Send {
            to_address: "alice".to_string(),
            amount: vec![coin(1_000, KEEPER_DENOM)],
        }))]
    );

    let res: KeeperResponse = query(deps.as_ref(), QueryMsg::KeeperInfo {});
    assert_eq!(res.deposit, Uint128::new(1_500));
}

#[test]
fn bid_requires_keeper_denom() {
    let mut deps = setup_test();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info_with_funds("alice", &[coin(1_000, PRIMARY_DENOM)]),
        ExecuteMsg::BecomeKeeper {},
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Payment(PaymentError::MissingDenom(KEEPER_DENOM.to_string())));

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info_with_funds("alice", &[]),
        ExecuteMsg::BecomeKeeper {},
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Payment(PaymentError::NoFunds {}));
}
