use cosmwasm_std::{coin, Addr, Decimal256, Uint128};
use cw_utils::PaymentError;
use mars_staking::ContractError;
use mars_testing::{find_event_attr, has_event};

use super::helpers::{assert_err, MockEnv, STAKING_DENOM};

#[test]
fn stake_into_eligible_bucket() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");

    let res = mock.stake(&user, "uatom", 1_000).unwrap();
    assert_eq!(
        find_event_attr(&res.events, "mars/staking/stake", "bucket_staked_amount"),
        Some("1000".to_string())
    );

    let bucket = mock.query_bucket("uatom");
    assert_eq!(bucket.staked_amount, Uint128::new(1_000));
    assert_eq!(bucket.last_reward_index, Decimal256::zero());
    assert_eq!(mock.query_total_staked(), Uint128::new(1_000));
    assert_eq!(mock.query_user_stake(&user, "uatom"), Uint128::new(1_000));
    assert_eq!(mock.query_user_buckets(&user), vec!["uatom".to_string()]);

    // stake is held by the contract
    let contract = mock.staking_contract.clone();
    assert_eq!(mock.query_balance(&contract, STAKING_DENOM), Uint128::new(1_000));
    assert_eq!(mock.query_balance(&user, STAKING_DENOM), Uint128::zero());
}

#[test]
fn cannot_stake_into_ineligible_bucket() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");

    let res = mock.stake(&user, "uusdc", 1_000);
    assert_err(
        res,
        ContractError::BucketNotEligible {
            denom: "uusdc".to_string(),
        },
    );

    mock.set_eligible("uusdc", true);
    mock.stake(&user, "uusdc", 1_000).unwrap();
    assert_eq!(mock.query_bucket("uusdc").staked_amount, Uint128::new(1_000));
}

#[test]
fn stake_requires_staking_denom() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");

    let res = mock.stake_with_funds(&user, "uatom", &[]);
    assert_err(res, ContractError::Payment(PaymentError::NoFunds {}));

    mock.app
        .sudo(cw_multi_test::SudoMsg::Bank(cw_multi_test::BankSudo::Mint {
            to_address: user.to_string(),
            amount: vec![coin(1_000, "uosmo"), coin(1_000, STAKING_DENOM)],
        }))
        .unwrap();

    let res = mock.stake_with_funds(&user, "uatom", &[coin(1_000, "uosmo")]);
    assert_err(res, ContractError::Payment(PaymentError::MissingDenom(STAKING_DENOM.to_string())));

    let res = mock.stake_with_funds(
        &user,
        "uatom",
        &[coin(500, STAKING_DENOM), coin(500, "uosmo")],
    );
    assert_err(res, ContractError::Payment(PaymentError::MultipleDenoms {}));

    assert_eq!(mock.query_total_staked(), Uint128::zero());
}

#[test]
fn stakes_accumulate_across_users_and_buckets() {
    let mut mock = MockEnv::new().build().unwrap();
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    mock.stake(&alice, "uatom", 1_000).unwrap();
    mock.stake(&alice, "uosmo", 300).unwrap();
    mock.stake(&bob, "uatom", 700).unwrap();
    mock.stake(&alice, "uatom", 200).unwrap();

    assert_eq!(mock.query_bucket("uatom").staked_amount, Uint128::new(1_900));
    assert_eq!(mock.query_bucket("uosmo").staked_amount, Uint128::new(300));
    assert_eq!(mock.query_total_staked(), Uint128::new(2_200));

    assert_eq!(mock.query_user_stake(&alice, "uatom"), Uint128::new(1_200));
    assert_eq!(mock.query_user_stake(&bob, "uatom"), Uint128::new(700));
    assert_eq!(mock.query_user_buckets(&alice), vec!["uatom".to_string(), "uosmo".to_string()]);
    assert_eq!(mock.query_user_buckets(&bob), vec!["uatom".to_string()]);
}

#[test]
fn first_stake_after_idle_period_collects_its_emission() {
    let mut mock = MockEnv::new().mint_rate(100).build().unwrap();
    let user = Addr::unchecked("user");

    // nothing is staked, so the index stays put
    mock.increment_by_time(10);
    let index = mock.query_reward_index();
    assert_eq!(index.index, Decimal256::zero());

    let res = mock.stake(&user, "uatom", 1_000).unwrap();
    assert!(!has_event(&res.events, "mars/staking/index_update"));

    mock.increment_by_time(10);

    // 100 per second over the idle 10s and the staked 10s
    assert_eq!(mock.query_reward_index().index, Decimal256::from_ratio(2_000u128, 1_000u128));
    assert_eq!(mock.accrue("uatom"), Uint128::new(2_000));
}

#[test]
fn stake_moves_bucket_snapshot_to_current_index() {
    let mut mock = MockEnv::new().mint_rate(100).build().unwrap();
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    mock.stake(&alice, "uatom", 1_000).unwrap();
    mock.increment_by_time(10);
    assert_eq!(mock.query_preview_pending("uatom"), Uint128::new(1_000));

    let res = mock.stake(&bob, "uatom", 1_000).unwrap();
    assert_eq!(
        find_event_attr(&res.events, "mars/staking/index_update", "index"),
        Some("1".to_string())
    );

    // the resized bucket starts over from the settled index
    let bucket = mock.query_bucket("uatom");
    assert_eq!(bucket.last_reward_index, Decimal256::one());
    assert_eq!(mock.query_stored_index(), Decimal256::one());
    assert_eq!(mock.query_preview_pending("uatom"), Uint128::zero());

    mock.increment_by_time(10);
    assert_eq!(mock.accrue("uatom"), Uint128::new(1_000));
}
