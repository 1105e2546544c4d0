use cosmwasm_std::{from_json, Addr, Decimal256, Uint128};
use mars_staking::ContractError;
use mars_testing::{find_event_attr, has_event};
use mars_types::staking::AccrueRewardResponse;
use mars_utils::error::PermissionError;

use super::helpers::{assert_err, MockEnv};

#[test]
fn accrue_emission_of_single_bucket() {
    let mut mock = MockEnv::new().mint_rate(100).build().unwrap();
    let user = Addr::unchecked("user");

    mock.stake(&user, "uatom", 100_000_000_000_000_000_000).unwrap();
    mock.increment_by_time(20);

    let gauge = mock.gauge.clone();
    let res = mock.accrue_reward(&gauge, "uatom").unwrap();

    let data: AccrueRewardResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(
        data,
        AccrueRewardResponse {
            denom: "uatom".to_string(),
            amount: Uint128::new(2_000),
        }
    );
    assert_eq!(
        find_event_attr(&res.events, "mars/staking/accrue_reward", "amount"),
        Some("2000".to_string())
    );
    assert!(has_event(&res.events, "mars/staking/index_update"));

    // the settled index is persisted and the bucket is up to date
    let index = mock.query_stored_index();
    assert_eq!(index, Decimal256::from_ratio(2_000u128, 100_000_000_000_000_000_000u128));
    assert_eq!(mock.query_bucket("uatom").last_reward_index, index);
    assert_eq!(mock.query_reward_index().last_updated, mock.block_time());
}

#[test]
fn accrue_twice_in_same_block_returns_zero() {
    let mut mock = MockEnv::new().mint_rate(100).build().unwrap();
    let user = Addr::unchecked("user");

    mock.stake(&user, "uatom", 1_000).unwrap();
    mock.increment_by_time(5);

    assert_eq!(mock.accrue("uatom"), Uint128::new(500));

    let gauge = mock.gauge.clone();
    let res = mock.accrue_reward(&gauge, "uatom").unwrap();
    assert!(!has_event(&res.events, "mars/staking/index_update"));
    let data: AccrueRewardResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.amount, Uint128::zero());
}

#[test]
fn accrue_splits_emission_by_bucket_weight() {
    let mut mock = MockEnv::new().mint_rate(1_000).build().unwrap();
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    mock.stake(&alice, "uatom", 3_000).unwrap();
    mock.stake(&bob, "uosmo", 1_000).unwrap();
    mock.increment_by_time(4);

    assert_eq!(mock.accrue("uatom"), Uint128::new(3_000));
    mock.increment_by_time(4);
    assert_eq!(mock.accrue("uosmo"), Uint128::new(2_000));
    assert_eq!(mock.accrue("uatom"), Uint128::new(3_000));
}

#[test]
fn only_capability_holder_can_accrue() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");

    mock.stake(&user, "uatom", 1_000).unwrap();
    mock.increment_by_time(10);

    let res = mock.accrue_reward(&user, "uatom");
    assert_err(
        res,
        ContractError::Permission(PermissionError::Unauthorized {
            capability: "accrue_reward".to_string(),
            address: "user".to_string(),
        }),
    );

    // nothing was settled by the failed call
    assert_eq!(mock.query_stored_index(), Decimal256::zero());
}

#[test]
fn accrue_unknown_bucket_returns_zero() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");

    mock.stake(&user, "uatom", 1_000).unwrap();
    mock.increment_by_time(10);

    assert_eq!(mock.accrue("unknown"), Uint128::zero());

    // the global index still settled
    assert_eq!(mock.query_stored_index(), Decimal256::one());
}

#[test]
fn preview_matches_accrue() {
    let mut mock = MockEnv::new().mint_rate(7).build().unwrap();
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");

    mock.stake(&alice, "uatom", 333).unwrap();
    mock.stake(&bob, "uosmo", 1_001).unwrap();
    mock.increment_by_time(13);

    let preview_atom = mock.query_preview_pending("uatom");
    let preview_osmo = mock.query_preview_pending("uosmo");

    // previewing has no side effects
    assert_eq!(mock.query_stored_index(), Decimal256::zero());
    assert_eq!(mock.query_bucket("uatom").last_reward_index, Decimal256::zero());

    assert_eq!(mock.accrue("uatom"), preview_atom);
    assert_eq!(mock.accrue("uosmo"), preview_osmo);

    // rounding never pays out more than was minted
    assert!(preview_atom + preview_osmo <= Uint128::new(7 * 13));
    assert_eq!(mock.query_preview_pending("uatom"), Uint128::zero());
}

#[test]
fn moved_gauge_accrues_old_gauge_cannot() {
    let mut mock = MockEnv::new().build().unwrap();
    let user = Addr::unchecked("user");
    let owner = mock.owner.clone();
    let old_gauge = mock.gauge.clone();

    mock.stake(&user, "uatom", 1_000).unwrap();
    mock.set_gauge(&owner, "new_gauge").unwrap();
    mock.increment_by_time(10);

    let res = mock.accrue_reward(&old_gauge, "uatom");
    assert_err(
        res,
        ContractError::Permission(PermissionError::Unauthorized {
            capability: "accrue_reward".to_string(),
            address: "gauge".to_string(),
        }),
    );

    let res = mock.accrue_reward(&Addr::unchecked("new_gauge"), "uatom").unwrap();
    let data: AccrueRewardResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.amount, Uint128::new(1_000));
}

#[test]
fn dust_stake_does_not_lock_the_ledger() {
    let mut mock = MockEnv::new().mint_rate(1_000_000_000_000_000_000).build().unwrap();
    let dust_staker = Addr::unchecked("dust_staker");
    let user = Addr::unchecked("user");

    mock.stake(&dust_staker, "uatom", 1).unwrap();
    mock.increment_by_time(400);

    // the index now exceeds what a 128-bit decimal can hold
    assert_eq!(
        mock.query_reward_index().index,
        Decimal256::from_ratio(400_000_000_000_000_000_000u128, 1u128)
    );

    mock.stake(&user, "uosmo", 1_000).unwrap();
    assert_eq!(mock.accrue("uatom"), Uint128::new(400_000_000_000_000_000_000));

    mock.unstake(&dust_staker, "uatom", 1).unwrap();
    assert_eq!(mock.query_balance(&dust_staker, "umars"), Uint128::one());
}
