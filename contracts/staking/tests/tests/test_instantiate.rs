use cosmwasm_std::{Addr, Decimal256, Uint128};
use mars_types::staking::Capability;

use super::helpers::{MockEnv, STAKING_DENOM};

#[test]
fn owner_set_on_instantiate() {
    let mock = MockEnv::new().build().unwrap();
    assert_eq!(mock.query_owner(), Addr::unchecked("owner"));
}

#[test]
fn config_set_on_instantiate() {
    let mock = MockEnv::new().mint_rate(250).build().unwrap();

    let config = mock.query_config();
    assert_eq!(config.staking_denom, STAKING_DENOM);
    assert_eq!(config.registry, mock.registry);
    assert_eq!(config.gauge, Some(Addr::unchecked("gauge")));

    assert_eq!(mock.query_mint_rate(), Uint128::new(250));
    assert_eq!(mock.query_total_staked(), Uint128::zero());

    let index = mock.query_reward_index();
    assert_eq!(index.index, Decimal256::zero());
    assert_eq!(index.last_updated, mock.block_time());
}

#[test]
fn capabilities_granted_on_instantiate() {
    let mock = MockEnv::new().build().unwrap();

    let res = mock.query_permissions(Capability::SetMintRate);
    assert_eq!(res.holders, vec![mock.owner.clone()]);

    let res = mock.query_permissions(Capability::AccrueReward);
    assert_eq!(res.holders, vec![mock.gauge.clone()]);
}

#[test]
fn gauge_can_be_left_unset() {
    let mock = MockEnv::new().no_gauge().build().unwrap();

    assert_eq!(mock.query_config().gauge, None);
    assert!(mock.query_permissions(Capability::AccrueReward).holders.is_empty());
}

#[test]
fn invalid_staking_denom_rejected() {
    let res = MockEnv::new().staking_denom("!*jadfaefc").build();
    assert!(res.is_err());
}
