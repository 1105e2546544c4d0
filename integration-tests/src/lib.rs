#![cfg(not(target_arch = "wasm32"))]

use anyhow::{anyhow, Result as AnyResult};
use cosmwasm_std::{coin, Addr};
use cw_multi_test::AppResponse;
use mars_testing::{find_event_attr, integration::mock_env::MockEnv};

/// Denom paired with the primary denom in the pools of these tests
pub const PAIRED_DENOM: &str = "uatom";

/// Creates a dynamic fee pool pairing `denom` with the primary denom and returns its id
pub fn create_pool(mock: &mut MockEnv, denom: &str) -> AnyResult<u64> {
    let primary_denom = mock.primary_denom.clone();
    let (denom0, denom1) = if denom < primary_denom.as_str() {
        (denom, primary_denom.as_str())
    } else {
        (primary_denom.as_str(), denom)
    };

    let res = mock.create_pool(denom0, denom1, true)?;
    pool_id(&res)
}

fn pool_id(res: &AppResponse) -> AnyResult<u64> {
    let id = find_event_attr(&res.events, "wasm", "pool_id")
        .ok_or_else(|| anyhow!("pool creation emitted no pool id"))?;
    Ok(id.parse()?)
}

/// Funds `staker` and stakes `amount` of the primary denom into the bucket of `denom`
pub fn fund_and_stake(
    mock: &mut MockEnv,
    staker: &Addr,
    denom: &str,
    amount: u128,
) -> AnyResult<AppResponse> {
    let primary_denom = mock.primary_denom.clone();
    mock.fund_account(staker, &[coin(amount, primary_denom)]);
    mock.stake(staker, denom, amount)
}

/// A pool for `PAIRED_DENOM` with `stake` staked into its bucket by a single staker. Returns the
/// pool id.
pub fn setup_staked_pool(mock: &mut MockEnv, stake: u128) -> AnyResult<u64> {
    let pool_id = create_pool(mock, PAIRED_DENOM)?;
    fund_and_stake(mock, &Addr::unchecked("staker"), PAIRED_DENOM, stake)?;
    Ok(pool_id)
}
