use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use mars_types::{
    permissions::PermissionsResponse,
    staking::{BucketResponse, Capability, RewardIndex, UserStakeResponse},
};

use crate::{
    error::ContractResult,
    helpers::{accrue_bucket_reward, update_reward_index, MaybeMutStorage},
    state::{BUCKETS, DEFAULT_LIMIT, MAX_LIMIT, PERMISSIONS, USER_BUCKETS, USER_STAKES},
};

/// Global index as if it were updated at the current block time
pub fn query_reward_index(deps: Deps, env: Env) -> ContractResult<RewardIndex> {
    update_reward_index(&mut deps.storage.into(), env.block.time.seconds())
}

/// Runs the same computation `AccrueReward` runs against read-only storage
pub fn query_preview_pending(deps: Deps, env: Env, denom: String) -> ContractResult<Uint128> {
    let mut storage = MaybeMutStorage::Immutable(deps.storage);
    let reward_index = update_reward_index(&mut storage, env.block.time.seconds())?;
    accrue_bucket_reward(&mut storage, &denom, &reward_index)
}

pub fn query_bucket(deps: Deps, denom: String) -> StdResult<BucketResponse> {
    let bucket = BUCKETS.may_load(deps.storage, &denom)?.unwrap_or_default();
    Ok(BucketResponse::from(denom, bucket))
}

pub fn query_buckets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<BucketResponse>> {
    let start = start_after.as_ref().map(|denom| Bound::exclusive(denom.as_str()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    BUCKETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| {
            let (denom, bucket) = res?;
            Ok(BucketResponse::from(denom, bucket))
        })
        .collect()
}

pub fn query_user_stake(deps: Deps, user: String, denom: String) -> StdResult<Uint128> {
    let user_addr = deps.api.addr_validate(&user)?;
    Ok(USER_STAKES.may_load(deps.storage, (&user_addr, &denom))?.unwrap_or_default())
}

pub fn query_user_buckets(deps: Deps, user: String) -> StdResult<Vec<String>> {
    let user_addr = deps.api.addr_validate(&user)?;
    USER_BUCKETS.members(deps.storage, &user_addr)
}

pub fn query_user_stakes(deps: Deps, user: String) -> StdResult<Vec<UserStakeResponse>> {
    let user_addr = deps.api.addr_validate(&user)?;
    USER_BUCKETS
        .members(deps.storage, &user_addr)?
        .into_iter()
        .map(|denom| {
            let amount = USER_STAKES.load(deps.storage, (&user_addr, &denom))?;
            Ok(UserStakeResponse {
                denom,
                amount,
            })
        })
        .collect()
}

pub fn query_permissions(
    deps: Deps,
    capability: Capability,
) -> StdResult<PermissionsResponse<Capability>> {
    Ok(PermissionsResponse {
        holders: PERMISSIONS.holders(deps.storage, capability.as_str())?,
        capability,
    })
}
