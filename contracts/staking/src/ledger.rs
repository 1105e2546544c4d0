use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, StdResult, Storage, Uint128,
};
use mars_types::{
    adapters::Registry,
    staking::{AccrueRewardResponse, Capability, RewardIndex},
};
use mars_utils::helpers::build_send_asset_msg;

use crate::{
    error::{ContractError, ContractResult},
    helpers::{accrue_bucket_reward, index_update_event, update_reward_index},
    state::{BUCKETS, CONFIG, PERMISSIONS, REWARD_INDEX, TOTAL_STAKED, USER_BUCKETS, USER_STAKES},
};

/// Brings the global index up to the current block time and returns it together with a response
/// carrying the index update event, if the index moved.
pub(crate) fn settle_reward_index(
    storage: &mut dyn Storage,
    env: &Env,
) -> ContractResult<(RewardIndex, Response)> {
    let previous = REWARD_INDEX.load(storage)?;
    let updated = update_reward_index(&mut storage.into(), env.block.time.seconds())?;

    let response = match index_update_event(&previous, &updated) {
        Some(event) => Response::new().add_event(event),
        None => Response::new(),
    };

    Ok((updated, response))
}

pub fn stake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let amount = cw_utils::must_pay(&info, &config.staking_denom)?;

    let registry = Registry::new(config.registry);
    if !registry.query_is_eligible(&deps.querier, &denom)? {
        return Err(ContractError::BucketNotEligible {
            denom,
        });
    }

    let (reward_index, response) = settle_reward_index(deps.storage, &env)?;

    let mut bucket = BUCKETS.may_load(deps.storage, &denom)?.unwrap_or_default();
    bucket.staked_amount = bucket.staked_amount.checked_add(amount)?;
    bucket.last_reward_index = reward_index.index;
    BUCKETS.save(deps.storage, &denom, &bucket)?;

    TOTAL_STAKED.update(deps.storage, |total| -> StdResult<_> {
        Ok(total.checked_add(amount)?)
    })?;

    let user_stake =
        USER_STAKES.may_load(deps.storage, (&info.sender, &denom))?.unwrap_or_default();
    let user_stake = user_stake.checked_add(amount)?;
    USER_STAKES.save(deps.storage, (&info.sender, &denom), &user_stake)?;
    USER_BUCKETS.insert(deps.storage, &info.sender, &denom)?;

    Ok(response.add_event(
        Event::new("mars/staking/stake")
            .add_attribute("user", info.sender)
            .add_attribute("denom", denom)
            .add_attribute("amount", amount)
            .add_attribute("user_stake", user_stake)
            .add_attribute("bucket_staked_amount", bucket.staked_amount),
    ))
}

pub fn unstake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
) -> ContractResult<Response> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;

    let mut bucket = BUCKETS.may_load(deps.storage, &denom)?.unwrap_or_default();
    let user_stake =
        USER_STAKES.may_load(deps.storage, (&info.sender, &denom))?.unwrap_or_default();
    if amount > user_stake || amount > bucket.staked_amount {
        return Err(ContractError::InsufficientBalance {
            available: user_stake.min(bucket.staked_amount),
            requested: amount,
        });
    }

    let (reward_index, response) = settle_reward_index(deps.storage, &env)?;

    bucket.staked_amount = bucket.staked_amount.checked_sub(amount)?;
    bucket.last_reward_index = reward_index.index;
    BUCKETS.save(deps.storage, &denom, &bucket)?;

    TOTAL_STAKED.update(deps.storage, |total| -> StdResult<_> {
        Ok(total.checked_sub(amount)?)
    })?;

    let user_stake = user_stake.checked_sub(amount)?;
    if user_stake.is_zero() {
        USER_STAKES.remove(deps.storage, (&info.sender, &denom));
        USER_BUCKETS.remove(deps.storage, &info.sender, &denom)?;
    } else {
        USER_STAKES.save(deps.storage, (&info.sender, &denom), &user_stake)?;
    }

    Ok(response
        .add_message(build_send_asset_msg(&info.sender, &config.staking_denom, amount))
        .add_event(
            Event::new("mars/staking/unstake")
                .add_attribute("user", info.sender)
                .add_attribute("denom", denom)
                .add_attribute("amount", amount)
                .add_attribute("user_stake", user_stake)
                .add_attribute("bucket_staked_amount", bucket.staked_amount),
        ))
}

pub fn accrue_reward(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
) -> ContractResult<Response> {
    PERMISSIONS.assert(deps.storage, Capability::AccrueReward.as_str(), &info.sender)?;

    let (reward_index, response) = settle_reward_index(deps.storage, &env)?;
    let amount = accrue_bucket_reward(&mut deps.branch().storage.into(), &denom, &reward_index)?;

    let data = to_json_binary(&AccrueRewardResponse {
        denom: denom.clone(),
        amount,
    })?;

    Ok(response.set_data(data).add_event(
        Event::new("mars/staking/accrue_reward")
            .add_attribute("caller", info.sender)
            .add_attribute("denom", denom)
            .add_attribute("amount", amount)
            .add_attribute("reward_index", reward_index.index.to_string()),
    ))
}
