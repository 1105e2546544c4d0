use cosmwasm_std::{
    from_json, DepsMut, Event, MessageInfo, Response, Storage, SubMsg, SubMsgResponse,
    SubMsgResult, Uint128,
};
use cw_utils::parse_execute_response_data;
use mars_types::{
    adapters::{Minter, PoolManager, Staking},
    gauge::Config,
    pool::PoolKey,
    staking::AccrueRewardResponse,
};

use crate::{
    error::{ContractError, ContractResult},
    state::{PendingDistribution, CONFIG, PENDING_DISTRIBUTION},
};

pub const ACCRUE_REWARD_REPLY_ID: u64 = 1;
pub const DEVELOPER_ISSUE_REPLY_ID: u64 = 2;
pub const COMMUNITY_ISSUE_REPLY_ID: u64 = 3;

/// Splits `reward` into the developer and the community share. The developer share is rounded
/// down, so the community receives the odd unit.
pub fn split_reward(reward: Uint128) -> ContractResult<(Uint128, Uint128)> {
    let developer_share = reward / Uint128::new(2);
    let community_share = reward.checked_sub(developer_share)?;
    Ok((developer_share, community_share))
}

fn assert_pool_manager(config: &Config, info: &MessageInfo) -> ContractResult<()> {
    if info.sender != config.pool_manager {
        return Err(ContractError::NotPoolManager);
    }
    Ok(())
}

/// The bucket a pool's distribution comes from: the denom paired with the primary denom
fn pool_bucket(config: &Config, pool: &PoolKey) -> ContractResult<String> {
    pool.paired_denom(&config.primary_denom).map(ToString::to_string).ok_or_else(|| {
        ContractError::InvalidPool {
            reason: format!("pool {} does not contain {}", pool.id, config.primary_denom),
        }
    })
}

/// Only pools pairing the primary denom and letting the hook override the swap fee may use the
/// gauge.
pub fn before_initialize(
    deps: DepsMut,
    info: MessageInfo,
    pool: PoolKey,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    assert_pool_manager(&config, &info)?;

    let bucket = pool_bucket(&config, &pool)?;

    if !pool.dynamic_fee {
        return Err(ContractError::InvalidPool {
            reason: format!("pool {} does not use a dynamic fee", pool.id),
        });
    }

    Ok(Response::new().add_event(
        Event::new("mars/gauge/before_initialize")
            .add_attribute("pool_id", pool.id.to_string())
            .add_attribute("bucket", bucket),
    ))
}

/// Entry point of both liquidity hooks. Accrues the reward owed to the pool's bucket, the rest of
/// the distribution continues in the accrue reply.
pub fn distribute(
    deps: DepsMut,
    info: MessageInfo,
    pool: PoolKey,
    hook: &str,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    assert_pool_manager(&config, &info)?;

    let bucket = pool_bucket(&config, &pool)?;
    let pool_id = pool.id;

    PENDING_DISTRIBUTION.save(
        deps.storage,
        &PendingDistribution {
            pool,
            bucket: bucket.clone(),
            community_share: Uint128::zero(),
        },
    )?;

    let staking = Staking::new(config.staking);
    let accrue_msg =
        SubMsg::reply_on_success(staking.accrue_reward_msg(&bucket)?, ACCRUE_REWARD_REPLY_ID);

    Ok(Response::new().add_submessage(accrue_msg).add_event(
        Event::new("mars/gauge/distribute")
            .add_attribute("hook", hook)
            .add_attribute("pool_id", pool_id.to_string())
            .add_attribute("bucket", bucket),
    ))
}

fn parse_accrued_reward(response: SubMsgResponse) -> ContractResult<AccrueRewardResponse> {
    let data = response
        .data
        .ok_or_else(|| ContractError::ReplyError("accrue reward returned no data".to_string()))?;
    let data = parse_execute_response_data(&data)?
        .data
        .ok_or_else(|| ContractError::ReplyError("accrue reward returned no data".to_string()))?;
    Ok(from_json(data)?)
}

/// Issues the accrued reward. With no liquidity to credit everything goes to the developer,
/// otherwise the reward is split and the community share is issued to the pool manager to be
/// donated once the issuance reply confirms it.
pub fn handle_accrued_reward(deps: DepsMut, result: SubMsgResult) -> ContractResult<Response> {
    let response = result.into_result().map_err(ContractError::ReplyError)?;
    let accrued = parse_accrued_reward(response)?;

    let mut pending = PENDING_DISTRIBUTION.load(deps.storage)?;

    if accrued.amount.is_zero() {
        PENDING_DISTRIBUTION.remove(deps.storage);
        return Ok(Response::new().add_event(
            Event::new("mars/gauge/nothing_to_distribute").add_attribute("bucket", accrued.denom),
        ));
    }

    let config = CONFIG.load(deps.storage)?;
    let minter = Minter::new(config.minter.clone());
    let pool_manager = PoolManager::new(config.pool_manager.clone());

    let liquidity = pool_manager.query_liquidity(&deps.querier, pending.pool.id)?;
    let (developer_share, community_share) = if liquidity.is_zero() {
        (accrued.amount, Uint128::zero())
    } else {
        split_reward(accrued.amount)?
    };

    let mut response = Response::new();

    if !developer_share.is_zero() {
        response = response.add_submessage(SubMsg::reply_on_error(
            minter.issue_msg(&config.developer, developer_share)?,
            DEVELOPER_ISSUE_REPLY_ID,
        ));
    }

    if community_share.is_zero() {
        PENDING_DISTRIBUTION.remove(deps.storage);
    } else {
        pending.community_share = community_share;
        PENDING_DISTRIBUTION.save(deps.storage, &pending)?;
        response = response.add_submessage(SubMsg::reply_always(
            minter.issue_msg(&config.pool_manager, community_share)?,
            COMMUNITY_ISSUE_REPLY_ID,
        ));
    }

    Ok(response.add_event(
        Event::new("mars/gauge/reward_split")
            .add_attribute("pool_id", pending.pool.id.to_string())
            .add_attribute("bucket", pending.bucket)
            .add_attribute("reward", accrued.amount)
            .add_attribute("liquidity", liquidity)
            .add_attribute("developer_share", developer_share)
            .add_attribute("community_share", community_share),
    ))
}

/// Only failures reach here. The developer share is forgone.
pub fn handle_developer_issue(result: SubMsgResult) -> ContractResult<Response> {
    let response = match result {
        SubMsgResult::Ok(_) => Response::new(),
        SubMsgResult::Err(error) => {
            Response::new().add_event(issuance_failed_event("developer", error))
        }
    };
    Ok(response)
}

/// Donates the community share once it landed in the pool manager. A failed issuance forgoes the
/// share.
pub fn handle_community_issue(deps: DepsMut, result: SubMsgResult) -> ContractResult<Response> {
    let pending = take_pending(deps.storage)?;

    if let SubMsgResult::Err(error) = result {
        return Ok(Response::new().add_event(issuance_failed_event("community", error)));
    }

    let config = CONFIG.load(deps.storage)?;
    let pool_manager = PoolManager::new(config.pool_manager);
    let (amount0, amount1) =
        pending.pool.donation_amounts(&config.primary_denom, pending.community_share);

    Ok(Response::new()
        .add_message(pool_manager.donate_msg(pending.pool.id, amount0, amount1)?)
        .add_message(pool_manager.settle_msg()?)
        .add_event(
            Event::new("mars/gauge/donate")
                .add_attribute("pool_id", pending.pool.id.to_string())
                .add_attribute("amount0", amount0)
                .add_attribute("amount1", amount1),
        ))
}

fn take_pending(storage: &mut dyn Storage) -> ContractResult<PendingDistribution> {
    let pending = PENDING_DISTRIBUTION.load(storage)?;
    PENDING_DISTRIBUTION.remove(storage);
    Ok(pending)
}

fn issuance_failed_event(share: &str, error: String) -> Event {
    Event::new("mars/gauge/issuance_failed")
        .add_attribute("share", share)
        .add_attribute("error", error)
}
