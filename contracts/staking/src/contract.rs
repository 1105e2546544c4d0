#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use mars_types::staking::{Capability, Config, ExecuteMsg, InstantiateMsg, QueryMsg, RewardIndex};
use mars_utils::helpers::validate_native_denom;

use crate::{
    config, ledger, query,
    error::ContractResult,
    state::{CONFIG, MINT_RATE, OWNER, PERMISSIONS, REWARD_INDEX, TOTAL_STAKED},
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner.clone(),
        },
    )?;

    validate_native_denom(&msg.staking_denom)?;

    let gauge = msg.gauge.map(|gauge| deps.api.addr_validate(&gauge)).transpose()?;
    let config = Config {
        staking_denom: msg.staking_denom,
        registry: deps.api.addr_validate(&msg.registry)?,
        gauge,
    };
    CONFIG.save(deps.storage, &config)?;

    // The owner can adjust emissions until it hands the capability over
    let owner = deps.api.addr_validate(&msg.owner)?;
    PERMISSIONS.grant(deps.storage, Capability::SetMintRate.as_str(), &owner)?;
    if let Some(gauge) = &config.gauge {
        PERMISSIONS.grant(deps.storage, Capability::AccrueReward.as_str(), gauge)?;
    }

    MINT_RATE.save(deps.storage, &msg.mint_rate)?;
    TOTAL_STAKED.save(deps.storage, &Uint128::zero())?;
    REWARD_INDEX.save(
        deps.storage,
        &RewardIndex {
            index: Default::default(),
            last_updated: env.block.time.seconds(),
        },
    )?;

    Ok(Response::new().add_event(
        Event::new("mars/staking/instantiated")
            .add_attribute("owner", owner)
            .add_attribute("staking_denom", config.staking_denom)
            .add_attribute("mint_rate", msg.mint_rate),
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::Stake {
            denom,
        } => ledger::stake(deps, env, info, denom),
        ExecuteMsg::Unstake {
            denom,
            amount,
        } => ledger::unstake(deps, env, info, denom, amount),
        ExecuteMsg::AccrueReward {
            denom,
        } => ledger::accrue_reward(deps, env, info, denom),
        ExecuteMsg::SetMintRate {
            mint_rate,
        } => config::set_mint_rate(deps, env, info, mint_rate),
        ExecuteMsg::SetGauge {
            gauge,
        } => config::set_gauge(deps, info, gauge),
        ExecuteMsg::UpdateConfig {
            registry,
        } => config::update_config(deps, info, registry),
        ExecuteMsg::UpdatePermission(update) => config::update_permission(deps, info, update),
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::MintRate {} => to_json_binary(&MINT_RATE.load(deps.storage)?),
        QueryMsg::RewardIndex {} => to_json_binary(&query::query_reward_index(deps, env)?),
        QueryMsg::TotalStaked {} => to_json_binary(&TOTAL_STAKED.load(deps.storage)?),
        QueryMsg::Bucket {
            denom,
        } => to_json_binary(&query::query_bucket(deps, denom)?),
        QueryMsg::Buckets {
            start_after,
            limit,
        } => to_json_binary(&query::query_buckets(deps, start_after, limit)?),
        QueryMsg::UserStake {
            user,
            denom,
        } => to_json_binary(&query::query_user_stake(deps, user, denom)?),
        QueryMsg::UserBuckets {
            user,
        } => to_json_binary(&query::query_user_buckets(deps, user)?),
        QueryMsg::UserStakes {
            user,
        } => to_json_binary(&query::query_user_stakes(deps, user)?),
        QueryMsg::PreviewPending {
            denom,
        } => to_json_binary(&query::query_preview_pending(deps, env, denom)?),
        QueryMsg::Permissions {
            capability,
        } => to_json_binary(&query::query_permissions(deps, capability)?),
    };
    res.map_err(Into::into)
}
