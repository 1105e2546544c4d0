#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response,
};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use mars_types::gauge::{Capability, Config, ExecuteMsg, InstantiateMsg, QueryMsg};
use mars_utils::helpers::validate_native_denom;

use crate::{
    config,
    distribution::{
        self, ACCRUE_REWARD_REPLY_ID, COMMUNITY_ISSUE_REPLY_ID, DEVELOPER_ISSUE_REPLY_ID,
    },
    error::{ContractError, ContractResult},
    fee, keeper, query,
    state::{CONFIG, FEES, OWNER, PERMISSIONS},
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
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

    validate_native_denom(&msg.primary_denom)?;
    validate_native_denom(&msg.keeper_denom)?;
    fee::validate_fees(&msg.fees)?;

    let config = Config {
        pool_manager: deps.api.addr_validate(&msg.pool_manager)?,
        staking: deps.api.addr_validate(&msg.staking)?,
        minter: deps.api.addr_validate(&msg.minter)?,
        identity_resolver: deps.api.addr_validate(&msg.identity_resolver)?,
        developer: deps.api.addr_validate(&msg.developer)?,
        primary_denom: msg.primary_denom,
        keeper_denom: msg.keeper_denom,
    };
    CONFIG.save(deps.storage, &config)?;
    FEES.save(deps.storage, &msg.fees)?;

    // The owner manages fees and the internal set until it delegates them
    let owner = deps.api.addr_validate(&msg.owner)?;
    PERMISSIONS.grant(deps.storage, Capability::ConfigureFees.as_str(), &owner)?;
    PERMISSIONS.grant(deps.storage, Capability::ManageInternalAddresses.as_str(), &owner)?;

    Ok(Response::new().add_event(
        Event::new("mars/gauge/instantiated")
            .add_attribute("owner", owner)
            .add_attribute("pool_manager", config.pool_manager)
            .add_attribute("primary_denom", config.primary_denom),
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::BeforeInitialize {
            pool,
        } => distribution::before_initialize(deps, info, pool),
        ExecuteMsg::BeforeAddLiquidity {
            pool,
        } => distribution::distribute(deps, info, pool, "before_add_liquidity"),
        ExecuteMsg::BeforeRemoveLiquidity {
            pool,
        } => distribution::distribute(deps, info, pool, "before_remove_liquidity"),
        ExecuteMsg::BecomeKeeper {} => keeper::become_keeper(deps, info),
        ExecuteMsg::UpdateFees {
            internal_fee,
            keeper_fee,
            external_fee,
        } => fee::update_fees(deps, info, internal_fee, keeper_fee, external_fee),
        ExecuteMsg::SetInternalAddress {
            address,
            internal,
        } => fee::set_internal_address(deps, info, address, internal),
        ExecuteMsg::ReturnIssuanceAuthority {
            issuer,
        } => config::return_issuance_authority(deps, info, issuer),
        ExecuteMsg::UpdateConfig(updates) => config::update_config(deps, info, updates),
        ExecuteMsg::UpdatePermission(update) => config::update_permission(deps, info, update),
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> ContractResult<Response> {
    match reply.id {
        ACCRUE_REWARD_REPLY_ID => distribution::handle_accrued_reward(deps, reply.result),
        DEVELOPER_ISSUE_REPLY_ID => distribution::handle_developer_issue(reply.result),
        COMMUNITY_ISSUE_REPLY_ID => distribution::handle_community_issue(deps, reply.result),
        id => Err(ContractError::ReplyError(format!("reply id {id} is not valid"))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Fees {} => to_json_binary(&FEES.load(deps.storage)?),
        QueryMsg::SwapFee {
            sender,
        } => to_json_binary(&fee::query_swap_fee(deps, sender)?),
        QueryMsg::KeeperInfo {} => to_json_binary(&query::query_keeper(deps)?),
        QueryMsg::IsInternal {
            address,
        } => to_json_binary(&query::query_is_internal(deps, address)?),
        QueryMsg::InternalAddresses {
            start_after,
            limit,
        } => to_json_binary(&query::query_internal_addresses(deps, start_after, limit)?),
        QueryMsg::Permissions {
            capability,
        } => to_json_binary(&query::query_permissions(deps, capability)?),
    };
    res.map_err(Into::into)
}
