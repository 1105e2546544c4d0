use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};
use mars_types::{
    permissions::PermissionUpdate,
    staking::{Capability, Config},
};
use mars_utils::helpers::option_string_to_addr;

use crate::{
    error::ContractResult,
    ledger::settle_reward_index,
    state::{CONFIG, MINT_RATE, OWNER, PERMISSIONS},
};

/// Changes the emission rate. The index is settled at the previous rate first so that elapsed
/// time is never paid out at the new one.
pub fn set_mint_rate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    mint_rate: Uint128,
) -> ContractResult<Response> {
    PERMISSIONS.assert(deps.storage, Capability::SetMintRate.as_str(), &info.sender)?;

    let (_, response) = settle_reward_index(deps.storage, &env)?;

    let previous_mint_rate = MINT_RATE.load(deps.storage)?;
    MINT_RATE.save(deps.storage, &mint_rate)?;

    Ok(response.add_event(
        Event::new("mars/staking/set_mint_rate")
            .add_attribute("previous_mint_rate", previous_mint_rate)
            .add_attribute("mint_rate", mint_rate),
    ))
}

/// Moves the `AccrueReward` capability from whoever holds it to `gauge`
pub fn set_gauge(deps: DepsMut, info: MessageInfo, gauge: String) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let gauge = deps.api.addr_validate(&gauge)?;

    let revoked = PERMISSIONS.revoke_all(deps.storage, Capability::AccrueReward.as_str())?;
    PERMISSIONS.grant(deps.storage, Capability::AccrueReward.as_str(), &gauge)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.gauge = Some(gauge.clone());
    CONFIG.save(deps.storage, &config)?;

    let mut event = Event::new("mars/staking/set_gauge").add_attribute("gauge", gauge);
    // Empty attribute values are rejected by the chain
    if !revoked.is_empty() {
        let revoked = revoked.iter().map(|addr| addr.as_str()).collect::<Vec<_>>().join(",");
        event = event.add_attribute("revoked", revoked);
    }

    Ok(Response::new().add_event(event))
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    registry: Option<String>,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let current = CONFIG.load(deps.storage)?;
    let config = Config {
        registry: option_string_to_addr(deps.api, registry, current.registry)?,
        ..current
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_event(
        Event::new("mars/staking/update_config").add_attribute("registry", config.registry),
    ))
}

pub fn update_permission(
    deps: DepsMut,
    info: MessageInfo,
    update: PermissionUpdate<Capability>,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let (action, capability, address) = match update {
        PermissionUpdate::Grant {
            capability,
            address,
        } => {
            let address = deps.api.addr_validate(&address)?;
            PERMISSIONS.grant(deps.storage, capability.as_str(), &address)?;
            ("grant", capability, address)
        }
        PermissionUpdate::Revoke {
            capability,
            address,
        } => {
            let address = deps.api.addr_validate(&address)?;
            PERMISSIONS.revoke(deps.storage, capability.as_str(), &address);
            ("revoke", capability, address)
        }
    };

    Ok(Response::new().add_event(
        Event::new("mars/staking/update_permission")
            .add_attribute("action", action)
            .add_attribute("capability", capability.as_str())
            .add_attribute("address", address),
    ))
}
