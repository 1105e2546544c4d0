use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};
use mars_types::{
    adapters::Minter,
    gauge::{Capability, Config, ConfigUpdates},
    permissions::PermissionUpdate,
};
use mars_utils::helpers::option_string_to_addr;

use crate::{
    error::ContractResult,
    state::{CONFIG, OWNER, PERMISSIONS},
};

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    updates: ConfigUpdates,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let current = CONFIG.load(deps.storage)?;
    let config = Config {
        pool_manager: option_string_to_addr(deps.api, updates.pool_manager, current.pool_manager)?,
        staking: option_string_to_addr(deps.api, updates.staking, current.staking)?,
        minter: option_string_to_addr(deps.api, updates.minter, current.minter)?,
        identity_resolver: option_string_to_addr(
            deps.api,
            updates.identity_resolver,
            current.identity_resolver,
        )?,
        developer: option_string_to_addr(deps.api, updates.developer, current.developer)?,
        ..current
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_event(
        Event::new("mars/gauge/update_config")
            .add_attribute("pool_manager", config.pool_manager)
            .add_attribute("staking", config.staking)
            .add_attribute("minter", config.minter)
            .add_attribute("identity_resolver", config.identity_resolver)
            .add_attribute("developer", config.developer),
    ))
}

/// Hands the issuing authority of the primary denom over to `issuer`
pub fn return_issuance_authority(
    deps: DepsMut,
    info: MessageInfo,
    issuer: String,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let issuer = deps.api.addr_validate(&issuer)?;
    let minter = Minter::new(CONFIG.load(deps.storage)?.minter);

    Ok(Response::new().add_message(minter.update_issuer_msg(&issuer)?).add_event(
        Event::new("mars/gauge/return_issuance_authority").add_attribute("issuer", issuer),
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
        Event::new("mars/gauge/update_permission")
            .add_attribute("action", action)
            .add_attribute("capability", capability.as_str())
            .add_attribute("address", address),
    ))
}
