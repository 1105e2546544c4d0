use cosmwasm_std::{Addr, Deps, DepsMut, Empty, Event, MessageInfo, Response, StdResult, Storage};
use mars_types::{
    adapters::IdentityResolver,
    gauge::{Capability, FeeTier, FeeTiers, SwapFeeResponse, MAX_LP_FEE},
};
use mars_utils::{error::ValidationError, helpers::integer_param_le};

use crate::{
    error::ContractResult,
    state::{CONFIG, FEES, INTERNAL_ADDRESSES, KEEPER, PERMISSIONS},
};

pub fn validate_fees(fees: &FeeTiers) -> Result<(), ValidationError> {
    integer_param_le(fees.internal_fee, MAX_LP_FEE, "internal_fee")?;
    integer_param_le(fees.keeper_fee, MAX_LP_FEE, "keeper_fee")?;
    integer_param_le(fees.external_fee, MAX_LP_FEE, "external_fee")
}

pub fn update_fees(
    deps: DepsMut,
    info: MessageInfo,
    internal_fee: Option<u32>,
    keeper_fee: Option<u32>,
    external_fee: Option<u32>,
) -> ContractResult<Response> {
    PERMISSIONS.assert(deps.storage, Capability::ConfigureFees.as_str(), &info.sender)?;

    let current = FEES.load(deps.storage)?;
    let fees = FeeTiers {
        internal_fee: internal_fee.unwrap_or(current.internal_fee),
        keeper_fee: keeper_fee.unwrap_or(current.keeper_fee),
        external_fee: external_fee.unwrap_or(current.external_fee),
    };
    validate_fees(&fees)?;
    FEES.save(deps.storage, &fees)?;

    Ok(Response::new().add_event(
        Event::new("mars/gauge/update_fees")
            .add_attribute("internal_fee", fees.internal_fee.to_string())
            .add_attribute("keeper_fee", fees.keeper_fee.to_string())
            .add_attribute("external_fee", fees.external_fee.to_string()),
    ))
}

pub fn set_internal_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    internal: bool,
) -> ContractResult<Response> {
    PERMISSIONS.assert(deps.storage, Capability::ManageInternalAddresses.as_str(), &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if internal {
        INTERNAL_ADDRESSES.save(deps.storage, &addr, &Empty {})?;
    } else {
        INTERNAL_ADDRESSES.remove(deps.storage, &addr);
    }

    Ok(Response::new().add_event(
        Event::new("mars/gauge/set_internal_address")
            .add_attribute("address", addr)
            .add_attribute("internal", internal.to_string()),
    ))
}

/// Internal membership wins over the keeper slot
pub fn classify(storage: &dyn Storage, identity: &Addr) -> StdResult<FeeTier> {
    if INTERNAL_ADDRESSES.has(storage, identity) {
        return Ok(FeeTier::Internal);
    }

    let is_keeper = KEEPER.may_load(storage)?.is_some_and(|keeper| keeper.address == *identity);
    if is_keeper {
        Ok(FeeTier::Keeper)
    } else {
        Ok(FeeTier::External)
    }
}

/// Fee for a swap sent by `sender`, classified by the identity behind it
pub fn query_swap_fee(deps: Deps, sender: String) -> ContractResult<SwapFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_validate(&sender)?;

    let resolver = IdentityResolver::new(config.identity_resolver);
    let identity = resolver.resolve_caller(&deps.querier, sender.as_str())?;

    let tier = classify(deps.storage, &identity)?;
    let fee = FEES.load(deps.storage)?.fee(tier);

    Ok(SwapFeeResponse {
        identity,
        tier,
        fee,
        override_fee: true,
    })
}
