use cosmwasm_std::{Addr, Deps, Order, StdResult};
use cw_storage_plus::Bound;
use mars_types::{
    gauge::{Capability, KeeperResponse},
    permissions::PermissionsResponse,
};

use crate::state::{DEFAULT_LIMIT, INTERNAL_ADDRESSES, KEEPER, MAX_LIMIT, PERMISSIONS};

pub fn query_keeper(deps: Deps) -> StdResult<KeeperResponse> {
    Ok(KEEPER.may_load(deps.storage)?.into())
}

pub fn query_is_internal(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(INTERNAL_ADDRESSES.has(deps.storage, &addr))
}

pub fn query_internal_addresses(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let start_addr: Addr;
    let start = match &start_after {
        Some(unchecked) => {
            start_addr = deps.api.addr_validate(unchecked)?;
            Some(Bound::exclusive(&start_addr))
        }
        None => None,
    };

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    INTERNAL_ADDRESSES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
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
