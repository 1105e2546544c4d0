#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use mars_types::identity::{QueryMsg, ResolveCallerResponse};

use crate::{
    msg::{ExecuteMsg, InstantiateMsg},
    state::IDENTITIES,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetIdentity {
            caller,
            identity,
        } => {
            let caller = deps.api.addr_validate(&caller)?;
            match identity {
                Some(identity) => {
                    let identity = deps.api.addr_validate(&identity)?;
                    IDENTITIES.save(deps.storage, &caller, &identity)?;
                }
                None => IDENTITIES.remove(deps.storage, &caller),
            }
            Ok(Response::new())
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ResolveCaller {
            caller,
        } => to_json_binary(&resolve_caller(deps, caller)?),
    }
}

/// Callers without a registered identity act for themselves
fn resolve_caller(deps: Deps, caller: String) -> StdResult<ResolveCallerResponse> {
    let caller = deps.api.addr_validate(&caller)?;
    let identity = IDENTITIES.may_load(deps.storage, &caller)?.unwrap_or(caller);
    Ok(ResolveCallerResponse {
        identity,
    })
}
